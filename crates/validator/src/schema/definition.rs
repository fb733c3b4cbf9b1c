//! Schema definition: an ordered set of field rules.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::engine;
use super::error::{SchemaError, SchemaResult};
use super::outcome::SchemaOutcome;
use super::rule::{FieldRule, Record};
use crate::validators::MatchesRegex;

/// An ordered mapping from field name to [`FieldRule`].
///
/// Declaration order is kept and decides which failure becomes
/// [`SchemaOutcome::first_error`].
///
/// ```
/// use crondock_validator::schema::{FieldRule, Schema};
/// use serde_json::json;
///
/// let schema = Schema::new().field("nome", FieldRule::new().required().min_length(3));
///
/// let record = json!({ "nome": "Al" });
/// let outcome = schema.validate(record.as_object().unwrap());
/// assert!(!outcome.is_valid);
/// assert_eq!(outcome.first_error.as_deref(), Some("nome deve ter no mínimo 3 caracteres"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, FieldRule>,
}

impl Schema {
    /// An empty schema. Every record passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`. Redeclaring a field replaces its rule and keeps its
    /// original position.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.insert(name.into(), rule);
        self
    }

    /// Attaches a custom predicate to an already declared field.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnknownField`] when `field` is not declared.
    pub fn with_custom<F>(mut self, field: &str, predicate: F) -> SchemaResult<Self>
    where
        F: Fn(&Value, &Record) -> bool + Send + Sync + 'static,
    {
        let rule = self
            .fields
            .get_mut(field)
            .ok_or_else(|| SchemaError::UnknownField(field.to_owned()))?;
        rule.set_custom(Arc::new(predicate));
        Ok(self)
    }

    /// Parses a declarative JSON schema.
    ///
    /// Each key maps to an object with the optional keys `required`,
    /// `minLength`, `maxLength`, `pattern`, `message` and `label`. Key order
    /// is preserved. Patterns compile here, so a bad pattern fails now
    /// rather than on every validation.
    ///
    /// ```
    /// use crondock_validator::schema::Schema;
    ///
    /// let schema = Schema::from_json_str(r#"{
    ///     "nome":  { "required": true, "minLength": 3, "label": "Nome" },
    ///     "sigla": { "pattern": "^[A-Z]{2}$" }
    /// }"#).unwrap();
    ///
    /// assert_eq!(schema.field_names().collect::<Vec<_>>(), ["nome", "sigla"]);
    /// ```
    ///
    /// # Errors
    ///
    /// [`SchemaError::Parse`] for malformed JSON or unknown keys,
    /// [`SchemaError::InvalidPattern`] for a pattern that does not compile,
    /// [`SchemaError::InvertedLength`] when `minLength > maxLength`.
    pub fn from_json_str(source: &str) -> SchemaResult<Self> {
        let defs: IndexMap<String, RuleDef> = serde_json::from_str(source)?;

        let mut schema = Self::new();
        for (name, def) in defs {
            let rule = def.into_rule(&name)?;
            schema.fields.insert(name, rule);
        }

        tracing::debug!(fields = schema.len(), "schema loaded from JSON");
        Ok(schema)
    }

    /// Validates `data` against this schema. See [`validate`](super::validate).
    pub fn validate(&self, data: &Record) -> SchemaOutcome {
        engine::validate(data, self)
    }

    /// The rule declared for `name`.
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One field of a declarative schema.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RuleDef {
    #[serde(default)]
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<String>,
    message: Option<String>,
    label: Option<String>,
}

impl RuleDef {
    fn into_rule(self, field: &str) -> SchemaResult<FieldRule> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length)
            && min > max
        {
            return Err(SchemaError::InvertedLength {
                field: field.to_owned(),
                min,
                max,
            });
        }

        let mut rule = FieldRule::new();
        if self.required {
            rule = rule.required();
        }
        if let Some(min) = self.min_length {
            rule = rule.min_length(min);
        }
        if let Some(max) = self.max_length {
            rule = rule.max_length(max);
        }
        if let Some(pattern) = self.pattern {
            let compiled =
                MatchesRegex::new(&pattern).map_err(|source| SchemaError::InvalidPattern {
                    field: field.to_owned(),
                    source,
                })?;
            rule = rule.pattern(compiled);
        }
        if let Some(message) = self.message {
            rule = rule.message(message);
        }
        if let Some(label) = self.label {
            rule = rule.label(label);
        }
        Ok(rule)
    }
}
