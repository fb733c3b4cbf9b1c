//! Record evaluation.

use serde_json::Value;

use super::definition::Schema;
use super::outcome::SchemaOutcome;
use super::rule::{FieldRule, Record};
use crate::foundation::{Validate, ValidationError, ValidationErrors};

static NULL: Value = Value::Null;

/// Validates `data` against `schema`.
///
/// Fields are evaluated in declaration order and each field stops at its
/// first failing check. Fields of `data` the schema does not declare are
/// ignored; declared fields absent from `data` are treated as `null`.
///
/// ```
/// use crondock_validator::schema::{self, FieldRule, Schema};
/// use serde_json::json;
///
/// let schema = Schema::new().field("nome", FieldRule::new().required().min_length(3));
///
/// let ok = schema::validate(json!({ "nome": "Ana" }).as_object().unwrap(), &schema);
/// assert!(ok.is_valid);
/// assert!(ok.errors.is_empty());
/// ```
pub fn validate(data: &Record, schema: &Schema) -> SchemaOutcome {
    let mut failures = ValidationErrors::new();

    for (name, rule) in schema.fields() {
        let value = data.get(name).unwrap_or(&NULL);
        tracing::trace!(field = name, "evaluating field");

        if let Err(error) = check_field(name, rule, value, data) {
            tracing::debug!(field = name, code = %error.code, "field failed validation");
            failures.add(error);
        }
    }

    let outcome = SchemaOutcome::from_failures(failures);
    tracing::debug!(
        fields = schema.len(),
        failed = outcome.errors.len(),
        valid = outcome.is_valid,
        "schema validation finished"
    );
    outcome
}

/// Null, or a string that is blank after trimming.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

fn check_field(
    name: &str,
    rule: &FieldRule,
    value: &Value,
    record: &Record,
) -> Result<(), ValidationError> {
    let label = rule.display_name(name);
    let fail = |error: ValidationError, default: String| {
        let message = rule.message.clone().unwrap_or(default);
        error.with_field(name.to_owned()).with_message(message)
    };

    if is_empty_value(value) {
        if rule.required {
            return Err(fail(
                ValidationError::required(name.to_owned()),
                format!("{label} é obrigatório"),
            ));
        }
        return Ok(());
    }

    if let Value::String(text) = value {
        if let Some(min) = &rule.min_length {
            min.validate(text)
                .map_err(|e| fail(e, format!("{label} deve ter no mínimo {} caracteres", min.min)))?;
        }
        if let Some(max) = &rule.max_length {
            max.validate(text)
                .map_err(|e| fail(e, format!("{label} deve ter no máximo {} caracteres", max.max)))?;
        }
        if let Some(pattern) = &rule.pattern {
            pattern
                .validate(text)
                .map_err(|e| fail(e, format!("{label} está em formato inválido")))?;
        }
    }

    if let Some(predicate) = &rule.custom
        && !predicate(value, record)
    {
        let default = rule
            .invalid_message
            .clone()
            .unwrap_or_else(|| format!("{label} é inválido"));
        return Err(fail(ValidationError::new("custom", ""), default));
    }

    Ok(())
}
