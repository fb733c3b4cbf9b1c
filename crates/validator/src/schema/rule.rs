//! Per-field rules.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::validators::{MatchesRegex, MaxLength, MinLength};

/// A record under validation: field name -> JSON value.
pub type Record = Map<String, Value>;

/// A cross-field predicate. Receives the field's value and the whole record.
pub type CustomPredicate = Arc<dyn Fn(&Value, &Record) -> bool + Send + Sync>;

/// The checks applied to one field.
///
/// Checks run in a fixed order: `required`, then the string checks
/// (`min_length`, `max_length`, `pattern`), then `custom`. The first
/// failing check decides the field's message.
///
/// ```
/// use crondock_validator::schema::FieldRule;
///
/// let rule = FieldRule::new().required().min_length(3).label("Nome");
/// assert!(rule.is_required());
/// assert_eq!(rule.display_name("nome"), "Nome");
/// ```
#[derive(Clone, Default)]
pub struct FieldRule {
    pub(crate) required: bool,
    pub(crate) min_length: Option<MinLength>,
    pub(crate) max_length: Option<MaxLength>,
    pub(crate) pattern: Option<MatchesRegex>,
    pub(crate) custom: Option<CustomPredicate>,
    pub(crate) invalid_message: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) label: Option<String>,
}

impl FieldRule {
    /// A rule with no checks; every value passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects null, absent and blank values.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Minimum length, in chars, of a string value.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(MinLength::new(min));
        self
    }

    /// Maximum length, in chars, of a string value.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(MaxLength::new(max));
        self
    }

    /// A regular expression a string value must match.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<MatchesRegex>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// A predicate over the value and the whole record.
    ///
    /// Runs after the string checks, for any non-empty value.
    #[must_use]
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value, &Record) -> bool + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(predicate));
        self
    }

    /// Message reported when only the custom predicate fails.
    #[must_use]
    pub fn invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = Some(message.into());
        self
    }

    /// Message reported for every failure of this field.
    ///
    /// Takes precedence over [`invalid_message`](Self::invalid_message) and
    /// over every default message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Name used in default messages instead of the field key.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `true` when empty values are rejected.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// `true` when a custom predicate is attached.
    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// The label, or `key` when none is set.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(key)
    }

    pub(crate) fn set_custom(&mut self, predicate: CustomPredicate) {
        self.custom = Some(predicate);
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length.map(|v| v.min))
            .field("max_length", &self.max_length.map(|v| v.max))
            .field("pattern", &self.pattern.as_ref().map(|v| v.pattern.as_str()))
            .field("custom", &self.custom.as_ref().map(|_| "<predicate>"))
            .field("invalid_message", &self.invalid_message)
            .field("message", &self.message)
            .field("label", &self.label)
            .finish()
    }
}
