//! The result of validating a record.

use indexmap::IndexMap;
use serde::Serialize;

use crate::foundation::ValidationErrors;

/// Outcome of [`validate`](super::validate).
///
/// `errors` holds one message per failing field, in declaration order.
/// Serializes as `{"isValid": .., "errors": {..}, "firstError": ..}`, the
/// shape form handlers send back to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaOutcome {
    /// `true` iff `errors` is empty.
    pub is_valid: bool,
    /// Field name -> message.
    pub errors: IndexMap<String, String>,
    /// Message of the first failing field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_error: Option<String>,
    #[serde(skip)]
    failures: ValidationErrors,
}

impl SchemaOutcome {
    pub(crate) fn from_failures(failures: ValidationErrors) -> Self {
        let errors: IndexMap<String, String> = failures
            .errors()
            .iter()
            .filter_map(|error| {
                let field = error.field.as_deref()?;
                Some((field.to_owned(), error.message.to_string()))
            })
            .collect();
        let first_error = errors.values().next().cloned();

        Self {
            is_valid: errors.is_empty(),
            errors,
            first_error,
            failures,
        }
    }

    /// The message reported for `field`, if it failed.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Structured failures, with the code of the check that failed
    /// (`required`, `min_length`, `max_length`, `invalid_format`, `custom`).
    pub fn failures(&self) -> &ValidationErrors {
        &self.failures
    }

    /// `Ok(())` when valid, otherwise every structured failure.
    ///
    /// # Errors
    ///
    /// The collected [`ValidationErrors`] when at least one field failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        self.failures.into_result(())
    }
}
