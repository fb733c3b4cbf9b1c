//! String content validators
//!
//! Validators for checking string content against patterns.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

/// Pattern accepted by [`Email`] and by the built-in schemas' e-mail fields.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// The compiled [`EMAIL_PATTERN`].
pub fn email_regex() -> &'static regex::Regex {
    &EMAIL_REGEX
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl From<regex::Regex> for MatchesRegex {
    fn from(pattern: regex::Regex) -> Self {
        Self { pattern }
    }
}

impl PartialEq for MatchesRegex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str()
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates e-mail addresses: something, `@`, something, `.`, something.
    ///
    /// Deliberately loose; it only rejects values that cannot be an address.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
