//! Brazilian phone number validator.
//!
//! Counts digits after stripping formatting: area code plus eight digits for
//! landlines, area code plus nine digits for mobiles.

use crondock_format::digits;
use crondock_format::document::{LANDLINE_DIGITS, MOBILE_DIGITS};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates phone numbers by digit count.
///
/// Any formatting is accepted; only the number of digits matters. The
/// default range is 10 (landline) to 11 (mobile) digits. No area-code or
/// prefix semantics are checked.
///
/// ```
/// use crondock_validator::validators::Phone;
/// use crondock_validator::foundation::Validate;
///
/// let phone = Phone::new();
/// assert!(phone.validate("(11) 3333-4444").is_ok());
/// assert!(phone.validate("(11) 99999-8888").is_ok());
/// assert!(phone.validate("3333-4444").is_err());
///
/// // With country code
/// let international = Phone::new().max_digits(13);
/// assert!(international.validate("+55 11 99999-8888").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone {
    min_digits: usize,
    max_digits: usize,
}

impl Phone {
    /// Creates a validator accepting landline and mobile numbers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_digits: LANDLINE_DIGITS,
            max_digits: MOBILE_DIGITS,
        }
    }

    /// Sets the minimum number of digits required.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_digits(mut self, min: usize) -> Self {
        self.min_digits = min;
        self
    }

    /// Sets the maximum number of digits allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_digits(mut self, max: usize) -> Self {
        self.max_digits = max;
        self
    }

    fn validate_digit_count(&self, count: usize) -> Result<(), ValidationError> {
        if count < self.min_digits {
            return Err(ValidationError::new(
                "phone_too_few_digits",
                format!(
                    "Phone number must have at least {} digits (found {})",
                    self.min_digits, count
                ),
            )
            .with_param("min", self.min_digits.to_string())
            .with_param("actual", count.to_string()));
        }

        if count > self.max_digits {
            return Err(ValidationError::new(
                "phone_too_many_digits",
                format!(
                    "Phone number must have at most {} digits (found {})",
                    self.max_digits, count
                ),
            )
            .with_param("max", self.max_digits.to_string())
            .with_param("actual", count.to_string()));
        }

        Ok(())
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::new(
                "empty_phone",
                "Phone number cannot be empty",
            ));
        }

        self.validate_digit_count(digits(input).len())
    }
}

// ============================================================================
// TESTS
// ============================================================================
