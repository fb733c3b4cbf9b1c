//! Currency amount validator.

use crondock_format::Amount;

use crate::foundation::{Validate, ValidationError};

/// Largest accepted amount, in cents (R$ 9.999.999,99).
///
/// Business ceiling for any single procedure or payment value entered in
/// the dashboard.
pub const CURRENCY_MAX_CENTS: u64 = 999_999_999;

/// Validates an amount whose digits count cents.
///
/// The amount must be strictly positive and at most `max_cents`
/// ([`CURRENCY_MAX_CENTS`] by default).
///
/// ```
/// use crondock_validator::validators::Currency;
/// use crondock_validator::foundation::Validate;
///
/// let currency = Currency::new();
/// assert!(currency.validate("R$ 123,45").is_ok());
/// assert!(currency.validate("0").is_err());
/// assert!(currency.validate_amount(12_345_i64).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    max_cents: u64,
}

impl Currency {
    /// Creates a validator with the default ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_cents: CURRENCY_MAX_CENTS,
        }
    }

    /// Sets the largest accepted amount, in cents.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_cents(mut self, max_cents: u64) -> Self {
        self.max_cents = max_cents;
        self
    }

    /// Validates text or a number.
    pub fn validate_amount<'a>(&self, amount: impl Into<Amount<'a>>) -> Result<(), ValidationError> {
        let cents = amount.into().cents();
        if cents == 0 {
            return Err(ValidationError::new(
                "currency_not_positive",
                "Amount must be greater than zero",
            ));
        }
        if cents > self.max_cents {
            return Err(ValidationError::new(
                "currency_too_large",
                format!("Amount must be at most {} cents", self.max_cents),
            )
            .with_param("max", self.max_cents.to_string())
            .with_param("actual", cents.to_string()));
        }
        Ok(())
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Currency {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.validate_amount(input)
    }
}
