//! CNPJ (company registry number) validator.

use crate::foundation::{Validate, ValidationError};
use crate::validators::check_digit::CheckDigitScheme;

/// Weights of the first CNPJ verifier (over 12 digits).
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
/// Weights of the second CNPJ verifier (over 13 digits).
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const CNPJ_SCHEME: CheckDigitScheme = CheckDigitScheme {
    label: "CNPJ",
    length: 14,
    first_weights: &CNPJ_FIRST_WEIGHTS,
    second_weights: &CNPJ_SECOND_WEIGHTS,
    length_code: "cnpj_length",
    repeated_code: "cnpj_repeated_digits",
    check_code: "cnpj_check_digit",
};

/// Validates a CNPJ, masked or not.
///
/// Error codes: `cnpj_length`, `cnpj_repeated_digits`, `cnpj_check_digit`.
///
/// ```
/// use crondock_validator::foundation::Validate;
/// use crondock_validator::validators::Cnpj;
///
/// assert!(Cnpj.validate("11.222.333/0001-81").is_ok());
/// assert!(Cnpj.validate("11.222.333/0001-82").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cnpj;

impl Validate for Cnpj {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        CNPJ_SCHEME.verify(input)
    }
}

/// Creates a CNPJ validator.
#[must_use]
pub const fn cnpj() -> Cnpj {
    Cnpj
}
