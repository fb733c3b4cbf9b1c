//! CPF (individual taxpayer number) validator.

use crate::foundation::{Validate, ValidationError};
use crate::validators::check_digit::CheckDigitScheme;

/// Weights of the first CPF verifier (over 9 digits).
pub const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
/// Weights of the second CPF verifier (over 10 digits).
pub const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

const CPF_SCHEME: CheckDigitScheme = CheckDigitScheme {
    label: "CPF",
    length: 11,
    first_weights: &CPF_FIRST_WEIGHTS,
    second_weights: &CPF_SECOND_WEIGHTS,
    length_code: "cpf_length",
    repeated_code: "cpf_repeated_digits",
    check_code: "cpf_check_digit",
};

/// Validates a CPF, masked or not.
///
/// Error codes: `cpf_length`, `cpf_repeated_digits`, `cpf_check_digit`.
///
/// ```
/// use crondock_validator::foundation::Validate;
/// use crondock_validator::validators::Cpf;
///
/// assert!(Cpf.validate("529.982.247-25").is_ok());
/// assert_eq!(Cpf.validate("111.111.111-11").unwrap_err().code, "cpf_repeated_digits");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cpf;

impl Validate for Cpf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        CPF_SCHEME.verify(input)
    }
}

/// Creates a CPF validator.
#[must_use]
pub const fn cpf() -> Cpf {
    Cpf
}
