//! CRO (dental licence) validator.

use crondock_format::digits;
use crondock_format::document::{CRO_NUMBER_DIGITS, CRO_PREFIX};

use crate::foundation::{Validate, ValidationError};

/// The 27 Brazilian federative units, each with its own regional council.
pub const UF_CODES: [&str; 27] = [
    "AC", "AL", "AM", "AP", "BA", "CE", "DF", "ES", "GO", "MA", "MG", "MS", "MT", "PA", "PB",
    "PE", "PI", "PR", "RJ", "RN", "RO", "RR", "RS", "SC", "SE", "SP", "TO",
];

/// Validates a CRO registration such as `CRO/SP 12345`.
///
/// The value is normalised with the CRO mask first, so `sp 12345` and
/// `CRO-SP-12345` are accepted. The council must be a known UF, followed
/// only by a number of one to five digits.
///
/// ```
/// use crondock_validator::validators::Cro;
/// use crondock_validator::foundation::Validate;
///
/// assert!(Cro.validate("CRO/SP 12345").is_ok());
/// assert_eq!(Cro.validate("CRO/XX 12345").unwrap_err().code, "cro_state");
/// assert_eq!(Cro.validate("SPA12345").unwrap_err().code, "cro_format");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cro;

impl Validate for Cro {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let masked = crondock_format::cro(input);
        let body = masked.strip_prefix("CRO/").unwrap_or_default();
        let (uf, number) = body.split_once(' ').unwrap_or((body, ""));

        if !UF_CODES.contains(&uf) {
            return Err(
                ValidationError::new("cro_state", "CRO must name a Brazilian state council")
                    .with_param("actual", uf.to_owned()),
            );
        }

        let trailing = registration_after_uf(input, uf);
        if !trailing.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(
                "cro_format",
                "CRO number must follow the state council directly",
            )
            .with_param("actual", trailing));
        }

        let digit_count = digits(input).len();
        if number.is_empty() || digit_count > CRO_NUMBER_DIGITS {
            return Err(ValidationError::new(
                "cro_number",
                format!("CRO number must have 1 to {CRO_NUMBER_DIGITS} digits"),
            )
            .with_param("actual", digit_count.to_string()));
        }

        Ok(())
    }
}

/// Letters and digits of `input` after the `CRO` prefix and `uf`, uppercased.
fn registration_after_uf(input: &str, uf: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let rest = cleaned.strip_prefix(CRO_PREFIX).unwrap_or(&cleaned);
    rest.strip_prefix(uf).unwrap_or(rest).to_owned()
}

/// Creates a CRO validator.
#[must_use]
pub const fn cro() -> Cro {
    Cro
}
