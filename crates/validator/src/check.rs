//! Boolean checks for form handlers.
//!
//! Each function answers "is this value acceptable?" and nothing more. Use
//! the [`validators`](crate::validators) types directly when the reason for
//! a rejection matters.
//!
//! ```
//! use crondock_validator::check;
//!
//! assert!(check::cpf("52998224725"));
//! assert!(!check::cpf("11111111111"));
//! assert!(check::cnpj("11.222.333/0001-81"));
//! assert!(check::phone("(11) 3333-4444"));
//! assert!(!check::cep("0131010"));
//! assert!(check::currency("12345"));
//! assert!(!check::currency(0_i64));
//! ```

use crondock_format::Amount;

use crate::foundation::Validate;
use crate::validators::{Cep, Cnpj, Cpf, Cro, Currency, Email, Phone};

/// `true` for a CPF with valid check digits.
pub fn cpf(value: &str) -> bool {
    Cpf.is_valid(value)
}

/// `true` for a CNPJ with valid check digits.
pub fn cnpj(value: &str) -> bool {
    Cnpj.is_valid(value)
}

/// `true` for a phone number with 10 or 11 digits.
pub fn phone(value: &str) -> bool {
    Phone::new().is_valid(value)
}

/// `true` for a CEP with 8 digits.
pub fn cep(value: &str) -> bool {
    Cep.is_valid(value)
}

/// `true` for a positive amount of at most R$ 9.999.999,99 (digits are cents).
pub fn currency<'a>(value: impl Into<Amount<'a>>) -> bool {
    Currency::new().validate_amount(value).is_ok()
}

/// `true` for a CRO with a known state council and a 1-5 digit number.
pub fn cro(value: &str) -> bool {
    Cro.is_valid(value)
}

/// `true` for a plausible e-mail address.
pub fn email(value: &str) -> bool {
    Email.is_valid(value)
}
