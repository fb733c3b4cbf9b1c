//! Built-in validators
//!
//! # Categories
//!
//! - **Documents**: [`Cpf`], [`Cnpj`], [`Cro`] (check digits and structure)
//! - **Contact**: [`Phone`], [`Cep`]
//! - **Money**: [`Currency`]
//! - **String**: [`MinLength`], [`MaxLength`], [`MatchesRegex`], [`Email`]
//!
//! Document validators accept masked or unmasked input; they look only at
//! the digits (and, for CRO, the state letters).
//!
//! ```
//! use crondock_validator::prelude::*;
//!
//! assert!(Cpf.validate("529.982.247-25").is_ok());
//! assert!(Phone::new().validate("(11) 99999-8888").is_ok());
//! assert!(min_length(3).and(max_length(100)).validate("Ana").is_ok());
//! ```

// Documents
pub mod check_digit;
pub mod cnpj;
pub mod cpf;
pub mod cro;

// Contact
pub mod cep;
pub mod phone;

// Money
pub mod currency;

// String
pub mod content;
pub mod length;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use check_digit::mod11_check_digit;
pub use cnpj::{CNPJ_FIRST_WEIGHTS, CNPJ_SECOND_WEIGHTS, Cnpj, cnpj};
pub use cpf::{CPF_FIRST_WEIGHTS, CPF_SECOND_WEIGHTS, Cpf, cpf};
pub use cro::{Cro, UF_CODES, cro};

pub use cep::{Cep, cep};
pub use phone::Phone;

pub use currency::{CURRENCY_MAX_CENTS, Currency};

pub use content::{EMAIL_PATTERN, Email, MatchesRegex, email, email_regex, matches_regex};
pub use length::{MaxLength, MinLength, max_length, min_length};
