//! # crondock-format
//!
//! Input masks for the Cron Dock dashboard forms.
//!
//! Each mask takes whatever the user typed and returns the canonical display
//! string for its class. Masks are pure and total: garbage in gives an empty
//! or partial string out, never an error.
//!
//! ```
//! use crondock_format::{cep, cnpj, cpf, cro, currency, currency_input, phone};
//!
//! assert_eq!(cpf("52998224725"), "529.982.247-25");
//! assert_eq!(cnpj("11222333000181"), "11.222.333/0001-81");
//! assert_eq!(cep("01310100"), "01310-100");
//! assert_eq!(phone("11999998888"), "(11) 99999-8888");
//! assert_eq!(cro("cro sp 12345"), "CRO/SP 12345");
//! assert_eq!(currency("12345"), "R$\u{a0}123,45");
//! assert_eq!(currency_input("12345"), "123,45");
//! ```
//!
//! Currency rendering follows a [`CurrencyFormat`], pt-BR / BRL unless one
//! is passed explicitly to the `*_with` variants.

pub mod currency;
pub mod digits;
pub mod document;
pub mod error;

pub use currency::{
    CurrencyFormat, SymbolPosition, currency, currency_input, currency_input_with, currency_with,
};
pub use digits::{Amount, digits, digits_up_to};
pub use document::{cep, cnpj, cpf, cro, phone};
pub use error::{FormatConfigError, FormatConfigResult};
