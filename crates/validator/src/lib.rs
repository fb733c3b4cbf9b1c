//! # crondock-validator
//!
//! Validation for the clinic's registration forms: Brazilian documents,
//! phones, CEPs, CRO registrations, money amounts, and a declarative schema
//! engine that checks whole records.
//!
//! ## Quick Start
//!
//! ```
//! use crondock_validator::prelude::*;
//!
//! assert!(Cpf.validate("529.982.247-25").is_ok());
//!
//! let err = Cnpj.validate("11.222.333/0001-82").unwrap_err();
//! assert_eq!(err.code, "cnpj_check_digit");
//!
//! let name = min_length(3).and(max_length(100));
//! assert!(name.validate("Ana").is_ok());
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: structured validators returning a
//!   [`ValidationError`](foundation::ValidationError) with a stable code.
//! - [`check`]: `bool` shorthands over the same validators.
//! - [`schema`]: per-field rules evaluated over a JSON record, with the
//!   built-in user, patient, dentist and procedure schemas.
//!
//! Use the [`validator!`] macro to declare new validators, or implement
//! [`Validate`](foundation::Validate) manually for complex cases.

pub mod check;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
