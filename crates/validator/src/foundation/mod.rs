//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type; string validators take
//! `&str`:
//!
//! ```
//! use crondock_validator::foundation::Validate;
//! use crondock_validator::validators::Cpf;
//!
//! assert!(Cpf.validate("529.982.247-25").is_ok());
//!
//! let error = Cpf.validate("529.982.247-26").unwrap_err();
//! assert_eq!(error.code, "cpf_check_digit");
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
