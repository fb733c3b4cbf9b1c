//! Validator combinators
//!
//! Only conjunction is needed by the document and schema validators;
//! [`ValidateExt::and`](crate::foundation::ValidateExt::and) is the usual
//! entry point.

pub mod and;

pub use and::{And, and};
