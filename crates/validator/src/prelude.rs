//! Prelude module for convenient imports.
//!
//! ```
//! use crondock_validator::prelude::*;
//!
//! let cep = min_length(8).and(Cep);
//! assert!(cep.validate("01310-100").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Validate, ValidateExt, ValidationError, ValidationErrors, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, and};

// ============================================================================
// SCHEMA
// ============================================================================

pub use crate::schema::{FieldRule, Record, Schema, SchemaError, SchemaOutcome};
