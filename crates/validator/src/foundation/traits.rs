//! Core traits for the validation system

use crate::combinators::and::And;
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Generic over the input type so that string validators take `&str`
/// directly. All validators return `Result<(), ValidationError>`.
///
/// # Examples
///
/// ```
/// use crondock_validator::foundation::{Validate, ValidationError};
///
/// struct Uppercase;
///
/// impl Validate for Uppercase {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().all(|c| !c.is_lowercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("uppercase", "Must be uppercase"))
///         }
///     }
/// }
///
/// assert!(Uppercase.validate("SP").is_ok());
/// assert!(Uppercase.validate("sp").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean shorthand for `validate(input).is_ok()`.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods, implemented for every [`Validate`].
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure.
    ///
    /// ```
    /// use crondock_validator::prelude::*;
    ///
    /// let nome = min_length(3).and(max_length(10));
    /// assert!(nome.validate("Ana").is_ok());
    /// assert!(nome.validate("Al").is_err());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
