//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"Conceição"`
//! has nine characters, not eleven bytes.

use crate::foundation::ValidationError;

fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, char_len(input)) }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
