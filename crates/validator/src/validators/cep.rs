//! CEP (postal code) validator.

use crondock_format::digits;
use crondock_format::document::CEP_DIGITS;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a CEP has exactly eight digits, masked or not.
    pub Cep for str;
    rule(input) { digits(input).len() == CEP_DIGITS }
    error(input) {
        ValidationError::new("cep_length", "CEP must have 8 digits")
            .with_param("actual", digits(input).len().to_string())
    }
    fn cep();
}
