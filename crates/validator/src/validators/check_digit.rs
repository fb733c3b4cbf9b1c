//! Weighted modulo-11 check digits, as used by CPF and CNPJ.
//!
//! Each verifier digit is `sum(digit_i * weight_i) % 11`, mapped to `0` when
//! the remainder is below 2 and to `11 - remainder` otherwise. The second
//! verifier covers the first one.

use crondock_format::digits;

use crate::foundation::ValidationError;

/// Computes one verifier digit over `digits` with `weights`.
///
/// Only the first `weights.len()` digits participate.
pub fn mod11_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

/// A document number protected by two modulo-11 verifier digits.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CheckDigitScheme {
    /// Display name used in messages ("CPF").
    pub label: &'static str,
    /// Total digit count, verifiers included.
    pub length: usize,
    /// Weights of the first verifier.
    pub first_weights: &'static [u32],
    /// Weights of the second verifier.
    pub second_weights: &'static [u32],
    /// Error code for a wrong digit count.
    pub length_code: &'static str,
    /// Error code for a number made of one repeated digit.
    pub repeated_code: &'static str,
    /// Error code for a verifier mismatch.
    pub check_code: &'static str,
}

impl CheckDigitScheme {
    /// Verifies the digits of `input`, ignoring any mask characters.
    ///
    /// Numbers made of a single repeated digit are rejected before any
    /// arithmetic: they satisfy the formula but are never issued.
    pub(crate) fn verify(&self, input: &str) -> Result<(), ValidationError> {
        let digits: Vec<u32> = digits(input).bytes().map(|b| u32::from(b - b'0')).collect();

        if digits.len() != self.length {
            return Err(ValidationError::new(
                self.length_code,
                format!("{} must have {} digits", self.label, self.length),
            )
            .with_param("expected", self.length.to_string())
            .with_param("actual", digits.len().to_string()));
        }

        if digits.iter().all(|d| *d == digits[0]) {
            return Err(ValidationError::new(
                self.repeated_code,
                format!("{} cannot be a single repeated digit", self.label),
            ));
        }

        let first = mod11_check_digit(&digits, self.first_weights);
        if first != digits[self.length - 2] {
            return Err(self.mismatch(1, first));
        }

        let second = mod11_check_digit(&digits, self.second_weights);
        if second != digits[self.length - 1] {
            return Err(self.mismatch(2, second));
        }

        Ok(())
    }

    fn mismatch(&self, position: u8, expected: u32) -> ValidationError {
        ValidationError::new(
            self.check_code,
            format!("{} check digit {} does not match", self.label, position),
        )
        .with_param("position", position.to_string())
        .with_param("expected", expected.to_string())
    }
}
