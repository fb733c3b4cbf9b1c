//! Errors raised while loading a [`CurrencyFormat`](crate::CurrencyFormat).
//!
//! Masking itself never fails; only configuration does.

use std::path::PathBuf;

/// Error type for currency format configuration.
#[derive(Debug, thiserror::Error)]
pub enum FormatConfigError {
    /// The configuration file could not be read.
    #[error("failed to read currency format from {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The TOML document is malformed or has wrongly typed keys.
    #[error("invalid currency format: {0}")]
    Parse(#[from] toml::de::Error),

    /// Decimal and grouping separators are the same character.
    #[error("decimal and grouping separators must differ (both are {0:?})")]
    AmbiguousSeparators(char),

    /// More minor-unit digits than the formatter supports.
    #[error("minor_digits must be at most {max}, got {actual}")]
    TooManyMinorDigits {
        /// Largest supported value.
        max: u8,
        /// Value found in the configuration.
        actual: u8,
    },

    /// The currency symbol is empty.
    #[error("currency symbol must not be empty")]
    EmptySymbol,
}

/// Result alias for currency format configuration.
pub type FormatConfigResult<T> = Result<T, FormatConfigError>;
