//! Currency masks driven by an injectable locale description.
//!
//! The digits of an [`Amount`] always count cents (minor units), so typing
//! `1`, `2`, `3`, `4`, `5` into a price field walks through `R$ 0,01`,
//! `R$ 0,12`, `R$ 1,23`, `R$ 12,34`, `R$ 123,45`.
//!
//! The default [`CurrencyFormat`] reproduces pt-BR / BRL output, including
//! the non-breaking space browsers put between `R$` and the number.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::digits::Amount;
use crate::error::{FormatConfigError, FormatConfigResult};

/// Largest supported number of minor-unit digits.
pub const MAX_MINOR_DIGITS: u8 = 4;

static BRL: LazyLock<CurrencyFormat> = LazyLock::new(CurrencyFormat::brl);

// ============================================================================
// CURRENCY FORMAT
// ============================================================================

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `R$ 1,00`
    #[default]
    Prefix,
    /// `1,00 €`
    Suffix,
}

/// Locale conventions used to render an amount.
///
/// Loadable from TOML; keys that are left out keep their pt-BR / BRL value:
///
/// ```
/// use crondock_format::{currency_with, CurrencyFormat};
///
/// let eur = CurrencyFormat::from_toml_str(r#"
///     locale = "de-DE"
///     code = "EUR"
///     symbol = "€"
///     symbol_position = "suffix"
/// "#).unwrap();
///
/// assert_eq!(currency_with("123456", &eur), "1.234,56\u{a0}€");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// BCP 47 tag the conventions come from, kept for display and logging.
    pub locale: String,
    /// ISO 4217 currency code.
    pub code: String,
    /// Symbol printed next to the number.
    pub symbol: String,
    /// Text between symbol and number.
    pub symbol_separator: String,
    /// Side of the number the symbol is printed on.
    pub symbol_position: SymbolPosition,
    /// Separator between the major and minor units.
    pub decimal_separator: char,
    /// Separator between groups of three major-unit digits.
    pub grouping_separator: char,
    /// Number of minor-unit digits (2 for cents).
    pub minor_digits: u8,
}

impl CurrencyFormat {
    /// Brazilian Real, pt-BR conventions (`R$ 1.234,56`).
    pub fn brl() -> Self {
        Self {
            locale: "pt-BR".to_owned(),
            code: "BRL".to_owned(),
            symbol: "R$".to_owned(),
            symbol_separator: "\u{a0}".to_owned(),
            symbol_position: SymbolPosition::Prefix,
            decimal_separator: ',',
            grouping_separator: '.',
            minor_digits: 2,
        }
    }

    /// US Dollar, en-US conventions (`$1,234.56`).
    pub fn usd() -> Self {
        Self {
            locale: "en-US".to_owned(),
            code: "USD".to_owned(),
            symbol: "$".to_owned(),
            symbol_separator: String::new(),
            symbol_position: SymbolPosition::Prefix,
            decimal_separator: '.',
            grouping_separator: ',',
            minor_digits: 2,
        }
    }

    /// Parses a format from TOML and checks it.
    pub fn from_toml_str(source: &str) -> FormatConfigResult<Self> {
        let format: Self = toml::from_str(source)?;
        format.check()?;
        tracing::debug!(locale = %format.locale, code = %format.code, "loaded currency format");
        Ok(format)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> FormatConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| FormatConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Rejects formats that would render ambiguous or broken output.
    pub fn check(&self) -> FormatConfigResult<()> {
        let result = if self.symbol.is_empty() {
            Err(FormatConfigError::EmptySymbol)
        } else if self.decimal_separator == self.grouping_separator {
            Err(FormatConfigError::AmbiguousSeparators(self.decimal_separator))
        } else if self.minor_digits > MAX_MINOR_DIGITS {
            Err(FormatConfigError::TooManyMinorDigits {
                max: MAX_MINOR_DIGITS,
                actual: self.minor_digits,
            })
        } else {
            Ok(())
        };
        if let Err(error) = &result {
            tracing::warn!(locale = %self.locale, %error, "rejected currency format");
        }
        result
    }

    /// Renders `minor_units` as a grouped decimal number without symbol.
    ///
    /// A format built without [`check`](Self::check) still renders:
    /// `minor_digits` is capped at [`MAX_MINOR_DIGITS`].
    pub fn number(&self, minor_units: u64) -> String {
        let minor_digits = self.minor_digits.min(MAX_MINOR_DIGITS);
        let scale = 10_u64.pow(u32::from(minor_digits));
        let major = (minor_units / scale).to_string();
        let minor = minor_units % scale;

        let mut out = String::with_capacity(major.len() + major.len() / 3 + 8);
        for (index, digit) in major.chars().enumerate() {
            if index > 0 && (major.len() - index) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(digit);
        }
        if minor_digits > 0 {
            out.push(self.decimal_separator);
            out.push_str(&format!("{minor:0width$}", width = usize::from(minor_digits)));
        }
        out
    }

    /// Renders `minor_units` with the currency symbol.
    pub fn money(&self, minor_units: u64) -> String {
        let number = self.number(minor_units);
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{number}", self.symbol, self.symbol_separator),
            SymbolPosition::Suffix => format!("{number}{}{}", self.symbol_separator, self.symbol),
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

// ============================================================================
// MASKS
// ============================================================================

/// Masks an amount as pt-BR Reais (`"12345"` -> `"R$ 123,45"`).
///
/// ```
/// use crondock_format::currency;
///
/// assert_eq!(currency("12345"), "R$\u{a0}123,45");
/// assert_eq!(currency(""), "R$\u{a0}0,00");
/// ```
pub fn currency<'a>(amount: impl Into<Amount<'a>>) -> String {
    currency_with(amount, &BRL)
}

/// Masks an amount with an explicit format.
pub fn currency_with<'a>(amount: impl Into<Amount<'a>>, format: &CurrencyFormat) -> String {
    format.money(amount.into().cents())
}

/// Masks an amount as a plain pt-BR decimal for input fields (`"12345"` -> `"123,45"`).
pub fn currency_input<'a>(amount: impl Into<Amount<'a>>) -> String {
    currency_input_with(amount, &BRL)
}

/// Masks an amount as a plain decimal with an explicit format.
pub fn currency_input_with<'a>(amount: impl Into<Amount<'a>>, format: &CurrencyFormat) -> String {
    format.number(amount.into().cents())
}

// ============================================================================
// TESTS
// ============================================================================
