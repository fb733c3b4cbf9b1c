//! Digit extraction shared by every mask and every validator.
//!
//! Formatters and validators never trust the shape of their input: they keep
//! the ASCII digits, in order, and ignore everything else.

use std::borrow::Cow;

/// Returns every ASCII digit of `raw`, in order.
///
/// ```
/// use crondock_format::digits::digits;
///
/// assert_eq!(digits("529.982.247-25"), "52998224725");
/// assert_eq!(digits("abc"), "");
/// ```
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returns at most the first `max` ASCII digits of `raw`.
pub fn digits_up_to(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

// ============================================================================
// AMOUNT
// ============================================================================

/// A currency amount as it arrives from a form: free text or a number.
///
/// Every amount is interpreted the same way: its textual form is reduced to
/// digits and those digits count **cents**. The text `"12345"`, the integer
/// `12345` and the float `123.45` all mean 123.45 in the major unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount<'a> {
    /// Typed or pasted text, possibly already masked (`"R$ 1.234,56"`).
    Text(Cow<'a, str>),
    /// An integer value.
    Integer(i64),
    /// A floating point value; its decimal rendering is used (`12.5` -> `"125"`).
    Float(f64),
}

impl Amount<'_> {
    /// Digits of the amount's textual form.
    pub fn digits(&self) -> String {
        match self {
            Amount::Text(text) => digits(text),
            Amount::Integer(value) => digits(&value.to_string()),
            Amount::Float(value) => digits(&value.to_string()),
        }
    }

    /// The amount in cents.
    ///
    /// An amount without digits is zero. Digit strings too long for `u64`
    /// saturate at [`u64::MAX`].
    pub fn cents(&self) -> u64 {
        let digits = self.digits();
        if digits.is_empty() {
            return 0;
        }
        digits.parse().unwrap_or(u64::MAX)
    }
}

impl<'a> From<&'a str> for Amount<'a> {
    fn from(value: &'a str) -> Self {
        Amount::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Amount<'a> {
    fn from(value: &'a String) -> Self {
        Amount::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Amount<'_> {
    fn from(value: String) -> Self {
        Amount::Text(Cow::Owned(value))
    }
}

impl From<i64> for Amount<'_> {
    fn from(value: i64) -> Self {
        Amount::Integer(value)
    }
}

impl From<i32> for Amount<'_> {
    fn from(value: i32) -> Self {
        Amount::Integer(i64::from(value))
    }
}

impl From<u32> for Amount<'_> {
    fn from(value: u32) -> Self {
        Amount::Integer(i64::from(value))
    }
}

impl From<f64> for Amount<'_> {
    fn from(value: f64) -> Self {
        Amount::Float(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn digits_keeps_order_and_drops_everything_else() {
        assert_eq!(digits("(11) 99999-8888"), "11999998888");
        assert_eq!(digits(""), "");
        assert_eq!(digits("٣٤"), ""); // non-ASCII digits are ignored
    }

    #[test]
    fn digits_up_to_truncates() {
        assert_eq!(digits_up_to("123.456.789-0123", 11), "12345678901");
        assert_eq!(digits_up_to("12", 11), "12");
    }

    #[rstest]
    #[case(Amount::from("12345"), 12_345)]
    #[case(Amount::from("R$ 1.234,56"), 123_456)]
    #[case(Amount::from(""), 0)]
    #[case(Amount::from("abc"), 0)]
    #[case(Amount::from(12_345_i64), 12_345)]
    #[case(Amount::from(-500_i64), 500)]
    #[case(Amount::from(12.5_f64), 125)]
    #[case(Amount::from(f64::NAN), 0)]
    fn cents_from_any_amount(#[case] amount: Amount<'_>, #[case] expected: u64) {
        assert_eq!(amount.cents(), expected);
    }

    #[test]
    fn cents_saturates_on_overflow() {
        let amount = Amount::from("999999999999999999999999");
        assert_eq!(amount.cents(), u64::MAX);
    }
}
