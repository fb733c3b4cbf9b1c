//! Masks for Brazilian documents and phone numbers.
//!
//! Every mask keeps the leading digits of its input (up to the class maximum)
//! and inserts separators at fixed digit offsets. Separators only appear once
//! the digit after them has been typed, so masks can be applied on every
//! keystroke: `cpf("1234")` is `"123.4"`, not `"123.4  .   -  "`.
//!
//! Masks are idempotent: applying a mask to its own output returns the same
//! string.

use crate::digits::digits_up_to;

/// Digits in a CPF.
pub const CPF_DIGITS: usize = 11;
/// Digits in a CNPJ.
pub const CNPJ_DIGITS: usize = 14;
/// Digits in a CEP.
pub const CEP_DIGITS: usize = 8;
/// Digits in a landline number with area code.
pub const LANDLINE_DIGITS: usize = 10;
/// Digits in a mobile number with area code.
pub const MOBILE_DIGITS: usize = 11;
/// Digits kept in a CRO registration number.
pub const CRO_NUMBER_DIGITS: usize = 5;

const CPF_MASK: &[(usize, &str)] = &[(3, "."), (6, "."), (9, "-")];
const CNPJ_MASK: &[(usize, &str)] = &[(2, "."), (5, "."), (8, "/"), (12, "-")];
const CEP_MASK: &[(usize, &str)] = &[(5, "-")];
const LANDLINE_MASK: &[(usize, &str)] = &[(0, "("), (2, ") "), (6, "-")];
const MOBILE_MASK: &[(usize, &str)] = &[(0, "("), (2, ") "), (7, "-")];

/// Literal prefix of every masked CRO.
pub const CRO_PREFIX: &str = "CRO";
const UF_LETTERS: usize = 2;

/// Inserts each separator before the digit at its offset, if that digit exists.
fn apply_mask(digits: &str, mask: &[(usize, &str)]) -> String {
    let mut out = String::with_capacity(digits.len() + mask.len() * 2);
    let mut separators = mask.iter().peekable();
    for (index, digit) in digits.chars().enumerate() {
        while let Some((_, separator)) = separators.next_if(|(offset, _)| *offset == index) {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

/// Masks a CPF as `000.000.000-00`.
///
/// ```
/// use crondock_format::cpf;
///
/// assert_eq!(cpf("52998224725"), "529.982.247-25");
/// assert_eq!(cpf("5299"), "529.9");
/// ```
pub fn cpf(raw: &str) -> String {
    apply_mask(&digits_up_to(raw, CPF_DIGITS), CPF_MASK)
}

/// Masks a CNPJ as `00.000.000/0000-00`.
///
/// ```
/// use crondock_format::cnpj;
///
/// assert_eq!(cnpj("11222333000181"), "11.222.333/0001-81");
/// ```
pub fn cnpj(raw: &str) -> String {
    apply_mask(&digits_up_to(raw, CNPJ_DIGITS), CNPJ_MASK)
}

/// Masks a CEP as `00000-000`.
pub fn cep(raw: &str) -> String {
    apply_mask(&digits_up_to(raw, CEP_DIGITS), CEP_MASK)
}

/// Masks a phone number with area code.
///
/// Up to ten digits use the landline split `(00) 0000-0000`; eleven digits
/// use the mobile split `(00) 00000-0000`. The choice depends on the digit
/// count alone.
///
/// ```
/// use crondock_format::phone;
///
/// assert_eq!(phone("11999998888"), "(11) 99999-8888");
/// assert_eq!(phone("1133334444"), "(11) 3333-4444");
/// ```
pub fn phone(raw: &str) -> String {
    let digits = digits_up_to(raw, MOBILE_DIGITS);
    if digits.len() <= LANDLINE_DIGITS {
        apply_mask(&digits, LANDLINE_MASK)
    } else {
        apply_mask(&digits, MOBILE_MASK)
    }
}

/// Masks a dental licence as `CRO/<UF> <number>`.
///
/// The input is uppercased and reduced to letters and digits. A leading
/// `CRO` is dropped; the next (up to two) letters are the UF and the digits
/// after them, at most five, are the registration number. The space is only
/// written once a digit is present. Input without any letters or digits
/// masks to the empty string.
///
/// ```
/// use crondock_format::cro;
///
/// assert_eq!(cro("sp12345"), "CRO/SP 12345");
/// assert_eq!(cro("CRO-RJ 987"), "CRO/RJ 987");
/// assert_eq!(cro("mg"), "CRO/MG");
/// ```
pub fn cro(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if cleaned.is_empty() {
        return String::new();
    }

    let rest = cleaned.strip_prefix(CRO_PREFIX).unwrap_or(&cleaned);
    let uf: String = rest
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .take(UF_LETTERS)
        .collect();
    let number = digits_up_to(&rest[uf.len()..], CRO_NUMBER_DIGITS);

    if number.is_empty() {
        format!("{CRO_PREFIX}/{uf}")
    } else {
        format!("{CRO_PREFIX}/{uf} {number}")
    }
}

// ============================================================================
// TESTS
// ============================================================================
