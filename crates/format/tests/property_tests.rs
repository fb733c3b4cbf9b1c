//! Property-based tests for crondock-format.

use crondock_format::{
    CurrencyFormat, cep, cnpj, cpf, cro, currency, currency_input, currency_input_with,
    currency_with, digits, phone,
};
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCE: mask(mask(x)) == mask(x)
// ============================================================================

proptest! {
    #[test]
    fn cpf_idempotent(s in ".{0,40}") {
        let once = cpf(&s);
        prop_assert_eq!(cpf(&once), once);
    }

    #[test]
    fn cnpj_idempotent(s in ".{0,40}") {
        let once = cnpj(&s);
        prop_assert_eq!(cnpj(&once), once);
    }

    #[test]
    fn cep_idempotent(s in ".{0,40}") {
        let once = cep(&s);
        prop_assert_eq!(cep(&once), once);
    }

    #[test]
    fn phone_idempotent(s in ".{0,40}") {
        let once = phone(&s);
        prop_assert_eq!(phone(&once), once);
    }

    #[test]
    fn cro_idempotent(s in "[a-zA-Z0-9 /-]{0,20}") {
        let once = cro(&s);
        prop_assert_eq!(cro(&once), once);
    }

    #[test]
    fn currency_input_idempotent(s in "[0-9]{0,12}") {
        let once = currency_input(&*s);
        prop_assert_eq!(currency_input(&*once), once);
    }
}

// ============================================================================
// DIGIT PRESERVATION: masks never drop or reorder captured digits
// ============================================================================

proptest! {
    #[test]
    fn cpf_preserves_eleven_digits(d in "[0-9]{11}") {
        prop_assert_eq!(digits(&cpf(&d)), d);
    }

    #[test]
    fn cnpj_preserves_fourteen_digits(d in "[0-9]{14}") {
        prop_assert_eq!(digits(&cnpj(&d)), d);
    }

    #[test]
    fn phone_preserves_digits(d in "[0-9]{1,11}") {
        prop_assert_eq!(digits(&phone(&d)), d);
    }

    #[test]
    fn masks_truncate_to_class_length(d in "[0-9]{15,30}") {
        prop_assert_eq!(digits(&cpf(&d)), &d[..11]);
        prop_assert_eq!(digits(&cnpj(&d)), &d[..14]);
        prop_assert_eq!(digits(&cep(&d)), &d[..8]);
        prop_assert_eq!(digits(&phone(&d)), &d[..11]);
    }

    #[test]
    fn currency_never_panics(s in ".*") {
        let rendered = currency(&*s);
        prop_assert!(rendered.starts_with("R$"));
    }

    #[test]
    fn any_minor_digits_renders(minor_digits in any::<u8>(), s in "[0-9]{0,25}") {
        let format = CurrencyFormat { minor_digits, ..CurrencyFormat::default() };
        prop_assert!(currency_with(&*s, &format).starts_with("R$"));
        let _ = currency_input_with(&*s, &format);
    }
}
