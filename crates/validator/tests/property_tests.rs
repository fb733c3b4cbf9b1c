//! Property-based tests for crondock-validator.

use crondock_validator::prelude::*;
use crondock_validator::{check, schema};
use proptest::prelude::*;
use serde_json::json;

/// Appends both verifier digits to `base`.
fn with_check_digits(mut base: Vec<u32>, first: &[u32], second: &[u32]) -> String {
    base.push(mod11_check_digit(&base, first));
    base.push(mod11_check_digit(&base, second));
    base.iter().map(|d| char::from_digit(*d, 10).unwrap_or('0')).collect()
}

fn not_repeated(digits: &[u32]) -> bool {
    digits.iter().any(|d| *d != digits[0])
}

// ============================================================================
// CHECK DIGITS: computed verifiers are always accepted
// ============================================================================

proptest! {
    #[test]
    fn computed_cpf_is_valid(
        base in prop::collection::vec(0u32..10, 9).prop_filter("repeated", |d| not_repeated(d))
    ) {
        let cpf = with_check_digits(base, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS);
        prop_assert!(Cpf.validate(&*cpf).is_ok(), "{cpf}");
        prop_assert!(check::cpf(&crondock_format::cpf(&cpf)));
    }

    #[test]
    fn computed_cnpj_is_valid(
        base in prop::collection::vec(0u32..10, 12).prop_filter("repeated", |d| not_repeated(d))
    ) {
        let cnpj = with_check_digits(base, &CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS);
        prop_assert!(Cnpj.validate(&*cnpj).is_ok(), "{cnpj}");
        prop_assert!(check::cnpj(&crondock_format::cnpj(&cnpj)));
    }

    #[test]
    fn changing_last_digit_breaks_cpf(
        base in prop::collection::vec(0u32..10, 9).prop_filter("repeated", |d| not_repeated(d)),
        bump in 1u32..10,
    ) {
        let cpf = with_check_digits(base, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS);
        let mut digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
        digits[10] = (digits[10] + bump) % 10;
        let altered: String = digits.iter().filter_map(|d| char::from_digit(*d, 10)).collect();
        prop_assert!(Cpf.validate(&*altered).is_err());
    }
}

// ============================================================================
// TOTALITY: checks never panic
// ============================================================================

proptest! {
    #[test]
    fn checks_are_total(s in ".{0,40}") {
        let _ = check::cpf(&s);
        let _ = check::cnpj(&s);
        let _ = check::phone(&s);
        let _ = check::cep(&s);
        let _ = check::cro(&s);
        let _ = check::email(&s);
        let _ = check::currency(s.as_str());
    }

    #[test]
    fn validators_are_idempotent(s in ".{0,20}") {
        prop_assert_eq!(Cpf.validate(&*s), Cpf.validate(&*s));
        prop_assert_eq!(Cro.validate(&*s), Cro.validate(&*s));
    }
}

// ============================================================================
// COMBINATOR LAWS: a.and(b) fails iff a fails or b fails
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);
        let combined = a.and(b);

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();

        prop_assert_eq!(combined.validate(&*s).is_ok(), a_ok && b_ok);
    }
}

// ============================================================================
// SCHEMA: outcome consistency
// ============================================================================

proptest! {
    #[test]
    fn outcome_is_consistent(nome in ".{0,8}", senha in ".{0,8}") {
        let schema = Schema::new()
            .field("nome", FieldRule::new().required().min_length(3))
            .field("senha", FieldRule::new().required().min_length(6));
        let data = json!({ "nome": nome, "senha": senha });
        let record = data.as_object().cloned().unwrap_or_default();

        let outcome = schema::validate(&record, &schema);

        prop_assert_eq!(outcome.is_valid, outcome.errors.is_empty());
        prop_assert_eq!(
            outcome.first_error.as_deref(),
            outcome.errors.values().next().map(String::as_str)
        );
        prop_assert_eq!(outcome.failures().len(), outcome.errors.len());
    }
}
