use crondock_validator::schema::builtin;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::{init_tracing, record};

// ============================================================================
// USER
// ============================================================================

fn user_form() -> Value {
    json!({
        "nome": "Ana",
        "email": "ana@clinica.com.br",
        "senha": "segredo1",
        "confirmarSenha": "segredo1"
    })
}

#[test]
fn user_accepts_complete_form() {
    init_tracing();
    let outcome = builtin::user().validate(&record(user_form()));
    assert!(outcome.is_valid, "{:?}", outcome.errors);
}

#[rstest]
#[case::short_name("nome", json!({"nome": "Al"}), "Nome deve ter no mínimo 3 caracteres")]
#[case::bad_email("email", json!({"email": "ana.clinica.com"}), "E-mail está em formato inválido")]
#[case::short_password(
    "senha",
    json!({"senha": "12345", "confirmarSenha": "12345"}),
    "Senha deve ter no mínimo 6 caracteres"
)]
#[case::mismatch("confirmarSenha", json!({"confirmarSenha": "segredo2"}), "As senhas não coincidem")]
#[case::missing_confirmation(
    "confirmarSenha",
    json!({"confirmarSenha": null}),
    "Confirmação de senha é obrigatório"
)]
fn user_reports_field(#[case] field: &str, #[case] changes: Value, #[case] message: &str) {
    let mut form = record(user_form());
    form.extend(record(changes));

    let outcome = builtin::user().validate(&form);
    assert_eq!(outcome.errors.len(), 1, "{:?}", outcome.errors);
    assert_eq!(outcome.error(field), Some(message));
    assert_eq!(outcome.first_error.as_deref(), Some(message));
}

#[test]
fn user_short_password_also_breaks_confirmation() {
    let mut form = record(user_form());
    form.insert("senha".to_owned(), json!("12345"));

    let outcome = builtin::user().validate(&form);
    assert_eq!(
        outcome.errors.keys().map(String::as_str).collect::<Vec<_>>(),
        ["senha", "confirmarSenha"]
    );
    assert_eq!(
        outcome.first_error.as_deref(),
        Some("Senha deve ter no mínimo 6 caracteres")
    );
}

#[test]
fn user_empty_form_reports_every_field_in_order() {
    let outcome = builtin::user().validate(&record(json!({})));
    assert_eq!(
        outcome.errors.keys().map(String::as_str).collect::<Vec<_>>(),
        ["nome", "email", "senha", "confirmarSenha"]
    );
    assert_eq!(outcome.first_error.as_deref(), Some("Nome é obrigatório"));
}

// ============================================================================
// PATIENT
// ============================================================================

fn patient_form() -> Value {
    json!({
        "nome": "Maria da Conceição",
        "cpf": "529.982.247-25",
        "telefone": "(11) 99999-8888",
        "cep": "01310-100"
    })
}

#[test]
fn patient_accepts_masked_and_raw_values() {
    assert!(builtin::patient().validate(&record(patient_form())).is_valid);

    let raw = json!({
        "nome": "Maria",
        "cpf": "52998224725",
        "telefone": "1133334444",
        "email": "maria@exemplo.com"
    });
    assert!(builtin::patient().validate(&record(raw)).is_valid);
}

#[rstest]
#[case::cpf_check_digit("cpf", json!("529.982.247-26"), "CPF inválido")]
#[case::cpf_repeated("cpf", json!("111.111.111-11"), "CPF inválido")]
#[case::cpf_as_number("cpf", json!(52_998_224_725_u64), "CPF inválido")]
#[case::cpf_missing("cpf", json!("  "), "CPF é obrigatório")]
#[case::phone_short("telefone", json!("(11) 3333-444"), "Telefone inválido")]
#[case::cep_short("cep", json!("01310-10"), "CEP inválido")]
#[case::email_bad("email", json!("maria@"), "E-mail está em formato inválido")]
#[case::name_long("nome", json!("a".repeat(101)), "Nome deve ter no máximo 100 caracteres")]
fn patient_reports_field(#[case] field: &str, #[case] value: Value, #[case] message: &str) {
    let mut form = record(patient_form());
    form.insert(field.to_owned(), value);

    let outcome = builtin::patient().validate(&form);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.error(field), Some(message));
}

#[test]
fn patient_optional_fields_may_be_blank() {
    let mut form = record(patient_form());
    form.insert("cep".to_owned(), json!(""));
    form.insert("email".to_owned(), json!(null));

    assert!(builtin::patient().validate(&form).is_valid);
}

// ============================================================================
// DENTIST
// ============================================================================

#[rstest]
#[case::masked("CRO/SP 12345")]
#[case::typed("sp 1234")]
#[case::dashed("CRO-RJ-1")]
fn dentist_accepts_cro(#[case] cro: &str) {
    let form = json!({ "nome": "Dr. Paulo", "cro": cro, "email": "paulo@clinica.com" });
    assert!(builtin::dentist().validate(&record(form)).is_valid);
}

#[rstest]
#[case::unknown_state("CRO/XX 12345")]
#[case::no_number("CRO/SP")]
#[case::too_many_digits("CRO/SP 123456")]
#[case::letter_after_state("SPA12345")]
fn dentist_rejects_cro(#[case] cro: &str) {
    let form = json!({ "nome": "Dr. Paulo", "cro": cro, "email": "paulo@clinica.com" });
    let outcome = builtin::dentist().validate(&record(form));
    assert_eq!(outcome.error("cro"), Some("CRO inválido"));
}

#[test]
fn dentist_requires_email_but_not_phone() {
    let outcome = builtin::dentist().validate(&record(json!({
        "nome": "Dr. Paulo",
        "cro": "CRO/MG 999"
    })));

    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.error("email"), Some("E-mail é obrigatório"));
}

// ============================================================================
// PROCEDURE
// ============================================================================

#[rstest]
#[case::masked(json!("R$ 150,00"))]
#[case::typed(json!("15000"))]
#[case::integer(json!(15000))]
#[case::float(json!(150.5))]
#[case::largest(json!("R$ 9.999.999,99"))]
fn procedure_accepts_value(#[case] valor: Value) {
    let form = json!({ "nome": "Limpeza", "valor": valor });
    assert!(builtin::procedure().validate(&record(form)).is_valid);
}

#[rstest]
#[case::zero(json!("R$ 0,00"))]
#[case::no_digits(json!("R$"))]
#[case::too_large(json!("R$ 10.000.000,00"))]
#[case::boolean(json!(true))]
fn procedure_rejects_value(#[case] valor: Value) {
    let form = json!({ "nome": "Limpeza", "valor": valor });
    let outcome = builtin::procedure().validate(&record(form));
    assert_eq!(outcome.error("valor"), Some("Valor inválido"));
}

#[test]
fn procedure_limits_description() {
    let form = json!({ "nome": "Limpeza", "valor": 100, "descricao": "x".repeat(501) });
    let outcome = builtin::procedure().validate(&record(form));
    assert_eq!(
        outcome.error("descricao"),
        Some("Descrição deve ter no máximo 500 caracteres")
    );
}

#[test]
fn outcome_serializes_for_the_page() {
    let outcome = builtin::procedure().validate(&record(json!({ "valor": "R$ 1,00" })));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "isValid": false,
            "errors": { "nome": "Nome é obrigatório" },
            "firstError": "Nome é obrigatório"
        })
    );
}
