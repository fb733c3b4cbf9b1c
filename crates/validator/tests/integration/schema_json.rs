use crondock_validator::schema::{Schema, SchemaError};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{init_tracing, record};

const SIGNUP: &str = r#"{
    "nome":   { "required": true, "minLength": 3, "label": "Nome" },
    "sigla":  { "pattern": "^[A-Z]{2}$", "label": "UF" },
    "apelido": { "maxLength": 10, "message": "Apelido muito longo" }
}"#;

#[test]
fn loaded_schema_validates_records() {
    init_tracing();
    let schema = Schema::from_json_str(SIGNUP).unwrap();

    let outcome = schema.validate(&record(json!({
        "nome": "Al",
        "sigla": "sp",
        "apelido": "um apelido comprido"
    })));

    assert!(!outcome.is_valid);
    assert_eq!(
        outcome.errors.into_iter().collect::<Vec<_>>(),
        vec![
            ("nome".to_owned(), "Nome deve ter no mínimo 3 caracteres".to_owned()),
            ("sigla".to_owned(), "UF está em formato inválido".to_owned()),
            ("apelido".to_owned(), "Apelido muito longo".to_owned()),
        ]
    );
}

#[test]
fn loaded_schema_accepts_minimal_record() {
    let schema = Schema::from_json_str(SIGNUP).unwrap();
    let outcome = schema.validate(&record(json!({ "nome": "Ana" })));

    assert!(outcome.is_valid);
    assert_eq!(outcome.first_error, None);
}

#[test]
fn custom_predicate_attached_after_loading() {
    let schema = Schema::from_json_str(
        r#"{ "senha": { "required": true }, "confirmacao": { "required": true } }"#,
    )
    .unwrap()
    .with_custom("confirmacao", |value, record| record.get("senha") == Some(value))
    .unwrap();

    let mismatch = schema.validate(&record(json!({ "senha": "abc123", "confirmacao": "abc" })));
    assert_eq!(mismatch.error("confirmacao"), Some("confirmacao é inválido"));

    let matched = schema.validate(&record(json!({ "senha": "abc123", "confirmacao": "abc123" })));
    assert!(matched.is_valid);
}

#[test]
fn malformed_definitions_are_rejected() {
    assert!(matches!(Schema::from_json_str("[]"), Err(SchemaError::Parse(_))));
    assert!(matches!(
        Schema::from_json_str(r#"{ "nome": { "minLength": "3" } }"#),
        Err(SchemaError::Parse(_))
    ));
    assert!(matches!(
        Schema::from_json_str(r#"{ "nome": { "pattern": "[" } }"#),
        Err(SchemaError::InvalidPattern { .. })
    ));
}

#[test]
fn errors_render_for_logs() {
    let err = Schema::from_json_str(r#"{ "nome": { "minLength": 4, "maxLength": 1 } }"#)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "field `nome` has minLength 4 greater than maxLength 1"
    );
}

#[test]
fn outcome_converts_to_structured_errors() {
    let schema = Schema::from_json_str(SIGNUP).unwrap();
    let errors = schema
        .validate(&record(json!({ "sigla": "S" })))
        .into_result()
        .unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.for_field("nome").map(|e| &*e.code), Some("required"));
    assert_eq!(errors.for_field("sigla").map(|e| &*e.code), Some("invalid_format"));
}
