//! The schemas used by the clinic's registration forms.
//!
//! Each schema is built once, on first use, and shared.
//!
//! ```
//! use crondock_validator::schema::builtin;
//! use serde_json::json;
//!
//! let form = json!({
//!     "nome": "Dra. Ana Souza",
//!     "cro": "CRO/SP 12345",
//!     "email": "ana@clinica.com.br",
//! });
//! assert!(builtin::dentist().validate(form.as_object().unwrap()).is_valid);
//! ```

use std::sync::LazyLock;

use serde_json::Value;

use super::definition::Schema;
use super::rule::{FieldRule, Record};
use crate::check;
use crate::validators::email_regex;

static USER: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("nome", FieldRule::new().required().min_length(3).label("Nome"))
        .field("email", email().required())
        .field("senha", FieldRule::new().required().min_length(6).label("Senha"))
        .field(
            "confirmarSenha",
            FieldRule::new()
                .required()
                .label("Confirmação de senha")
                .custom(|value: &Value, record: &Record| record.get("senha") == Some(value))
                .invalid_message("As senhas não coincidem"),
        )
});

static PATIENT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("nome", nome())
        .field(
            "cpf",
            FieldRule::new()
                .required()
                .label("CPF")
                .custom(text_check(check::cpf))
                .invalid_message("CPF inválido"),
        )
        .field("telefone", telefone().required())
        .field("email", email())
        .field(
            "cep",
            FieldRule::new()
                .label("CEP")
                .custom(text_check(check::cep))
                .invalid_message("CEP inválido"),
        )
});

static DENTIST: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("nome", nome())
        .field(
            "cro",
            FieldRule::new()
                .required()
                .label("CRO")
                .custom(text_check(check::cro))
                .invalid_message("CRO inválido"),
        )
        .field("email", email().required())
        .field("telefone", telefone())
});

static PROCEDURE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("nome", nome())
        .field(
            "valor",
            FieldRule::new()
                .required()
                .label("Valor")
                .custom(amount_check)
                .invalid_message("Valor inválido"),
        )
        .field("descricao", FieldRule::new().max_length(500).label("Descrição"))
});

/// Account sign-up: `nome`, `email`, `senha`, `confirmarSenha`.
///
/// `confirmarSenha` must equal `senha`.
pub fn user() -> &'static Schema {
    &USER
}

/// Patient registration: `nome`, `cpf`, `telefone`, optional `email` and `cep`.
pub fn patient() -> &'static Schema {
    &PATIENT
}

/// Dentist registration: `nome`, `cro`, `email`, optional `telefone`.
pub fn dentist() -> &'static Schema {
    &DENTIST
}

/// Procedure catalogue entry: `nome`, `valor`, optional `descricao`.
///
/// `valor` may be a masked string (`"R$ 150,00"`) or a JSON number.
pub fn procedure() -> &'static Schema {
    &PROCEDURE
}

fn nome() -> FieldRule {
    FieldRule::new()
        .required()
        .min_length(3)
        .max_length(100)
        .label("Nome")
}

fn email() -> FieldRule {
    FieldRule::new().pattern(email_regex().clone()).label("E-mail")
}

fn telefone() -> FieldRule {
    FieldRule::new()
        .label("Telefone")
        .custom(text_check(check::phone))
        .invalid_message("Telefone inválido")
}

/// Applies a string check to string values; other JSON types fail.
fn text_check(predicate: fn(&str) -> bool) -> impl Fn(&Value, &Record) -> bool + Send + Sync + 'static {
    move |value: &Value, _: &Record| value.as_str().is_some_and(predicate)
}

fn amount_check(value: &Value, _: &Record) -> bool {
    match value {
        Value::String(text) => check::currency(text.as_str()),
        Value::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(integer), _) => check::currency(integer),
            (None, Some(float)) => check::currency(float),
            (None, None) => false,
        },
        _ => false,
    }
}
