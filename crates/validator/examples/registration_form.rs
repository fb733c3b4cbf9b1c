//! Validating a submitted form with the built-in patient schema.
//!
//! Run: `cargo run -p crondock-validator --example registration_form`

use crondock_validator::schema::builtin;
use serde_json::json;

fn main() {
    let submitted = json!({
        "nome": "Maria da Conceição",
        "cpf": "529.982.247-26",
        "telefone": "(11) 9999-888",
        "email": "maria@exemplo.com",
        "cep": ""
    });
    let Some(record) = submitted.as_object() else {
        return;
    };

    let outcome = builtin::patient().validate(record);
    if outcome.is_valid {
        println!("✓ patient form is valid");
        return;
    }

    println!("✗ patient form has {} error(s):", outcome.errors.len());
    for (field, message) in &outcome.errors {
        println!("  {field}: {message}");
    }
    if let Some(first) = &outcome.first_error {
        println!("toast: {first}");
    }

    match serde_json::to_string_pretty(&outcome) {
        Ok(body) => println!("\nresponse body:\n{body}"),
        Err(e) => println!("could not serialize outcome: {e}"),
    }
}
