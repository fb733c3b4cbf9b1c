//! Integration tests for crondock-validator
//!
//! End-to-end form scenarios:
//! - Declarative schemas loaded from JSON
//! - The built-in registration schemas
//! - Formatting a value and validating the masked result

mod builtin_schemas;
mod masked_input;
mod schema_json;

use serde_json::Value;

/// Converts a `json!` literal into a record.
pub fn record(value: Value) -> crondock_validator::schema::Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
