//! Declarative record validation.
//!
//! A [`Schema`] maps field names to [`FieldRule`]s. [`validate`] evaluates a
//! JSON record against it and reports one message per failing field:
//!
//! ```
//! use crondock_validator::schema::{self, FieldRule, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("nome", FieldRule::new().required().min_length(3).label("Nome"))
//!     .field("senha", FieldRule::new().required().min_length(6).label("Senha"));
//!
//! let outcome = schema::validate(json!({ "nome": "Ana" }).as_object().unwrap(), &schema);
//! assert!(!outcome.is_valid);
//! assert_eq!(outcome.error("senha"), Some("Senha é obrigatório"));
//! assert_eq!(outcome.first_error.as_deref(), Some("Senha é obrigatório"));
//! ```
//!
//! Schemas can also be loaded from JSON with [`Schema::from_json_str`]; the
//! forms of the clinic live in [`builtin`].

pub mod builtin;
mod definition;
mod engine;
mod error;
mod outcome;
mod rule;

pub use definition::Schema;
pub use engine::validate;
pub use error::{SchemaError, SchemaResult};
pub use outcome::SchemaOutcome;
pub use rule::{CustomPredicate, FieldRule, Record};
