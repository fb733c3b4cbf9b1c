//! Errors raised while building a schema.

use thiserror::Error;

/// A schema definition that cannot be turned into a [`Schema`](super::Schema).
///
/// Validation itself never fails with this type; it only covers loading
/// and assembling schemas.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The JSON document is malformed or has unknown rule keys.
    #[error("invalid schema definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `pattern` does not compile.
    #[error("field `{field}` has an invalid pattern: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// `minLength` is greater than `maxLength`, so no value could pass.
    #[error("field `{field}` has minLength {min} greater than maxLength {max}")]
    InvertedLength { field: String, min: usize, max: usize },

    /// A predicate was attached to a field the schema does not declare.
    #[error("schema has no field `{0}`")]
    UnknownField(String),
}

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;
