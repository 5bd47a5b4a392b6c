//! Error types for schema deserialization.
//!
//! Parsing is all-or-nothing: a payload either maps cleanly onto the schema
//! or the whole operation fails. No partially-populated objects are returned.

use thiserror::Error;

/// Errors raised when mapping JSON payloads to or from schema types
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A required field is missing or has the wrong primitive kind
    #[error("schema mismatch for {type_name}: {source}")]
    SchemaMismatch {
        /// Name of the schema type being deserialized
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Re-emitting a schema value as JSON failed
    #[error("serialization failed for {type_name}: {source}")]
    Serialize {
        /// Name of the schema type being serialized
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    /// Name of the schema type the operation targeted
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaError::SchemaMismatch { type_name, .. } => type_name,
            SchemaError::Serialize { type_name, .. } => type_name,
        }
    }
}
