//! JSON parse and emit helpers for the schema types.
//!
//! The transport layer hands raw response bodies to these functions; they map
//! serde failures into [`SchemaError`] so callers see a single error taxonomy.
//! Parsing is synchronous and CPU-only, with no partial results.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::SchemaError;

/// Deserialize a schema type from a JSON string.
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T, SchemaError> {
    serde_json::from_str(json).map_err(|source| mismatch::<T>(source))
}

/// Deserialize a schema type from raw JSON bytes.
pub fn from_slice<T: DeserializeOwned>(json: &[u8]) -> Result<T, SchemaError> {
    serde_json::from_slice(json).map_err(|source| mismatch::<T>(source))
}

/// Deserialize a schema type from an already-parsed JSON value.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, SchemaError> {
    serde_json::from_value(value).map_err(|source| mismatch::<T>(source))
}

/// Serialize a schema type back to a JSON string (e.g. for local caching).
pub fn to_string<T: Serialize>(value: &T) -> Result<String, SchemaError> {
    serde_json::to_string(value).map_err(|source| SchemaError::Serialize {
        type_name: short_type_name::<T>(),
        source,
    })
}

/// Serialize a schema type to a JSON value.
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, SchemaError> {
    serde_json::to_value(value).map_err(|source| SchemaError::Serialize {
        type_name: short_type_name::<T>(),
        source,
    })
}

fn mismatch<T>(source: serde_json::Error) -> SchemaError {
    let type_name = short_type_name::<T>();
    debug!(type_name, error = %source, "payload did not match schema");
    SchemaError::SchemaMismatch { type_name, source }
}

/// Last segment of the full type path, for readable error messages
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
