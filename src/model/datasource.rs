//! Datasources and their entries.
//!
//! A datasource is a flat list of key/value entries, optionally split into
//! dimensions (e.g. one value per country).

use serde::{Deserialize, Serialize};

/// A datasource definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datasource {
    /// Numeric id of the datasource
    pub id: i64,

    /// Name of the datasource
    pub name: String,

    /// Slug used to query the datasource's entries
    pub slug: String,

    /// Configured dimensions
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

/// One dimension of a datasource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Numeric id of the dimension
    pub id: i64,

    /// Name of the dimension
    pub name: String,

    /// Value used to select this dimension in queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_value: Option<String>,

    /// Id of the owning datasource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource_id: Option<i64>,
}

/// One key/value entry of a datasource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasourceEntry {
    /// Numeric id of the entry
    pub id: i64,

    /// Entry key
    pub name: String,

    /// Entry value in the default dimension
    pub value: String,

    /// Entry value in the requested dimension, when one was queried
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_value: Option<String>,
}

/// Datasources endpoint response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasourcesWrapper {
    /// All datasources of the space
    #[serde(default)]
    pub datasources: Vec<Datasource>,
}

/// Datasource-entries endpoint response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasourceEntriesWrapper {
    /// Cache version, used by callers to detect stale cached responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<i64>,

    /// The entries of the queried datasource
    #[serde(default)]
    pub datasource_entries: Vec<DatasourceEntry>,
}
