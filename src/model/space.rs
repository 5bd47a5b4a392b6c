//! Space metadata.

use serde::{Deserialize, Serialize};

/// A space, the top-level container for a project's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// Numeric id of the space
    pub id: i64,

    /// Name of the space
    pub name: String,

    /// Primary domain configured for the space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Current space version, bumped on every publish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Language codes configured for the space
    #[serde(default)]
    pub language_codes: Vec<String>,
}

/// Space endpoint response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceWrapper {
    /// The current space; absent in error responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<Space>,
}
