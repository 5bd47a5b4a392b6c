//! Tags and their usage counts.

use serde::{Deserialize, Serialize};

/// A tag with how many stories carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name
    pub name: String,

    /// Number of stories tagged with this name
    #[serde(default)]
    pub taggings_count: i64,
}

/// Tags endpoint response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagsWrapper {
    /// All tags of the space
    #[serde(default)]
    pub tags: Vec<Tag>,
}
