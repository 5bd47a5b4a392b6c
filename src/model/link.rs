//! Link descriptors, the lighter sibling of a full story.
//!
//! The Links API returns these instead of full stories so navigation trees
//! can be built without fetching every entry's content body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A lightweight pointer to a story or folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Numeric id of the linked entry
    pub id: i64,

    /// Uuid of the linked entry
    pub uuid: String,

    /// Slug / path segment of the linked entry
    pub slug: String,

    /// Name of the linked entry
    pub name: String,

    /// Whether the entry is a folder
    #[serde(default)]
    pub is_folder: bool,

    /// Whether the entry is the start page of its folder
    #[serde(rename = "is_startpage", default)]
    pub is_start_page: bool,

    /// Parent folder id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    /// Position within the parent folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Whether the entry is published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Resolved path when a real-path rewrite is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_path: Option<String>,
}

/// Links API response envelope.
///
/// The upstream keys each link by its uuid rather than returning an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksWrapper {
    /// All links of the space, keyed by uuid
    #[serde(default)]
    pub links: BTreeMap<String, Link>,
}
