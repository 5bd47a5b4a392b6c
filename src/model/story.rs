//! Story entries and the response envelopes that carry them.
//!
//! A [`Story`] is one content entry in the CMS. The two wrapper types mirror
//! the Content Delivery API's single-entry and multi-entry response bodies,
//! including the arrays of resolved relations and links the server inlines
//! when the caller asks for them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::alternate::Alternate;
use super::link::Link;

/// One content entry.
///
/// Only identity, naming and `created_at` are guaranteed by the API. Every
/// other field is per-project configuration and may be absent, so the schema
/// never assumes an optional field is populated. The `content` body is defined
/// by the content type's owner and is kept as an open JSON object; callers
/// impose their own typed views on it downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Numeric id, stable across edits
    pub id: i64,

    /// Generated uuid string
    pub uuid: String,

    /// The name given to this story
    pub name: String,

    /// The slug / path segment of this story
    pub slug: String,

    /// Combined parent folder path and slug
    pub full_slug: String,

    /// Full slug in the default language, present only when translatable
    /// slugs are enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_full_slug: Option<String>,

    /// Creation date
    pub created_at: String,

    /// Latest publishing date; absent for unpublished entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,

    /// First publishing date; absent for never-published entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_published_at: Option<String>,

    /// User-defined content body, shape owned by the content type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,

    /// Whether the folder sorts its entries by date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by_date: Option<bool>,

    /// Position within the parent folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Tags attached to this story, in authoring order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<Vec<String>>,

    /// Whether this story is the start page of its folder
    #[serde(rename = "is_startpage", default)]
    pub is_start_page: bool,

    /// Parent folder id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    /// Alternates group id linking translation siblings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Alternate-language versions of this story
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternates: Option<Vec<Alternate>>,

    /// Per-language slug objects, shape owned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_slugs: Option<Vec<Map<String, Value>>>,

    /// Id of the content stage this version belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_id: Option<String>,

    /// Language of this version ("default" for the base language)
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "default".to_string()
}

impl Story {
    /// Whether this story has ever been published
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}

/// Single-entry response envelope.
///
/// Carries the requested story plus whatever the server resolved alongside it.
/// The resolved arrays are always present in memory; a response that did not
/// request resolution simply yields empty vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryWrapper {
    /// Cache version, used by callers to detect stale cached responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<i64>,

    /// The requested story; absent only in error/empty responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<Story>,

    /// Related stories inlined via the resolve_relations parameter
    #[serde(rename = "rels", default)]
    pub relations: Vec<Story>,

    /// Uuids of relations left unresolved once the resolution limit is hit
    #[serde(rename = "rel_uuids", default)]
    pub relation_uuids: Vec<String>,

    /// Links resolved via the resolve_links parameter.
    ///
    /// Unlike [`StoriesWrapper::links`], the single-entry response carries the
    /// lighter [`Link`] descriptor here. That asymmetry comes from the
    /// upstream API and is kept for wire compatibility.
    #[serde(default)]
    pub links: Vec<Link>,

    /// Uuids of links left unresolved once the resolution limit is hit
    #[serde(rename = "link_uuids", default)]
    pub link_uuids: Vec<String>,
}

/// Multi-entry response envelope for list queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoriesWrapper {
    /// Cache version, used by callers to detect stale cached responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<i64>,

    /// The result page of stories
    #[serde(default)]
    pub stories: Vec<Story>,

    /// Related stories inlined via the resolve_relations parameter
    #[serde(rename = "rels", default)]
    pub relations: Vec<Story>,

    /// Uuids of relations left unresolved once the resolution limit is hit
    #[serde(rename = "rel_uuids", default)]
    pub relation_uuids: Vec<String>,

    /// Links resolved via the resolve_links parameter.
    ///
    /// The multi-entry response inlines full [`Story`] objects here, not the
    /// lighter descriptor used by [`StoryWrapper::links`]. Upstream quirk,
    /// kept for wire compatibility.
    #[serde(default)]
    pub links: Vec<Story>,

    /// Uuids of links left unresolved once the resolution limit is hit
    #[serde(rename = "link_uuids", default)]
    pub link_uuids: Vec<String>,
}
