//! Alternate-language descriptors attached to a story.

use serde::{Deserialize, Serialize};

/// One alternate-language version of a story.
///
/// Everything except `id` depends on the project's language setup, so it all
/// tolerates absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternate {
    /// Numeric id of the alternate entry
    pub id: i64,

    /// Name of the alternate entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Slug of the alternate entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Combined parent folder path and slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_slug: Option<String>,

    /// Whether the alternate version is published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Whether the alternate entry is a folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_folder: Option<bool>,

    /// Parent folder id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alternate_tolerates_sparse_payload() {
        let alternate: Alternate = serde_json::from_value(json!({ "id": 7 })).unwrap();

        assert_eq!(alternate.id, 7);
        assert!(alternate.name.is_none());
        assert!(alternate.full_slug.is_none());
        assert!(alternate.published.is_none());
    }

    #[test]
    fn test_alternate_full_payload() {
        let alternate: Alternate = serde_json::from_value(json!({
            "id": 7,
            "name": "Startseite",
            "slug": "startseite",
            "full_slug": "de/startseite",
            "published": true,
            "is_folder": false,
            "parent_id": 3
        }))
        .unwrap();

        assert_eq!(alternate.full_slug.as_deref(), Some("de/startseite"));
        assert_eq!(alternate.published, Some(true));
        assert_eq!(alternate.parent_id, Some(3));
    }
}
