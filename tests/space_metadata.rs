//! Space Metadata Integration Tests
//!
//! Tests for the links, space, datasource and tag endpoint shapes.

use serde_json::json;
use storyblok_schema::{
    json as schema_json, DatasourceEntriesWrapper, DatasourcesWrapper, LinksWrapper, SpaceWrapper,
    TagsWrapper,
};

#[test]
fn test_links_response_keyed_by_uuid() {
    let wrapper: LinksWrapper = schema_json::from_value(json!({
        "links": {
            "uuid-1": {
                "id": 1,
                "uuid": "uuid-1",
                "slug": "home",
                "name": "Home",
                "is_startpage": true,
                "position": 0,
                "published": true
            },
            "uuid-2": {
                "id": 2,
                "uuid": "uuid-2",
                "slug": "posts",
                "name": "Posts",
                "is_folder": true,
                "parent_id": 1
            }
        }
    }))
    .unwrap();

    assert_eq!(wrapper.links.len(), 2);

    let home = &wrapper.links["uuid-1"];
    assert!(home.is_start_page);
    assert_eq!(home.position, Some(0));
    assert_eq!(home.published, Some(true));

    let posts = &wrapper.links["uuid-2"];
    assert!(posts.is_folder);
    assert_eq!(posts.parent_id, Some(1));
}

#[test]
fn test_malformed_link_fails_whole_response() {
    let result = schema_json::from_value::<LinksWrapper>(json!({
        "links": { "uuid-1": { "id": 1 } }
    }));

    assert!(result.is_err());
}

#[test]
fn test_space_response() {
    let wrapper: SpaceWrapper = schema_json::from_value(json!({
        "space": {
            "id": 136141,
            "name": "Demo Space",
            "domain": "https://demo.example.com/",
            "version": 1565101372,
            "language_codes": ["de", "fr"]
        }
    }))
    .unwrap();

    let space = wrapper.space.unwrap();
    assert_eq!(space.name, "Demo Space");
    assert_eq!(space.language_codes.len(), 2);
}

#[test]
fn test_datasource_with_dimensions() {
    let wrapper: DatasourcesWrapper = schema_json::from_value(json!({
        "datasources": [{
            "id": 23537,
            "name": "Categories",
            "slug": "categories",
            "dimensions": [{
                "id": 287,
                "name": "Germany",
                "entry_value": "de",
                "datasource_id": 23537
            }]
        }]
    }))
    .unwrap();

    let datasource = &wrapper.datasources[0];
    assert_eq!(datasource.slug, "categories");
    assert_eq!(datasource.dimensions[0].entry_value.as_deref(), Some("de"));
}

#[test]
fn test_datasource_entries_response() {
    let wrapper: DatasourceEntriesWrapper = schema_json::from_value(json!({
        "datasource_entries": [
            { "id": 126232, "name": "cancel", "value": "Cancel" }
        ]
    }))
    .unwrap();

    assert!(wrapper.cv.is_none());
    assert_eq!(wrapper.datasource_entries[0].name, "cancel");
}

#[test]
fn test_tags_response() {
    let wrapper: TagsWrapper = schema_json::from_value(json!({
        "tags": [{ "name": "red", "taggings_count": 14 }]
    }))
    .unwrap();

    assert_eq!(wrapper.tags[0].name, "red");
    assert_eq!(wrapper.tags[0].taggings_count, 14);
}
