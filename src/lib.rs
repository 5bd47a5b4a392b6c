//! storyblok-schema - Content schema for the Storyblok Content Delivery API
//!
//! Typed wire-format definitions for content entries ("stories") and the
//! response envelopes the API wraps them in, together with helpers that turn
//! raw response bodies into those types.
//!
//! # Design
//!
//! The upstream API is per-project configurable, so the schema is deliberately
//! tolerant:
//! - Only identity and naming fields are required; everything else defaults
//!   to an explicit absent state
//! - Content bodies stay open JSON objects with author-defined shapes
//! - Parsing is all-or-nothing: a payload either maps cleanly or fails with
//!   [`SchemaError::SchemaMismatch`]
//!
//! Transport, caching and retry live in the surrounding SDK; this crate only
//! defines what comes off the wire.
//!
//! # Modules
//!
//! - `model`: Data structures (Story, envelopes, Link, Space, ...)
//! - `json`: Parse/emit helpers with the schema error taxonomy
//! - `error`: The error type
//!
//! # Usage
//!
//! ```
//! use storyblok_schema::{json, StoryWrapper};
//!
//! let body = r#"{"story": {"id": 1, "uuid": "u1", "name": "Home",
//!                "slug": "home", "full_slug": "home",
//!                "created_at": "2024-01-01T00:00:00Z"}}"#;
//! let response: StoryWrapper = json::from_str(body).unwrap();
//! assert_eq!(response.story.unwrap().slug, "home");
//! ```

pub mod error;
pub mod json;
pub mod model;

// Re-export main types at crate root for convenience
pub use error::SchemaError;
pub use model::{
    Alternate, Datasource, DatasourceEntriesWrapper, DatasourceEntry, DatasourcesWrapper,
    Dimension, Link, LinksWrapper, Space, SpaceWrapper, StoriesWrapper, Story, StoryWrapper, Tag,
    TagsWrapper,
};
