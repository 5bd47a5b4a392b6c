//! Schema types for the Content Delivery API.
//!
//! This module contains the wire-format data structures:
//! - Story: one content entry, plus its single- and multi-entry envelopes
//! - Link: the lighter entry descriptor used by the Links API
//! - Alternate: alternate-language descriptors attached to a story
//! - Space, Datasource, Tag: space-level metadata endpoints

pub mod alternate;
pub mod datasource;
pub mod link;
pub mod space;
pub mod story;
pub mod tag;

// Re-export commonly used types
pub use alternate::Alternate;
pub use datasource::{
    Datasource, DatasourceEntriesWrapper, DatasourceEntry, DatasourcesWrapper, Dimension,
};
pub use link::{Link, LinksWrapper};
pub use space::{Space, SpaceWrapper};
pub use story::{StoriesWrapper, Story, StoryWrapper};
pub use tag::{Tag, TagsWrapper};
