//! Document model types for typography analysis.
//!
//! This module defines the schemaless document tree that analysis walks,
//! and the font findings, usage records, and run results it produces.

mod document;
mod font;
mod node;
mod result;

pub use document::{Document, ID_FIELD, TYPE_FIELD};
pub use font::{
    truncate_content, FontData, FontIdentity, FontProperties, UsageRecord, CONTENT_SNIPPET_LIMIT,
    TRUNCATION_MARKER,
};
pub use node::Node;
pub use result::{ExtractionResult, Summary, NO_FONT};
