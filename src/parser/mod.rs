//! Style parsing module.
//!
//! Three independent heuristics turn raw content into font properties:
//! inline `style` declarations, utility class names, and rich text block
//! styles and marks.

mod class_name;
mod markup;
mod rich_text;
mod style_attr;

pub use class_name::ClassNameParser;
pub use markup::AttributeScanner;
pub use rich_text::{block_style, mark_style, RichTextStyleMapper, BLOCK_TYPE};
pub use style_attr::StyleAttributeParser;

use crate::model::FontProperties;

/// Font properties found at one location, before they become usages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFinding {
    /// Properties recognized at the location
    pub properties: FontProperties,

    /// Location within the document
    pub field_path: String,

    /// Text the properties apply to (untruncated)
    pub content: String,
}

impl StyleFinding {
    /// Create a new finding.
    pub fn new(
        properties: FontProperties,
        field_path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            properties,
            field_path: field_path.into(),
            content: content.into(),
        }
    }
}
