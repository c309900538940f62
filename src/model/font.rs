//! Font findings and usage records.

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in a usage snippet.
pub const CONTENT_SNIPPET_LIMIT: usize = 100;

/// Marker appended to snippets that were cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Font-related properties extracted from a single style source.
///
/// Every field is optional: a parser sets only what it recognized, and an
/// unset field is `None`, never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl FontProperties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a property set with only a family.
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            font_family: Some(family.into()),
            ..Default::default()
        }
    }

    /// Set the font size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    /// Set the font weight.
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    /// Set the font style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.font_style = Some(style.into());
        self
    }

    /// Set the text decoration.
    pub fn with_decoration(mut self, decoration: impl Into<String>) -> Self {
        self.text_decoration = Some(decoration.into());
        self
    }

    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Get the family if it is present and non-empty.
    pub fn family_name(&self) -> Option<&str> {
        self.font_family.as_deref().filter(|f| !f.is_empty())
    }
}

/// Merge key for fonts across documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontIdentity {
    pub font_family: String,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
}

/// One place where a font was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// `_id` of the source document
    pub document_id: String,

    /// `_type` of the source document
    pub document_type: String,

    /// Dotted/indexed location within the document, e.g. `body[2].children[0].marks`
    pub field_path: String,

    /// Display snippet of the text carrying the font
    pub content: String,
}

impl UsageRecord {
    /// Create a usage record, truncating `content` to a display snippet.
    pub fn new(
        document_id: impl Into<String>,
        document_type: impl Into<String>,
        field_path: impl Into<String>,
        content: &str,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            document_type: document_type.into(),
            field_path: field_path.into(),
            content: truncate_content(content),
        }
    }
}

/// Shorten text to [`CONTENT_SNIPPET_LIMIT`] characters plus [`TRUNCATION_MARKER`].
///
/// Text at or under the limit is returned verbatim.
pub fn truncate_content(text: &str) -> String {
    match text.char_indices().nth(CONTENT_SNIPPET_LIMIT) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// A discovered font and every place it is used.
///
/// Only built through [`FontData::from_properties`], so the family is never
/// empty and there is at least one usage. Exports are read back as
/// [`FontEntry`](crate::render::FontEntry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontData {
    pub font_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    usage: Vec<UsageRecord>,
}

impl FontData {
    /// Create a font entry at its first usage.
    ///
    /// Returns `None` when the properties carry no non-empty family.
    pub fn from_properties(props: FontProperties, first_usage: UsageRecord) -> Option<Self> {
        let family = props.family_name()?.to_string();
        Some(Self {
            font_family: family,
            font_size: props.font_size,
            font_weight: props.font_weight,
            font_style: props.font_style,
            line_height: props.line_height,
            letter_spacing: props.letter_spacing,
            text_transform: props.text_transform,
            text_decoration: props.text_decoration,
            color: props.color,
            usage: vec![first_usage],
        })
    }

    /// Get the cross-document merge key.
    pub fn identity(&self) -> FontIdentity {
        FontIdentity {
            font_family: self.font_family.clone(),
            font_size: self.font_size.clone(),
            font_weight: self.font_weight.clone(),
            font_style: self.font_style.clone(),
        }
    }

    /// Get the usages in discovery order.
    pub fn usage(&self) -> &[UsageRecord] {
        &self.usage
    }

    /// Get the number of usages.
    pub fn usage_count(&self) -> usize {
        self.usage.len()
    }

    /// Record another usage.
    pub fn add_usage(&mut self, usage: UsageRecord) {
        self.usage.push(usage);
    }

    /// Append usages from another entry, keeping their order.
    pub fn extend_usage(&mut self, usages: impl IntoIterator<Item = UsageRecord>) {
        self.usage.extend(usages);
    }

    /// Consume the entry, returning its usages.
    pub fn into_usage(self) -> Vec<UsageRecord> {
        self.usage
    }
}
