//! Export document for extraction results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ExtractionResult, FontData, Summary, UsageRecord};

/// Export form of an [`ExtractionResult`], with per-font usage counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontReport {
    /// When the report was produced
    pub generated_at: DateTime<Utc>,

    /// Number of documents analyzed
    pub total_documents: usize,

    /// Summary statistics
    pub summary: Summary,

    /// Per-document error messages
    pub errors: Vec<String>,

    /// One entry per distinct font
    pub fonts: Vec<FontEntry>,
}

impl FontReport {
    /// Build a report stamped with the given time.
    pub fn new(result: &ExtractionResult, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            total_documents: result.total_documents,
            summary: result.summary.clone(),
            errors: result.errors.clone(),
            fonts: result.fonts_found.iter().map(FontEntry::from).collect(),
        }
    }

    /// Build a report stamped with the current time.
    pub fn from_result(result: &ExtractionResult) -> Self {
        Self::new(result, Utc::now())
    }
}

/// One font in an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontEntry {
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
    pub usage_count: usize,
    pub usage: Vec<UsageRecord>,
}

impl From<&FontData> for FontEntry {
    fn from(font: &FontData) -> Self {
        Self {
            font_family: font.font_family.clone(),
            font_size: font.font_size.clone(),
            font_weight: font.font_weight.clone(),
            font_style: font.font_style.clone(),
            line_height: font.line_height.clone(),
            letter_spacing: font.letter_spacing.clone(),
            text_transform: font.text_transform.clone(),
            text_decoration: font.text_decoration.clone(),
            color: font.color.clone(),
            usage_count: font.usage_count(),
            usage: font.usage().to_vec(),
        }
    }
}
