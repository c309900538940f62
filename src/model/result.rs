//! Extraction result and summary statistics.

use super::FontData;
use serde::{Deserialize, Serialize};

/// The entry with the most usages; ties go to the one that appears first.
fn most_used(fonts: &[FontData]) -> Option<&FontData> {
    let mut best: Option<&FontData> = None;
    for font in fonts {
        match best {
            Some(b) if b.usage_count() >= font.usage_count() => {}
            _ => best = Some(font),
        }
    }
    best
}

/// Value of `most_used_font` when no font was found.
pub const NO_FONT: &str = "None";

/// Outcome of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Number of documents returned by the source
    pub total_documents: usize,

    /// Deduplicated fonts in first-discovery order
    pub fonts_found: Vec<FontData>,

    /// One message per document that could not be analyzed
    pub errors: Vec<String>,

    /// Summary statistics over `fonts_found`
    pub summary: Summary,
}

impl ExtractionResult {
    /// Create a result, computing the summary from `fonts_found`.
    pub fn new(total_documents: usize, fonts_found: Vec<FontData>, errors: Vec<String>) -> Self {
        let summary = Summary::from_fonts(&fonts_found);
        Self {
            total_documents,
            fonts_found,
            errors,
            summary,
        }
    }

    /// Check if any document failed to analyze.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The entry named by `summary.most_used_font`, if any fonts were found.
    pub fn most_used(&self) -> Option<&FontData> {
        most_used(&self.fonts_found)
    }

    /// Find a font entry by family (first match).
    pub fn find_family(&self, family: &str) -> Option<&FontData> {
        self.fonts_found.iter().find(|f| f.font_family == family)
    }
}

/// Summary statistics for a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of distinct font entries
    pub unique_fonts: usize,

    /// Sum of usage counts over all entries
    pub total_usages: usize,

    /// Family of the entry with the most usages, or `"None"`
    pub most_used_font: String,
}

impl Summary {
    /// Compute statistics over a list of fonts.
    ///
    /// Ties for the most-used font go to the entry that appears first.
    pub fn from_fonts(fonts: &[FontData]) -> Self {
        Self {
            unique_fonts: fonts.len(),
            total_usages: fonts.iter().map(FontData::usage_count).sum(),
            most_used_font: most_used(fonts)
                .map(|f| f.font_family.clone())
                .unwrap_or_else(|| NO_FONT.to_string()),
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::from_fonts(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontProperties, UsageRecord};

    fn font_with_usages(family: &str, count: usize) -> FontData {
        let usage = |i: usize| UsageRecord::new(format!("d{i}"), "post", "body", "text");
        let mut font = FontData::from_properties(FontProperties::family(family), usage(0)).unwrap();
        for i in 1..count {
            font.add_usage(usage(i));
        }
        font
    }

    #[test]
    fn test_most_used_font() {
        let fonts = vec![
            font_with_usages("A", 1),
            font_with_usages("B", 5),
            font_with_usages("C", 3),
        ];
        let summary = Summary::from_fonts(&fonts);
        assert_eq!(summary.unique_fonts, 3);
        assert_eq!(summary.total_usages, 9);
        assert_eq!(summary.most_used_font, "B");
    }

    #[test]
    fn test_most_used_font_tie_goes_to_first() {
        let fonts = vec![font_with_usages("First", 2), font_with_usages("Second", 2)];
        assert_eq!(Summary::from_fonts(&fonts).most_used_font, "First");
    }

    #[test]
    fn test_most_used_entry_matches_summary_on_tie() {
        let mut second = font_with_usages("Second", 1);
        second.font_size = Some("lg".to_string());
        let result = ExtractionResult::new(
            2,
            vec![font_with_usages("First", 1), second, font_with_usages("Third", 1)],
            vec![],
        );

        let top = result.most_used().unwrap();
        assert_eq!(top.font_family, "First");
        assert_eq!(top.font_family, result.summary.most_used_font);
        assert!(ExtractionResult::new(0, vec![], vec![]).most_used().is_none());
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::default();
        assert_eq!(summary.unique_fonts, 0);
        assert_eq!(summary.total_usages, 0);
        assert_eq!(summary.most_used_font, NO_FONT);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ExtractionResult::new(2, vec![font_with_usages("Arial", 1)], vec![]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"totalDocuments\":2"));
        assert!(json.contains("\"fontsFound\""));
        assert!(json.contains("\"mostUsedFont\":\"Arial\""));
        assert!(!result.has_errors());
        assert!(result.find_family("Arial").is_some());
    }
}
