//! JSON rendering for extraction results.

use super::FontReport;
use crate::error::{Error, Result};
use crate::model::ExtractionResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a result to an export JSON document.
pub fn to_json(result: &ExtractionResult, format: JsonFormat) -> Result<String> {
    report_to_json(&FontReport::from_result(result), format)
}

/// Serialize a prepared report.
pub fn report_to_json(report: &FontReport, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
