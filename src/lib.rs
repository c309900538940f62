//! # fontsift
//!
//! Typography usage discovery for structured content documents.
//!
//! This library walks schemaless content documents (records of strings,
//! lists, and nested records) and reports which fonts they use and where:
//! inline `style="..."` declarations, utility class names such as
//! `font-serif text-lg`, and rich text blocks with heading styles and
//! emphasis marks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fontsift::{extract_from_file, RunConfig};
//!
//! fn main() -> fontsift::Result<()> {
//!     let config = RunConfig::new().with_field_list("body, content");
//!     let result = extract_from_file("export.ndjson", &config)?;
//!
//!     println!("Most used font: {}", result.summary.most_used_font);
//!     for font in &result.fonts_found {
//!         println!("{}: {} usages", font.font_family, font.usage_count());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Inline styles**: `font-family`, `font-size`, `font-weight` and related declarations
//! - **Class names**: `font-*`, `family-*`, generic and well-known family names
//! - **Rich text**: block styles (`h1`..`h6`, `blockquote`, `normal`) and marks
//! - **Usage locations**: document id, type, field path, and a content snippet
//! - **Parallel analysis**: opt-in Rayon processing with identical output
//! - **Exports**: JSON array, NDJSON, and gzip-compressed input; JSON and text output

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, DocumentLayout, ExportFormat};
pub use error::{Error, Result};
pub use extract::{
    DocumentAnalyzer, DocumentQuery, ExtractionOrchestrator, FieldFilter, FontAggregator,
    ReportSink, RunConfig,
};
pub use model::{
    Document, ExtractionResult, FontData, FontIdentity, FontProperties, Node, Summary,
    UsageRecord,
};
pub use render::{FontReport, JsonExportSink, JsonFormat, TextOptions};
pub use source::{DocumentSource, FileSource, MemorySource, SourceEntry};

use std::path::Path;

/// Extract fonts from a document export file.
///
/// # Arguments
///
/// * `path` - Path to a JSON array or NDJSON export (optionally gzipped)
/// * `config` - Run options
///
/// # Example
///
/// ```no_run
/// use fontsift::{extract_from_file, RunConfig};
///
/// let result = extract_from_file("export.json", &RunConfig::default()).unwrap();
/// println!("Fonts: {}", result.summary.unique_fonts);
/// ```
pub fn extract_from_file<P: AsRef<Path>>(path: P, config: &RunConfig) -> Result<ExtractionResult> {
    let source = FileSource::new(path.as_ref());
    ExtractionOrchestrator::new(config.clone()).extract(&source)
}

/// Extract fonts from already-loaded documents.
///
/// The type filter and document limit of `config` still apply.
pub fn extract_from_nodes(nodes: Vec<Node>, config: &RunConfig) -> Result<ExtractionResult> {
    let source = MemorySource::new(nodes);
    ExtractionOrchestrator::new(config.clone()).extract(&source)
}

/// Extract fonts from a JSON string holding an array of documents or NDJSON.
///
/// # Example
///
/// ```
/// use fontsift::{extract_from_json, RunConfig};
///
/// let json = r#"[{"_id": "a", "_type": "post", "body": "<p style=\"font-family: Georgia\">Hi</p>"}]"#;
/// let result = extract_from_json(json, &RunConfig::default()).unwrap();
/// assert_eq!(result.summary.most_used_font, "Georgia");
/// ```
pub fn extract_from_json(json: &str, config: &RunConfig) -> Result<ExtractionResult> {
    let query = config.query()?;
    let entries = source::apply_query(source::parse_export(json.as_bytes())?, &query);
    Ok(ExtractionOrchestrator::new(config.clone()).analyze_entries(entries))
}

/// Analyze a single document.
///
/// Fonts are merged by family within the document.
pub fn analyze_document(doc: &Document, config: &RunConfig) -> Result<Vec<FontData>> {
    DocumentAnalyzer::new().analyze(doc, config)
}

/// Builder for configuring and running an extraction.
///
/// # Example
///
/// ```no_run
/// use fontsift::FontSift;
///
/// let json = FontSift::new()
///     .fields("body, content")
///     .document_types(["post", "page"])
///     .max_documents(500)
///     .without_classes()
///     .run_file("export.ndjson")?
///     .to_json(fontsift::JsonFormat::Pretty)?;
/// # Ok::<(), fontsift::Error>(())
/// ```
pub struct FontSift {
    config: RunConfig,
}

impl FontSift {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    /// Restrict scanning to fields whose names contain one of these (comma-separated).
    pub fn fields(mut self, list: &str) -> Self {
        self.config = self.config.with_field_list(list);
        self
    }

    /// Restrict the run to the given document types.
    pub fn document_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.with_document_types(types);
        self
    }

    /// Set the maximum number of documents to analyze.
    pub fn max_documents(mut self, max: usize) -> Self {
        self.config = self.config.with_max_documents(max);
        self
    }

    /// Skip inline `style` attributes.
    pub fn without_inline_styles(mut self) -> Self {
        self.config = self.config.with_inline_styles(false);
        self
    }

    /// Skip `class` attributes.
    pub fn without_classes(mut self) -> Self {
        self.config = self.config.with_css_classes(false);
        self
    }

    /// Skip rich text blocks.
    pub fn without_rich_text(mut self) -> Self {
        self.config = self.config.with_rich_text(false);
        self
    }

    /// Analyze documents in parallel.
    pub fn parallel(mut self) -> Self {
        self.config = self.config.with_parallel(true);
        self
    }

    /// Get the configured options.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run against any document source.
    pub fn run(self, source: &dyn DocumentSource) -> Result<FontSiftResult> {
        let result = ExtractionOrchestrator::new(self.config).extract(source)?;
        Ok(FontSiftResult { result })
    }

    /// Run against an export file.
    pub fn run_file<P: AsRef<Path>>(self, path: P) -> Result<FontSiftResult> {
        let source = FileSource::new(path.as_ref());
        self.run(&source)
    }
}

impl Default for FontSift {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a builder run.
pub struct FontSiftResult {
    /// The extraction result
    pub result: ExtractionResult,
}

impl FontSiftResult {
    /// Convert to export JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.result, format)
    }

    /// Convert to a text summary.
    pub fn to_text(&self, options: &TextOptions) -> String {
        render::to_text(&self.result, options)
    }

    /// Get the extraction result.
    pub fn result(&self) -> &ExtractionResult {
        &self.result
    }
}
