//! Extraction pipeline.
//!
//! [`DocumentAnalyzer`] walks one document, [`FontAggregator`] merges the
//! per-document fonts, and [`ExtractionOrchestrator`] drives a whole run
//! from a [`DocumentSource`](crate::source::DocumentSource).

mod aggregator;
mod analyzer;
mod options;
mod orchestrator;

pub use aggregator::FontAggregator;
pub use analyzer::{DocumentAnalyzer, MAX_DEPTH};
pub use options::{DocumentQuery, FieldFilter, RunConfig, DEFAULT_MAX_DOCUMENTS};
pub use orchestrator::{ExtractionOrchestrator, ReportSink};
