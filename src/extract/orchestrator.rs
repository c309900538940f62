//! Run orchestration: fetch, analyze each document, merge.

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Document, ExtractionResult, FontData, Node, ID_FIELD};
use crate::source::{DocumentSource, SourceEntry};

use super::{DocumentAnalyzer, FontAggregator, RunConfig};

/// Receives the outcome of a run.
///
/// [`ExtractionOrchestrator::run`] calls exactly one of these methods.
pub trait ReportSink {
    /// Called with the result of a successful run.
    fn report(&mut self, result: &ExtractionResult);

    /// Called with a message when the run was aborted.
    fn report_error(&mut self, message: &str);
}

/// Drives one extraction run over a document source.
///
/// Per-document faults are recorded in the result's `errors` and do not
/// stop the run. Configuration and source faults abort it.
pub struct ExtractionOrchestrator {
    config: RunConfig,
    analyzer: DocumentAnalyzer,
}

impl ExtractionOrchestrator {
    /// Create an orchestrator for the given options.
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            analyzer: DocumentAnalyzer::new(),
        }
    }

    /// Get the run options.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Fetch documents from `source` and analyze them.
    pub fn extract(&self, source: &dyn DocumentSource) -> Result<ExtractionResult> {
        let query = self.config.query()?;
        log::info!(
            "Fetching up to {} documents from {}",
            query.limit,
            source.name()
        );
        let entries = source.fetch(&query)?;
        Ok(self.analyze_entries(entries))
    }

    /// Run against `source` and deliver the outcome to `sink`.
    pub fn run(&self, source: &dyn DocumentSource, sink: &mut dyn ReportSink) {
        match self.extract(source) {
            Ok(result) => sink.report(&result),
            Err(e) => {
                log::error!("Extraction aborted: {}", e);
                sink.report_error(&e.to_string());
            }
        }
    }

    /// Analyze already-fetched documents.
    ///
    /// `total_documents` in the result is the number of nodes given.
    pub fn analyze_all(&self, nodes: Vec<Node>) -> ExtractionResult {
        self.analyze_entries(nodes.into_iter().map(Ok).collect())
    }

    /// Analyze fetched entries, reporting undecodable ones as document errors.
    pub fn analyze_entries(&self, entries: Vec<SourceEntry>) -> ExtractionResult {
        let total = entries.len();

        // Parallel collection keeps arrival order, so both modes merge identically
        let outcomes: Vec<std::result::Result<Vec<FontData>, String>> = if self.config.parallel {
            entries
                .into_par_iter()
                .enumerate()
                .map(|(i, entry)| self.analyze_entry(i, entry))
                .collect()
        } else {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, entry)| self.analyze_entry(i, entry))
                .collect()
        };

        let mut aggregator = FontAggregator::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(fonts) => aggregator.add_document(fonts),
                Err(message) => {
                    log::warn!("{}", message);
                    errors.push(message);
                }
            }
        }

        let result = aggregator.finish(total, errors);
        log::info!(
            "Analyzed {} documents: {} fonts, {} usages, {} errors",
            result.total_documents,
            result.summary.unique_fonts,
            result.summary.total_usages,
            result.errors.len()
        );
        result
    }

    fn analyze_entry(
        &self,
        index: usize,
        entry: SourceEntry,
    ) -> std::result::Result<Vec<FontData>, String> {
        let node = entry.map_err(|e| format!("Error processing document #{}: {}", index, e))?;
        let label = node
            .str_field(ID_FIELD)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", index));

        Document::from_node(node)
            .and_then(|doc| self.analyzer.analyze(&doc, &self.config))
            .map_err(|e| format!("Error processing document {}: {}", label, e))
    }
}

impl Default for ExtractionOrchestrator {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}
