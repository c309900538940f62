//! Cross-document font merging.

use std::collections::HashMap;

use crate::model::{ExtractionResult, FontData, FontIdentity, Summary};

/// Merges per-document fonts into one deduplicated list.
///
/// Entries are keyed by (family, size, weight, style). Matching entries
/// concatenate their usages; the first entry to introduce an identity
/// keeps its other properties. Output order is first discovery.
#[derive(Debug, Default)]
pub struct FontAggregator {
    fonts: Vec<FontData>,
    index: HashMap<FontIdentity, usize>,
    documents: usize,
}

impl FontAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the fonts of one document, in arrival order.
    pub fn add_document(&mut self, fonts: Vec<FontData>) {
        self.documents += 1;
        for font in fonts {
            self.merge(font);
        }
    }

    /// Merge a single font entry.
    pub fn merge(&mut self, font: FontData) {
        let identity = font.identity();
        match self.index.get(&identity) {
            Some(&idx) => self.fonts[idx].extend_usage(font.into_usage()),
            None => {
                self.index.insert(identity, self.fonts.len());
                self.fonts.push(font);
            }
        }
    }

    /// Get the merged fonts so far.
    pub fn fonts(&self) -> &[FontData] {
        &self.fonts
    }

    /// Number of documents merged.
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Compute summary statistics over the merged fonts.
    pub fn summary(&self) -> Summary {
        Summary::from_fonts(&self.fonts)
    }

    /// Finish the run, producing the result value.
    pub fn finish(self, total_documents: usize, errors: Vec<String>) -> ExtractionResult {
        ExtractionResult::new(total_documents, self.fonts, errors)
    }
}
