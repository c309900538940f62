//! Document sources.
//!
//! A source turns a [`DocumentQuery`] into raw document entries. Fetching is
//! the only run-level step that can fail. An entry that could not be decoded
//! carries its own error and is reported per document by the orchestrator.
//!
//! # Example
//!
//! ```no_run
//! use fontsift::source::{DocumentSource, FileSource};
//! use fontsift::RunConfig;
//!
//! fn main() -> fontsift::Result<()> {
//!     let source = FileSource::new("export.ndjson");
//!     let query = RunConfig::default().query()?;
//!     let entries = source.fetch(&query)?;
//!     println!("{} documents", entries.len());
//!     Ok(())
//! }
//! ```

mod file;

pub use file::{parse_export, FileSource};

use crate::error::Result;
use crate::extract::DocumentQuery;
use crate::model::Node;

/// One fetched document, or the error that kept it from being decoded.
pub type SourceEntry = Result<Node>;

/// Trait for document sources.
///
/// Implement this trait to read documents from a content store. The
/// returned order must be stable for a single call.
pub trait DocumentSource: Send + Sync {
    /// Get the name of this source, used in log messages.
    fn name(&self) -> &str;

    /// Fetch the documents matching `query`.
    fn fetch(&self, query: &DocumentQuery) -> Result<Vec<SourceEntry>>;
}

/// In-memory document source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    nodes: Vec<Node>,
}

impl MemorySource {
    /// Create a source over already-loaded documents.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Number of documents held (before filtering).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the source holds no documents.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(&self, query: &DocumentQuery) -> Result<Vec<SourceEntry>> {
        Ok(apply_query(self.nodes.iter().cloned().map(Ok), query))
    }
}

impl From<Vec<Node>> for MemorySource {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

/// Filter entries by type and cap them at the query limit, keeping order.
///
/// Undecodable entries have no readable `_type`, so they pass only when no
/// type filter is set.
pub fn apply_query<I>(entries: I, query: &DocumentQuery) -> Vec<SourceEntry>
where
    I: IntoIterator<Item = SourceEntry>,
{
    entries
        .into_iter()
        .filter(|entry| match entry {
            Ok(node) => query.accepts(node),
            Err(_) => query.document_types.is_empty(),
        })
        .take(query.limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn doc(id: &str, doc_type: &str) -> Node {
        Node::map([("_id", Node::from(id)), ("_type", Node::from(doc_type))])
    }

    #[test]
    fn test_memory_source_limit() {
        let source = MemorySource::new(vec![doc("a", "post"), doc("b", "post"), doc("c", "post")]);
        let query = DocumentQuery {
            document_types: Vec::new(),
            limit: 2,
        };
        let entries = source.fetch(&query).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].as_ref().unwrap().str_field("_id"), Some("b"));
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_memory_source_type_filter() {
        let source = MemorySource::from(vec![doc("a", "post"), doc("b", "page"), doc("c", "post")]);
        let query = DocumentQuery {
            document_types: vec!["post".to_string()],
            limit: 10,
        };
        let ids: Vec<String> = source
            .fetch(&query)
            .unwrap()
            .iter()
            .filter_map(|e| e.as_ref().ok()?.str_field("_id").map(str::to_string))
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_undecodable_entries_follow_type_filter() {
        let entries = vec![
            Ok(doc("a", "post")),
            Err(Error::Malformed("bad entry".to_string())),
        ];
        let any_type = DocumentQuery {
            document_types: Vec::new(),
            limit: 10,
        };
        let posts = DocumentQuery {
            document_types: vec!["post".to_string()],
            limit: 10,
        };

        assert_eq!(apply_query(entries, &any_type).len(), 2);

        let entries = vec![
            Ok(doc("a", "post")),
            Err(Error::Malformed("bad entry".to_string())),
        ];
        assert_eq!(apply_query(entries, &posts).len(), 1);
    }
}
