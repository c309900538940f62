//! Extraction options and configuration.

use crate::error::{Error, Result};
use crate::model::{Node, TYPE_FIELD};

/// Default upper bound on fetched documents.
pub const DEFAULT_MAX_DOCUMENTS: usize = 100;

/// Options for an extraction run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Field names whose string values are scanned (empty = every field)
    pub target_fields: FieldFilter,

    /// Whether to parse `style="..."` attributes
    pub include_inline_styles: bool,

    /// Whether to parse `class="..."` attributes
    pub include_css_classes: bool,

    /// Whether to map rich text blocks and marks
    pub extract_from_rich_text: bool,

    /// Upper bound on documents requested from the source
    pub max_documents: usize,

    /// Document `_type` values to request (empty = any type)
    pub document_types: Vec<String>,

    /// Whether to analyze documents in parallel
    pub parallel: bool,
}

impl RunConfig {
    /// Create new run options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field name filter.
    pub fn with_target_fields(mut self, filter: FieldFilter) -> Self {
        self.target_fields = filter;
        self
    }

    /// Set the field name filter from a comma-separated list.
    pub fn with_field_list(mut self, list: &str) -> Self {
        self.target_fields = FieldFilter::parse(list);
        self
    }

    /// Enable or disable inline style parsing.
    pub fn with_inline_styles(mut self, enabled: bool) -> Self {
        self.include_inline_styles = enabled;
        self
    }

    /// Enable or disable class name parsing.
    pub fn with_css_classes(mut self, enabled: bool) -> Self {
        self.include_css_classes = enabled;
        self
    }

    /// Enable or disable rich text block mapping.
    pub fn with_rich_text(mut self, enabled: bool) -> Self {
        self.extract_from_rich_text = enabled;
        self
    }

    /// Set the maximum number of documents to fetch.
    pub fn with_max_documents(mut self, max: usize) -> Self {
        self.max_documents = max;
        self
    }

    /// Restrict the run to the given document types.
    pub fn with_document_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document_types = types
            .into_iter()
            .map(Into::into)
            .map(|t: String| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    /// Enable or disable parallel analysis.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel analysis.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check that the options can produce a query.
    pub fn validate(&self) -> Result<()> {
        if self.max_documents == 0 {
            return Err(Error::InvalidConfig(
                "max_documents must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the document query for these options.
    pub fn query(&self) -> Result<DocumentQuery> {
        self.validate()?;
        Ok(DocumentQuery {
            document_types: self.document_types.clone(),
            limit: self.max_documents,
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_fields: FieldFilter::default(),
            include_inline_styles: true,
            include_css_classes: true,
            extract_from_rich_text: true,
            max_documents: DEFAULT_MAX_DOCUMENTS,
            document_types: Vec::new(),
            parallel: false,
        }
    }
}

/// Case-insensitive substring filter over field names.
///
/// An empty filter accepts every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFilter {
    names: Vec<String>,
}

impl FieldFilter {
    /// Create a filter that accepts every field.
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list such as `"body, content,description"`.
    ///
    /// Names are trimmed and lowercased; blanks and duplicates are dropped.
    pub fn parse(list: &str) -> Self {
        Self::from_names(list.split(','))
    }

    /// Build a filter from individual names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        for name in names {
            let name = name.as_ref().trim().to_lowercase();
            if !name.is_empty() && !filter.names.contains(&name) {
                filter.names.push(name);
            }
        }
        filter
    }

    /// Check if a field name qualifies for scanning.
    pub fn matches(&self, field_name: &str) -> bool {
        if self.names.is_empty() {
            return true;
        }
        let field_name = field_name.to_lowercase();
        self.names.iter().any(|n| field_name.contains(n.as_str()))
    }

    /// Check if the filter accepts every field.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get the normalized names.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Description of the documents a source should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentQuery {
    /// Accepted `_type` values (empty = any type)
    pub document_types: Vec<String>,

    /// Maximum number of documents to return
    pub limit: usize,
}

impl DocumentQuery {
    /// Check if a raw document passes the type filter.
    ///
    /// Documents without a readable `_type` pass only when no type filter
    /// is set, so malformed records still reach the analyzer and are
    /// reported there.
    pub fn accepts(&self, node: &Node) -> bool {
        if self.document_types.is_empty() {
            return true;
        }
        node.str_field(TYPE_FIELD)
            .is_some_and(|t| self.document_types.iter().any(|d| d == t))
    }
}
