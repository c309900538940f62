//! Per-document traversal and font collection.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{Document, FontData, Node, UsageRecord};
use crate::parser::{
    AttributeScanner, ClassNameParser, RichTextStyleMapper, StyleAttributeParser, StyleFinding,
};

use super::RunConfig;

/// Deepest nesting the analyzer will walk before giving up on a document.
///
/// Stays below the JSON decoder's nesting limit (128) so that documents
/// read from exports can reach it.
pub const MAX_DEPTH: usize = 100;

/// Walks one document and collects the fonts it uses.
///
/// Findings are merged by family alone within a document: a second
/// finding for an existing family adds a usage to the first entry even if
/// its size, weight, or style differ. Cross-document merging in
/// [`FontAggregator`](super::FontAggregator) uses the full identity.
pub struct DocumentAnalyzer {
    scanner: AttributeScanner,
    style_parser: StyleAttributeParser,
    class_parser: ClassNameParser,
    rich_text: RichTextStyleMapper,
}

impl DocumentAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self {
            scanner: AttributeScanner::new(),
            style_parser: StyleAttributeParser::new(),
            class_parser: ClassNameParser::new(),
            rich_text: RichTextStyleMapper::new(),
        }
    }

    /// Analyze a document, returning its fonts in discovery order.
    pub fn analyze(&self, doc: &Document, config: &RunConfig) -> Result<Vec<FontData>> {
        let mut walk = Walk::new(doc, config);
        self.visit_fields(doc.fields(), "", 0, &mut walk)?;

        log::debug!(
            "Document {}: {} fonts from {} findings",
            doc.id(),
            walk.fonts.len(),
            walk.finding_count
        );
        Ok(walk.fonts)
    }

    fn visit_fields(
        &self,
        fields: &[(String, Node)],
        path: &str,
        depth: usize,
        walk: &mut Walk<'_>,
    ) -> Result<()> {
        for (name, value) in fields {
            // System fields (_id, _type, _key, _rev, ...) carry no content
            if name.starts_with('_') {
                continue;
            }
            let child_path = if path.is_empty() {
                name.clone()
            } else {
                format!("{}.{}", path, name)
            };
            self.visit(value, &child_path, name, depth, walk)?;
        }
        Ok(())
    }

    fn visit(
        &self,
        node: &Node,
        path: &str,
        field_name: &str,
        depth: usize,
        walk: &mut Walk<'_>,
    ) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(Error::Malformed(format!(
                "nesting exceeds {} levels at {}",
                MAX_DEPTH, path
            )));
        }

        match node {
            Node::String(text) => {
                self.scan_string(text, path, field_name, walk);
                Ok(())
            }
            Node::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, i);
                    self.visit(item, &item_path, field_name, depth + 1, walk)?;
                }
                Ok(())
            }
            Node::Map(fields) => {
                if walk.config.extract_from_rich_text && RichTextStyleMapper::is_block(node) {
                    for finding in self.rich_text.map_block(node, path) {
                        walk.record(finding);
                    }
                    return Ok(());
                }
                self.visit_fields(fields, path, depth + 1, walk)
            }
            Node::Null | Node::Bool(_) | Node::Number(_) => Ok(()),
        }
    }

    fn scan_string(&self, text: &str, path: &str, field_name: &str, walk: &mut Walk<'_>) {
        let config = walk.config;
        if !config.target_fields.matches(field_name) {
            return;
        }

        if config.include_inline_styles {
            for style in self.scanner.style_attributes(text) {
                let props = self.style_parser.parse(style);
                walk.record(StyleFinding::new(props, path, text));
            }
        }

        if config.include_css_classes {
            for classes in self.scanner.class_attributes(text) {
                let props = self.class_parser.parse(classes);
                walk.record(StyleFinding::new(props, path, text));
            }
        }
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Running state for one document.
struct Walk<'a> {
    doc: &'a Document,
    config: &'a RunConfig,
    fonts: Vec<FontData>,
    by_family: HashMap<String, usize>,
    finding_count: usize,
}

impl<'a> Walk<'a> {
    fn new(doc: &'a Document, config: &'a RunConfig) -> Self {
        Self {
            doc,
            config,
            fonts: Vec::new(),
            by_family: HashMap::new(),
            finding_count: 0,
        }
    }

    fn record(&mut self, finding: StyleFinding) {
        let Some(family) = finding.properties.family_name().map(str::to_string) else {
            return;
        };
        self.finding_count += 1;

        let usage = UsageRecord::new(
            self.doc.id(),
            self.doc.doc_type(),
            finding.field_path,
            &finding.content,
        );

        if let Some(&idx) = self.by_family.get(&family) {
            self.fonts[idx].add_usage(usage);
        } else if let Some(font) = FontData::from_properties(finding.properties, usage) {
            self.by_family.insert(family, self.fonts.len());
            self.fonts.push(font);
        }
    }
}
