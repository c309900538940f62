//! Rich text block style and mark mapping.
//!
//! Block nodes look like:
//!
//! ```json
//! {"_type": "block", "style": "h2", "children": [
//!     {"_type": "span", "text": "Hello ", "marks": []},
//!     {"_type": "span", "text": "world", "marks": ["strong"]}
//! ]}
//! ```
//!
//! Block styles and marks carry no font information of their own, so they
//! are mapped to synthetic families (`heading`, `body-bold`, ...) that
//! stand in for whatever the rendering layer assigns.

use crate::model::{FontProperties, Node};

use super::StyleFinding;

/// Value of `_type` that marks a rich text block.
pub const BLOCK_TYPE: &str = "block";

/// Maps rich text blocks to synthetic font findings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RichTextStyleMapper;

impl RichTextStyleMapper {
    /// Create a new mapper.
    pub fn new() -> Self {
        Self
    }

    /// Check if a node is a rich text block.
    pub fn is_block(node: &Node) -> bool {
        node.str_field("_type") == Some(BLOCK_TYPE)
    }

    /// Map one block to findings.
    ///
    /// The block style (if known) yields one finding over the whole block
    /// text at `path`. Each known mark on a child yields one finding over
    /// that child's text at `<path>.children[i].marks`.
    pub fn map_block(&self, block: &Node, path: &str) -> Vec<StyleFinding> {
        let children = block
            .get("children")
            .and_then(Node::as_list)
            .unwrap_or(&[]);
        let mut findings = Vec::new();

        if let Some(props) = block.str_field("style").and_then(block_style) {
            let text: String = children.iter().filter_map(child_text).collect();
            findings.push(StyleFinding::new(props, path, text));
        }

        for (i, child) in children.iter().enumerate() {
            let Some(marks) = child.get("marks").and_then(Node::as_list) else {
                continue;
            };
            let text = child_text(child).unwrap_or_default();
            let mark_path = format!("{}.children[{}].marks", path, i);

            for props in marks.iter().filter_map(Node::as_str).filter_map(mark_style) {
                findings.push(StyleFinding::new(props, mark_path.clone(), text));
            }
        }

        log::debug!("Block at {} produced {} findings", path, findings.len());
        findings
    }
}

fn child_text(child: &Node) -> Option<&str> {
    child.str_field("text")
}

/// Synthetic font for a block style tag.
pub fn block_style(style: &str) -> Option<FontProperties> {
    let heading = |size: &str, weight: &str| {
        Some(FontProperties::family("heading").with_size(size).with_weight(weight))
    };

    match style {
        "h1" => heading("2xl", "bold"),
        "h2" => heading("xl", "bold"),
        "h3" => heading("lg", "semibold"),
        "h4" => heading("base", "semibold"),
        "h5" => heading("sm", "medium"),
        "h6" => heading("xs", "medium"),
        "blockquote" => Some(FontProperties::family("serif").with_style("italic")),
        "normal" => Some(FontProperties::family("body").with_size("base")),
        _ => None,
    }
}

/// Synthetic font for an inline mark.
pub fn mark_style(mark: &str) -> Option<FontProperties> {
    match mark {
        "strong" => Some(FontProperties::family("body-bold").with_weight("bold")),
        "em" => Some(FontProperties::family("body-italic").with_style("italic")),
        "underline" => Some(FontProperties::family("body-underline").with_decoration("underline")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, marks: &[&str]) -> Node {
        Node::map([
            ("_type", Node::from("span")),
            ("text", Node::from(text)),
            ("marks", Node::list(marks.iter().map(|m| Node::from(*m)))),
        ])
    }

    fn block(style: &str, children: Vec<Node>) -> Node {
        Node::map([
            ("_type", Node::from("block")),
            ("style", Node::from(style)),
            ("children", Node::List(children)),
        ])
    }

    #[test]
    fn test_h1_block() {
        let node = Node::map([
            ("_type", Node::from("block")),
            ("style", Node::from("h1")),
            ("children", Node::list([Node::map([("text", Node::from("Hi"))])])),
        ]);
        let findings = RichTextStyleMapper::new().map_block(&node, "body[0]");

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.properties.font_family.as_deref(), Some("heading"));
        assert_eq!(finding.properties.font_size.as_deref(), Some("2xl"));
        assert_eq!(finding.properties.font_weight.as_deref(), Some("bold"));
        assert_eq!(finding.content, "Hi");
        assert_eq!(finding.field_path, "body[0]");
    }

    #[test]
    fn test_marks_use_child_text() {
        let node = block("normal", vec![span("plain ", &[]), span("x", &["strong", "em"])]);
        let findings = RichTextStyleMapper::new().map_block(&node, "body[2]");

        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0].properties.font_family.as_deref(), Some("body"));
        assert_eq!(findings[0].content, "plain x");

        assert_eq!(findings[1].properties.font_family.as_deref(), Some("body-bold"));
        assert_eq!(findings[1].content, "x");
        assert_eq!(findings[1].field_path, "body[2].children[1].marks");

        assert_eq!(findings[2].properties.font_family.as_deref(), Some("body-italic"));
        assert_eq!(findings[2].properties.font_style.as_deref(), Some("italic"));
        assert_eq!(findings[2].content, "x");
    }

    #[test]
    fn test_unknown_style_and_marks() {
        let node = block("callout", vec![span("x", &["code", "underline", "link-123"])]);
        let findings = RichTextStyleMapper::new().map_block(&node, "body[0]");

        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].properties.font_family.as_deref(),
            Some("body-underline")
        );
        assert_eq!(
            findings[0].properties.text_decoration.as_deref(),
            Some("underline")
        );
    }

    #[test]
    fn test_block_without_style_or_children() {
        let node = Node::map([("_type", Node::from("block"))]);
        assert!(RichTextStyleMapper::new().map_block(&node, "x").is_empty());
    }

    #[test]
    fn test_heading_scale_is_monotonic() {
        let sizes: Vec<String> = ["h1", "h2", "h3", "h4", "h5", "h6"]
            .iter()
            .filter_map(|h| block_style(h))
            .filter_map(|p| p.font_size)
            .collect();
        assert_eq!(sizes, vec!["2xl", "xl", "lg", "base", "sm", "xs"]);
        assert_eq!(
            block_style("blockquote").and_then(|p| p.font_family),
            Some("serif".to_string())
        );
    }

    #[test]
    fn test_is_block() {
        assert!(RichTextStyleMapper::is_block(&block("h1", vec![])));
        assert!(!RichTextStyleMapper::is_block(&span("x", &[])));
    }
}
