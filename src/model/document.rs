//! Document-level types.

use super::Node;
use crate::error::{Error, Result};

/// Field holding the document identifier.
pub const ID_FIELD: &str = "_id";

/// Field holding the document type name.
pub const TYPE_FIELD: &str = "_type";

/// A content document with validated identity fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: String,
    doc_type: String,
    root: Node,
}

impl Document {
    /// Create a document from its identity and top-level fields.
    ///
    /// The identity fields are prepended to the field list so the
    /// document looks the same as one loaded from an export.
    pub fn new<K, I>(id: impl Into<String>, doc_type: impl Into<String>, fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        let id = id.into();
        let doc_type = doc_type.into();
        let mut all = vec![
            (ID_FIELD.to_string(), Node::String(id.clone())),
            (TYPE_FIELD.to_string(), Node::String(doc_type.clone())),
        ];
        all.extend(fields.into_iter().map(|(k, v)| (k.into(), v)));
        Self {
            id,
            doc_type,
            root: Node::Map(all),
        }
    }

    /// Validate a raw node as a document.
    ///
    /// The root must be a map carrying string `_id` and `_type` fields.
    pub fn from_node(node: Node) -> Result<Self> {
        if !matches!(node, Node::Map(_)) {
            return Err(Error::Malformed(format!(
                "document root is a {}, expected a map",
                node.kind()
            )));
        }

        let id = node
            .str_field(ID_FIELD)
            .ok_or_else(|| Error::MissingField(ID_FIELD.to_string()))?
            .to_string();
        let doc_type = node
            .str_field(TYPE_FIELD)
            .ok_or_else(|| Error::MissingField(TYPE_FIELD.to_string()))?
            .to_string();

        Ok(Self {
            id,
            doc_type,
            root: node,
        })
    }

    /// Get the document identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the document type name.
    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Get the root node (always a map).
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Get the top-level fields in source order.
    pub fn fields(&self) -> &[(String, Node)] {
        self.root.as_map().unwrap_or(&[])
    }
}

impl TryFrom<Node> for Document {
    type Error = Error;

    fn try_from(node: Node) -> Result<Self> {
        Document::from_node(node)
    }
}
