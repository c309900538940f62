//! Dynamic document tree.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

/// A node in a schemaless content document.
///
/// Maps keep their fields in source order, so traversal and therefore
/// font discovery order follow the document as it was written.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// Absent or explicit null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Numeric value
    Number(f64),

    /// String value
    String(String),

    /// Ordered list of nodes
    List(Vec<Node>),

    /// Record of named fields in source order
    Map(Vec<(String, Node)>),
}

impl Node {
    /// Build a map node from `(name, node)` pairs.
    pub fn map<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Map(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list node.
    pub fn list<I: IntoIterator<Item = Node>>(items: I) -> Self {
        Node::List(items.into_iter().collect())
    }

    /// Build a string node.
    pub fn string(value: impl Into<String>) -> Self {
        Node::String(value.into())
    }

    /// Look up a field of a map node.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Get the string value, if this is a string node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the elements, if this is a list node.
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the fields, if this is a map node.
    pub fn as_map(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Map(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get a string-valued field of a map node.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Node::as_str)
    }

    /// Check if this node is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Short name of the node variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::List(_) => "list",
            Node::Map(_) => "map",
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::List(items.into_iter().map(Node::from).collect()),
            Value::Object(fields) => {
                Node::Map(fields.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => serializer.serialize_f64(*n),
            Node::String(s) => serializer.serialize_str(s),
            Node::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Map(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_preserves_field_order() {
        let node: Node = serde_json::from_str(r#"{"zeta": 1, "alpha": "a", "mid": null}"#).unwrap();
        let names: Vec<&str> = node
            .as_map()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_get_and_str_field() {
        let node = Node::map([("_id", Node::from("doc-1")), ("count", Node::Number(3.0))]);
        assert_eq!(node.str_field("_id"), Some("doc-1"));
        assert_eq!(node.str_field("count"), None);
        assert!(node.get("missing").is_none());
        assert!(Node::string("x").get("_id").is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Node::Null.kind(), "null");
        assert_eq!(Node::list([]).kind(), "list");
        assert_eq!(Node::map(Vec::<(String, Node)>::new()).kind(), "map");
    }

    #[test]
    fn test_serialize_back_to_json() {
        let node = Node::map([
            ("title", Node::from("Hello")),
            ("tags", Node::list([Node::from("a"), Node::Bool(true)])),
        ]);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"title":"Hello","tags":["a",true]}"#);
    }
}
