//! Read-only schema content
//!
//! JSON schema documents are parsed into an immutable [`SchemaNode`] tree.
//! Objects keep document order so rules see directives in the order they
//! were written.

use crate::error::Result;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fmt;
use url::Url;

/// Scalar leaf of a schema tree
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// JSON null
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number
    Number(serde_json::Number),
    /// JSON string
    String(String),
}

/// A node in a parsed schema document
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Object with named children, in document order
    Object(IndexMap<String, SchemaNode>),
    /// Array of nodes
    Array(Vec<SchemaNode>),
    /// Scalar value
    Scalar(Scalar),
    /// `{"$ref": "..."}` reference to another schema
    Reference(String),
}

impl SchemaNode {
    /// Parse a node from JSON text
    pub fn from_str(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Ok(Self::from_json(&value))
    }

    /// Convert a JSON value into a schema node
    pub fn from_json(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => SchemaNode::Scalar(Scalar::Null),
            JsonValue::Bool(b) => SchemaNode::Scalar(Scalar::Bool(*b)),
            JsonValue::Number(n) => SchemaNode::Scalar(Scalar::Number(n.clone())),
            JsonValue::String(s) => SchemaNode::Scalar(Scalar::String(s.clone())),
            JsonValue::Array(items) => SchemaNode::Array(items.iter().map(Self::from_json).collect()),
            JsonValue::Object(map) => {
                if map.len() == 1 {
                    if let Some(JsonValue::String(target)) = map.get("$ref") {
                        return SchemaNode::Reference(target.clone());
                    }
                }
                SchemaNode::Object(
                    map.iter()
                        .map(|(k, v)| (k.clone(), Self::from_json(v)))
                        .collect(),
                )
            }
        }
    }

    /// Convert back into a JSON value
    pub fn to_json(&self) -> JsonValue {
        match self {
            SchemaNode::Scalar(Scalar::Null) => JsonValue::Null,
            SchemaNode::Scalar(Scalar::Bool(b)) => JsonValue::Bool(*b),
            SchemaNode::Scalar(Scalar::Number(n)) => JsonValue::Number(n.clone()),
            SchemaNode::Scalar(Scalar::String(s)) => JsonValue::String(s.clone()),
            SchemaNode::Array(items) => JsonValue::Array(items.iter().map(|n| n.to_json()).collect()),
            SchemaNode::Reference(target) => serde_json::json!({ "$ref": target }),
            SchemaNode::Object(map) => JsonValue::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }

    /// Get a direct child of an object node
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        match self {
            SchemaNode::Object(map) => map.get(name),
            _ => None,
        }
    }

    /// The `properties` child, if present
    pub fn properties(&self) -> Option<&SchemaNode> {
        self.get("properties")
    }

    /// Depth-first search for the first value stored under `name`.
    ///
    /// At each object the entries are visited in order; a matching key wins
    /// before its value is descended into.
    pub fn find_value(&self, name: &str) -> Option<&SchemaNode> {
        match self {
            SchemaNode::Object(map) => {
                for (key, value) in map {
                    if key == name {
                        return Some(value);
                    }
                    if let Some(found) = value.find_value(name) {
                        return Some(found);
                    }
                }
                None
            }
            SchemaNode::Array(items) => items.iter().find_map(|item| item.find_value(name)),
            _ => None,
        }
    }

    /// Items of an array node (empty for any other node)
    pub fn elements(&self) -> &[SchemaNode] {
        match self {
            SchemaNode::Array(items) => items,
            _ => &[],
        }
    }

    /// Keys of an object node, in document order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        let map = match self {
            SchemaNode::Object(map) => Some(map),
            _ => None,
        };
        map.into_iter().flat_map(|m| m.keys().map(|k| k.as_str()))
    }

    /// String value of a scalar string node
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SchemaNode::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Check if this is an object node
    pub fn is_object(&self) -> bool {
        matches!(self, SchemaNode::Object(_))
    }

    /// Check if this is an array node
    pub fn is_array(&self) -> bool {
        matches!(self, SchemaNode::Array(_))
    }
}

impl fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// A loaded schema document
#[derive(Debug, Clone)]
pub struct Schema {
    /// Where the schema was loaded from
    pub id: Option<Url>,
    /// Parsed content
    content: SchemaNode,
}

impl Schema {
    /// Create a schema from parsed content
    pub fn new(id: Option<Url>, content: SchemaNode) -> Self {
        Self { id, content }
    }

    /// Parse a schema without a source location
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(Self::new(None, SchemaNode::from_str(json)?))
    }

    /// Root content node
    pub fn content(&self) -> &SchemaNode {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_order_preserved() {
        let node = SchemaNode::from_str(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
        let names: Vec<&str> = node.field_names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reference_node() {
        let node = SchemaNode::from_str(r##"{"$ref": "#/definitions/address"}"##).unwrap();
        assert!(matches!(&node, SchemaNode::Reference(t) if t == "#/definitions/address"));
        assert!(!node.is_object());

        // $ref alongside other keywords stays an object
        let node = SchemaNode::from_str(r#"{"$ref": "a.json", "title": "A"}"#).unwrap();
        assert!(node.is_object());
    }

    #[test]
    fn test_properties_accessor() {
        let node = SchemaNode::from_str(
            r#"{"type": "object", "properties": {"name": {"type": "string"}}}"#,
        )
        .unwrap();
        let props = node.properties().unwrap();
        assert_eq!(
            props.get("name").and_then(|n| n.get("type")).and_then(|t| t.as_str()),
            Some("string")
        );
        assert!(node.get("missing").is_none());
        assert!(props.get("name").unwrap().properties().is_none());
    }

    #[test]
    fn test_find_value_depth_first() {
        let node = SchemaNode::from_str(
            r#"{"outer": {"target": {"id": 1}}, "target": {"id": 2}}"#,
        )
        .unwrap();
        let found = node.find_value("target").unwrap();
        assert_eq!(found.to_json(), serde_json::json!({"id": 1}));
        assert!(node.find_value("nothing").is_none());
    }

    #[test]
    fn test_elements_of_non_array() {
        let node = SchemaNode::from_str(r#"{"a": 1}"#).unwrap();
        assert!(node.elements().is_empty());
        assert_eq!(node.field_names().count(), 1);

        let scalar = SchemaNode::from_str("42").unwrap();
        assert_eq!(scalar.field_names().count(), 0);
    }

    #[test]
    fn test_json_roundtrip() {
        let json = serde_json::json!({"ignoredFields": [{"secret": {}}], "n": null, "ok": true});
        let node = SchemaNode::from_json(&json);
        assert_eq!(node.to_json(), json);
    }

    #[test]
    fn test_schema_from_str() {
        let schema = Schema::from_str(r#"{"title": "Person"}"#).unwrap();
        assert!(schema.id.is_none());
        assert_eq!(schema.content().get("title").and_then(|t| t.as_str()), Some("Person"));
        assert!(Schema::from_str("{not json").is_err());
    }
}
