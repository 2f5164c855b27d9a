//! # Document Nodes
//!
//! The input side of composition: a tree of tagged records produced by an
//! external document parser.
//!
//! A [`Node`] is deliberately loose. The `type` tag drives dispatch, `value`
//! and `children` are shared by most variants, and every other attribute is
//! kept verbatim in [`Node::attrs`]. Renderers that need more structure decode
//! a typed view on demand with [`Node::decode`]; a node that does not fit the
//! view surfaces as [`RenderError::MalformedNode`] at that point, never
//! earlier.
//!
//! Nodes are read-only during composition. The engine never mutates them.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::RenderError;

/// A single node of a parsed document tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// The type tag used to select a renderer.
    ///
    /// Empty for untagged records such as definition-list items.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub node_type: String,

    /// Opaque display payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Ordered child nodes, for container-like variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,

    /// Every other attribute, preserved as-is.
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl Node {
    /// Create an empty node with the given type tag.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    /// Create a `text` node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new("text").with_value(value)
    }

    /// Set the display payload.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the child sequence.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    /// Set a variant-specific attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// The child sequence, or an empty slice when the node has none.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Look up a variant-specific attribute.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Whether the node carries no type tag.
    pub fn is_untagged(&self) -> bool {
        self.node_type.is_empty()
    }

    /// Parse a node tree from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a node tree from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// The raw serialized form, as shown by diagnostic elements.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }

    /// Decode a typed view of this node.
    ///
    /// The view sees `type`, `value` and the attributes, but not `children`;
    /// renderers read those through [`Node::children`]. Any mismatch between
    /// the node and `T` (a missing required attribute, an attribute of the
    /// wrong shape) is reported as [`RenderError::MalformedNode`] tagged with
    /// this node's type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, RenderError> {
        let mut fields = self.attrs.clone();
        if !self.node_type.is_empty() {
            fields.insert("type".to_string(), Value::String(self.node_type.clone()));
        }
        if let Some(value) = &self.value {
            fields.insert("value".to_string(), Value::String(value.clone()));
        }
        T::deserialize(Value::Object(fields))
            .map_err(|e| RenderError::malformed(&self.node_type, e.to_string()))
    }
}
