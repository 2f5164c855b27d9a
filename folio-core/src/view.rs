//! Typed views over API-documentation nodes.
//!
//! These are decoded from a [`Node`] with [`Node::decode`] by the renderers
//! that need them. Nullable attributes are plain `Option`s and render as
//! empty when absent. Child sequences stay on the node.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::node::Node;

/// A callable signature: display name and parameters.
///
/// The documentation body is the node's own children.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignatureView {
    /// Display name of the callable.
    pub value: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Node>,
}

/// An inline directive such as ``:py:func:`abc` ``.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectiveView {
    /// Optional domain, e.g. `py`.
    pub domain: Option<String>,
    /// Optional role, e.g. `func`.
    pub role: Option<String>,
    /// Literal content.
    pub value: String,
}

/// One term/description pair of a definition list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefListItem {
    /// The term.
    pub dt: Node,
    /// The description body.
    #[serde(default)]
    pub dd: Vec<Node>,
}

/// A definition list.
#[derive(Debug, Clone, PartialEq)]
pub struct DefListView {
    /// Items in document order.
    pub children: Vec<DefListItem>,
}

impl DefListView {
    /// Decode every child of `node` as a term/description pair.
    ///
    /// A malformed item is reported against the list's own type tag.
    pub fn from_node(node: &Node) -> Result<Self, RenderError> {
        let children = node
            .children()
            .iter()
            .map(|item| {
                item.decode::<DefListItem>().map_err(|err| match err {
                    RenderError::MalformedNode { reason, .. } => {
                        RenderError::malformed(&node.node_type, reason)
                    }
                    other => other,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { children })
    }
}

/// How a parameter binds its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterKind {
    /// May only be passed positionally.
    PositionalOnly,
    /// May be passed positionally or by keyword.
    PositionalOrKeyword,
    /// Collects extra positional arguments (`*args`).
    VarPositional,
    /// May only be passed by keyword.
    KeywordOnly,
    /// Collects extra keyword arguments (`**kwargs`).
    VarKeyword,
}

/// The default value of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDefault", into = "RawDefault")]
pub enum DefaultValue {
    /// The parameter has no default.
    #[default]
    Empty,
    /// A literal default, already rendered to text.
    Literal {
        /// Type tag of the literal.
        kind: String,
        /// Display form of the literal.
        data: String,
    },
}

impl DefaultValue {
    /// Whether the parameter has no default.
    pub fn is_empty(&self) -> bool {
        matches!(self, DefaultValue::Empty)
    }

    /// The display form of the default, if any.
    pub fn data(&self) -> Option<&str> {
        match self {
            DefaultValue::Empty => None,
            DefaultValue::Literal { data, .. } => Some(data),
        }
    }
}

// Wire form: `{"type": "Empty"}` or `{"type": <tag>, "data": <text>}`.
#[derive(Serialize, Deserialize)]
struct RawDefault {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<String>,
}

impl TryFrom<RawDefault> for DefaultValue {
    type Error = String;

    fn try_from(raw: RawDefault) -> Result<Self, Self::Error> {
        if raw.kind == "Empty" {
            return Ok(DefaultValue::Empty);
        }
        match raw.data {
            Some(data) => Ok(DefaultValue::Literal {
                kind: raw.kind,
                data,
            }),
            None => Err(format!("default of type `{}` carries no data", raw.kind)),
        }
    }
}

impl From<DefaultValue> for RawDefault {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Empty => RawDefault {
                kind: "Empty".to_string(),
                data: None,
            },
            DefaultValue::Literal { kind, data } => RawDefault {
                kind,
                data: Some(data),
            },
        }
    }
}

/// A structured description of one callable parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterNode {
    /// Binding kind.
    pub kind: ParameterKind,
    /// Parameter name as written in the signature.
    pub name: String,
    /// Default value.
    #[serde(default)]
    pub default: DefaultValue,
    /// Display name used by detailed views.
    #[serde(default)]
    pub param: Option<String>,
    /// Type annotation.
    #[serde(default)]
    pub type_: Option<String>,
    /// Description body.
    #[serde(default)]
    pub desc: Vec<Node>,
}

/// The detailed form of one parameter, as listed in a parameters section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParamView {
    /// Display name.
    pub param: String,
    /// Type annotation.
    #[serde(default)]
    pub type_: Option<String>,
    /// Description body.
    #[serde(default)]
    pub desc: Vec<Node>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        Node::from_value(value).unwrap()
    }

    #[test]
    fn test_parameter_node_decodes() {
        let param = node(json!({
            "type": "ParameterNode",
            "kind": "VAR_POSITIONAL",
            "name": "args",
            "default": {"type": "Empty"}
        }))
        .decode::<ParameterNode>()
        .unwrap();

        assert_eq!(param.kind, ParameterKind::VarPositional);
        assert_eq!(param.name, "args");
        assert!(param.default.is_empty());
        assert!(param.type_.is_none());
        assert!(param.desc.is_empty());
    }

    #[test]
    fn test_literal_default() {
        let param = node(json!({
            "kind": "POSITIONAL_OR_KEYWORD",
            "name": "axis",
            "default": {"type": "Int", "data": "0"}
        }))
        .decode::<ParameterNode>()
        .unwrap();

        assert_eq!(param.default.data(), Some("0"));
        assert_eq!(
            param.default,
            DefaultValue::Literal {
                kind: "Int".into(),
                data: "0".into()
            }
        );
    }

    #[test]
    fn test_literal_default_without_data_is_malformed() {
        let err = node(json!({
            "type": "ParameterNode",
            "kind": "KEYWORD_ONLY",
            "name": "axis",
            "default": {"type": "Int"}
        }))
        .decode::<ParameterNode>()
        .unwrap_err();

        assert!(matches!(err, RenderError::MalformedNode { .. }));
    }

    #[test]
    fn test_directive_nullable_fields() {
        let view = node(json!({
            "type": "directive",
            "domain": null,
            "value": "abc"
        }))
        .decode::<DirectiveView>()
        .unwrap();

        assert_eq!(view.domain, None);
        assert_eq!(view.role, None);
        assert_eq!(view.value, "abc");
    }

    #[test]
    fn test_def_list_items() {
        let list = node(json!({
            "type": "DefList",
            "children": [
                {"dt": {"type": "text", "value": "Term"}, "dd": [{"type": "text", "value": "Desc"}]}
            ]
        }));
        let view = DefListView::from_node(&list).unwrap();

        assert_eq!(view.children.len(), 1);
        assert_eq!(view.children[0].dt.value.as_deref(), Some("Term"));
        assert_eq!(view.children[0].dd[0].value.as_deref(), Some("Desc"));
    }

    #[test]
    fn test_def_list_bad_item_is_reported_on_the_list() {
        let list = node(json!({
            "type": "DefList",
            "children": [{"dd": []}]
        }));
        match DefListView::from_node(&list).unwrap_err() {
            RenderError::MalformedNode { node_type, reason } => {
                assert_eq!(node_type, "DefList");
                assert!(reason.contains("dt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
