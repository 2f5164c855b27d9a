//! Parameter renderers.
//!
//! Two independent layers: [`ParameterNodeRenderer`] formats a single
//! parameter as plain text, and [`Parameters`] composes a sequence of them
//! without separators. Separator placement belongs to whoever lays the
//! parameters out (see [`Signature`](super::Signature)).

use std::borrow::Cow;

use folio_core::{
    Composer, Element, Node, ParamView, ParameterKind, ParameterNode, RenderError, Renderer, Tag,
};

use super::PARAMETER_NODE;

/// Format one parameter the way it reads in a signature.
///
/// `*` marks a variadic positional parameter; a default is appended as
/// `=data` unless the parameter has none.
pub fn format_parameter(param: &ParameterNode) -> String {
    let mut out = String::new();
    if param.kind == ParameterKind::VarPositional {
        out.push('*');
    }
    out.push_str(&param.name);
    if let Some(data) = param.default.data() {
        out.push('=');
        out.push_str(data);
    }
    out
}

/// Parameter entries often arrive without a `type` tag; they are
/// dispatched as [`PARAMETER_NODE`] so overrides of that tag still apply.
pub(crate) fn as_parameter(node: &Node) -> Cow<'_, Node> {
    if node.is_untagged() {
        let mut tagged = node.clone();
        tagged.node_type = PARAMETER_NODE.to_string();
        Cow::Owned(tagged)
    } else {
        Cow::Borrowed(node)
    }
}

/// Renders a `ParameterNode` as a plain text fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterNodeRenderer;

impl Renderer for ParameterNodeRenderer {
    fn render(&self, node: &Node, _cx: &Composer<'_>) -> Result<Element, RenderError> {
        let param: ParameterNode = node.decode()?;
        Ok(Element::text(format_parameter(&param)))
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        node.decode::<ParameterNode>().map(|_| ())
    }
}

/// Renders a `Parameters` container: each child in order, nothing between.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parameters;

impl Renderer for Parameters {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        let params = node
            .children()
            .iter()
            .map(|child| cx.compose(&as_parameter(child)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Tag::new("span").class("parameters").children(params).into())
    }
}

/// How [`Param`] writes the term when the type annotation is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationStyle {
    /// `name` alone.
    #[default]
    OmitWhenAbsent,
    /// `name: ` with an empty annotation.
    AlwaysColon,
}

/// Renders the detailed form of one parameter as a term/description pair.
///
/// The term reads `param: type_`; the description composes each node of
/// `desc` in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Param {
    style: AnnotationStyle,
}

impl Param {
    /// Omit the `": "` separator when there is no annotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always write the `": "` separator, even with no annotation.
    pub fn always_colon() -> Self {
        Self {
            style: AnnotationStyle::AlwaysColon,
        }
    }

    /// The term text for `view` under this renderer's style.
    pub fn term(&self, view: &ParamView) -> String {
        match (&view.type_, self.style) {
            (Some(ty), _) => format!("{}: {}", view.param, ty),
            (None, AnnotationStyle::AlwaysColon) => format!("{}: ", view.param),
            (None, AnnotationStyle::OmitWhenAbsent) => view.param.clone(),
        }
    }
}

impl Renderer for Param {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view: ParamView = node.decode()?;
        let desc = cx.compose_many(&view.desc)?;

        Ok(Element::fragment([
            Tag::new("dt").class("param").child(self.term(&view)).into(),
            Tag::new("dd").children(desc).into(),
        ]))
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        node.decode::<ParamView>().map(|_| ())
    }
}
