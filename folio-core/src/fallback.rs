//! Diagnostic output for nodes that cannot be rendered.

use crate::{
    compose::Composer,
    element::{DIAGNOSTIC_CLASS, Element, Tag},
    error::RenderError,
    node::Node,
    renderer::Renderer,
};

/// The default fallback renderer.
///
/// Emits an inline `code` element marked with [`DIAGNOSTIC_CLASS`] that shows
/// the node's raw serialized form, followed by its composed children.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unimplemented;

impl Renderer for Unimplemented {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        Ok(diagnostic_tag(node)
            .children(cx.compose_children(node)?)
            .into())
    }
}

/// A diagnostic element for a node that failed with `error`.
///
/// Unlike [`Unimplemented`] this never recurses, so it cannot fail.
pub fn diagnostic(node: &Node, error: &RenderError) -> Element {
    diagnostic_tag(node).attr("title", error.to_string()).into()
}

fn diagnostic_tag(node: &Node) -> Tag {
    Tag::new("code")
        .class(DIAGNOSTIC_CLASS)
        .attr("data-type", node.node_type.clone())
        .child(Tag::new("span").child(node.to_json_string()))
}
