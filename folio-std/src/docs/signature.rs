//! Signature renderer.

use folio_core::{Composer, Element, Node, RenderError, Renderer, SignatureView, Tag};

use super::params::as_parameter;

/// Separator placed between consecutive parameters.
pub const PARAMETER_SEPARATOR: &str = ", ";

/// Renders a callable signature.
///
/// Produces a header holding the display name and the parenthesized
/// parameter list, followed by the composed documentation body. Parameters
/// are composed through the registry, so an override of `ParameterNode`
/// changes how they read here too.
#[derive(Debug, Clone, Copy, Default)]
pub struct Signature;

impl Renderer for Signature {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view: SignatureView = node.decode()?;

        let mut header = Tag::new("div")
            .class("signature-header")
            .child(Tag::new("span").class("signature-name").child(view.value))
            .child("(");
        let last = view.parameters.len().saturating_sub(1);
        for (i, param) in view.parameters.iter().enumerate() {
            header = header.child(cx.compose(&as_parameter(param))?);
            if i < last {
                header = header.child(PARAMETER_SEPARATOR);
            }
        }
        header = header.child(")");

        let body = Tag::new("div")
            .class("signature-body")
            .children(cx.compose_children(node)?);

        Ok(Tag::new("div")
            .class("signature")
            .child(header)
            .child(body)
            .into())
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        node.decode::<SignatureView>().map(|_| ())
    }
}
