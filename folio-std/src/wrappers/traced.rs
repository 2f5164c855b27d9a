//! Span-per-render wrapper.

use folio_core::{Composer, Element, Node, RenderError, Renderer};

/// Wraps a renderer so each invocation runs inside a `render` span.
///
/// The span records the renderer's name, the node's tag and the depth, so
/// nested renders show up as nested spans.
///
/// ```rust
/// use folio_core::RendererMap;
/// use folio_std::{docs::Signature, wrappers::Traced};
///
/// let overrides = RendererMap::new().with("signature", Traced::new("signature", Signature));
/// assert!(overrides.contains("signature"));
/// ```
#[derive(Debug, Clone)]
pub struct Traced<R> {
    name: &'static str,
    inner: R,
}

impl<R> Traced<R> {
    /// Wrap `inner`, labelling its spans with `name`.
    pub fn new(name: &'static str, inner: R) -> Self {
        Self { name, inner }
    }

    /// The span label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped renderer.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Renderer> Renderer for Traced<R> {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "render",
            renderer = self.name,
            node_type = %node.node_type,
            depth = cx.depth()
        )
        .entered();

        self.inner.render(node, cx)
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        self.inner.validate(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ConstRenderer, FailingRenderer};
    use folio_core::{Registry, RendererMap};

    #[test]
    fn test_output_is_unchanged() {
        let registry = Registry::from_map(
            RendererMap::new().with("x", Traced::new("x", ConstRenderer::text("same"))),
        );
        let out = registry.composer().compose(&Node::new("x")).unwrap();
        assert_eq!(out, Element::text("same"));
    }

    #[test]
    fn test_validate_is_delegated() {
        let traced = Traced::new("fail", FailingRenderer::malformed("missing field"));
        assert!(traced.validate(&Node::new("x")).unwrap_err().is_malformed());
        assert_eq!(traced.inner().calls(), 0);
    }
}
