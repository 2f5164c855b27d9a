//! Logging wrapper for render observation.

use folio_core::{Composer, Element, Node, RenderError, Renderer};

/// Wraps a renderer so each dispatch and each failure is logged at debug
/// level.
#[derive(Debug, Clone, Default)]
pub struct Logged<R> {
    inner: R,
}

impl<R> Logged<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// The wrapped renderer.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Renderer> Renderer for Logged<R> {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(node_type = %node.node_type, depth = cx.depth(), "rendering node");
        }

        let result = self.inner.render(node, cx);

        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &result {
                tracing::debug!(node_type = %node.node_type, error = %err, "render failed");
            }
        }
        result
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        self.inner.validate(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingRenderer, FailingRenderer};
    use folio_core::{Registry, RendererMap};

    #[test]
    fn test_delegates_render() {
        let counter = CountingRenderer::new();
        let registry = Registry::from_map(RendererMap::new().with("x", Logged::new(counter.clone())));

        let cx = registry.composer();
        cx.compose(&Node::new("x")).unwrap();
        cx.compose(&Node::new("x")).unwrap();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_errors_pass_through() {
        let registry = Registry::from_map(
            RendererMap::new().with("x", Logged::new(FailingRenderer::new("boom"))),
        );
        let err = registry.composer().compose(&Node::new("x")).unwrap_err();
        assert!(matches!(err, RenderError::Renderer { .. }));
    }
}
