//! Testing utilities for folio.
//!
//! This module provides renderers that make it easier to test registries,
//! overrides and composition policies.
//!
//! # Features
//!
//! - [`RecordingRenderer`]: Records the tag of every node it renders
//! - [`CountingRenderer`]: Counts invocations
//! - [`FailingRenderer`]: Always fails with a chosen error
//! - [`ConstRenderer`]: Always returns the same element

use folio_core::{Composer, Element, Node, RenderError, Renderer};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Recording Renderer
// ============================================================================

/// A renderer that records the tag of every node it renders, then composes
/// the node's children into a fragment.
///
/// Clones share the same record, so one can be registered while the other
/// is inspected.
///
/// # Example
///
/// ```rust
/// use folio_core::{Node, Registry, RendererMap};
/// use folio_std::testing::RecordingRenderer;
///
/// let recorder = RecordingRenderer::new();
/// let registry = Registry::from_map(
///     RendererMap::new()
///         .with("outer", recorder.clone())
///         .with("inner", recorder.clone()),
/// );
///
/// let node = Node::new("outer").with_children(vec![Node::new("inner")]);
/// registry.composer().compose(&node).unwrap();
/// assert_eq!(recorder.visited(), vec!["outer", "inner"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingRenderer {
    /// Create a new recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags rendered so far, in dispatch order.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    /// Get the number of recorded renders.
    pub fn count(&self) -> usize {
        self.visited.lock().unwrap().len()
    }

    /// Clear the record.
    pub fn clear(&self) {
        self.visited.lock().unwrap().clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        self.visited.lock().unwrap().push(node.node_type.clone());
        cx.compose_fragment(node.children())
    }
}

// ============================================================================
// Counting Renderer
// ============================================================================

/// A renderer that counts how many times it was invoked and renders nothing.
#[derive(Debug, Clone, Default)]
pub struct CountingRenderer {
    count: Arc<AtomicUsize>,
}

impl CountingRenderer {
    /// Create a new counting renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Renderer for CountingRenderer {
    fn render(&self, _node: &Node, _cx: &Composer<'_>) -> Result<Element, RenderError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(Element::Empty)
    }
}

// ============================================================================
// Failing Renderer
// ============================================================================

/// The error raised by [`FailingRenderer::new`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InjectedFailure(pub String);

#[derive(Debug, Clone)]
enum Failure {
    Renderer(String),
    Malformed(String),
}

/// A renderer that always fails.
#[derive(Debug, Clone)]
pub struct FailingRenderer {
    failure: Failure,
    calls: Arc<AtomicUsize>,
}

impl FailingRenderer {
    /// Fail every render with [`RenderError::Renderer`] carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            failure: Failure::Renderer(message.into()),
            calls: Arc::default(),
        }
    }

    /// Report every node as malformed, from both `render` and `validate`.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self {
            failure: Failure::Malformed(reason.into()),
            calls: Arc::default(),
        }
    }

    /// Get the number of times `render` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn error(&self, node: &Node) -> RenderError {
        match &self.failure {
            Failure::Renderer(message) => {
                RenderError::renderer(&node.node_type, InjectedFailure(message.clone()))
            }
            Failure::Malformed(reason) => RenderError::malformed(&node.node_type, reason.clone()),
        }
    }
}

impl Renderer for FailingRenderer {
    fn render(&self, node: &Node, _cx: &Composer<'_>) -> Result<Element, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error(node))
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        match self.failure {
            Failure::Malformed(_) => Err(self.error(node)),
            Failure::Renderer(_) => Ok(()),
        }
    }
}

// ============================================================================
// Const Renderer
// ============================================================================

/// A renderer that ignores its node and returns a fixed element.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstRenderer(pub Element);

impl ConstRenderer {
    /// Always return the text leaf `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self(Element::text(text))
    }
}

impl Renderer for ConstRenderer {
    fn render(&self, _node: &Node, _cx: &Composer<'_>) -> Result<Element, RenderError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ComposeOptions, Hardening, Registry, RendererMap};

    #[test]
    fn test_recording_renderer_order() {
        let recorder = RecordingRenderer::new();
        let registry = Registry::from_map(
            RendererMap::new()
                .with("a", recorder.clone())
                .with("b", recorder.clone())
                .with("c", recorder.clone()),
        );
        let node = Node::new("a").with_children(vec![
            Node::new("b").with_children(vec![Node::new("c")]),
            Node::new("c"),
        ]);

        registry.composer().compose(&node).unwrap();
        assert_eq!(recorder.visited(), vec!["a", "b", "c", "c"]);
        assert_eq!(recorder.count(), 4);

        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_counting_renderer() {
        let counter = CountingRenderer::new();
        let registry = Registry::from_map(RendererMap::new().with("x", counter.clone()));

        registry.composer().compose_many(&[Node::new("x"), Node::new("x")]).unwrap();
        assert_eq!(counter.count(), 2);

        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_failing_renderer() {
        let failing = FailingRenderer::new("boom");
        let registry = Registry::from_map(RendererMap::new().with("x", failing.clone()));

        let err = registry.composer().compose(&Node::new("x")).unwrap_err();
        assert_eq!(err.to_string(), "renderer for `x` failed: boom");
        assert_eq!(failing.calls(), 1);
    }

    #[test]
    fn test_malformed_failure_is_caught_by_validation() {
        let failing = FailingRenderer::malformed("missing field `value`");
        let registry = Registry::from_map(RendererMap::new().with("x", failing.clone()));
        let cx = registry.composer_with(ComposeOptions::default().with_hardening(Hardening::VALIDATE));

        assert!(cx.compose(&Node::new("x")).unwrap().is_diagnostic());
        assert_eq!(failing.calls(), 0);
    }
}
