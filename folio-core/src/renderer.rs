//! # Renderers
//!
//! A renderer turns one [`Node`] into one [`Element`]. Container renderers
//! call back into the [`Composer`] they are handed to expand their children;
//! that call re-enters dispatch with the same registry, which makes
//! renderers co-recursive with the engine.
//!
//! Renderers are stored behind `Arc<dyn Renderer>` in a
//! [`Registry`](crate::Registry), shared read-only across the walk and
//! across threads, so they must be `Send + Sync` and should be pure.
//!
//! # Usage Patterns
//!
//! 1. **Unit struct**: `impl Renderer for Signature`
//! 2. **Function or closure**: `from_fn(|node, cx| ...)`
//! 3. **Attribute macro**: `#[folio::renderer(tag = "...")]` (facade `macros` feature)

use std::sync::Arc;

use crate::{compose::Composer, element::Element, error::RenderError, node::Node};

/// A shared, type-erased renderer as stored in a registry.
pub type SharedRenderer = Arc<dyn Renderer>;

/// Transforms a node into a presentation element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot render document nodes",
    label = "missing `Renderer` implementation",
    note = "Implement `Renderer`, or wrap a function with `folio_core::from_fn`."
)]
pub trait Renderer: Send + Sync + 'static {
    /// Render `node`, using `cx` to compose any children.
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError>;

    /// Check that `node` carries what [`render`](Renderer::render) needs.
    ///
    /// Only called when the composer runs with
    /// [`Hardening::VALIDATE`](crate::Hardening::VALIDATE). The default
    /// accepts every node.
    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        let _ = node;
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for Arc<R> {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        (**self).render(node, cx)
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        (**self).validate(node)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        (**self).render(node, cx)
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        (**self).validate(node)
    }
}

/// A renderer backed by a function or closure.
///
/// Created with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnRenderer<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnRenderer<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRenderer").finish_non_exhaustive()
    }
}

/// Wrap a function or closure as a [`Renderer`].
///
/// # Example
///
/// ```rust
/// use folio_core::{Tag, from_fn};
///
/// let strong = from_fn(|node, cx| {
///     Ok(Tag::new("strong").children(cx.compose_children(node)?).into())
/// });
/// # let _ = strong;
/// ```
pub fn from_fn<F>(f: F) -> FnRenderer<F>
where
    F: Fn(&Node, &Composer<'_>) -> Result<Element, RenderError> + Send + Sync + 'static,
{
    FnRenderer { f }
}

impl<F> Renderer for FnRenderer<F>
where
    F: Fn(&Node, &Composer<'_>) -> Result<Element, RenderError> + Send + Sync + 'static,
{
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        (self.f)(node, cx)
    }
}
