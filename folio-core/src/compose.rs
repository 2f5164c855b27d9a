//! # Composition Engine
//!
//! The [`Composer`] turns nodes into elements by dispatching on the node's
//! type tag.
//!
//! # Dispatch
//!
//! 1. Look up the renderer registered for `node.node_type`.
//! 2. If there is none, render the node with the registry's fallback (or
//!    fail, under [`UnknownPolicy::Fail`]).
//! 3. Invoke the renderer with the node and a child composer one level
//!    deeper.
//!
//! The engine never recurses on its own: a renderer decides which children
//! to expand and calls [`Composer::compose`] / [`Composer::compose_many`]
//! for them. Child order is preserved exactly.
//!
//! # Failure
//!
//! By default a renderer error propagates to the caller of the top-level
//! `compose`. [`Hardening`](crate::Hardening) flags turn malformed nodes
//! and failed subtrees into diagnostic elements instead.
//!
//! The composer holds no mutable state. Composing the same node twice
//! against the same registry yields identical output.

use crate::{
    element::Element,
    error::RenderError,
    fallback::diagnostic,
    node::Node,
    options::{ComposeOptions, UnknownPolicy},
    registry::{Registry, RouteResult},
};

/// Dispatches nodes to the renderers of a [`Registry`].
///
/// Cheap to copy; renderers receive one by reference and use it to compose
/// their children.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'r> {
    registry: &'r Registry,
    options: ComposeOptions,
    depth: usize,
}

impl<'r> Composer<'r> {
    /// Create a composer with default options.
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_options(registry, ComposeOptions::default())
    }

    /// Create a composer with the given options.
    pub fn with_options(registry: &'r Registry, options: ComposeOptions) -> Self {
        Self {
            registry,
            options,
            depth: 0,
        }
    }

    /// The registry this composer dispatches through.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// The options in effect.
    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Nesting depth of nodes composed through this composer.
    ///
    /// Zero for the root composer; a renderer invoked for a node at depth
    /// `n` receives a composer at depth `n + 1` for its children.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Compose one node.
    pub fn compose(&self, node: &Node) -> Result<Element, RenderError> {
        match self.dispatch(node) {
            Err(RenderError::UnknownNodeType(tag)) => Err(RenderError::UnknownNodeType(tag)),
            Err(err) if self.options.isolates() => {
                #[cfg(feature = "tracing")]
                {
                    tracing::warn!(
                        node_type = %node.node_type,
                        depth = self.depth,
                        error = %err,
                        "isolating failed subtree"
                    );
                }
                Ok(diagnostic(node, &err))
            }
            result => result,
        }
    }

    /// Compose a sequence of nodes, preserving order.
    pub fn compose_many(&self, nodes: &[Node]) -> Result<Vec<Element>, RenderError> {
        nodes.iter().map(|node| self.compose(node)).collect()
    }

    /// Compose the children of `node`; a node without children yields none.
    pub fn compose_children(&self, node: &Node) -> Result<Vec<Element>, RenderError> {
        self.compose_many(node.children())
    }

    /// Compose a sequence of nodes into a single fragment.
    pub fn compose_fragment(&self, nodes: &[Node]) -> Result<Element, RenderError> {
        self.compose_many(nodes).map(Element::Fragment)
    }

    fn dispatch(&self, node: &Node) -> Result<Element, RenderError> {
        if self.depth >= self.options.max_depth {
            return Err(RenderError::DepthExceeded(self.options.max_depth));
        }
        let nested = self.descend();

        let renderer = match self.registry.route(&node.node_type) {
            RouteResult::Matched(renderer) => renderer,
            RouteResult::NotFound => {
                if self.options.unknown == UnknownPolicy::Fail {
                    return Err(RenderError::UnknownNodeType(node.node_type.clone()));
                }
                #[cfg(feature = "tracing")]
                {
                    tracing::warn!(
                        node_type = %node.node_type,
                        depth = self.depth,
                        "no renderer registered, using fallback"
                    );
                }
                return self.registry.fallback().render(node, &nested);
            }
        };

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(node_type = %node.node_type, depth = self.depth, "dispatching node");
        }

        if self.options.validates() {
            if let Err(err) = renderer.validate(node) {
                if !err.is_malformed() {
                    return Err(err);
                }
                #[cfg(feature = "tracing")]
                {
                    tracing::warn!(node_type = %node.node_type, error = %err, "malformed node");
                }
                return Ok(diagnostic(node, &err));
            }
        }

        renderer.render(node, &nested)
    }

    fn descend(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }
}
