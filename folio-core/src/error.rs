//! Error types for folio.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RenderError`] - Errors raised while composing a node tree
//! - [`RegistryError`] - Errors raised while building a renderer map

use thiserror::Error;

/// A boxed error type for renderer-specific failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during composition.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No renderer is registered for the node's type tag.
    ///
    /// Only surfaced when the composer is configured with
    /// [`UnknownPolicy::Fail`](crate::UnknownPolicy::Fail); otherwise the
    /// fallback renderer handles the node.
    #[error("no renderer registered for node type `{0}`")]
    UnknownNodeType(String),

    /// A renderer found the node missing a required attribute or carrying
    /// one of the wrong shape.
    #[error("malformed `{node_type}` node: {reason}")]
    MalformedNode {
        /// Type tag of the offending node.
        node_type: String,
        /// Human readable description of what was wrong.
        reason: String,
    },

    /// Composition recursed deeper than the configured limit.
    #[error("composition exceeded maximum depth of {0}")]
    DepthExceeded(usize),

    /// A renderer failed for a reason of its own.
    #[error("renderer for `{node_type}` failed: {source}")]
    Renderer {
        /// Type tag of the node being rendered.
        node_type: String,
        /// The underlying failure.
        #[source]
        source: BoxError,
    },
}

impl RenderError {
    /// Create a [`RenderError::MalformedNode`].
    pub fn malformed(node_type: impl Into<String>, reason: impl Into<String>) -> Self {
        RenderError::MalformedNode {
            node_type: node_type.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an arbitrary error raised by the renderer for `node_type`.
    pub fn renderer(node_type: impl Into<String>, source: impl Into<BoxError>) -> Self {
        RenderError::Renderer {
            node_type: node_type.into(),
            source: source.into(),
        }
    }

    /// Whether this error describes a malformed node.
    pub fn is_malformed(&self) -> bool {
        matches!(self, RenderError::MalformedNode { .. })
    }
}

/// Errors that can occur while building a renderer map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same tag was inserted twice into a strict builder.
    #[error("renderer already registered for tag: {0}")]
    DuplicateTag(String),
}
