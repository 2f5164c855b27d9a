//! # folio-std
//!
//! Standard renderers for the folio rendering engine.
//!
//! This crate provides:
//! - **Baseline renderers**: plain markdown nodes ([`baseline::renderers`])
//! - **API-doc renderers**: signatures, directives, definition lists and
//!   parameters ([`docs::renderers`])
//! - **Serializers**: HTML and wrapped plain text ([`output`])
//! - **Wrappers**: [`Traced`](wrappers::Traced), [`Logged`](wrappers::Logged)
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use folio_core;

// Modules
pub mod baseline;
pub mod docs;
pub mod output;
pub mod testing;
pub mod wrappers;

use folio_core::{Registry, RendererMap};

/// Every renderer this crate ships: the baseline set with the API-doc set
/// merged on top.
pub fn default_renderers() -> RendererMap {
    baseline::renderers().merge(docs::renderers())
}

/// A registry of [`default_renderers`] without caller overrides.
pub fn default_registry() -> Registry {
    Registry::build(baseline::renderers(), docs::renderers())
}
