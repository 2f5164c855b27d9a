//! # folio-core
//!
//! Core types for the folio rendering engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! renderer packages that don't need the standard renderer set in
//! `folio-std`.
//!
//! # Architecture
//!
//! Rendering is split into three layers:
//!
//! ## Input: [`Node`]
//!
//! A parsed document tree, produced by an external parser and read-only
//! from here on. The `type` tag selects the renderer; typed views such as
//! [`SignatureView`] are decoded on demand.
//!
//! ## Dispatch: [`Registry`] and [`Composer`]
//!
//! The registry maps tags to [`Renderer`]s. It is built once per session by
//! a right-biased merge of a baseline map and an override map
//! ([`Registry::build`]). The composer walks the tree, dispatching each
//! node and handing renderers a way to compose their own children.
//!
//! ## Output: [`Element`]
//!
//! A DOM-like presentation tree with the same nesting and ordering as the
//! input.
//!
//! # Error Types
//!
//! - [`RenderError`] - Composition errors
//! - [`RegistryError`] - Map building errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod compose;
mod element;
mod error;
mod fallback;
mod node;
mod options;
mod registry;
mod renderer;
pub mod view;

// Re-exports
pub use compose::Composer;
pub use element::{DIAGNOSTIC_CLASS, Element, Tag};
pub use error::{BoxError, RegistryError, RenderError};
pub use fallback::{Unimplemented, diagnostic};
pub use node::Node;
pub use options::{ComposeOptions, DEFAULT_MAX_DEPTH, Hardening, UnknownPolicy};
pub use registry::{RendererMap, RendererMapBuilder, Registry, RouteResult};
pub use renderer::{FnRenderer, Renderer, SharedRenderer, from_fn};
pub use view::{
    DefListItem, DefListView, DefaultValue, DirectiveView, ParamView, ParameterKind,
    ParameterNode, SignatureView,
};
