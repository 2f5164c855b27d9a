//! # folio - Registry-Driven Document Rendering
//!
//! `folio` turns a parsed document tree ([`Node`]) into a presentation tree
//! ([`Element`]) by dispatching each node on its `type` tag to a
//! [`Renderer`] looked up in a [`Registry`]. Renderers call back into the
//! [`Composer`] for their children, so any tag can be overridden without
//! touching the rest of the pipeline.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::{RendererMap, Session};
//!
//! let session = Session::new(RendererMap::new());
//! let html = session
//!     .render_json(r#"{"type": "directive", "domain": "py", "role": "func", "value": "abc"}"#)
//!     .map(|el| folio::output::to_html(&el))
//!     .unwrap();
//! assert_eq!(html, r#"<code class="directive">:py:func:`abc`</code>"#);
//! ```
//!
//! ## Overriding a tag
//!
//! ```rust
//! use folio::{Element, Node, RendererMap, Session, Tag, from_fn};
//!
//! let overrides = RendererMap::new().with("thematicBreak", from_fn(|_, _| {
//!     Ok(Tag::new("div").class("rule").into())
//! }));
//! let session = Session::new(overrides);
//!
//! let out = session.render(&Node::new("thematicBreak")).unwrap();
//! assert_eq!(out, Element::from(Tag::new("div").class("rule")));
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod session;

pub use error::FolioError;
pub use session::Session;

pub use folio_core::{
    // Errors
    BoxError,
    // Options
    ComposeOptions,
    // Composition
    Composer,
    DEFAULT_MAX_DEPTH,
    DIAGNOSTIC_CLASS,
    // Output
    Element,
    FnRenderer,
    Hardening,
    // Input
    Node,
    RegistryError,
    // Registry
    Registry,
    RenderError,
    // Renderer
    Renderer,
    RendererMap,
    RendererMapBuilder,
    RouteResult,
    SharedRenderer,
    Tag,
    UnknownPolicy,
    Unimplemented,
    diagnostic,
    from_fn,
    renderer_map,
};

/// Typed views over API-documentation nodes.
pub mod view {
    #![allow(clippy::wildcard_imports)]
    pub use folio_core::view::*;
}

/// Standard renderer sets.
pub mod renderers {
    pub use folio_std::{baseline, default_registry, default_renderers, docs};
}

/// Element tree serializers.
pub mod output {
    pub use folio_std::output::{TextWriter, html, text, to_html};
}

/// Renderer wrappers.
pub mod wrappers {
    pub use folio_std::wrappers::{Logged, Traced};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use folio_std::testing::*;
}

/// Prelude module - common imports for folio.
///
/// # Usage
///
/// ```rust
/// use folio::prelude::*;
///
/// let session = Session::default();
/// let out: Element = session.render(&Node::text("hi")).unwrap();
/// assert_eq!(out.text_content(), "hi");
/// ```
pub mod prelude {
    pub use crate::{
        ComposeOptions, Composer, Element, FolioError, Hardening, Node, RenderError, Renderer,
        RendererMap, Registry, Session, Tag, from_fn,
    };
}

#[cfg(feature = "macros")]
pub use folio_macros::renderer;
