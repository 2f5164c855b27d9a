//! Serializers for composed element trees.
//!
//! - [`html`]: markup for browsers and static sites
//! - [`text`]: wrapped plain text for terminals

pub mod html;
pub mod text;

pub use html::to_html;
pub use text::TextWriter;
