//! Renderer wrappers that observe dispatch without changing output.
//!
//! Both wrappers delegate [`Renderer::validate`](folio_core::Renderer::validate)
//! to the wrapped renderer. Without the `tracing` feature they are plain
//! pass-throughs.

mod logged;
mod traced;

pub use logged::Logged;
pub use traced::Traced;
