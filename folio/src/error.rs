//! Top-level error type.

use folio_core::{RegistryError, RenderError};
use thiserror::Error;

/// Top-level error type for all folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Composition failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Building the renderer map failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The input was not a valid node tree.
    #[error("invalid node JSON: {0}")]
    Json(#[from] serde_json::Error),
}
