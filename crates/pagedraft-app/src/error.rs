//! Application error type.

use pagedraft_core::DocumentError;
use pagedraft_render::RendererError;
use thiserror::Error;

/// Errors surfaced by the editor shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Render(#[from] RendererError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration override could not be parsed.
    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
