//! Error types for rendering.

use thiserror::Error;

/// Failures while writing markup. The in-memory writer only fails on
/// encoding problems, so callers rarely see these.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write markup: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("rendered markup is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;
