//! Render backend errors.

use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Font error: {0}")]
    Font(String),
    #[error("Invalid buffer size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;
