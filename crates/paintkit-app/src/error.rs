//! Errors surfaced by the replay host.

use paintkit_core::SettingsError;
use paintkit_render::RendererError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

pub type AppResult<T> = Result<T, AppError>;
