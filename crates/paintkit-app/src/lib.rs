//! PaintKit Application
//!
//! Headless host for the paint engine: loads a JSON script of pointer
//! steps, replays it against a raster surface with virtual time and hands
//! back the finished image.

mod error;
mod replay;
mod script;

pub use error::{AppError, AppResult};
pub use replay::{run_script, Replay};
pub use script::{FontSource, Script, Step, ViewportSize};

use std::path::Path;

/// Read and parse a script file.
pub fn load_script(path: impl AsRef<Path>) -> AppResult<Script> {
    let json = std::fs::read_to_string(path)?;
    Ok(Script::from_json(&json)?)
}
