//! JSON replay scripts: image setup plus a list of input steps.

use paintkit_core::session::SpuriousClickFilter;
use paintkit_core::{Color, MouseButton, ToolId, ToolSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

fn default_background() -> Color {
    Color::WHITE
}

/// A font face to load before replaying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSource {
    pub family: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

/// One input step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    SelectTool {
        tool: ToolId,
    },
    MouseDown {
        x: i32,
        y: i32,
        #[serde(default)]
        button: MouseButton,
    },
    MouseUp {
        x: i32,
        y: i32,
        #[serde(default)]
        button: MouseButton,
    },
    MouseMove {
        x: i32,
        y: i32,
        #[serde(default)]
        button: MouseButton,
    },
    /// Press and release at the same spot.
    Click {
        x: i32,
        y: i32,
        #[serde(default)]
        button: MouseButton,
    },
    /// Press, release, press, double-click: what a toolkit reports for a
    /// double click.
    DoubleClick {
        x: i32,
        y: i32,
        #[serde(default)]
        button: MouseButton,
    },
    ScrollTo {
        x: i32,
        y: i32,
    },
    Resize {
        width: u32,
        height: u32,
    },
    /// Let virtual time pass, firing retriggers as they come due.
    Wait {
        ms: u64,
    },
    Settings {
        settings: ToolSettings,
    },
    /// Abandon the current gesture.
    Reset,
}

/// A complete replay description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Defaults to the image size.
    #[serde(default)]
    pub viewport: Option<ViewportSize>,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub settings: ToolSettings,
    #[serde(default)]
    pub click_filter: SpuriousClickFilter,
    #[serde(default)]
    pub fonts: Vec<FontSource>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
