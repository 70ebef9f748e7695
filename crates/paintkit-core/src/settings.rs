//! Tool settings shared by every paint session, loadable from JSON.

use crate::style::{Color, FillType, FontSpec, LineStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Largest accepted airbrush intensity (percent).
pub const MAX_AIRBRUSH_INTENSITY: u32 = 100;

/// Largest accepted airbrush radius in pixels.
pub const MAX_AIRBRUSH_RADIUS: u32 = 1000;

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Snapshot of the user-selected drawing options.
///
/// Sessions keep their own copy; the host re-applies it through
/// [`crate::session::PaintSession::set`] whenever something changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub foreground_color: Color,
    pub background_color: Color,
    pub line_style: LineStyle,
    pub fill_type: FillType,
    pub font: FontSpec,
    /// Airbrush disc radius in pixels, must be positive.
    pub airbrush_radius: u32,
    /// Airbrush density in percent, `1..=100`.
    pub airbrush_intensity: u32,
    /// Corner diameter used by the rounded rectangle tool.
    pub corner_diameter: i32,
    /// String placed by the text tool.
    pub text: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            foreground_color: Color::BLACK,
            background_color: Color::WHITE,
            line_style: LineStyle::Solid,
            fill_type: FillType::None,
            font: FontSpec::default(),
            airbrush_radius: 10,
            airbrush_intensity: 30,
            corner_diameter: 16,
            text: "Hello".to_string(),
        }
    }
}

impl ToolSettings {
    /// Parse and validate settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: ToolSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            SettingsError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Save settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| {
            SettingsError::Io(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Check value ranges.
    pub fn validate(&self) -> SettingsResult<()> {
        if !(1..=MAX_AIRBRUSH_RADIUS).contains(&self.airbrush_radius) {
            return Err(SettingsError::Invalid {
                field: "airbrush_radius",
                reason: format!(
                    "{} is outside 1..={}",
                    self.airbrush_radius, MAX_AIRBRUSH_RADIUS
                ),
            });
        }
        if !(1..=MAX_AIRBRUSH_INTENSITY).contains(&self.airbrush_intensity) {
            return Err(SettingsError::Invalid {
                field: "airbrush_intensity",
                reason: format!(
                    "{} is outside 1..={}",
                    self.airbrush_intensity, MAX_AIRBRUSH_INTENSITY
                ),
            });
        }
        if self.corner_diameter < 0 {
            return Err(SettingsError::Invalid {
                field: "corner_diameter",
                reason: "must not be negative".to_string(),
            });
        }
        if self.font.size == 0 {
            return Err(SettingsError::Invalid {
                field: "font.size",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
