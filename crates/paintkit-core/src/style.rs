//! Colors, line styles, fill types and font descriptions shared by figures and tools.

use serde::{Deserialize, Serialize};

/// Opaque-by-default RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation towards `other` by `t` in `0.0..=1.0`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Stroke pattern for lines and outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
}

impl LineStyle {
    /// Alternating on/off run lengths in pixels, starting with "on".
    /// `None` for solid lines.
    pub fn dash_pattern(self) -> Option<&'static [u32]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dash => Some(&[6, 3]),
            LineStyle::Dot => Some(&[2, 2]),
            LineStyle::DashDot => Some(&[6, 3, 2, 3]),
        }
    }

    /// Cycle to the next line style.
    pub fn next(self) -> Self {
        match self {
            LineStyle::Solid => LineStyle::Dash,
            LineStyle::Dash => LineStyle::Dot,
            LineStyle::Dot => LineStyle::DashDot,
            LineStyle::DashDot => LineStyle::Solid,
        }
    }
}

/// How closed shapes are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillType {
    /// Outline only, in the foreground color.
    #[default]
    None,
    /// Background-colored interior with a foreground outline.
    Outline,
    /// Interior filled with the foreground color, no separate outline.
    Solid,
}

/// Font description. Rendering targets resolve the family to an actual face.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub family: String,
    /// Pixel size.
    pub size: u32,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("sans-serif", 16)
    }
}
