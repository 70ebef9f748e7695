//! Loaded font faces, shared by every buffer created from the same image.

use crate::error::{RenderResult, RendererError};
use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use paintkit_core::FontSpec;
use std::collections::HashMap;
use std::path::Path;

/// Width of one fallback glyph box relative to the font size.
const FALLBACK_ADVANCE: f32 = 0.6;

/// Font faces keyed by family name. The first face loaded doubles as the
/// fallback for unknown families.
#[derive(Debug, Clone, Default)]
pub struct FontBook {
    faces: HashMap<String, FontArc>,
    fallback: Option<String>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a TrueType/OpenType face under `family`.
    pub fn load(&mut self, family: impl Into<String>, data: Vec<u8>) -> RenderResult<()> {
        let family = family.into();
        let font = FontArc::try_from_vec(data)
            .map_err(|e| RendererError::Font(format!("{}: {}", family, e)))?;
        log::debug!("loaded font family {}", family);
        if self.fallback.is_none() {
            self.fallback = Some(family.clone());
        }
        self.faces.insert(family, font);
        Ok(())
    }

    pub fn load_file(&mut self, family: impl Into<String>, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| RendererError::Font(format!("Failed to read {}: {}", path.display(), e)))?;
        self.load(family, data)
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face for `family`, falling back to the first loaded face.
    pub fn resolve(&self, family: &str) -> Option<&FontArc> {
        self.faces
            .get(family)
            .or_else(|| self.fallback.as_ref().and_then(|f| self.faces.get(f)))
    }

    /// Pixel size of `text` set in `spec`.
    pub fn measure(&self, spec: &FontSpec, text: &str) -> (i32, i32) {
        let size = spec.size.max(1) as f32;
        match self.resolve(&spec.family) {
            Some(font) => {
                let scaled = font.as_scaled(PxScale::from(size));
                let mut width = 0.0f32;
                let mut previous: Option<GlyphId> = None;
                for ch in text.chars() {
                    let id = font.glyph_id(ch);
                    if let Some(previous) = previous {
                        width += scaled.kern(previous, id);
                    }
                    width += scaled.h_advance(id);
                    previous = Some(id);
                }
                (width.ceil() as i32, scaled.height().ceil() as i32)
            }
            None => {
                let advance = fallback_advance(size);
                (text.chars().count() as i32 * advance, size as i32)
            }
        }
    }

    /// Rasterize `text` with its top-left at `(x, y)`, reporting each
    /// covered pixel with its coverage in `0.0..=1.0`.
    pub fn render(&self, spec: &FontSpec, text: &str, x: i32, y: i32, mut plot: impl FnMut(i32, i32, f32)) {
        let size = spec.size.max(1) as f32;
        let Some(font) = self.resolve(&spec.family) else {
            render_fallback(size, text, x, y, plot);
            return;
        };

        let scaled = font.as_scaled(PxScale::from(size));
        let baseline = y as f32 + scaled.ascent();
        let mut cursor = x as f32;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = font.glyph_id(ch);
            if let Some(previous) = previous {
                cursor += scaled.kern(previous, id);
            }
            let glyph = id.with_scale_and_position(size, point(cursor, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let gx = bounds.min.x as i32 + px as i32;
                    let gy = bounds.min.y as i32 + py as i32;
                    plot(gx, gy, coverage);
                });
            }
            cursor += scaled.h_advance(id);
            previous = Some(id);
        }
    }
}

fn fallback_advance(size: f32) -> i32 {
    ((size * FALLBACK_ADVANCE).round() as i32).max(1)
}

/// Hollow boxes standing in for glyphs when no face is loaded.
fn render_fallback(size: f32, text: &str, x: i32, y: i32, mut plot: impl FnMut(i32, i32, f32)) {
    let advance = fallback_advance(size);
    let height = size as i32;
    for (i, ch) in text.chars().enumerate() {
        if ch.is_whitespace() || advance < 3 || height < 3 {
            continue;
        }
        let left = x + i as i32 * advance;
        let (x0, x1) = (left, left + advance - 2);
        let (y0, y1) = (y + 1, y + height - 2);
        for px in x0..=x1 {
            plot(px, y0, 1.0);
            plot(px, y1, 1.0);
        }
        for py in y0..=y1 {
            plot(x0, py, 1.0);
            plot(x1, py, 1.0);
        }
    }
}
