//! Damage regions collected from figures.

use crate::geometry::PixelRect;

/// A set of device rectangles that must be repainted.
///
/// Rectangles may overlap and are not merged; [`DamageRegion::bounds`] gives
/// the single rectangle a partial repaint is requested for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageRegion {
    rects: Vec<PixelRect>,
}

impl DamageRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rectangle. Empty rectangles are dropped.
    pub fn add(&mut self, rect: PixelRect) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn rects(&self) -> &[PixelRect] {
        &self.rects
    }

    /// Union of all rectangles.
    pub fn bounds(&self) -> Option<PixelRect> {
        let mut it = self.rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(&r)))
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Take all rectangles, leaving the region empty.
    pub fn take(&mut self) -> Vec<PixelRect> {
        std::mem::take(&mut self.rects)
    }
}
