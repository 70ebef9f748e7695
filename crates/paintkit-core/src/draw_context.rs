//! Virtual-to-device coordinate mapping plus the target figures draw into.

use crate::geometry::{PixelRect, Point};
use crate::render_target::RenderTarget;

/// Scroll offset and scale applied to virtual (image) coordinates.
///
/// `device = virtual * scale - offset`. Offsets are in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_scale: i32,
    pub y_scale: i32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x_offset: 0,
        y_offset: 0,
        x_scale: 1,
        y_scale: 1,
    };

    pub fn with_offset(self, x_offset: i32, y_offset: i32) -> Self {
        Self {
            x_offset,
            y_offset,
            ..self
        }
    }

    pub fn with_scale(self, x_scale: i32, y_scale: i32) -> Self {
        Self {
            x_scale,
            y_scale,
            ..self
        }
    }

    pub fn to_client_point(&self, x: i32, y: i32) -> Point {
        Point::new(
            x * self.x_scale - self.x_offset,
            y * self.y_scale - self.y_offset,
        )
    }

    /// Device rectangle covering both corner pixels, each scaled to a
    /// `x_scale` by `y_scale` block.
    pub fn to_client_rectangle(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> PixelRect {
        PixelRect::new(
            x1.min(x2) * self.x_scale - self.x_offset,
            y1.min(y2) * self.y_scale - self.y_offset,
            ((x2 - x1).abs() + 1) * self.x_scale,
            ((y2 - y1).abs() + 1) * self.y_scale,
        )
    }
}

/// A render target seen through a [`Transform`].
///
/// Figures use the same context both to draw and to report damage, so the
/// two always agree on where things land.
pub struct DrawContext<'a> {
    target: &'a mut dyn RenderTarget,
    transform: Transform,
}

impl<'a> DrawContext<'a> {
    pub fn new(target: &'a mut dyn RenderTarget, transform: Transform) -> Self {
        Self { target, transform }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn target(&mut self) -> &mut dyn RenderTarget {
        &mut *self.target
    }

    pub fn target_ref(&self) -> &dyn RenderTarget {
        &*self.target
    }

    pub fn to_client_point(&self, x: i32, y: i32) -> Point {
        self.transform.to_client_point(x, y)
    }

    pub fn to_client_rectangle(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> PixelRect {
        self.transform.to_client_rectangle(x1, y1, x2, y2)
    }
}
