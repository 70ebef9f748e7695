//! Rendering-target abstraction.
//!
//! The engine never touches pixels directly. Figures draw through a
//! [`RenderTarget`] (a stateful "graphics context" with current colors, line
//! style and clipping), and the paint surface stores its persistent image,
//! viewport and compositing buffer as [`PixelBuffer`]s. A software raster
//! and a real window backend implement the same contract.

use crate::geometry::{PixelRect, Point};
use crate::style::{Color, FontSpec, LineStyle};

/// Stateful drawing primitives.
///
/// Outline primitives (`draw_*`) use the foreground color and touch
/// `width + 1` by `height + 1` pixels starting at `(x, y)`. Fill primitives
/// (`fill_*`) use the background color and touch `width` by `height` pixels.
/// Non-solid line styles paint the gaps of the pattern in the background
/// color. Every primitive respects the clipping rectangle.
pub trait RenderTarget {
    fn set_foreground(&mut self, color: Color);

    fn set_background(&mut self, color: Color);

    fn set_line_style(&mut self, style: LineStyle);

    fn set_font(&mut self, font: &FontSpec);

    /// Restrict drawing to `clip`, or remove the restriction with `None`.
    fn set_clipping(&mut self, clip: Option<PixelRect>);

    /// Line including both endpoints.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Rectangle outline with elliptical corners of the given diameters.
    fn draw_round_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    );

    /// Ellipse outline inscribed in the rectangle.
    fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Closed polygon outline.
    fn draw_polygon(&mut self, points: &[Point]);

    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn fill_round_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    );

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Polygon interior. Polygons with fewer than three points draw nothing.
    fn fill_polygon(&mut self, points: &[Point]);

    /// Text with its top-left corner at `(x, y)`, in the current font and
    /// foreground color, with a transparent background. Nothing is drawn
    /// outside the rectangle reported by [`RenderTarget::text_extent`].
    fn draw_text(&mut self, text: &str, x: i32, y: i32);

    /// Width and height `text` occupies when drawn in `font`.
    fn text_extent(&self, font: &FontSpec, text: &str) -> (i32, i32);
}

/// A rectangular pixel store that can also be drawn on.
pub trait PixelBuffer: RenderTarget + Sized {
    /// New buffer of the given size filled with `fill`, sharing any
    /// backend resources (such as loaded fonts) with `self`.
    fn create_compatible(&self, width: u32, height: u32, fill: Color) -> Self;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width() as i32, self.height() as i32)
    }

    /// Copy `src_rect` of `src` so its top-left lands on `dst`. Parts outside
    /// either buffer, or outside the clipping rectangle, are skipped.
    fn blit(&mut self, src: &Self, src_rect: PixelRect, dst: Point);

    /// Shift the whole content by `(dx, dy)` in place. Pixels uncovered by
    /// the shift keep stale content until repainted.
    fn scroll(&mut self, dx: i32, dy: i32);

    /// Read back one pixel.
    fn pixel(&self, x: i32, y: i32) -> Option<Color>;
}
