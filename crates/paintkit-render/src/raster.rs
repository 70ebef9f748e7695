//! Software raster buffer implementing the paint engine's drawing traits.

use crate::error::{RenderResult, RendererError};
use crate::fonts::FontBook;
use crate::stroke::{line_pixels, polyline_pixels, Dasher};
use image::{Rgba, RgbaImage};
use kurbo::{BezPath, Ellipse, PathEl, Rect, RoundedRect, Shape};
use paintkit_core::{Color, FontSpec, LineStyle, PixelBuffer, PixelRect, Point, RenderTarget};
use std::path::Path;
use std::sync::Arc;

/// Curve flattening tolerance in pixels.
const FLATTEN_TOLERANCE: f64 = 0.2;

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba(color.to_array())
}

fn from_rgba(pixel: &Rgba<u8>) -> Color {
    let [r, g, b, a] = pixel.0;
    Color::new(r, g, b, a)
}

/// Normalize a possibly negative width or height.
fn normalized(x: i32, y: i32, width: i32, height: i32) -> (i32, i32, i32, i32) {
    let (x, width) = if width < 0 { (x + width, -width) } else { (x, width) };
    let (y, height) = if height < 0 { (y + height, -height) } else { (y, height) };
    (x, y, width, height)
}

/// Integer vertices of a flattened shape outline, one list per subpath.
fn flattened_outline(shape: &impl Shape) -> Vec<Vec<(i32, i32)>> {
    let mut subpaths = Vec::new();
    let mut current: Vec<(i32, i32)> = Vec::new();
    let round = |p: kurbo::Point| (p.x.round() as i32, p.y.round() as i32);
    kurbo::flatten(
        shape.path_elements(FLATTEN_TOLERANCE),
        FLATTEN_TOLERANCE,
        |el| match el {
            PathEl::MoveTo(p) => {
                if !current.is_empty() {
                    subpaths.push(std::mem::take(&mut current));
                }
                current.push(round(p));
            }
            PathEl::LineTo(p) => {
                let p = round(p);
                if current.last() != Some(&p) {
                    current.push(p);
                }
            }
            PathEl::ClosePath => {
                if let Some(&first) = current.first() {
                    current.push(first);
                }
            }
            _ => {}
        },
    );
    if !current.is_empty() {
        subpaths.push(current);
    }
    subpaths
}

/// Corner radius for an SWT-style arc size, kept within the rectangle.
fn corner_radius(width: i32, height: i32, arc_width: i32, arc_height: i32) -> f64 {
    let radius = f64::from(arc_width.abs().min(arc_height.abs())) / 2.0;
    radius.min(f64::from(width) / 2.0).min(f64::from(height) / 2.0).max(0.0)
}

/// RGBA pixel buffer with GC-style drawing state.
///
/// Outlines cover `width + 1` by `height + 1` pixels, fills cover `width`
/// by `height`. Fills use the background color, outlines and text the
/// foreground color; the gaps of dashed lines are painted in the background
/// color.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: RgbaImage,
    foreground: Color,
    background: Color,
    line_style: LineStyle,
    font: FontSpec,
    clip: Option<PixelRect>,
    fonts: Arc<FontBook>,
}

impl RasterImage {
    /// New buffer filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RendererError::InvalidSize { width, height });
        }
        Ok(Self::blank(width, height, fill, Arc::new(FontBook::new())))
    }

    fn blank(width: u32, height: u32, fill: Color, fonts: Arc<FontBook>) -> Self {
        Self::from_rgba(RgbaImage::from_pixel(width, height, to_rgba(fill))).with_fonts(fonts)
    }

    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels,
            foreground: Color::BLACK,
            background: Color::WHITE,
            line_style: LineStyle::Solid,
            font: FontSpec::default(),
            clip: None,
            fonts: Arc::new(FontBook::new()),
        }
    }

    /// Load a PNG (or any format the `image` crate was built with).
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let pixels = image::open(path)?.to_rgba8();
        Ok(Self::from_rgba(pixels))
    }

    pub fn with_fonts(mut self, fonts: Arc<FontBook>) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn fonts(&self) -> &Arc<FontBook> {
        &self.fonts
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.pixels.save_with_format(path, image::ImageFormat::Png)?;
        log::debug!("saved {}x{} PNG to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    /// Area writes may touch: the buffer intersected with the clip.
    fn writable(&self) -> Option<PixelRect> {
        let bounds = self.bounds();
        match self.clip {
            Some(clip) => clip.intersect(&bounds),
            None => Some(bounds),
        }
    }

    fn can_write(&self, x: i32, y: i32) -> bool {
        self.bounds().contains(x, y) && self.clip.map_or(true, |clip| clip.contains(x, y))
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if self.can_write(x, y) {
            self.pixels.put_pixel(x as u32, y as u32, to_rgba(color));
        }
    }

    /// Mix `color` over the existing pixel by `coverage`.
    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 || !self.can_write(x, y) {
            return;
        }
        let existing = from_rgba(self.pixels.get_pixel(x as u32, y as u32));
        let mixed = existing.lerp(color, coverage.min(1.0));
        self.pixels.put_pixel(x as u32, y as u32, to_rgba(mixed));
    }

    fn stroke_polyline(&mut self, points: &[(i32, i32)]) {
        let (on, off) = (self.foreground, self.background);
        let mut dasher = Dasher::new(self.line_style.dash_pattern());
        polyline_pixels(points, &mut dasher, |x, y, is_on| {
            self.put(x, y, if is_on { on } else { off });
        });
    }

    fn stroke_shape(&mut self, shape: &impl Shape) {
        for subpath in flattened_outline(shape) {
            self.stroke_polyline(&subpath);
        }
    }

    /// Fill every pixel whose center lies inside `shape`.
    fn fill_shape(&mut self, shape: &impl Shape) {
        let Some(area) = self.writable() else {
            return;
        };
        let bbox = shape.bounding_box();
        let x0 = (bbox.x0.floor() as i32).max(area.x);
        let y0 = (bbox.y0.floor() as i32).max(area.y);
        let x1 = (bbox.x1.ceil() as i32).min(area.right());
        let y1 = (bbox.y1.ceil() as i32).min(area.bottom());
        let color = self.background;
        for y in y0..y1 {
            for x in x0..x1 {
                if shape.contains(kurbo::Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)) {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn edge_rect(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect::new(
            f64::from(x),
            f64::from(y),
            f64::from(x + width),
            f64::from(y + height),
        )
    }
}

impl RenderTarget for RasterImage {
    fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = font.clone();
    }

    fn set_clipping(&mut self, clip: Option<PixelRect>) {
        self.clip = clip;
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.stroke_polyline(&[(x1, y1), (x2, y2)]);
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (x, y, width, height) = normalized(x, y, width, height);
        let (right, bottom) = (x + width, y + height);
        self.stroke_polyline(&[(x, y), (right, y), (right, bottom), (x, bottom), (x, y)]);
    }

    fn draw_round_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) {
        let (x, y, width, height) = normalized(x, y, width, height);
        let radius = corner_radius(width, height, arc_width, arc_height);
        if radius < 0.5 {
            self.draw_rectangle(x, y, width, height);
            return;
        }
        let shape = RoundedRect::from_rect(Self::edge_rect(x, y, width, height), radius);
        self.stroke_shape(&shape);
    }

    fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (x, y, width, height) = normalized(x, y, width, height);
        if width == 0 || height == 0 {
            self.draw_line(x, y, x + width, y + height);
            return;
        }
        let shape = Ellipse::from_rect(Self::edge_rect(x, y, width, height));
        self.stroke_shape(&shape);
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        let mut outline: Vec<(i32, i32)> = points.iter().map(|p| (p.x, p.y)).collect();
        if let Some(&first) = outline.first() {
            outline.push(first);
        }
        self.stroke_polyline(&outline);
    }

    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (x, y, width, height) = normalized(x, y, width, height);
        let Some(area) = self
            .writable()
            .and_then(|w| w.intersect(&PixelRect::new(x, y, width, height)))
        else {
            return;
        };
        let color = to_rgba(self.background);
        for py in area.y..area.bottom() {
            for px in area.x..area.right() {
                self.pixels.put_pixel(px as u32, py as u32, color);
            }
        }
    }

    fn fill_round_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) {
        let (x, y, width, height) = normalized(x, y, width, height);
        let radius = corner_radius(width, height, arc_width, arc_height);
        let shape = RoundedRect::from_rect(Self::edge_rect(x, y, width, height), radius);
        self.fill_shape(&shape);
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (x, y, width, height) = normalized(x, y, width, height);
        let shape = Ellipse::from_rect(Self::edge_rect(x, y, width, height));
        self.fill_shape(&shape);
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        if points.len() < 3 {
            return;
        }
        let mut path = BezPath::new();
        for (i, p) in points.iter().enumerate() {
            let center = kurbo::Point::new(f64::from(p.x) + 0.5, f64::from(p.y) + 0.5);
            if i == 0 {
                path.move_to(center);
            } else {
                path.line_to(center);
            }
        }
        path.close_path();
        self.fill_shape(&path);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        let (width, height) = self.fonts.measure(&self.font, text);
        let extent = PixelRect::new(x, y, width, height);
        let color = self.foreground;
        let fonts = Arc::clone(&self.fonts);
        let font = self.font.clone();
        fonts.render(&font, text, x, y, |px, py, coverage| {
            if extent.contains(px, py) {
                self.blend(px, py, color, coverage);
            }
        });
    }

    fn text_extent(&self, font: &FontSpec, text: &str) -> (i32, i32) {
        self.fonts.measure(font, text)
    }
}

impl PixelBuffer for RasterImage {
    fn create_compatible(&self, width: u32, height: u32, fill: Color) -> Self {
        Self::blank(width, height, fill, Arc::clone(&self.fonts))
    }

    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn blit(&mut self, src: &Self, src_rect: PixelRect, dst: Point) {
        let (ox, oy) = (dst.x - src_rect.x, dst.y - src_rect.y);
        let Some(visible) = src_rect.intersect(&src.bounds()) else {
            return;
        };
        for sy in visible.y..visible.bottom() {
            for sx in visible.x..visible.right() {
                let (x, y) = (sx + ox, sy + oy);
                if self.can_write(x, y) {
                    let pixel = *src.pixels.get_pixel(sx as u32, sy as u32);
                    self.pixels.put_pixel(x as u32, y as u32, pixel);
                }
            }
        }
    }

    fn scroll(&mut self, dx: i32, dy: i32) {
        if dx == 0 && dy == 0 {
            return;
        }
        let source = self.pixels.clone();
        let bounds = self.bounds();
        for y in 0..bounds.height {
            for x in 0..bounds.width {
                let (sx, sy) = (x - dx, y - dy);
                if bounds.contains(sx, sy) {
                    let pixel = *source.get_pixel(sx as u32, sy as u32);
                    self.pixels.put_pixel(x as u32, y as u32, pixel);
                }
            }
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.bounds()
            .contains(x, y)
            .then(|| from_rgba(self.pixels.get_pixel(x as u32, y as u32)))
    }
}
