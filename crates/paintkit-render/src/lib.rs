//! PaintKit Render Library
//!
//! Software raster backend for the paint engine. [`RasterImage`] stores RGBA
//! pixels with the `image` crate, flattens curves with `kurbo` and
//! rasterizes glyphs with `ab_glyph`.

mod error;
mod fonts;
mod raster;
mod stroke;

pub use error::{RenderResult, RendererError};
pub use fonts::FontBook;
pub use raster::RasterImage;
