//! PaintKit Core Library
//!
//! Platform-agnostic paint engine: figures, tool sessions and the paint
//! surface that composites a rubberband preview over a persistent image.
//! Pixels are produced by whatever implements [`RenderTarget`] and
//! [`PixelBuffer`].

pub mod canvas;
pub mod damage;
pub mod draw_context;
pub mod figure;
pub mod geometry;
pub mod input;
pub mod render_target;
pub mod session;
pub mod settings;
pub mod status;
pub mod style;
pub mod surface;
pub mod timer;
pub mod tools;

#[cfg(test)]
mod test_support;

pub use canvas::{Canvas, DEFAULT_CANVAS_BACKGROUND};
pub use damage::DamageRegion;
pub use draw_context::{DrawContext, Transform};
pub use figure::{Container, Figure, FigureTrait};
pub use geometry::{PixelRect, Point};
pub use input::{MouseButton, PointerEvent};
pub use render_target::{PixelBuffer, RenderTarget};
pub use session::{PaintSession, SessionHost};
pub use settings::{
    SettingsError, SettingsResult, ToolSettings, MAX_AIRBRUSH_INTENSITY, MAX_AIRBRUSH_RADIUS,
};
pub use status::StatusLine;
pub use style::{Color, FillType, FontSpec, LineStyle};
pub use surface::PaintSurface;
pub use timer::{Clock, ManualClock, RetriggerToken, SystemClock};
pub use tools::{ToolCategory, ToolDescriptor, ToolId, ToolPalette, ToolRegistry};
