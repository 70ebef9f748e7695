//! Single-pixel freehand tool.

use crate::figure::PointFigure;
use crate::geometry::Point;
use crate::session::{ContinuousTool, SessionHost};
use crate::settings::ToolSettings;

/// Paints one point in the foreground color per sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct PencilTool;

impl ContinuousTool for PencilTool {
    fn display_name(&self) -> &str {
        "Pencil"
    }

    fn render(&mut self, host: &mut dyn SessionHost, settings: &ToolSettings, point: Point) {
        host.draw_figure(&PointFigure::new(settings.foreground_color, point).into());
    }
}
