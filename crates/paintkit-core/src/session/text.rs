//! Text placement: the configured string follows the pointer until a click
//! stamps it into the image.

use super::{PaintSession, SessionHost};
use crate::figure::{Figure, Text};
use crate::geometry::Point;
use crate::input::PointerEvent;
use crate::settings::ToolSettings;

pub struct TextPaintSession {
    settings: ToolSettings,
}

impl TextPaintSession {
    pub fn new() -> Self {
        Self {
            settings: ToolSettings::default(),
        }
    }

    fn figure_at(&self, position: Point) -> Figure {
        Text::new(
            self.settings.foreground_color,
            self.settings.font.clone(),
            self.settings.text.as_str(),
            position,
        )
        .into()
    }
}

impl Default for TextPaintSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintSession for TextPaintSession {
    fn display_name(&self) -> &str {
        "Text"
    }

    fn set(&mut self, settings: &ToolSettings) {
        self.settings = settings.clone();
    }

    fn begin_session(&mut self, host: &mut dyn SessionHost) {
        host.status().set_message("Click to place text");
    }

    fn end_session(&mut self, host: &mut dyn SessionHost) {
        host.clear_rubberband_selection();
    }

    fn reset_session(&mut self, host: &mut dyn SessionHost) {
        host.clear_rubberband_selection();
    }

    fn mouse_down(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        if !event.button.is_primary() || self.settings.text.is_empty() {
            return;
        }
        host.clear_rubberband_selection();
        host.draw_figure(&self.figure_at(event.position()));
    }

    fn mouse_up(&mut self, _host: &mut dyn SessionHost, _event: PointerEvent) {}

    fn mouse_move(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        let p = event.position();
        host.status().set_coord(p);
        host.clear_rubberband_selection();
        if !self.settings.text.is_empty() {
            host.add_rubberband_selection(self.figure_at(p));
        }
    }
}
