//! Two-point shapes: press to anchor, drag to size, release to commit.

use super::{PaintSession, SessionHost};
use crate::figure::Figure;
use crate::geometry::Point;
use crate::input::PointerEvent;
use crate::settings::ToolSettings;

/// A tool driven by a [`DragPaintSession`].
pub trait DragTool {
    fn display_name(&self) -> &str;

    /// Build the shape spanning `anchor` to `cursor`.
    fn create_figure(&self, settings: &ToolSettings, anchor: Point, cursor: Point) -> Figure;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging { anchor: Point, cursor: Point },
}

/// Session that previews a shape in the rubberband while dragging.
pub struct DragPaintSession<T: DragTool> {
    tool: T,
    settings: ToolSettings,
    state: DragState,
}

impl<T: DragTool> DragPaintSession<T> {
    pub fn new(tool: T) -> Self {
        Self {
            tool,
            settings: ToolSettings::default(),
            state: DragState::Idle,
        }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    fn update_preview(&mut self, host: &mut dyn SessionHost, anchor: Point, cursor: Point) {
        host.clear_rubberband_selection();
        let figure = self.tool.create_figure(&self.settings, anchor, cursor);
        host.add_rubberband_selection(figure);
        self.state = DragState::Dragging { anchor, cursor };
    }

    fn abort(&mut self, host: &mut dyn SessionHost) {
        host.clear_rubberband_selection();
        self.state = DragState::Idle;
    }
}

impl<T: DragTool> PaintSession for DragPaintSession<T> {
    fn display_name(&self) -> &str {
        self.tool.display_name()
    }

    fn set(&mut self, settings: &ToolSettings) {
        self.settings = settings.clone();
    }

    fn begin_session(&mut self, host: &mut dyn SessionHost) {
        host.status().set_message("Drag to define the shape");
    }

    fn end_session(&mut self, host: &mut dyn SessionHost) {
        self.abort(host);
    }

    fn reset_session(&mut self, host: &mut dyn SessionHost) {
        self.abort(host);
    }

    fn mouse_down(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        if !event.button.is_primary() {
            if self.is_dragging() {
                log::debug!("{} drag aborted by {:?}", self.tool.display_name(), event.button);
                self.abort(host);
            }
            return;
        }
        if self.is_dragging() {
            return;
        }
        let anchor = event.position();
        host.status().set_coord(anchor);
        self.state = DragState::Dragging {
            anchor,
            cursor: anchor,
        };
    }

    fn mouse_up(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        let DragState::Dragging { anchor, cursor } = self.state else {
            return;
        };
        if !event.button.is_primary() {
            self.abort(host);
            return;
        }
        let release = event.position();
        if release != cursor {
            self.update_preview(host, anchor, release);
        }
        host.commit_rubberband_selection();
        self.state = DragState::Idle;
    }

    fn mouse_move(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        let cursor = event.position();
        match self.state {
            DragState::Idle => host.status().set_coord(cursor),
            DragState::Dragging { anchor, .. } => {
                host.status().set_coord_range(anchor, cursor);
                self.update_preview(host, anchor, cursor);
            }
        }
    }
}
