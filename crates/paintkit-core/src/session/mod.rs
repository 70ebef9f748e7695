//! Paint sessions: the per-tool state machines that turn pointer events into
//! figures.
//!
//! A session never owns or points back at the surface. Every callback gets
//! the surface as a `&mut dyn SessionHost` for the duration of the call.

mod continuous;
mod drag;
mod segmented;
mod text;

pub use continuous::{scan_segment, ContinuousPaintSession, ContinuousTool};
pub use drag::{DragPaintSession, DragTool};
pub use segmented::{SegmentPhase, SegmentedPaintSession, SegmentedTool, SpuriousClickFilter};
pub use text::TextPaintSession;

use crate::figure::Figure;
use crate::geometry::Point;
use crate::input::PointerEvent;
use crate::settings::ToolSettings;
use crate::status::StatusLine;
use crate::timer::RetriggerToken;
use std::time::Duration;

/// What a session may do to the surface it is attached to.
pub trait SessionHost {
    /// Paint a figure permanently into the image and onto the display.
    fn draw_figure(&mut self, figure: &Figure);

    /// Append a figure to the temporary preview layer.
    fn add_rubberband_selection(&mut self, figure: Figure);

    /// Erase the preview layer. No-op when it is already empty.
    fn clear_rubberband_selection(&mut self);

    /// Paint the preview layer permanently, then clear it.
    fn commit_rubberband_selection(&mut self);

    /// Nestable; the preview stays hidden until every hide has a matching show.
    fn hide_rubberband(&mut self);

    fn show_rubberband(&mut self);

    /// Last pointer position in image coordinates.
    fn current_position(&self) -> Point;

    fn status(&mut self) -> &mut StatusLine;

    /// Ask for a [`PaintSession::retrigger`] call after `delay`.
    fn schedule_retrigger(&mut self, delay: Duration) -> RetriggerToken;
}

/// A tool's interaction state machine.
///
/// Pointer events arrive already converted to image coordinates.
pub trait PaintSession {
    /// Name shown as the status action while the session is active.
    fn display_name(&self) -> &str;

    /// Apply a new settings snapshot.
    fn set(&mut self, settings: &ToolSettings);

    /// The session became active.
    fn begin_session(&mut self, host: &mut dyn SessionHost);

    /// The session is being replaced. Any in-progress gesture is abandoned.
    fn end_session(&mut self, host: &mut dyn SessionHost);

    /// Abandon the current gesture but stay active.
    fn reset_session(&mut self, host: &mut dyn SessionHost);

    fn mouse_down(&mut self, host: &mut dyn SessionHost, event: PointerEvent);

    fn mouse_up(&mut self, host: &mut dyn SessionHost, event: PointerEvent);

    fn mouse_move(&mut self, host: &mut dyn SessionHost, event: PointerEvent);

    fn mouse_double_click(&mut self, _host: &mut dyn SessionHost, _event: PointerEvent) {}

    /// A timer requested through [`SessionHost::schedule_retrigger`] fired.
    /// Tokens the session no longer holds must be ignored.
    fn retrigger(&mut self, _host: &mut dyn SessionHost, _token: RetriggerToken) {}
}

impl std::fmt::Debug for dyn PaintSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintSession")
            .field("name", &self.display_name())
            .finish()
    }
}
