//! Multi-point shapes: click to add vertices, double-click to close.

use super::{PaintSession, SessionHost};
use crate::figure::Figure;
use crate::geometry::Point;
use crate::input::PointerEvent;
use crate::settings::ToolSettings;
use serde::{Deserialize, Serialize};

/// A tool driven by a [`SegmentedPaintSession`].
pub trait SegmentedTool {
    fn display_name(&self) -> &str;

    /// Build the shape through `points`. Open while previewing, closed once
    /// the gesture finishes.
    fn create_figure(&self, settings: &ToolSettings, points: &[Point], closed: bool) -> Figure;
}

/// Which clicks count as accidental repeats of the previous vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpuriousClickFilter {
    /// Reject a click sharing either coordinate with the previous vertex.
    #[default]
    SharedAxis,
    /// Reject only a click on exactly the previous vertex.
    ExactMatch,
}

impl SpuriousClickFilter {
    pub fn rejects(self, previous: Point, candidate: Point) -> bool {
        match self {
            SpuriousClickFilter::SharedAxis => {
                previous.x == candidate.x || previous.y == candidate.y
            }
            SpuriousClickFilter::ExactMatch => previous == candidate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPhase {
    /// Waiting for the first vertex.
    Anchoring,
    /// At least one vertex placed; the preview follows the pointer.
    Interactive,
}

/// Session that collects control points and previews the open shape.
pub struct SegmentedPaintSession<T: SegmentedTool> {
    tool: T,
    settings: ToolSettings,
    filter: SpuriousClickFilter,
    control_points: Vec<Point>,
    /// Closed figure waiting to be painted by the next reset.
    pending: Option<Figure>,
}

impl<T: SegmentedTool> SegmentedPaintSession<T> {
    pub fn new(tool: T) -> Self {
        Self {
            tool,
            settings: ToolSettings::default(),
            filter: SpuriousClickFilter::default(),
            control_points: Vec::new(),
            pending: None,
        }
    }

    pub fn with_filter(mut self, filter: SpuriousClickFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    pub fn filter(&self) -> SpuriousClickFilter {
        self.filter
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn phase(&self) -> SegmentPhase {
        if self.control_points.is_empty() {
            SegmentPhase::Anchoring
        } else {
            SegmentPhase::Interactive
        }
    }
}

impl<T: SegmentedTool> PaintSession for SegmentedPaintSession<T> {
    fn display_name(&self) -> &str {
        self.tool.display_name()
    }

    fn set(&mut self, settings: &ToolSettings) {
        self.settings = settings.clone();
    }

    fn begin_session(&mut self, host: &mut dyn SessionHost) {
        host.status()
            .set_message("Click to add points, double-click to finish");
    }

    fn end_session(&mut self, host: &mut dyn SessionHost) {
        self.reset_session(host);
    }

    fn reset_session(&mut self, host: &mut dyn SessionHost) {
        host.clear_rubberband_selection();
        if let Some(figure) = self.pending.take() {
            host.draw_figure(&figure);
        }
        self.control_points.clear();
    }

    fn mouse_down(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        if !event.button.is_primary() {
            self.reset_session(host);
            return;
        }
        let p = event.position();
        host.status().set_coord(p);
        if let Some(&last) = self.control_points.last() {
            if self.filter.rejects(last, p) {
                log::trace!("spurious click at {:?} ignored", p);
                return;
            }
        }
        self.control_points.push(p);
    }

    fn mouse_up(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        if !event.button.is_primary() {
            self.reset_session(host);
        }
    }

    fn mouse_move(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        let cursor = event.position();
        let Some(&last) = self.control_points.last() else {
            host.status().set_coord(cursor);
            return;
        };
        host.status().set_coord_range(last, cursor);
        host.clear_rubberband_selection();
        let mut points = self.control_points.clone();
        points.push(cursor);
        let preview = self.tool.create_figure(&self.settings, &points, false);
        host.add_rubberband_selection(preview);
    }

    fn mouse_double_click(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        if !event.button.is_primary() {
            return;
        }
        if self.control_points.len() >= 2 {
            host.clear_rubberband_selection();
            self.pending = Some(
                self.tool
                    .create_figure(&self.settings, &self.control_points, true),
            );
        }
        self.reset_session(host);
    }
}
