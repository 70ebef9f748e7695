//! Freehand painting: every pointer position along a drag gets rendered.

use super::{PaintSession, SessionHost};
use crate::geometry::Point;
use crate::input::PointerEvent;
use crate::settings::ToolSettings;
use crate::timer::RetriggerToken;
use std::time::Duration;

/// A tool driven by a [`ContinuousPaintSession`].
pub trait ContinuousTool {
    fn display_name(&self) -> &str;

    /// Paint one sample at `point`.
    fn render(&mut self, host: &mut dyn SessionHost, settings: &ToolSettings, point: Point);

    /// If set, the sample under a stationary pointer is repainted at this
    /// interval for as long as the button is held.
    fn retrigger_interval(&self) -> Option<Duration> {
        None
    }
}

/// Visit every grid point on the segment `from -> to`, excluding `from` and
/// including `to`.
///
/// Steps one pixel at a time along the axis with the larger extent while the
/// other coordinate accumulates in 16.16 fixed point, so consecutive points
/// are always 8-connected.
pub fn scan_segment(from: Point, to: Point, mut render: impl FnMut(Point)) {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    if dx == 0 && dy == 0 {
        return;
    }

    let (ax, ay) = (dx.abs(), dy.abs());
    if ax > ay {
        let step = dx.signum();
        let dfy = (dy << 16) / ax;
        let mut fy = i64::from(from.y) << 16;
        let mut x = i64::from(from.x);
        for _ in 1..ax {
            x += step;
            fy += dfy;
            render(Point::new(x as i32, (fy >> 16) as i32));
        }
    } else {
        let step = dy.signum();
        let dfx = (dx << 16) / ay;
        let mut fx = i64::from(from.x) << 16;
        let mut y = i64::from(from.y);
        for _ in 1..ay {
            y += step;
            fx += dfx;
            render(Point::new((fx >> 16) as i32, y as i32));
        }
    }
    render(to);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stroke {
    Idle,
    Dragging { last: Point },
}

/// Session for tools that paint continuously while the left button is held.
pub struct ContinuousPaintSession<T: ContinuousTool> {
    tool: T,
    settings: ToolSettings,
    stroke: Stroke,
    retrigger: Option<RetriggerToken>,
}

impl<T: ContinuousTool> ContinuousPaintSession<T> {
    pub fn new(tool: T) -> Self {
        Self {
            tool,
            settings: ToolSettings::default(),
            stroke: Stroke::Idle,
            retrigger: None,
        }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.stroke, Stroke::Dragging { .. })
    }

    fn prepare_retrigger(&mut self, host: &mut dyn SessionHost) {
        self.retrigger = self
            .tool
            .retrigger_interval()
            .map(|interval| host.schedule_retrigger(interval));
    }

    fn drag_to(&mut self, host: &mut dyn SessionHost, to: Point) {
        let Stroke::Dragging { last } = self.stroke else {
            return;
        };
        if last == to {
            return;
        }
        let tool = &mut self.tool;
        let settings = &self.settings;
        scan_segment(last, to, |p| tool.render(host, settings, p));
        self.stroke = Stroke::Dragging { last: to };
        self.prepare_retrigger(host);
    }

    fn stop(&mut self) {
        self.stroke = Stroke::Idle;
        self.retrigger = None;
    }
}

impl<T: ContinuousTool> PaintSession for ContinuousPaintSession<T> {
    fn display_name(&self) -> &str {
        self.tool.display_name()
    }

    fn set(&mut self, settings: &ToolSettings) {
        self.settings = settings.clone();
    }

    fn begin_session(&mut self, host: &mut dyn SessionHost) {
        host.status().set_message("Drag to paint");
    }

    fn end_session(&mut self, _host: &mut dyn SessionHost) {
        self.stop();
    }

    fn reset_session(&mut self, _host: &mut dyn SessionHost) {
        self.stop();
    }

    fn mouse_down(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        if !event.button.is_primary() || self.is_dragging() {
            return;
        }
        let p = event.position();
        log::trace!("{} stroke starts at {:?}", self.tool.display_name(), p);
        self.stroke = Stroke::Dragging { last: p };
        self.tool.render(host, &self.settings, p);
        self.prepare_retrigger(host);
    }

    fn mouse_up(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        if !event.button.is_primary() || !self.is_dragging() {
            return;
        }
        self.drag_to(host, event.position());
        self.stop();
    }

    fn mouse_move(&mut self, host: &mut dyn SessionHost, event: PointerEvent) {
        host.status().set_coord(event.position());
        self.drag_to(host, event.position());
    }

    fn retrigger(&mut self, host: &mut dyn SessionHost, token: RetriggerToken) {
        if self.retrigger != Some(token) {
            return;
        }
        if let Stroke::Dragging { last } = self.stroke {
            self.tool.render(host, &self.settings, last);
            self.prepare_retrigger(host);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Figure, PointFigure};
    use crate::input::MouseButton;
    use crate::test_support::RecordingHost;

    fn collect(from: Point, to: Point) -> Vec<Point> {
        let mut points = Vec::new();
        scan_segment(from, to, |p| points.push(p));
        points
    }

    /// Records each rendered sample as a point figure.
    struct Dots {
        interval: Option<Duration>,
    }

    impl ContinuousTool for Dots {
        fn display_name(&self) -> &str {
            "Dots"
        }

        fn render(&mut self, host: &mut dyn SessionHost, settings: &ToolSettings, point: Point) {
            host.draw_figure(&PointFigure::new(settings.foreground_color, point).into());
        }

        fn retrigger_interval(&self) -> Option<Duration> {
            self.interval
        }
    }

    fn drawn_points(host: &RecordingHost) -> Vec<Point> {
        host.drawn
            .iter()
            .filter_map(|f| match f {
                Figure::Point(p) => Some(p.position),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_scan_horizontal() {
        assert_eq!(
            collect(Point::new(0, 0), Point::new(3, 0)),
            vec![Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)]
        );
    }

    #[test]
    fn test_scan_zero_length_renders_nothing() {
        assert!(collect(Point::new(4, 4), Point::new(4, 4)).is_empty());
    }

    #[test]
    fn test_scan_steep_negative() {
        assert_eq!(
            collect(Point::new(0, 0), Point::new(-1, -3)),
            vec![Point::new(-1, -1), Point::new(-1, -2), Point::new(-1, -3)]
        );
    }

    #[test]
    fn test_scan_is_connected_and_exact() {
        let targets = [
            Point::new(17, 5),
            Point::new(-9, 23),
            Point::new(3, -40),
            Point::new(-31, -31),
            Point::new(1, 0),
            Point::new(0, -1),
        ];
        let start = Point::new(2, 3);
        for to in targets {
            let points = collect(start, to);
            let major = (to.x - start.x).abs().max((to.y - start.y).abs());
            assert_eq!(points.len() as i32, major, "segment to {:?}", to);
            assert_eq!(points.last(), Some(&to));

            let mut previous = start;
            for p in points {
                assert!(
                    (p.x - previous.x).abs() <= 1 && (p.y - previous.y).abs() <= 1,
                    "gap between {:?} and {:?}",
                    previous,
                    p
                );
                previous = p;
            }
        }
    }

    #[test]
    fn test_drag_renders_every_point() {
        let mut host = RecordingHost::new();
        let mut session = ContinuousPaintSession::new(Dots { interval: None });
        session.mouse_down(&mut host, PointerEvent::left(0, 0));
        session.mouse_move(&mut host, PointerEvent::left(3, 0));
        session.mouse_up(&mut host, PointerEvent::left(3, 2));

        assert_eq!(
            drawn_points(&host),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(3, 1),
                Point::new(3, 2),
            ]
        );
        assert!(!session.is_dragging());
        assert_eq!(host.status.coord(), "(3, 0)");
    }

    #[test]
    fn test_ignores_other_buttons() {
        let mut host = RecordingHost::new();
        let mut session = ContinuousPaintSession::new(Dots { interval: None });
        session.mouse_down(&mut host, PointerEvent::new(MouseButton::Right, 5, 5));
        session.mouse_move(&mut host, PointerEvent::left(8, 5));
        assert!(host.drawn.is_empty());
        assert_eq!(host.status.coord(), "(8, 5)");
    }

    #[test]
    fn test_retrigger_repaints_until_release() {
        let mut host = RecordingHost::new();
        let mut session = ContinuousPaintSession::new(Dots {
            interval: Some(Duration::from_millis(10)),
        });
        session.mouse_down(&mut host, PointerEvent::left(4, 4));
        let first = host.last_token().expect("retrigger scheduled");
        assert_eq!(host.scheduled[0].1, Duration::from_millis(10));

        session.retrigger(&mut host, first);
        assert_eq!(drawn_points(&host), vec![Point::new(4, 4), Point::new(4, 4)]);

        // The first token is stale now.
        session.retrigger(&mut host, first);
        assert_eq!(host.drawn.len(), 2);

        let current = host.last_token().expect("rearmed");
        session.mouse_up(&mut host, PointerEvent::left(4, 4));
        session.retrigger(&mut host, current);
        assert_eq!(host.drawn.len(), 2);
    }

    #[test]
    fn test_end_session_cancels_retrigger() {
        let mut host = RecordingHost::new();
        let mut session = ContinuousPaintSession::new(Dots {
            interval: Some(Duration::from_millis(10)),
        });
        session.mouse_down(&mut host, PointerEvent::left(1, 1));
        let token = host.last_token().expect("retrigger scheduled");
        session.end_session(&mut host);
        session.retrigger(&mut host, token);
        assert_eq!(host.drawn.len(), 1);
        assert!(!session.is_dragging());
    }
}
