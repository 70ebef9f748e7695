//! Spray-can tool.

use crate::figure::{Container, Figure, PointFigure};
use crate::geometry::Point;
use crate::session::{ContinuousTool, SessionHost};
use crate::settings::{ToolSettings, MAX_AIRBRUSH_INTENSITY, MAX_AIRBRUSH_RADIUS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// How often a held airbrush sprays again without moving.
pub const AIRBRUSH_RETRIGGER_INTERVAL: Duration = Duration::from_millis(10);

/// Points per spray: the disc area scaled by intensity, at least one.
///
/// Radius and intensity are clamped to the ranges settings validation
/// accepts.
pub fn airbrush_sample_count(radius: u32, intensity: u32) -> usize {
    if intensity == 0 {
        return 0;
    }
    let radius = u64::from(radius.min(MAX_AIRBRUSH_RADIUS));
    let intensity = u64::from(intensity.min(MAX_AIRBRUSH_INTENSITY));
    let count = 314 * radius * radius * intensity / 250_000;
    count.max(1) as usize
}

/// Sprays random points inside a disc around the pointer.
#[derive(Debug, Clone)]
pub struct AirbrushTool {
    rng: StdRng,
}

impl AirbrushTool {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic spray pattern.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One spray of `count` points strictly inside the radius.
    ///
    /// The radius is clamped to `1..=MAX_AIRBRUSH_RADIUS`.
    pub fn spray(&mut self, center: Point, radius: u32, count: usize) -> Vec<Point> {
        let r = radius.clamp(1, MAX_AIRBRUSH_RADIUS) as i32;
        let limit = i64::from(r) * i64::from(r);
        let mut points = Vec::with_capacity(count);
        while points.len() < count {
            let dx = self.rng.gen_range(-(r - 1)..=r - 1);
            let dy = self.rng.gen_range(-(r - 1)..=r - 1);
            let (dx2, dy2) = (i64::from(dx) * i64::from(dx), i64::from(dy) * i64::from(dy));
            if dx2 + dy2 < limit {
                points.push(center.offset(dx, dy));
            }
        }
        points
    }
}

impl Default for AirbrushTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ContinuousTool for AirbrushTool {
    fn display_name(&self) -> &str {
        "Airbrush"
    }

    fn render(&mut self, host: &mut dyn SessionHost, settings: &ToolSettings, point: Point) {
        let count = airbrush_sample_count(settings.airbrush_radius, settings.airbrush_intensity);
        if count == 0 {
            return;
        }
        let color = settings.foreground_color;
        let spray: Container = self
            .spray(point, settings.airbrush_radius, count)
            .into_iter()
            .map(|p| Figure::from(PointFigure::new(color, p)))
            .collect();
        host.draw_figure(&spray.into());
    }

    fn retrigger_interval(&self) -> Option<Duration> {
        Some(AIRBRUSH_RETRIGGER_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerEvent;
    use crate::session::{ContinuousPaintSession, PaintSession};
    use crate::test_support::RecordingHost;

    #[test]
    fn test_sample_count() {
        assert_eq!(airbrush_sample_count(10, 50), 6);
        assert_eq!(airbrush_sample_count(1, 1), 1);
        assert_eq!(airbrush_sample_count(10, 0), 0);
        assert_eq!(airbrush_sample_count(40, 100), 200);
    }

    #[test]
    fn test_large_radius_is_clamped() {
        assert_eq!(
            airbrush_sample_count(50_000, 1),
            airbrush_sample_count(MAX_AIRBRUSH_RADIUS, 1)
        );
        assert_eq!(airbrush_sample_count(MAX_AIRBRUSH_RADIUS, 100), 125_600);

        let center = Point::new(0, 0);
        let points = AirbrushTool::with_seed(3).spray(center, 50_000, 3);
        assert_eq!(points.len(), 3);
        let limit = i64::from(MAX_AIRBRUSH_RADIUS).pow(2);
        for p in points {
            let (dx, dy) = (i64::from(p.x), i64::from(p.y));
            assert!(dx * dx + dy * dy < limit, "{:?} outside clamped radius", p);
        }
    }

    #[test]
    fn test_spray_stays_inside_disc() {
        let mut tool = AirbrushTool::with_seed(7);
        let center = Point::new(50, 50);
        let points = tool.spray(center, 10, 500);
        assert_eq!(points.len(), 500);
        for p in points {
            let (dx, dy) = (p.x - center.x, p.y - center.y);
            assert!(dx * dx + dy * dy < 100, "{:?} outside radius", p);
        }
    }

    #[test]
    fn test_seeded_spray_is_repeatable() {
        let a = AirbrushTool::with_seed(42).spray(Point::ZERO, 5, 20);
        let b = AirbrushTool::with_seed(42).spray(Point::ZERO, 5, 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_draws_one_container() {
        let mut host = RecordingHost::new();
        let mut session = ContinuousPaintSession::new(AirbrushTool::with_seed(1));
        let settings = ToolSettings {
            airbrush_radius: 10,
            airbrush_intensity: 50,
            ..ToolSettings::default()
        };
        session.set(&settings);
        session.mouse_down(&mut host, PointerEvent::left(20, 20));

        match &host.drawn[..] {
            [Figure::Container(spray)] => assert_eq!(spray.len(), 6),
            other => panic!("unexpected figures {:?}", other),
        }
        assert_eq!(host.scheduled[0].1, AIRBRUSH_RETRIGGER_INTERVAL);
    }
}
