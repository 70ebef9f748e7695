//! Click-by-click polyline and polygon tool.

use crate::figure::{Container, Figure, Line, SolidPolygon};
use crate::geometry::Point;
use crate::session::SegmentedTool;
use crate::settings::ToolSettings;
use crate::style::FillType;

#[derive(Debug, Clone, Copy, Default)]
pub struct PolyLineTool;

impl SegmentedTool for PolyLineTool {
    fn display_name(&self) -> &str {
        "PolyLine"
    }

    fn create_figure(&self, settings: &ToolSettings, points: &[Point], closed: bool) -> Figure {
        let mut container = Container::new();
        let fill = settings.fill_type;

        if closed && fill != FillType::None && points.len() >= 3 {
            container.add(SolidPolygon::new(settings.background_color, points.to_vec()));
        }

        if !closed || fill != FillType::Solid || points.len() < 3 {
            let line = |start: Point, end: Point| {
                Line::new(
                    settings.foreground_color,
                    settings.background_color,
                    settings.line_style,
                    start,
                    end,
                )
            };
            for pair in points.windows(2) {
                container.add(line(pair[0], pair[1]));
            }
            if closed {
                if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                    container.add(line(last, first));
                }
            }
        }
        container.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(10, 5),
            Point::new(10, 15),
            Point::new(0, 15),
        ]
    }

    fn settings(fill_type: FillType) -> ToolSettings {
        ToolSettings {
            fill_type,
            foreground_color: Color::rgb(1, 2, 3),
            background_color: Color::rgb(4, 5, 6),
            ..ToolSettings::default()
        }
    }

    fn children(figure: &Figure) -> &[Figure] {
        figure.as_container().expect("container").children()
    }

    #[test]
    fn test_open_preview_is_lines_only() {
        let figure = PolyLineTool.create_figure(&settings(FillType::Solid), &square(), false);
        let children = children(&figure);
        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|f| matches!(f, Figure::Line(_))));
    }

    #[test]
    fn test_closed_outline_adds_closing_line() {
        let figure = PolyLineTool.create_figure(&settings(FillType::None), &square(), true);
        let children = children(&figure);
        assert_eq!(children.len(), 4);
        match &children[3] {
            Figure::Line(line) => {
                assert_eq!(line.start, Point::new(0, 15));
                assert_eq!(line.end, Point::new(0, 0));
            }
            other => panic!("unexpected figure {:?}", other),
        }
    }

    #[test]
    fn test_closed_solid_is_polygon_only() {
        let figure = PolyLineTool.create_figure(&settings(FillType::Solid), &square(), true);
        match children(&figure) {
            [Figure::SolidPolygon(polygon)] => {
                assert_eq!(polygon.points, square());
                assert_eq!(polygon.color, Color::rgb(4, 5, 6));
            }
            other => panic!("unexpected children {:?}", other),
        }
    }

    #[test]
    fn test_closed_outline_fill_uses_background() {
        let figure = PolyLineTool.create_figure(&settings(FillType::Outline), &square(), true);
        let children = children(&figure);
        assert_eq!(children.len(), 5);
        match &children[0] {
            Figure::SolidPolygon(polygon) => assert_eq!(polygon.color, Color::rgb(4, 5, 6)),
            other => panic!("unexpected figure {:?}", other),
        }
    }

    #[test]
    fn test_two_point_solid_falls_back_to_lines() {
        let points = [Point::new(0, 0), Point::new(5, 5)];
        let figure = PolyLineTool.create_figure(&settings(FillType::Solid), &points, true);
        assert_eq!(children(&figure).len(), 2);
    }
}
