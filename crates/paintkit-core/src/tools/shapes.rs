//! Drag tools: line and the two-corner shapes.

use crate::figure::{
    Container, Ellipse, Figure, Line, Rectangle, RoundedRectangle, SolidEllipse, SolidRectangle,
    SolidRoundedRectangle,
};
use crate::geometry::Point;
use crate::session::DragTool;
use crate::settings::ToolSettings;
use crate::style::{Color, FillType};

/// Apply the fill type: outline only, a body in the background color, or
/// that body under a foreground outline.
fn with_fill(
    settings: &ToolSettings,
    outline: impl FnOnce() -> Figure,
    solid: impl Fn(Color) -> Figure,
) -> Figure {
    match settings.fill_type {
        FillType::None => outline(),
        FillType::Solid => solid(settings.background_color),
        FillType::Outline => {
            let mut container = Container::new();
            container.add(solid(settings.background_color));
            container.add(outline());
            container.into()
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineTool;

impl DragTool for LineTool {
    fn display_name(&self) -> &str {
        "Line"
    }

    fn create_figure(&self, settings: &ToolSettings, anchor: Point, cursor: Point) -> Figure {
        Line::new(
            settings.foreground_color,
            settings.background_color,
            settings.line_style,
            anchor,
            cursor,
        )
        .into()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleTool;

impl DragTool for RectangleTool {
    fn display_name(&self) -> &str {
        "Rectangle"
    }

    fn create_figure(&self, settings: &ToolSettings, anchor: Point, cursor: Point) -> Figure {
        with_fill(
            settings,
            || {
                Rectangle::new(
                    settings.foreground_color,
                    settings.background_color,
                    settings.line_style,
                    anchor,
                    cursor,
                )
                .into()
            },
            |color| SolidRectangle::new(color, anchor, cursor).into(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoundedRectangleTool;

impl DragTool for RoundedRectangleTool {
    fn display_name(&self) -> &str {
        "RoundedRectangle"
    }

    fn create_figure(&self, settings: &ToolSettings, anchor: Point, cursor: Point) -> Figure {
        let diameter = settings.corner_diameter;
        with_fill(
            settings,
            || {
                RoundedRectangle::new(
                    settings.foreground_color,
                    settings.background_color,
                    settings.line_style,
                    anchor,
                    cursor,
                    diameter,
                )
                .into()
            },
            |color| SolidRoundedRectangle::new(color, anchor, cursor, diameter).into(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EllipseTool;

impl DragTool for EllipseTool {
    fn display_name(&self) -> &str {
        "Ellipse"
    }

    fn create_figure(&self, settings: &ToolSettings, anchor: Point, cursor: Point) -> Figure {
        with_fill(
            settings,
            || {
                Ellipse::new(
                    settings.foreground_color,
                    settings.background_color,
                    settings.line_style,
                    anchor,
                    cursor,
                )
                .into()
            },
            |color| SolidEllipse::new(color, anchor, cursor).into(),
        )
    }
}
