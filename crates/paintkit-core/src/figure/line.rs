//! Straight line figure.

use super::FigureTrait;
use crate::damage::DamageRegion;
use crate::draw_context::DrawContext;
use crate::geometry::Point;
use crate::style::{Color, LineStyle};

/// A line segment. The background color fills the gaps of non-solid styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub foreground: Color,
    pub background: Color,
    pub line_style: LineStyle,
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(
        foreground: Color,
        background: Color,
        line_style: LineStyle,
        start: Point,
        end: Point,
    ) -> Self {
        Self {
            foreground,
            background,
            line_style,
            start,
            end,
        }
    }
}

impl FigureTrait for Line {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let p1 = ctx.to_client_point(self.start.x, self.start.y);
        let p2 = ctx.to_client_point(self.end.x, self.end.y);
        let target = ctx.target();
        target.set_foreground(self.foreground);
        target.set_background(self.background);
        target.set_line_style(self.line_style);
        target.draw_line(p1.x, p1.y, p2.x, p2.y);
        target.set_line_style(LineStyle::Solid);
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        region.add(ctx.to_client_rectangle(self.start.x, self.start.y, self.end.x, self.end.y));
    }
}
