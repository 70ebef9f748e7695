//! Ellipse figures inscribed in a corner-to-corner box.

use super::FigureTrait;
use crate::damage::DamageRegion;
use crate::draw_context::DrawContext;
use crate::geometry::Point;
use crate::style::{Color, LineStyle};

/// Ellipse outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub foreground: Color,
    pub background: Color,
    pub line_style: LineStyle,
    pub corner1: Point,
    pub corner2: Point,
}

impl Ellipse {
    pub fn new(
        foreground: Color,
        background: Color,
        line_style: LineStyle,
        corner1: Point,
        corner2: Point,
    ) -> Self {
        Self {
            foreground,
            background,
            line_style,
            corner1,
            corner2,
        }
    }
}

impl FigureTrait for Ellipse {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let r = ctx.to_client_rectangle(self.corner1.x, self.corner1.y, self.corner2.x, self.corner2.y);
        let target = ctx.target();
        target.set_foreground(self.foreground);
        target.set_background(self.background);
        target.set_line_style(self.line_style);
        target.draw_oval(r.x, r.y, r.width - 1, r.height - 1);
        target.set_line_style(LineStyle::Solid);
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        region.add(ctx.to_client_rectangle(
            self.corner1.x,
            self.corner1.y,
            self.corner2.x,
            self.corner2.y,
        ));
    }
}

/// Filled ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidEllipse {
    pub color: Color,
    pub corner1: Point,
    pub corner2: Point,
}

impl SolidEllipse {
    pub fn new(color: Color, corner1: Point, corner2: Point) -> Self {
        Self {
            color,
            corner1,
            corner2,
        }
    }
}

impl FigureTrait for SolidEllipse {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let r = ctx.to_client_rectangle(self.corner1.x, self.corner1.y, self.corner2.x, self.corner2.y);
        let target = ctx.target();
        target.set_background(self.color);
        target.fill_oval(r.x, r.y, r.width, r.height);
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        region.add(ctx.to_client_rectangle(
            self.corner1.x,
            self.corner1.y,
            self.corner2.x,
            self.corner2.y,
        ));
    }
}
