//! Rectangle figures, outlined and solid, with square or rounded corners.

use super::FigureTrait;
use crate::damage::DamageRegion;
use crate::draw_context::DrawContext;
use crate::geometry::{PixelRect, Point};
use crate::style::{Color, LineStyle};

fn client_rect(ctx: &DrawContext<'_>, a: Point, b: Point) -> PixelRect {
    ctx.to_client_rectangle(a.x, a.y, b.x, b.y)
}

/// Rectangle outline between two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub foreground: Color,
    pub background: Color,
    pub line_style: LineStyle,
    pub corner1: Point,
    pub corner2: Point,
}

impl Rectangle {
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

impl FigureTrait for Rectangle {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let r = client_rect(ctx, self.corner1, self.corner2);
        let target = ctx.target();
        target.set_foreground(self.foreground);
        target.set_background(self.background);
        target.set_line_style(self.line_style);
        target.draw_rectangle(r.x, r.y, r.width - 1, r.height - 1);
        target.set_line_style(LineStyle::Solid);
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        region.add(client_rect(ctx, self.corner1, self.corner2));
    }
}

/// Rectangle outline with rounded corners of the given diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRectangle {
    pub foreground: Color,
    pub background: Color,
    pub line_style: LineStyle,
    pub corner1: Point,
    pub corner2: Point,
    pub diameter: i32,
}

impl RoundedRectangle {
    pub fn new(
        foreground: Color,
        background: Color,
        line_style: LineStyle,
        corner1: Point,
        corner2: Point,
        diameter: i32,
    ) -> Self {
        Self {
            foreground,
            background,
            line_style,
            corner1,
            corner2,
            diameter,
        }
    }
}

impl FigureTrait for RoundedRectangle {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let r = client_rect(ctx, self.corner1, self.corner2);
        let transform = ctx.transform();
        let target = ctx.target();
        target.set_foreground(self.foreground);
        target.set_background(self.background);
        target.set_line_style(self.line_style);
        target.draw_round_rectangle(
            r.x,
            r.y,
            r.width - 1,
            r.height - 1,
            self.diameter * transform.x_scale,
            self.diameter * transform.y_scale,
        );
        target.set_line_style(LineStyle::Solid);
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        region.add(client_rect(ctx, self.corner1, self.corner2));
    }
}

/// Filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidRectangle {
    pub color: Color,
    pub corner1: Point,
    pub corner2: Point,
}

impl SolidRectangle {
    pub fn new(color: Color, corner1: Point, corner2: Point) -> Self {
        Self {
            color,
            corner1,
            corner2,
        }
    }
}

impl FigureTrait for SolidRectangle {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let r = client_rect(ctx, self.corner1, self.corner2);
        let target = ctx.target();
        target.set_background(self.color);
        target.fill_rectangle(r.x, r.y, r.width, r.height);
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        region.add(client_rect(ctx, self.corner1, self.corner2));
    }
}

/// Filled rectangle with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidRoundedRectangle {
    pub color: Color,
    pub corner1: Point,
    pub corner2: Point,
    pub diameter: i32,
}

impl SolidRoundedRectangle {
    pub fn new(color: Color, corner1: Point, corner2: Point, diameter: i32) -> Self {
        Self {
            color,
            corner1,
            corner2,
            diameter,
        }
    }
}

impl FigureTrait for SolidRoundedRectangle {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let r = client_rect(ctx, self.corner1, self.corner2);
        let transform = ctx.transform();
        let target = ctx.target();
        target.set_background(self.color);
        target.fill_round_rectangle(
            r.x,
            r.y,
            r.width,
            r.height,
            self.diameter * transform.x_scale,
            self.diameter * transform.y_scale,
        );
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        region.add(client_rect(ctx, self.corner1, self.corner2));
    }
}
