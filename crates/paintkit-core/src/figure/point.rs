//! Single-pixel figure.

use super::FigureTrait;
use crate::damage::DamageRegion;
use crate::draw_context::DrawContext;
use crate::geometry::Point;
use crate::style::Color;

/// One pixel, drawn as a `x_scale` by `y_scale` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointFigure {
    pub color: Color,
    pub position: Point,
}

impl PointFigure {
    pub fn new(color: Color, position: Point) -> Self {
        Self { color, position }
    }
}

impl FigureTrait for PointFigure {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let p = ctx.to_client_point(self.position.x, self.position.y);
        let transform = ctx.transform();
        let target = ctx.target();
        target.set_background(self.color);
        target.fill_rectangle(p.x, p.y, transform.x_scale, transform.y_scale);
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        let Point { x, y } = self.position;
        region.add(ctx.to_client_rectangle(x, y, x, y));
    }
}
