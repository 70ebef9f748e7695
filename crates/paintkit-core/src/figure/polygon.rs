//! Filled polygon figure.

use super::FigureTrait;
use crate::damage::DamageRegion;
use crate::draw_context::DrawContext;
use crate::geometry::Point;
use crate::style::Color;

/// Filled polygon. Fewer than three vertices draw and damage nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidPolygon {
    pub color: Color,
    pub points: Vec<Point>,
}

impl SolidPolygon {
    pub fn new(color: Color, points: Vec<Point>) -> Self {
        Self { color, points }
    }

    fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }
}

impl FigureTrait for SolidPolygon {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        if self.is_degenerate() {
            return;
        }
        let client: Vec<Point> = self
            .points
            .iter()
            .map(|p| ctx.to_client_point(p.x, p.y))
            .collect();
        let target = ctx.target();
        target.set_background(self.color);
        target.fill_polygon(&client);
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        if self.is_degenerate() {
            return;
        }
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
        let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        region.add(ctx.to_client_rectangle(min_x, min_y, max_x, max_y));
    }
}
