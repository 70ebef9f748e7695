//! Text figure.

use super::FigureTrait;
use crate::damage::DamageRegion;
use crate::draw_context::DrawContext;
use crate::geometry::{PixelRect, Point};
use crate::style::{Color, FontSpec};

/// A string anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub color: Color,
    pub font: FontSpec,
    pub text: String,
    pub position: Point,
}

impl Text {
    pub fn new(color: Color, font: FontSpec, text: impl Into<String>, position: Point) -> Self {
        Self {
            color,
            font,
            text: text.into(),
            position,
        }
    }
}

impl FigureTrait for Text {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let p = ctx.to_client_point(self.position.x, self.position.y);
        let target = ctx.target();
        target.set_font(&self.font);
        target.set_foreground(self.color);
        target.draw_text(&self.text, p.x, p.y);
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        let p = ctx.to_client_point(self.position.x, self.position.y);
        let (width, height) = ctx.target_ref().text_extent(&self.font, &self.text);
        region.add(PixelRect::new(p.x, p.y, width, height));
    }
}
