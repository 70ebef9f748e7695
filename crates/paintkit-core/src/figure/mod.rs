//! Figures: immutable, replayable descriptions of drawn shapes.

mod container;
mod ellipse;
mod line;
mod point;
mod polygon;
mod rectangle;
mod text;

pub use container::Container;
pub use ellipse::{Ellipse, SolidEllipse};
pub use line::Line;
pub use point::PointFigure;
pub use polygon::SolidPolygon;
pub use rectangle::{Rectangle, RoundedRectangle, SolidRectangle, SolidRoundedRectangle};
pub use text::Text;

use crate::damage::DamageRegion;
use crate::draw_context::DrawContext;

/// Common behaviour of all figures.
///
/// `draw` and `add_damaged_region` must go through the same
/// [`DrawContext`] transform so the damage always covers what was painted.
pub trait FigureTrait {
    /// Paint the figure through the context's render target.
    fn draw(&self, ctx: &mut DrawContext<'_>);

    /// Union the device-space bounds of the figure into `region`.
    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion);
}

/// Closed set of figure kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Point(PointFigure),
    Line(Line),
    Rectangle(Rectangle),
    RoundedRectangle(RoundedRectangle),
    Ellipse(Ellipse),
    SolidRectangle(SolidRectangle),
    SolidRoundedRectangle(SolidRoundedRectangle),
    SolidEllipse(SolidEllipse),
    SolidPolygon(SolidPolygon),
    Text(Text),
    Container(Container),
}

impl Figure {
    pub fn draw(&self, ctx: &mut DrawContext<'_>) {
        match self {
            Figure::Point(f) => f.draw(ctx),
            Figure::Line(f) => f.draw(ctx),
            Figure::Rectangle(f) => f.draw(ctx),
            Figure::RoundedRectangle(f) => f.draw(ctx),
            Figure::Ellipse(f) => f.draw(ctx),
            Figure::SolidRectangle(f) => f.draw(ctx),
            Figure::SolidRoundedRectangle(f) => f.draw(ctx),
            Figure::SolidEllipse(f) => f.draw(ctx),
            Figure::SolidPolygon(f) => f.draw(ctx),
            Figure::Text(f) => f.draw(ctx),
            Figure::Container(f) => f.draw(ctx),
        }
    }

    pub fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        match self {
            Figure::Point(f) => f.add_damaged_region(ctx, region),
            Figure::Line(f) => f.add_damaged_region(ctx, region),
            Figure::Rectangle(f) => f.add_damaged_region(ctx, region),
            Figure::RoundedRectangle(f) => f.add_damaged_region(ctx, region),
            Figure::Ellipse(f) => f.add_damaged_region(ctx, region),
            Figure::SolidRectangle(f) => f.add_damaged_region(ctx, region),
            Figure::SolidRoundedRectangle(f) => f.add_damaged_region(ctx, region),
            Figure::SolidEllipse(f) => f.add_damaged_region(ctx, region),
            Figure::SolidPolygon(f) => f.add_damaged_region(ctx, region),
            Figure::Text(f) => f.add_damaged_region(ctx, region),
            Figure::Container(f) => f.add_damaged_region(ctx, region),
        }
    }

    /// Check if this figure is a container.
    pub fn is_container(&self) -> bool {
        matches!(self, Figure::Container(_))
    }

    /// Get the container if this figure is one.
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Figure::Container(c) => Some(c),
            _ => None,
        }
    }
}

impl FigureTrait for Figure {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        Figure::draw(self, ctx)
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        Figure::add_damaged_region(self, ctx, region)
    }
}

macro_rules! impl_from_figure {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Figure {
                fn from(figure: $ty) -> Self {
                    Figure::$variant(figure)
                }
            }
        )*
    };
}

impl_from_figure!(
    Point(PointFigure),
    Line(Line),
    Rectangle(Rectangle),
    RoundedRectangle(RoundedRectangle),
    Ellipse(Ellipse),
    SolidRectangle(SolidRectangle),
    SolidRoundedRectangle(SolidRoundedRectangle),
    SolidEllipse(SolidEllipse),
    SolidPolygon(SolidPolygon),
    Text(Text),
    Container(Container),
);
