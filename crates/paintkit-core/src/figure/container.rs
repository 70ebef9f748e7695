//! Ordered composite of figures.

use super::{Figure, FigureTrait};
use crate::damage::DamageRegion;
use crate::draw_context::DrawContext;

/// Ordered list of child figures; later children paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    children: Vec<Figure>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child on top of the existing ones.
    pub fn add(&mut self, figure: impl Into<Figure>) {
        self.children.push(figure.into());
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Drop all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn children(&self) -> &[Figure] {
        &self.children
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Figure> {
        self.children.iter()
    }
}

impl FigureTrait for Container {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        for child in &self.children {
            child.draw(ctx);
        }
    }

    fn add_damaged_region(&self, ctx: &DrawContext<'_>, region: &mut DamageRegion) {
        for child in &self.children {
            child.add_damaged_region(ctx, region);
        }
    }
}

impl FromIterator<Figure> for Container {
    fn from_iter<I: IntoIterator<Item = Figure>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Figure;
    type IntoIter = std::slice::Iter<'a, Figure>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::PointFigure;
    use crate::geometry::Point;
    use crate::style::Color;

    #[test]
    fn test_add_and_clear() {
        let mut container = Container::new();
        assert!(container.is_empty());
        container.add(PointFigure::new(Color::BLACK, Point::new(1, 1)));
        container.add(PointFigure::new(Color::WHITE, Point::new(2, 2)));
        assert_eq!(container.len(), 2);
        assert_eq!(
            container.children()[1],
            Figure::Point(PointFigure::new(Color::WHITE, Point::new(2, 2)))
        );
        container.clear();
        assert!(container.is_empty());
    }

    #[test]
    fn test_nested_containers() {
        let mut inner = Container::new();
        inner.add(PointFigure::new(Color::BLACK, Point::new(0, 0)));
        let mut outer = Container::new();
        outer.add(inner);
        outer.add(PointFigure::new(Color::BLACK, Point::new(5, 5)));
        assert_eq!(outer.len(), 2);
        assert!(outer.children()[0].is_container());
        assert_eq!(outer.children()[0].as_container().map(Container::len), Some(1));
    }
}
