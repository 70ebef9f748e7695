//! Integer pixel geometry.

use serde::{Deserialize, Serialize};

/// A point on the integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle of whole pixels: `x..x + width`, `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing both corner pixels (inclusive).
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs() + 1, (a.y - b.y).abs() + 1)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        other.is_empty()
            || (other.x >= self.x
                && other.y >= self.y
                && other.right() <= self.right()
                && other.bottom() <= self.bottom())
    }

    /// Bounding rectangle of both. Empty operands are ignored.
    pub fn union(&self, other: &PixelRect) -> PixelRect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        PixelRect::new(x, y, right - x, bottom - y)
    }

    /// Overlap of both, `None` when they do not overlap.
    pub fn intersect(&self, other: &PixelRect) -> Option<PixelRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let rect = PixelRect::new(x, y, right - x, bottom - y);
        (!rect.is_empty()).then_some(rect)
    }

    pub fn translate(&self, dx: i32, dy: i32) -> PixelRect {
        PixelRect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_is_inclusive() {
        let rect = PixelRect::from_corners(Point::new(5, 8), Point::new(2, 3));
        assert_eq!(rect, PixelRect::new(2, 3, 4, 6));
        assert!(rect.contains(5, 8));
        assert!(!rect.contains(6, 8));
    }

    #[test]
    fn test_union_ignores_empty() {
        let a = PixelRect::new(0, 0, 10, 10);
        assert_eq!(a.union(&PixelRect::default()), a);
        assert_eq!(PixelRect::default().union(&a), a);
        let b = PixelRect::new(20, -5, 5, 5);
        assert_eq!(a.union(&b), PixelRect::new(0, -5, 25, 15));
    }

    #[test]
    fn test_intersect() {
        let a = PixelRect::new(0, 0, 10, 10);
        let b = PixelRect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(PixelRect::new(5, 5, 5, 5)));
        assert_eq!(a.intersect(&PixelRect::new(10, 0, 5, 5)), None);
    }

    #[test]
    fn test_contains_rect() {
        let outer = PixelRect::new(0, 0, 10, 10);
        assert!(outer.contains_rect(&PixelRect::new(2, 2, 8, 8)));
        assert!(!outer.contains_rect(&PixelRect::new(2, 2, 9, 8)));
    }
}
