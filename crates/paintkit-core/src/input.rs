//! Pointer events delivered by the host.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
    Other(u16),
}

impl MouseButton {
    /// Map a toolkit button number (1 = left, 2 = middle, 3 = right).
    pub fn from_index(index: u16) -> Self {
        match index {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }

    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// A pointer event: which button and where.
///
/// The host delivers device coordinates; the paint surface rewrites them to
/// virtual image coordinates before a session sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub button: MouseButton,
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub fn new(button: MouseButton, x: i32, y: i32) -> Self {
        Self { button, x, y }
    }

    /// Left-button event, the common case.
    pub fn left(x: i32, y: i32) -> Self {
        Self::new(MouseButton::Left, x, y)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn with_position(self, position: Point) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_from_index() {
        assert_eq!(MouseButton::from_index(1), MouseButton::Left);
        assert_eq!(MouseButton::from_index(2), MouseButton::Middle);
        assert_eq!(MouseButton::from_index(3), MouseButton::Right);
        assert_eq!(MouseButton::from_index(8), MouseButton::Other(8));
        assert!(MouseButton::Left.is_primary());
        assert!(!MouseButton::Right.is_primary());
    }

    #[test]
    fn test_with_position() {
        let event = PointerEvent::new(MouseButton::Right, 1, 2).with_position(Point::new(7, 9));
        assert_eq!(event.button, MouseButton::Right);
        assert_eq!(event.position(), Point::new(7, 9));
    }
}
