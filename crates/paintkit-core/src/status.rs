//! Status line shown below the paint surface.

use crate::geometry::Point;

/// Action, message and coordinate labels combined into one status string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    action: String,
    message: String,
    coord: String,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the active tool.
    pub fn set_action(&mut self, action: impl Into<String>) {
        self.action = action.into();
    }

    /// Hint for the current interaction.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    pub fn set_coord(&mut self, p: Point) {
        self.coord = format!("({}, {})", p.x, p.y);
    }

    pub fn set_coord_range(&mut self, from: Point, to: Point) {
        self.coord = format!("({}, {}) - ({}, {})", from.x, from.y, to.x, to.y);
    }

    pub fn clear_coord(&mut self) {
        self.coord.clear();
    }

    pub fn clear(&mut self) {
        self.action.clear();
        self.message.clear();
        self.coord.clear();
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn coord(&self) -> &str {
        &self.coord
    }

    /// Non-empty labels joined by two spaces.
    pub fn text(&self) -> String {
        [&self.action, &self.message, &self.coord]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("  ")
    }
}
