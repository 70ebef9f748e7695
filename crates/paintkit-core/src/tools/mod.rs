//! Tool system: concrete tools, the registry that builds their sessions and
//! the palette that keeps one session per tool.

mod airbrush;
mod pencil;
mod polyline;
mod shapes;

pub use airbrush::{airbrush_sample_count, AirbrushTool, AIRBRUSH_RETRIGGER_INTERVAL};
pub use pencil::PencilTool;
pub use polyline::PolyLineTool;
pub use shapes::{EllipseTool, LineTool, RectangleTool, RoundedRectangleTool};

use crate::render_target::PixelBuffer;
use crate::session::{
    ContinuousPaintSession, DragPaintSession, PaintSession, SegmentedPaintSession,
    TextPaintSession,
};
use crate::settings::ToolSettings;
use crate::surface::PaintSurface;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    Pencil,
    Airbrush,
    Line,
    #[serde(rename = "polyline")]
    PolyLine,
    Rectangle,
    RoundedRectangle,
    Ellipse,
    Text,
}

/// Palette grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    Freehand,
    Line,
    Shape,
    Text,
}

/// One registry entry.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub name: &'static str,
    pub category: ToolCategory,
    pub factory: fn() -> Box<dyn PaintSession>,
}

/// Explicit table of tools; nothing registers itself behind the caller's back.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in tools in palette order.
    pub fn with_default_tools() -> Self {
        let mut registry = Self::new();
        registry.register(ToolDescriptor {
            id: ToolId::Pencil,
            name: "Pencil",
            category: ToolCategory::Freehand,
            factory: || Box::new(ContinuousPaintSession::new(PencilTool)),
        });
        registry.register(ToolDescriptor {
            id: ToolId::Airbrush,
            name: "Airbrush",
            category: ToolCategory::Freehand,
            factory: || Box::new(ContinuousPaintSession::new(AirbrushTool::new())),
        });
        registry.register(ToolDescriptor {
            id: ToolId::Line,
            name: "Line",
            category: ToolCategory::Line,
            factory: || Box::new(DragPaintSession::new(LineTool)),
        });
        registry.register(ToolDescriptor {
            id: ToolId::PolyLine,
            name: "PolyLine",
            category: ToolCategory::Line,
            factory: || Box::new(SegmentedPaintSession::new(PolyLineTool)),
        });
        registry.register(ToolDescriptor {
            id: ToolId::Rectangle,
            name: "Rectangle",
            category: ToolCategory::Shape,
            factory: || Box::new(DragPaintSession::new(RectangleTool)),
        });
        registry.register(ToolDescriptor {
            id: ToolId::RoundedRectangle,
            name: "RoundedRectangle",
            category: ToolCategory::Shape,
            factory: || Box::new(DragPaintSession::new(RoundedRectangleTool)),
        });
        registry.register(ToolDescriptor {
            id: ToolId::Ellipse,
            name: "Ellipse",
            category: ToolCategory::Shape,
            factory: || Box::new(DragPaintSession::new(EllipseTool)),
        });
        registry.register(ToolDescriptor {
            id: ToolId::Text,
            name: "Text",
            category: ToolCategory::Text,
            factory: || Box::new(TextPaintSession::new()),
        });
        registry
    }

    /// Add a tool, replacing any entry with the same id.
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        if let Some(existing) = self.tools.iter_mut().find(|t| t.id == descriptor.id) {
            *existing = descriptor;
        } else {
            self.tools.push(descriptor);
        }
    }

    pub fn get(&self, id: ToolId) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Look a tool up by its display name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Build a fresh session for `id`.
    pub fn create(&self, id: ToolId) -> Option<Box<dyn PaintSession>> {
        self.get(id).map(|t| (t.factory)())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    pub fn in_category(&self, category: ToolCategory) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter().filter(move |t| t.category == category)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Tool selection state: the settings snapshot plus one session per tool.
///
/// Sessions are created on first use and parked while another tool is
/// active, so switching back resumes the same session object.
#[derive(Debug)]
pub struct ToolPalette {
    registry: ToolRegistry,
    parked: HashMap<ToolId, Box<dyn PaintSession>>,
    active: Option<ToolId>,
    settings: ToolSettings,
}

impl ToolPalette {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            parked: HashMap::new(),
            active: None,
            settings: ToolSettings::default(),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn active(&self) -> Option<ToolId> {
        self.active
    }

    /// Make `id` the surface's active session. Returns false for unknown tools.
    pub fn select<B: PixelBuffer>(&mut self, surface: &mut PaintSurface<B>, id: ToolId) -> bool {
        if self.active == Some(id) {
            surface.update_settings(&self.settings);
            return true;
        }
        let session = match self.parked.remove(&id) {
            Some(session) => session,
            None => match self.registry.create(id) {
                Some(session) => session,
                None => {
                    log::warn!("Tool {:?} is not registered", id);
                    return false;
                }
            },
        };
        self.install(surface, Some(session));
        self.active = Some(id);
        true
    }

    /// Detach the active session, leaving the surface without a tool.
    pub fn deselect<B: PixelBuffer>(&mut self, surface: &mut PaintSurface<B>) {
        self.install(surface, None);
        self.active = None;
    }

    /// Replace the settings snapshot and push it to the active session.
    pub fn apply_settings<B: PixelBuffer>(
        &mut self,
        surface: &mut PaintSurface<B>,
        settings: ToolSettings,
    ) {
        self.settings = settings;
        surface.update_settings(&self.settings);
    }

    fn install<B: PixelBuffer>(
        &mut self,
        surface: &mut PaintSurface<B>,
        mut session: Option<Box<dyn PaintSession>>,
    ) {
        if let Some(session) = session.as_mut() {
            session.set(&self.settings);
        }
        let previous = surface.set_paint_session(session);
        if let (Some(previous), Some(previous_id)) = (previous, self.active) {
            self.parked.insert(previous_id, previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingTarget;

    #[test]
    fn test_default_registry() {
        let registry = ToolRegistry::with_default_tools();
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.in_category(ToolCategory::Shape).count(), 3);
        let session = registry.create(ToolId::Airbrush).expect("airbrush");
        assert_eq!(session.display_name(), "Airbrush");
        assert_eq!(
            registry.find_by_name("polyline").map(|t| t.id),
            Some(ToolId::PolyLine)
        );
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = ToolRegistry::with_default_tools();
        registry.register(ToolDescriptor {
            id: ToolId::Text,
            name: "Label",
            category: ToolCategory::Text,
            factory: || Box::new(TextPaintSession::new()),
        });
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.get(ToolId::Text).map(|t| t.name), Some("Label"));
    }

    #[test]
    fn test_tool_id_serde_names() {
        assert_eq!(
            serde_json::to_string(&ToolId::PolyLine).expect("serialize"),
            "\"polyline\""
        );
        let id: ToolId = serde_json::from_str("\"rounded_rectangle\"").expect("deserialize");
        assert_eq!(id, ToolId::RoundedRectangle);
    }

    #[test]
    fn test_palette_switches_sessions() {
        let mut surface = PaintSurface::new(RecordingTarget::new(64, 64));
        let mut palette = ToolPalette::new(ToolRegistry::with_default_tools());

        assert!(palette.select(&mut surface, ToolId::Rectangle));
        assert_eq!(surface.status().action(), "Rectangle");
        assert_eq!(surface.status().message(), "Drag to define the shape");

        assert!(palette.select(&mut surface, ToolId::Pencil));
        assert_eq!(surface.status().action(), "Pencil");
        assert_eq!(palette.active(), Some(ToolId::Pencil));

        palette.deselect(&mut surface);
        assert_eq!(surface.status().action(), "None");
        assert!(surface.paint_session().is_none());
    }
}
