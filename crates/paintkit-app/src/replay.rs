//! Drives a [`PaintSurface`] from a [`Script`].

use crate::error::{AppError, AppResult};
use crate::script::{Script, Step};
use paintkit_core::session::{SegmentedPaintSession, SpuriousClickFilter};
use paintkit_core::tools::PolyLineTool;
use paintkit_core::{
    Clock, ManualClock, PaintSurface, PointerEvent, ToolCategory, ToolDescriptor, ToolId,
    ToolPalette, ToolRegistry,
};
use paintkit_render::{FontBook, RasterImage};
use std::sync::Arc;
use std::time::Duration;

/// Headless host: a raster-backed surface, a palette and virtual time.
pub struct Replay {
    surface: PaintSurface<RasterImage>,
    palette: ToolPalette,
    clock: ManualClock,
}

impl Replay {
    /// Build the surface described by the script header.
    pub fn new(script: &Script) -> AppResult<Self> {
        script.settings.validate()?;

        let mut fonts = FontBook::new();
        for font in &script.fonts {
            fonts.load_file(font.family.clone(), &font.path)?;
            log::info!("Loaded font {} from {}", font.family, font.path.display());
        }

        let image = RasterImage::new(script.width, script.height, script.background)?
            .with_fonts(Arc::new(fonts));
        let (vw, vh) = script
            .viewport
            .map_or((script.width, script.height), |v| (v.width, v.height));

        let clock = ManualClock::new();
        let mut surface = PaintSurface::with_viewport(image, vw, vh).with_clock(clock.clone());
        let mut palette = ToolPalette::new(registry_for(script.click_filter));
        palette.apply_settings(&mut surface, script.settings.clone());

        Ok(Self {
            surface,
            palette,
            clock,
        })
    }

    pub fn surface(&self) -> &PaintSurface<RasterImage> {
        &self.surface
    }

    pub fn palette(&self) -> &ToolPalette {
        &self.palette
    }

    /// Apply one step and bring the viewport up to date.
    pub fn step(&mut self, step: &Step) -> AppResult<()> {
        log::trace!("step {:?}", step);
        match *step {
            Step::SelectTool { tool } => {
                if !self.palette.select(&mut self.surface, tool) {
                    return Err(AppError::UnknownTool(format!("{:?}", tool)));
                }
            }
            Step::MouseDown { x, y, button } => {
                self.surface.mouse_down(PointerEvent::new(button, x, y));
            }
            Step::MouseUp { x, y, button } => {
                self.surface.mouse_up(PointerEvent::new(button, x, y));
            }
            Step::MouseMove { x, y, button } => {
                self.surface.mouse_move(PointerEvent::new(button, x, y));
            }
            Step::Click { x, y, button } => {
                let event = PointerEvent::new(button, x, y);
                self.surface.mouse_down(event);
                self.surface.mouse_up(event);
            }
            Step::DoubleClick { x, y, button } => {
                let event = PointerEvent::new(button, x, y);
                self.surface.mouse_down(event);
                self.surface.mouse_up(event);
                self.surface.mouse_down(event);
                self.surface.mouse_double_click(event);
            }
            Step::ScrollTo { x, y } => self.surface.scroll_to(x, y),
            Step::Resize { width, height } => self.surface.resize(width, height),
            Step::Wait { ms } => self.wait(Duration::from_millis(ms)),
            Step::Settings { ref settings } => {
                settings.validate()?;
                self.palette
                    .apply_settings(&mut self.surface, settings.clone());
            }
            Step::Reset => self.surface.reset_session(),
        }
        self.surface.process_paint_events();
        Ok(())
    }

    /// Advance virtual time by `duration`, stopping at every timer deadline
    /// on the way.
    pub fn wait(&mut self, duration: Duration) {
        let target = self.clock.now() + duration;
        let mut fired = 0;
        while let Some(deadline) = self.surface.next_timer_deadline() {
            if deadline > target {
                break;
            }
            let now = self.clock.now();
            if deadline > now {
                self.clock.advance(deadline - now);
            }
            fired += self.surface.run_timers(self.clock.now());
        }
        let now = self.clock.now();
        if target > now {
            self.clock.advance(target - now);
        }
        log::debug!("waited {:?}, {} retriggers fired", duration, fired);
    }

    pub fn into_image(self) -> RasterImage {
        let Replay { surface, .. } = self;
        surface.into_image()
    }
}

fn registry_for(filter: SpuriousClickFilter) -> ToolRegistry {
    let mut registry = ToolRegistry::with_default_tools();
    if filter == SpuriousClickFilter::ExactMatch {
        registry.register(ToolDescriptor {
            id: ToolId::PolyLine,
            name: "PolyLine",
            category: ToolCategory::Line,
            factory: || {
                Box::new(
                    SegmentedPaintSession::new(PolyLineTool)
                        .with_filter(SpuriousClickFilter::ExactMatch),
                )
            },
        });
    }
    registry
}

/// Replay every step of `script` and return the finished image.
pub fn run_script(script: &Script) -> AppResult<RasterImage> {
    let mut replay = Replay::new(script)?;
    for step in &script.steps {
        replay.step(step)?;
    }
    if let Some(tool) = replay.palette.active() {
        log::info!(
            "Finished with {:?} active: {}",
            tool,
            replay.surface.status().message()
        );
    }
    Ok(replay.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintkit_core::{Color, FillType, MouseButton, PixelBuffer, ToolSettings};

    fn script(json: &str) -> Script {
        Script::from_json(json).expect("script")
    }

    #[test]
    fn test_rectangle_drag() {
        let image = run_script(&script(
            r#"{
                "width": 40, "height": 30,
                "steps": [
                    { "op": "select_tool", "tool": "rectangle" },
                    { "op": "mouse_down", "x": 5, "y": 5 },
                    { "op": "mouse_move", "x": 20, "y": 15 },
                    { "op": "mouse_up", "x": 20, "y": 15 }
                ]
            }"#,
        ))
        .expect("replay");

        assert_eq!(image.pixel(5, 5), Some(Color::BLACK));
        assert_eq!(image.pixel(20, 15), Some(Color::BLACK));
        assert_eq!(image.pixel(12, 10), Some(Color::WHITE));
        assert_eq!(image.pixel(25, 25), Some(Color::WHITE));
    }

    #[test]
    fn test_right_button_aborts_drag() {
        let image = run_script(&script(
            r#"{
                "width": 40, "height": 30,
                "steps": [
                    { "op": "select_tool", "tool": "line" },
                    { "op": "mouse_down", "x": 0, "y": 0 },
                    { "op": "mouse_move", "x": 30, "y": 0 },
                    { "op": "mouse_down", "x": 30, "y": 0, "button": "right" },
                    { "op": "mouse_up", "x": 30, "y": 0 }
                ]
            }"#,
        ))
        .expect("replay");

        for x in 0..40 {
            assert_eq!(image.pixel(x, 0), Some(Color::WHITE));
        }
    }

    #[test]
    fn test_polygon_with_double_click() {
        let mut replay = Replay::new(&script(
            r#"{ "width": 30, "height": 30, "click_filter": "exact_match" }"#,
        ))
        .expect("replay");
        replay
            .step(&Step::Settings {
                settings: ToolSettings {
                    fill_type: FillType::Solid,
                    background_color: Color::rgb(255, 0, 0),
                    ..ToolSettings::default()
                },
            })
            .expect("settings");
        for step in [
            Step::SelectTool {
                tool: ToolId::PolyLine,
            },
            Step::Click { x: 0, y: 0, button: MouseButton::Left },
            Step::MouseMove { x: 0, y: 0, button: MouseButton::Left },
            Step::Click { x: 20, y: 5, button: MouseButton::Left },
            Step::MouseMove { x: 20, y: 5, button: MouseButton::Left },
            Step::Click { x: 20, y: 20, button: MouseButton::Left },
            Step::MouseMove { x: 20, y: 20, button: MouseButton::Left },
            Step::DoubleClick { x: 0, y: 20, button: MouseButton::Left },
        ] {
            replay.step(&step).expect("step");
        }

        assert!(replay.surface().rubberband().is_empty());
        assert_eq!(replay.surface().image().pixel(10, 12), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_wait_fires_airbrush() {
        let mut replay = Replay::new(&script(r#"{ "width": 60, "height": 60 }"#)).expect("replay");
        replay
            .step(&Step::SelectTool {
                tool: ToolId::Airbrush,
            })
            .expect("select");
        replay
            .step(&Step::MouseDown { x: 30, y: 30, button: MouseButton::Left })
            .expect("down");
        assert!(replay.surface().next_timer_deadline().is_some());

        replay.wait(Duration::from_millis(100));
        replay
            .step(&Step::MouseUp { x: 30, y: 30, button: MouseButton::Left })
            .expect("up");

        let image = replay.into_image();
        let black = (0..60)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .filter(|&(x, y)| image.pixel(x, y) == Some(Color::BLACK))
            .count();
        assert!(black > 0);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let result = Replay::new(&script(
            r#"{ "settings": { "airbrush_intensity": 0 } }"#,
        ));
        assert!(matches!(result, Err(AppError::Settings(_))));
    }

    #[test]
    fn test_exact_match_filter_registry() {
        let registry = registry_for(SpuriousClickFilter::ExactMatch);
        assert_eq!(registry.len(), 8);
        let session = registry.create(ToolId::PolyLine).expect("polyline");
        assert_eq!(session.display_name(), "PolyLine");
    }
}
