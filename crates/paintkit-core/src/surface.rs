//! The paint surface: a [`Canvas`] plus the active [`PaintSession`].

use crate::canvas::Canvas;
use crate::damage::DamageRegion;
use crate::figure::{Container, Figure};
use crate::geometry::{PixelRect, Point};
use crate::input::PointerEvent;
use crate::render_target::PixelBuffer;
use crate::session::PaintSession;
use crate::settings::ToolSettings;
use crate::status::StatusLine;
use crate::timer::Clock;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Routes host input to the active session and keeps the display current.
///
/// Pointer events are clamped to the viewport and shifted by the scroll
/// offset before the session sees them.
pub struct PaintSurface<B: PixelBuffer> {
    canvas: Canvas<B>,
    session: Option<Box<dyn PaintSession>>,
}

impl<B: PixelBuffer> PaintSurface<B> {
    /// Surface whose viewport matches the image size.
    pub fn new(image: B) -> Self {
        let (width, height) = (image.width(), image.height());
        Self::with_viewport(image, width, height)
    }

    pub fn with_viewport(image: B, viewport_width: u32, viewport_height: u32) -> Self {
        log::debug!(
            "paint surface {}x{} with {}x{} viewport",
            image.width(),
            image.height(),
            viewport_width,
            viewport_height
        );
        Self {
            canvas: Canvas::new(image, viewport_width, viewport_height),
            session: None,
        }
    }

    /// Replace the time source used for retrigger scheduling.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.canvas.set_clock(clock);
        self
    }

    pub fn canvas(&self) -> &Canvas<B> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<B> {
        &mut self.canvas
    }

    pub fn paint_session(&self) -> Option<&dyn PaintSession> {
        self.session.as_deref()
    }

    /// Install a new session, ending the current one, and hand the old one
    /// back.
    pub fn set_paint_session(
        &mut self,
        session: Option<Box<dyn PaintSession>>,
    ) -> Option<Box<dyn PaintSession>> {
        let mut previous = self.session.take();
        if let Some(previous) = previous.as_mut() {
            previous.end_session(&mut self.canvas);
        }

        let status = self.canvas.status_mut();
        status.clear();
        let name = session.as_ref().map_or("None", |s| s.display_name());
        status.set_action(name);
        log::debug!("paint session set to {}", name);

        self.session = session;
        if let Some(session) = self.session.as_mut() {
            session.begin_session(&mut self.canvas);
        }
        previous
    }

    /// Push a new settings snapshot to the active session.
    pub fn update_settings(&mut self, settings: &ToolSettings) {
        if let Some(session) = self.session.as_mut() {
            session.set(settings);
        }
    }

    /// Abandon the active session's current gesture.
    pub fn reset_session(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset_session(&mut self.canvas);
        }
    }

    pub fn mouse_down(&mut self, event: PointerEvent) {
        let event = self.canvas.virtualize(event);
        if let Some(session) = self.session.as_mut() {
            session.mouse_down(&mut self.canvas, event);
        }
    }

    pub fn mouse_up(&mut self, event: PointerEvent) {
        let event = self.canvas.virtualize(event);
        if let Some(session) = self.session.as_mut() {
            session.mouse_up(&mut self.canvas, event);
        }
    }

    pub fn mouse_move(&mut self, event: PointerEvent) {
        let event = self.canvas.virtualize(event);
        if let Some(session) = self.session.as_mut() {
            session.mouse_move(&mut self.canvas, event);
        }
    }

    pub fn mouse_double_click(&mut self, event: PointerEvent) {
        let event = self.canvas.virtualize(event);
        if let Some(session) = self.session.as_mut() {
            session.mouse_double_click(&mut self.canvas, event);
        }
    }

    /// Deliver every retrigger due at `now`. Returns how many fired.
    pub fn run_timers(&mut self, now: Instant) -> usize {
        let due = self.canvas.take_due_timers(now);
        let fired = due.len();
        if let Some(session) = self.session.as_mut() {
            for token in due {
                log::trace!("retrigger {} fired", token.generation());
                session.retrigger(&mut self.canvas, token);
            }
        }
        fired
    }

    /// When [`Self::run_timers`] next has work to do.
    pub fn next_timer_deadline(&self) -> Option<Instant> {
        self.canvas.next_timer_deadline()
    }

    pub fn draw_figure(&mut self, figure: &Figure) {
        self.canvas.draw_figure(figure);
    }

    pub fn add_rubberband_selection(&mut self, figure: Figure) {
        self.canvas.add_rubberband_selection(figure);
    }

    pub fn clear_rubberband_selection(&mut self) {
        self.canvas.clear_rubberband_selection();
    }

    pub fn commit_rubberband_selection(&mut self) {
        self.canvas.commit_rubberband_selection();
    }

    pub fn hide_rubberband(&mut self) {
        self.canvas.hide_rubberband();
    }

    /// # Panics
    ///
    /// Panics without a matching [`Self::hide_rubberband`].
    pub fn show_rubberband(&mut self) {
        self.canvas.show_rubberband();
    }

    pub fn rubberband(&self) -> &Container {
        self.canvas.rubberband()
    }

    pub fn process_paint_events(&mut self) {
        self.canvas.process_paint_events();
    }

    /// Repaint a viewport rectangle the host reports as exposed.
    pub fn handle_expose(&mut self, rect: PixelRect) {
        self.canvas.paint(rect);
    }

    pub fn pending_damage(&self) -> &DamageRegion {
        self.canvas.pending_damage()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
    }

    pub fn scroll_to(&mut self, x: i32, y: i32) {
        self.canvas.scroll_to(x, y);
    }

    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.canvas.scroll_by(dx, dy);
    }

    pub fn scroll_position(&self) -> Point {
        self.canvas.scroll_position()
    }

    pub fn image(&self) -> &B {
        self.canvas.image()
    }

    pub fn into_image(self) -> B {
        self.canvas.into_image()
    }

    pub fn viewport(&self) -> &B {
        self.canvas.viewport()
    }

    pub fn status(&self) -> &StatusLine {
        self.canvas.status()
    }
}
