//! Surface state: the persistent image, the on-screen viewport, the
//! rubberband preview layer and everything needed to keep them in sync.

use crate::damage::DamageRegion;
use crate::draw_context::{DrawContext, Transform};
use crate::figure::{Container, Figure, FigureTrait};
use crate::geometry::{PixelRect, Point};
use crate::input::PointerEvent;
use crate::render_target::PixelBuffer;
use crate::session::SessionHost;
use crate::status::StatusLine;
use crate::style::Color;
use crate::timer::{Clock, RetriggerToken, SystemClock, TimerQueue};
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Color shown where the viewport extends past the image.
pub const DEFAULT_CANVAS_BACKGROUND: Color = Color::rgb(192, 192, 192);

/// Everything the paint surface owns except the active session.
///
/// The image is in virtual coordinates. The viewport is the device-sized
/// buffer the host presents; its pixel `(x, y)` shows image pixel
/// `(x + x_offset, y + y_offset)`.
pub struct Canvas<B: PixelBuffer> {
    image: B,
    viewport: B,
    /// Off-screen buffer for compositing the rubberband, grown on demand.
    compose: Option<B>,
    rubberband: Container,
    hidden: u32,
    x_offset: i32,
    y_offset: i32,
    background: Color,
    damage: DamageRegion,
    position: Point,
    status: StatusLine,
    timers: TimerQueue,
    clock: Box<dyn Clock>,
}

impl<B: PixelBuffer> Canvas<B> {
    /// Wrap `image`, presenting it through a viewport of the given size.
    pub fn new(image: B, viewport_width: u32, viewport_height: u32) -> Self {
        let viewport =
            image.create_compatible(viewport_width, viewport_height, DEFAULT_CANVAS_BACKGROUND);
        let mut canvas = Self {
            image,
            viewport,
            compose: None,
            rubberband: Container::new(),
            hidden: 0,
            x_offset: 0,
            y_offset: 0,
            background: DEFAULT_CANVAS_BACKGROUND,
            damage: DamageRegion::new(),
            position: Point::ZERO,
            status: StatusLine::new(),
            timers: TimerQueue::new(),
            clock: Box::new(SystemClock),
        };
        canvas.paint(canvas.viewport.bounds());
        canvas
    }

    pub fn set_clock(&mut self, clock: impl Clock + 'static) {
        self.clock = Box::new(clock);
    }

    pub fn image(&self) -> &B {
        &self.image
    }

    /// Give up the canvas, keeping only the persistent image.
    pub fn into_image(self) -> B {
        self.image
    }

    pub fn viewport(&self) -> &B {
        &self.viewport
    }

    pub fn rubberband(&self) -> &Container {
        &self.rubberband
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusLine {
        &mut self.status
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Change the color outside the image and repaint.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.redraw(self.viewport.bounds());
    }

    pub fn scroll_position(&self) -> Point {
        Point::new(self.x_offset, self.y_offset)
    }

    /// Largest offsets that still keep the viewport over the image.
    pub fn max_scroll(&self) -> Point {
        Point::new(
            (self.image.width() as i32 - self.viewport.width() as i32).max(0),
            (self.image.height() as i32 - self.viewport.height() as i32).max(0),
        )
    }

    /// Image to viewport mapping.
    pub fn display_transform(&self) -> Transform {
        Transform::IDENTITY.with_offset(self.x_offset, self.y_offset)
    }

    /// Part of the viewport covered by the image.
    fn image_area(&self) -> Option<PixelRect> {
        PixelRect::new(
            -self.x_offset,
            -self.y_offset,
            self.image.width() as i32,
            self.image.height() as i32,
        )
        .intersect(&self.viewport.bounds())
    }

    pub fn is_rubberband_hidden(&self) -> bool {
        self.hidden > 0
    }

    pub fn current_position(&self) -> Point {
        self.position
    }

    /// Clamp a device event to the viewport and map it to image coordinates.
    pub fn virtualize(&mut self, event: PointerEvent) -> PointerEvent {
        let max_x = (self.viewport.width() as i32 - 1).max(0);
        let max_y = (self.viewport.height() as i32 - 1).max(0);
        let p = Point::new(
            event.x.clamp(0, max_x) + self.x_offset,
            event.y.clamp(0, max_y) + self.y_offset,
        );
        self.position = p;
        event.with_position(p)
    }

    fn paint_figure(
        viewport: &mut B,
        clip: Option<PixelRect>,
        transform: Transform,
        figure: &dyn FigureTrait,
    ) {
        let Some(clip) = clip else {
            return;
        };
        viewport.set_clipping(Some(clip));
        let mut ctx = DrawContext::new(&mut *viewport, transform);
        figure.draw(&mut ctx);
        viewport.set_clipping(None);
    }

    fn damage_of(
        viewport: &mut B,
        transform: Transform,
        figure: &dyn FigureTrait,
    ) -> Option<PixelRect> {
        let ctx = DrawContext::new(viewport, transform);
        let mut region = DamageRegion::new();
        figure.add_damaged_region(&ctx, &mut region);
        region.bounds()
    }

    /// Paint `figure` permanently into the image and onto the viewport.
    pub fn draw_figure(&mut self, figure: &Figure) {
        let mut ctx = DrawContext::new(&mut self.image, Transform::IDENTITY);
        figure.draw(&mut ctx);

        let clip = self.image_area();
        let transform = self.display_transform();
        Self::paint_figure(&mut self.viewport, clip, transform, figure);
    }

    pub fn add_rubberband_selection(&mut self, figure: Figure) {
        if !self.is_rubberband_hidden() {
            let clip = self.image_area();
            let transform = self.display_transform();
            Self::paint_figure(&mut self.viewport, clip, transform, &figure);
        }
        self.rubberband.add(figure);
    }

    pub fn clear_rubberband_selection(&mut self) {
        if self.rubberband.is_empty() {
            return;
        }
        if !self.is_rubberband_hidden() {
            let transform = self.display_transform();
            if let Some(bounds) = Self::damage_of(&mut self.viewport, transform, &self.rubberband) {
                self.redraw(bounds);
            }
        }
        self.rubberband.clear();
    }

    pub fn commit_rubberband_selection(&mut self) {
        if self.rubberband.is_empty() {
            return;
        }
        let mut ctx = DrawContext::new(&mut self.image, Transform::IDENTITY);
        self.rubberband.draw(&mut ctx);

        // A visible preview already shows the committed pixels.
        if self.is_rubberband_hidden() {
            let clip = self.image_area();
            let transform = self.display_transform();
            Self::paint_figure(&mut self.viewport, clip, transform, &self.rubberband);
        }
        log::trace!("committed {} rubberband figure(s)", self.rubberband.len());
        self.rubberband.clear();
    }

    pub fn hide_rubberband(&mut self) {
        self.hidden += 1;
        if self.hidden == 1 && !self.rubberband.is_empty() {
            let transform = self.display_transform();
            if let Some(bounds) = Self::damage_of(&mut self.viewport, transform, &self.rubberband) {
                self.redraw(bounds);
            }
        }
    }

    /// # Panics
    ///
    /// Panics when there is no matching [`Self::hide_rubberband`].
    pub fn show_rubberband(&mut self) {
        assert!(
            self.hidden > 0,
            "show_rubberband called without a matching hide_rubberband"
        );
        self.hidden -= 1;
        if self.hidden == 0 && !self.rubberband.is_empty() {
            let clip = self.image_area();
            let transform = self.display_transform();
            Self::paint_figure(&mut self.viewport, clip, transform, &self.rubberband);
        }
    }

    /// Queue a viewport rectangle for repainting.
    pub fn redraw(&mut self, rect: PixelRect) {
        if let Some(rect) = rect.intersect(&self.viewport.bounds()) {
            self.damage.add(rect);
        }
    }

    pub fn pending_damage(&self) -> &DamageRegion {
        &self.damage
    }

    /// Repaint every queued rectangle.
    pub fn process_paint_events(&mut self) {
        for rect in self.damage.take() {
            self.paint(rect);
        }
    }

    /// Bring one viewport rectangle up to date from the image and the
    /// rubberband.
    pub fn paint(&mut self, rect: PixelRect) {
        let Some(rect) = rect.intersect(&self.viewport.bounds()) else {
            return;
        };
        let source = rect.translate(self.x_offset, self.y_offset);
        let origin = Point::new(rect.x, rect.y);

        if self.rubberband.is_empty() || self.is_rubberband_hidden() {
            self.viewport.set_background(self.background);
            self.viewport
                .fill_rectangle(rect.x, rect.y, rect.width, rect.height);
            self.viewport.blit(&self.image, source, origin);
            return;
        }

        let (width, height) = (rect.width as u32, rect.height as u32);
        if self
            .compose
            .as_ref()
            .is_some_and(|buffer| buffer.width() < width || buffer.height() < height)
        {
            self.compose = None;
        }
        let background = self.background;
        let viewport = &mut self.viewport;
        let compose = self
            .compose
            .get_or_insert_with(|| viewport.create_compatible(width, height, background));

        let local = PixelRect::new(0, 0, rect.width, rect.height);
        compose.set_clipping(Some(local));
        compose.set_background(background);
        compose.fill_rectangle(0, 0, rect.width, rect.height);
        compose.blit(&self.image, source, Point::ZERO);

        let image_area = PixelRect::new(
            -self.x_offset,
            -self.y_offset,
            self.image.width() as i32,
            self.image.height() as i32,
        )
        .intersect(&rect)
        .map(|area| area.translate(-rect.x, -rect.y));
        if let Some(area) = image_area {
            compose.set_clipping(Some(area));
            let transform =
                Transform::IDENTITY.with_offset(self.x_offset + rect.x, self.y_offset + rect.y);
            let mut ctx = DrawContext::new(&mut *compose, transform);
            self.rubberband.draw(&mut ctx);
        }
        compose.set_clipping(None);

        viewport.blit(compose, local, origin);
    }

    /// Scroll so the viewport's top-left shows image pixel `(x, y)`.
    pub fn scroll_to(&mut self, x: i32, y: i32) {
        self.scroll_by(x - self.x_offset, y - self.y_offset);
    }

    /// Scroll by a relative amount, clamped to the image.
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        let max = self.max_scroll();
        let x = (self.x_offset + dx).clamp(0, max.x);
        let y = (self.y_offset + dy).clamp(0, max.y);
        let (dx, dy) = (x - self.x_offset, y - self.y_offset);
        if dx == 0 && dy == 0 {
            return;
        }
        self.x_offset = x;
        self.y_offset = y;
        log::trace!("scrolled to ({}, {})", x, y);

        let width = self.viewport.width() as i32;
        let height = self.viewport.height() as i32;
        if dx.abs() >= width || dy.abs() >= height {
            self.damage.clear();
            self.redraw(self.viewport.bounds());
            return;
        }

        self.viewport.scroll(-dx, -dy);
        for rect in self.damage.take() {
            self.redraw(rect.translate(-dx, -dy));
        }
        if dx > 0 {
            self.redraw(PixelRect::new(width - dx, 0, dx, height));
        } else if dx < 0 {
            self.redraw(PixelRect::new(0, 0, -dx, height));
        }
        if dy > 0 {
            self.redraw(PixelRect::new(0, height - dy, width, dy));
        } else if dy < 0 {
            self.redraw(PixelRect::new(0, 0, width, -dy));
        }
    }

    /// Reallocate the viewport and repaint it completely.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport resized to {}x{}", width, height);
        self.viewport = self.viewport.create_compatible(width, height, self.background);
        self.compose = None;
        let max = self.max_scroll();
        self.x_offset = self.x_offset.clamp(0, max.x);
        self.y_offset = self.y_offset.clamp(0, max.y);
        self.damage.clear();
        self.paint(self.viewport.bounds());
    }

    /// Tokens due at `now`, removed from the queue.
    pub fn take_due_timers(&mut self, now: Instant) -> Vec<RetriggerToken> {
        self.timers.take_due(now)
    }

    pub fn next_timer_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }
}

impl<B: PixelBuffer> SessionHost for Canvas<B> {
    fn draw_figure(&mut self, figure: &Figure) {
        Canvas::draw_figure(self, figure);
    }

    fn add_rubberband_selection(&mut self, figure: Figure) {
        Canvas::add_rubberband_selection(self, figure);
    }

    fn clear_rubberband_selection(&mut self) {
        Canvas::clear_rubberband_selection(self);
    }

    fn commit_rubberband_selection(&mut self) {
        Canvas::commit_rubberband_selection(self);
    }

    fn hide_rubberband(&mut self) {
        Canvas::hide_rubberband(self);
    }

    fn show_rubberband(&mut self) {
        Canvas::show_rubberband(self);
    }

    fn current_position(&self) -> Point {
        self.position
    }

    fn status(&mut self) -> &mut StatusLine {
        &mut self.status
    }

    fn schedule_retrigger(&mut self, delay: Duration) -> RetriggerToken {
        let now = self.clock.now();
        self.timers.schedule(now, delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Rectangle, SolidRectangle};
    use crate::style::LineStyle;
    use crate::test_support::{Op, RecordingTarget};

    fn canvas(image: (u32, u32), viewport: (u32, u32)) -> Canvas<RecordingTarget> {
        let mut canvas = Canvas::new(RecordingTarget::new(image.0, image.1), viewport.0, viewport.1);
        canvas.viewport.clear();
        canvas
    }

    fn outline(c1: (i32, i32), c2: (i32, i32)) -> Figure {
        Rectangle::new(
            Color::BLACK,
            Color::WHITE,
            LineStyle::Solid,
            c1.into(),
            c2.into(),
        )
        .into()
    }

    #[test]
    fn test_clear_empty_rubberband_requests_nothing() {
        let mut canvas = canvas((100, 100), (100, 100));
        canvas.clear_rubberband_selection();
        assert!(canvas.pending_damage().is_empty());
        assert!(canvas.viewport().ops.is_empty());
    }

    #[test]
    fn test_clear_requests_figure_bounds() {
        let mut canvas = canvas((100, 100), (100, 100));
        canvas.add_rubberband_selection(outline((10, 10), (20, 15)));
        canvas.clear_rubberband_selection();
        assert_eq!(
            canvas.pending_damage().bounds(),
            Some(PixelRect::new(10, 10, 11, 6))
        );
        assert!(canvas.rubberband().is_empty());
    }

    #[test]
    fn test_damage_follows_scroll_offset() {
        let mut canvas = canvas((200, 200), (50, 50));
        canvas.scroll_to(30, 40);
        canvas.process_paint_events();
        canvas.add_rubberband_selection(outline((35, 45), (40, 50)));
        canvas.clear_rubberband_selection();
        assert_eq!(
            canvas.pending_damage().bounds(),
            Some(PixelRect::new(5, 5, 6, 6))
        );
    }

    #[test]
    fn test_hide_show_nesting() {
        let mut canvas = canvas((100, 100), (100, 100));
        canvas.add_rubberband_selection(outline((0, 0), (9, 9)));
        canvas.viewport.clear();

        canvas.hide_rubberband();
        canvas.hide_rubberband();
        assert_eq!(canvas.pending_damage().rects().len(), 1);
        canvas.show_rubberband();
        assert!(canvas.is_rubberband_hidden());
        assert!(canvas.viewport().drawing_ops().is_empty());

        canvas.show_rubberband();
        assert!(!canvas.is_rubberband_hidden());
        assert_eq!(canvas.viewport().drawing_ops(), vec![Op::Rectangle(0, 0, 9, 9)]);
    }

    #[test]
    #[should_panic(expected = "without a matching hide_rubberband")]
    fn test_show_without_hide_panics() {
        let mut canvas = canvas((10, 10), (10, 10));
        canvas.show_rubberband();
    }

    #[test]
    fn test_hidden_figures_are_not_drawn_until_shown() {
        let mut canvas = canvas((100, 100), (100, 100));
        canvas.hide_rubberband();
        canvas.add_rubberband_selection(outline((0, 0), (5, 5)));
        assert!(canvas.viewport().drawing_ops().is_empty());
        canvas.commit_rubberband_selection();
        assert_eq!(canvas.viewport().drawing_ops(), vec![Op::Rectangle(0, 0, 5, 5)]);
        assert_eq!(canvas.image().drawing_ops(), vec![Op::Rectangle(0, 0, 5, 5)]);
        assert!(canvas.rubberband().is_empty());
        canvas.show_rubberband();
    }

    #[test]
    fn test_commit_draws_into_image_and_clears() {
        let mut canvas = canvas((100, 100), (100, 100));
        canvas.add_rubberband_selection(outline((2, 2), (8, 8)));
        canvas.commit_rubberband_selection();
        assert_eq!(canvas.image().drawing_ops(), vec![Op::Rectangle(2, 2, 6, 6)]);
        assert!(canvas.rubberband().is_empty());

        canvas.image.clear();
        canvas.commit_rubberband_selection();
        assert!(canvas.image().ops.is_empty());
    }

    #[test]
    fn test_paint_without_rubberband_blits() {
        let mut canvas = canvas((100, 100), (40, 40));
        canvas.scroll_to(10, 20);
        canvas.viewport.clear();
        canvas.paint(PixelRect::new(5, 5, 10, 10));
        assert_eq!(
            canvas.viewport().drawing_ops(),
            vec![
                Op::FillRectangle(5, 5, 10, 10),
                Op::Blit(PixelRect::new(15, 25, 10, 10), Point::new(5, 5)),
            ]
        );
    }

    #[test]
    fn test_paint_with_rubberband_composes() {
        let mut canvas = canvas((100, 100), (100, 100));
        canvas.add_rubberband_selection(
            SolidRectangle::new(Color::BLACK, Point::new(10, 10), Point::new(19, 19)).into(),
        );
        canvas.viewport.clear();
        canvas.paint(PixelRect::new(5, 5, 20, 20));

        let compose = canvas.compose.as_ref().expect("compose buffer");
        assert!(compose.width() >= 20 && compose.height() >= 20);
        assert!(compose
            .drawing_ops()
            .contains(&Op::FillRectangle(5, 5, 10, 10)));
        assert_eq!(
            canvas.viewport().drawing_ops(),
            vec![Op::Blit(PixelRect::new(0, 0, 20, 20), Point::new(5, 5))]
        );
    }

    #[test]
    fn test_scroll_clamps_and_exposes_strip() {
        let mut canvas = canvas((100, 80), (40, 30));
        canvas.scroll_by(10, 0);
        assert_eq!(canvas.scroll_position(), Point::new(10, 0));
        assert_eq!(canvas.viewport().ops, vec![Op::Scroll(-10, 0)]);
        assert_eq!(canvas.pending_damage().rects(), &[PixelRect::new(30, 0, 10, 30)]);

        canvas.process_paint_events();
        canvas.scroll_to(500, 500);
        assert_eq!(canvas.scroll_position(), Point::new(60, 50));
        canvas.scroll_by(-1000, 0);
        assert_eq!(canvas.scroll_position(), Point::new(0, 50));
    }

    #[test]
    fn test_virtualize_clamps_then_offsets() {
        let mut canvas = canvas((100, 100), (40, 30));
        canvas.scroll_to(10, 5);
        let event = canvas.virtualize(PointerEvent::left(-7, 45));
        assert_eq!(event.position(), Point::new(10, 34));
        assert_eq!(canvas.current_position(), Point::new(10, 34));
    }

    #[test]
    fn test_resize_clamps_offsets() {
        let mut canvas = canvas((100, 100), (40, 40));
        canvas.scroll_to(60, 60);
        canvas.resize(80, 80);
        assert_eq!(canvas.scroll_position(), Point::new(20, 20));
        assert_eq!(canvas.viewport().width(), 80);
        assert!(canvas.pending_damage().is_empty());
    }
}
