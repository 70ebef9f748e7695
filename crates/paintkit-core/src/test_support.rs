//! Recording doubles used by the engine's unit tests.

use crate::figure::{Container, Figure};
use crate::geometry::{PixelRect, Point};
use crate::render_target::{PixelBuffer, RenderTarget};
use crate::session::SessionHost;
use crate::status::StatusLine;
use crate::style::{Color, FontSpec, LineStyle};
use crate::timer::{RetriggerToken, TimerQueue};
use std::time::{Duration, Instant};

/// One recorded primitive call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Foreground(Color),
    Background(Color),
    LineStyle(LineStyle),
    Font(FontSpec),
    Clip(Option<PixelRect>),
    Line(i32, i32, i32, i32),
    Rectangle(i32, i32, i32, i32),
    RoundRectangle(i32, i32, i32, i32, i32, i32),
    Oval(i32, i32, i32, i32),
    Polygon(Vec<Point>),
    FillRectangle(i32, i32, i32, i32),
    FillRoundRectangle(i32, i32, i32, i32, i32, i32),
    FillOval(i32, i32, i32, i32),
    FillPolygon(Vec<Point>),
    Text(String, i32, i32),
    Blit(PixelRect, Point),
    Scroll(i32, i32),
}

impl Op {
    /// Whether this op puts pixels on the target.
    pub fn is_drawing(&self) -> bool {
        !matches!(
            self,
            Op::Foreground(_) | Op::Background(_) | Op::LineStyle(_) | Op::Font(_) | Op::Clip(_)
        )
    }
}

/// Render target that records every call instead of rasterizing.
///
/// Text is measured as 8 pixels per character and `font.size` pixels high.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub ops: Vec<Op>,
    width: u32,
    height: u32,
}

impl RecordingTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            ops: Vec::new(),
            width,
            height,
        }
    }

    pub fn drawing_ops(&self) -> Vec<Op> {
        self.ops.iter().filter(|op| op.is_drawing()).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl RenderTarget for RecordingTarget {
    fn set_foreground(&mut self, color: Color) {
        self.ops.push(Op::Foreground(color));
    }

    fn set_background(&mut self, color: Color) {
        self.ops.push(Op::Background(color));
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.ops.push(Op::LineStyle(style));
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.ops.push(Op::Font(font.clone()));
    }

    fn set_clipping(&mut self, clip: Option<PixelRect>) {
        self.ops.push(Op::Clip(clip));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.ops.push(Op::Line(x1, y1, x2, y2));
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(Op::Rectangle(x, y, width, height));
    }

    fn draw_round_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) {
        self.ops
            .push(Op::RoundRectangle(x, y, width, height, arc_width, arc_height));
    }

    fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(Op::Oval(x, y, width, height));
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        self.ops.push(Op::Polygon(points.to_vec()));
    }

    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(Op::FillRectangle(x, y, width, height));
    }

    fn fill_round_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    ) {
        self.ops.push(Op::FillRoundRectangle(
            x, y, width, height, arc_width, arc_height,
        ));
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(Op::FillOval(x, y, width, height));
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.ops.push(Op::FillPolygon(points.to_vec()));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.ops.push(Op::Text(text.to_string(), x, y));
    }

    fn text_extent(&self, font: &FontSpec, text: &str) -> (i32, i32) {
        (text.chars().count() as i32 * 8, font.size as i32)
    }
}

impl PixelBuffer for RecordingTarget {
    fn create_compatible(&self, width: u32, height: u32, _fill: Color) -> Self {
        RecordingTarget::new(width, height)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn blit(&mut self, _src: &Self, src_rect: PixelRect, dst: Point) {
        self.ops.push(Op::Blit(src_rect, dst));
    }

    fn scroll(&mut self, dx: i32, dy: i32) {
        self.ops.push(Op::Scroll(dx, dy));
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.bounds().contains(x, y).then_some(Color::WHITE)
    }
}

/// Session host that keeps figures as values instead of painting them.
#[derive(Debug)]
pub struct RecordingHost {
    /// Figures painted permanently, in order. Commits land here too.
    pub drawn: Vec<Figure>,
    pub rubberband: Container,
    pub hidden: u32,
    pub position: Point,
    pub status: StatusLine,
    pub scheduled: Vec<(RetriggerToken, Duration)>,
    timers: TimerQueue,
    epoch: Instant,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            drawn: Vec::new(),
            rubberband: Container::new(),
            hidden: 0,
            position: Point::ZERO,
            status: StatusLine::new(),
            scheduled: Vec::new(),
            timers: TimerQueue::new(),
            epoch: Instant::now(),
        }
    }

    pub fn last_token(&self) -> Option<RetriggerToken> {
        self.scheduled.last().map(|(token, _)| *token)
    }
}

impl SessionHost for RecordingHost {
    fn draw_figure(&mut self, figure: &Figure) {
        self.drawn.push(figure.clone());
    }

    fn add_rubberband_selection(&mut self, figure: Figure) {
        self.rubberband.add(figure);
    }

    fn clear_rubberband_selection(&mut self) {
        self.rubberband.clear();
    }

    fn commit_rubberband_selection(&mut self) {
        let committed = std::mem::take(&mut self.rubberband);
        if !committed.is_empty() {
            self.drawn.push(committed.into());
        }
    }

    fn hide_rubberband(&mut self) {
        self.hidden += 1;
    }

    fn show_rubberband(&mut self) {
        assert!(self.hidden > 0, "show without hide");
        self.hidden -= 1;
    }

    fn current_position(&self) -> Point {
        self.position
    }

    fn status(&mut self) -> &mut StatusLine {
        &mut self.status
    }

    fn schedule_retrigger(&mut self, delay: Duration) -> RetriggerToken {
        let token = self.timers.schedule(self.epoch, delay);
        self.scheduled.push((token, delay));
        token
    }
}
