//! Pixel-exact line stepping and dash patterns.

/// Walks a dash pattern one pixel at a time.
#[derive(Debug, Clone)]
pub(crate) struct Dasher {
    pattern: Option<&'static [u32]>,
    index: usize,
    used: u32,
}

impl Dasher {
    pub(crate) fn new(pattern: Option<&'static [u32]>) -> Self {
        Self {
            pattern: pattern.filter(|p| !p.is_empty() && p.iter().any(|&run| run > 0)),
            index: 0,
            used: 0,
        }
    }

    /// Whether the next pixel is in an "on" run.
    pub(crate) fn advance(&mut self) -> bool {
        let Some(pattern) = self.pattern else {
            return true;
        };
        while self.used >= pattern[self.index] {
            self.index = (self.index + 1) % pattern.len();
            self.used = 0;
        }
        self.used += 1;
        self.index % 2 == 0
    }
}

/// Bresenham walk from `(x1, y1)` to `(x2, y2)`, both ends included.
pub(crate) fn line_pixels(x1: i32, y1: i32, x2: i32, y2: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);
    loop {
        plot(x, y);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Walk a connected polyline, visiting shared vertices once. Each pixel
/// comes with its "on" state from `dasher`.
pub(crate) fn polyline_pixels(
    points: &[(i32, i32)],
    dasher: &mut Dasher,
    mut plot: impl FnMut(i32, i32, bool),
) {
    match points {
        [] => {}
        [(x, y)] => plot(*x, *y, dasher.advance()),
        _ => {
            for (i, pair) in points.windows(2).enumerate() {
                let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
                let mut first = i > 0;
                line_pixels(x1, y1, x2, y2, |x, y| {
                    if first {
                        first = false;
                        return;
                    }
                    plot(x, y, dasher.advance());
                });
            }
        }
    }
}
