use std::iter::FusedIterator;

use crate::segment::Segment;

/// Pixel path of a segment using Bresenham's algorithm (double-step form).
///
/// Yields every `(x, y)` from the start point to the end point, both inclusive.
/// Consecutive points differ by at most one in each axis, so the path is
/// 8-connected. Error terms are `i64`, which keeps segments spanning the full
/// `i32` range from overflowing.
///
/// The walk is not direction independent: when `2 * err` lands exactly on a
/// step threshold, a segment and its reverse pick different pixels at that
/// step. `(2, 17) -> (11, 1)` takes `(7, 9)` while the reverse takes `(6, 9)`.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    remaining: u64,
}

impl BresenhamLine {
    pub fn new(segment: Segment) -> Self {
        let Segment { x0, y0, x1, y1 } = segment;

        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = -(i64::from(y1) - i64::from(y0)).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        Self {
            x: x0,
            y: y0,
            end_x: x1,
            end_y: y1,
            dx,
            dy,
            sx,
            sy,
            err: dx + dy,
            // One pixel per step along the major axis, plus the start point
            remaining: dx.max(-dy) as u64 + 1,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.remaining == 0 {
            return None;
        }

        let point = (self.x, self.y);
        self.remaining -= 1;

        if self.x == self.end_x && self.y == self.end_y {
            self.remaining = 0;
            return Some(point);
        }

        // Both branches may fire in one step: that is the diagonal move
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for BresenhamLine {}
