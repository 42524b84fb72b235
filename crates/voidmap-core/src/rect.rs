use std::fmt;

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle on a 16-bit pixel grid.
///
/// A rectangle covers the closed pixel range
/// `[x, x + width - 1] × [y, y + height - 1]`. A zero width or height
/// makes it empty: it covers no pixel at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The zero-sized rectangle used to mark removed entries.
    pub const EMPTY: Rect = Rect::new(0, 0, 0, 0);

    /// Returns whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// First column past the right edge.
    ///
    /// Widened to `u32` since `x + width` may not fit in 16 bits.
    pub fn right(&self) -> u32 {
        u32::from(self.x) + u32::from(self.width)
    }

    /// First row past the bottom edge.
    pub fn bottom(&self) -> u32 {
        u32::from(self.y) + u32::from(self.height)
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    /// Returns whether the two rectangles share at least one pixel.
    ///
    /// Uses closed pixel intervals on both axes: `[a0, a1]` meets
    /// `[b0, b1]` when `a1 >= b0 && a0 <= b1`.
    pub fn overlaps(&self, other: &Rect) -> bool {
        intervals_meet(self.x, self.width, other.x, other.width)
            && intervals_meet(self.y, self.height, other.y, other.height)
    }

    /// Returns whether `other` lies entirely within `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns whether the given pixel is covered.
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        u32::from(self.x) <= x && x < self.right() && u32::from(self.y) <= y && y < self.bottom()
    }
}

fn intervals_meet(a: u16, a_len: u16, b: u16, b_len: u16) -> bool {
    // Signed so an empty interval ends one before it starts.
    let (a0, b0) = (i32::from(a), i32::from(b));
    let a1 = a0 + i32::from(a_len) - 1;
    let b1 = b0 + i32::from(b_len) - 1;
    a1 >= b0 && a0 <= b1
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}
