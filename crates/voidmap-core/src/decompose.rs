use thiserror::Error;

use crate::Rect;
use crate::sweep::{self, MAX_BOXES};

/// Why a decomposition wrote nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecomposeError {
    /// The output buffer has no room at all.
    #[error("output buffer has zero capacity")]
    NoCapacity,
    /// The voids do not fit. Nothing was written.
    #[error("{required} void rectangles do not fit in a buffer of {capacity}")]
    InsufficientCapacity { required: usize, capacity: usize },
    /// The occupied set exceeds the scratch space.
    #[error("{count} occupied boxes exceed the maximum of {max}")]
    TooManyBoxes { count: usize, max: usize },
}

/// Minimum buffer length that always holds the voids of `boxes`
/// occupied boxes: `(2n + 1)² - n`.
pub const fn min_buffer_len(boxes: usize) -> usize {
    let side = 2 * boxes + 1;
    side * side - boxes
}

/// The candidate cells spanned by two normalized coordinate vectors.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    xs: &'a [u32],
    ys: &'a [u32],
}

impl<'a> Grid<'a> {
    /// Both slices must be strictly increasing.
    pub fn new(xs: &'a [u32], ys: &'a [u32]) -> Self {
        Self { xs, ys }
    }

    /// Number of candidate cells, `(X - 1) * (Y - 1)`.
    pub fn len(&self) -> usize {
        self.xs.len().saturating_sub(1) * self.ys.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Yields every cell, x varying fastest.
    ///
    /// Cells whose origin lies past the 16-bit pixel grid cannot be
    /// expressed as a [`Rect`] and are skipped.
    pub fn cells(self) -> impl Iterator<Item = Rect> + 'a {
        let (xs, ys) = (self.xs, self.ys);
        ys.windows(2)
            .flat_map(move |y| xs.windows(2).filter_map(move |x| cell(x[0], x[1], y[0], y[1])))
    }

    /// Yields the cells that share no pixel with any occupied box.
    pub fn voids(self, occupied: &'a [Rect]) -> impl Iterator<Item = Rect> + 'a {
        self.cells()
            .filter(move |c| !occupied.iter().any(|b| c.overlaps(b)))
    }
}

fn cell(x0: u32, x1: u32, y0: u32, y1: u32) -> Option<Rect> {
    Some(Rect::new(
        u16::try_from(x0).ok()?,
        u16::try_from(y0).ok()?,
        u16::try_from(x1 - x0).ok()?,
        u16::try_from(y1 - y0).ok()?,
    ))
}

/// Tiles the free space of `area` with rectangles written to `buffer`.
///
/// Returns the number of voids written, or an error telling why
/// nothing was written:
///
/// - an empty `buffer` is [`DecomposeError::NoCapacity`];
/// - an empty `occupied` set writes `area` itself and returns 1;
/// - more voids than `buffer.len()` is
///   [`DecomposeError::InsufficientCapacity`], with no partial write.
///
/// `Ok(0)` therefore always means the area has no free space.
///
/// Voids are written in row-major order, x varying fastest. Entries
/// of `buffer` past the returned count are left untouched.
/// [`min_buffer_len`] gives a capacity that is always sufficient.
///
/// The boxes in `occupied` must not overlap each other and should lie
/// within `area`. This is not checked. Coordinates outside `area` are
/// clipped away, but overlapping boxes give an unspecified tiling.
///
/// Does not allocate.
pub fn try_decompose(
    area: &Rect,
    occupied: &[Rect],
    buffer: &mut [Rect],
) -> Result<usize, DecomposeError> {
    if buffer.is_empty() {
        return Err(DecomposeError::NoCapacity);
    }
    if occupied.is_empty() {
        buffer[0] = *area;
        return Ok(1);
    }

    let (mut xs, mut ys) = sweep::build(area, occupied).ok_or(DecomposeError::TooManyBoxes {
        count: occupied.len(),
        max: MAX_BOXES,
    })?;
    xs.normalize(u32::from(area.x), area.right());
    ys.normalize(u32::from(area.y), area.bottom());

    let grid = Grid::new(xs.as_slice(), ys.as_slice());
    let required = grid.voids(occupied).count();
    if required > buffer.len() {
        return Err(DecomposeError::InsufficientCapacity {
            required,
            capacity: buffer.len(),
        });
    }

    for (slot, void) in buffer.iter_mut().zip(grid.voids(occupied)) {
        *slot = void;
    }
    Ok(required)
}

/// Count-only form of [`try_decompose`].
///
/// Every error collapses to 0, so 0 can mean an empty or too small
/// buffer as well as a fully occupied area.
pub fn decompose(area: &Rect, occupied: &[Rect], buffer: &mut [Rect]) -> usize {
    try_decompose(area, occupied, buffer).unwrap_or(0)
}
