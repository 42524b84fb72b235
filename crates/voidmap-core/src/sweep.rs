//! Coordinate sweep over the edges of the area and its occupied boxes.
//!
//! Every vertical edge becomes a candidate x coordinate and every
//! horizontal edge a candidate y coordinate. Once sorted, made unique
//! and clipped to the area, consecutive coordinates delimit the atomic
//! intervals that the candidate grid is built from.
//!
//! Nothing here allocates: coordinates live in fixed stack arrays
//! sized for [`MAX_BOXES`] occupied boxes, and every pass works in
//! place over a mutable slice.

use crate::Rect;

/// Largest occupied set a single decomposition accepts.
pub const MAX_BOXES: usize = 512;

/// Capacity of one axis: two edges per box plus the two area edges.
pub const COORDS_CAPACITY: usize = 2 * MAX_BOXES + 2;

/// A fixed-capacity vector of coordinates along one axis.
#[derive(Clone)]
pub struct Coords {
    values: [u32; COORDS_CAPACITY],
    len: usize,
}

impl Coords {
    fn new() -> Self {
        Self {
            values: [0; COORDS_CAPACITY],
            len: 0,
        }
    }

    fn push(&mut self, value: u32) {
        self.values[self.len] = value;
        self.len += 1;
    }

    /// The coordinates currently held.
    pub fn as_slice(&self) -> &[u32] {
        &self.values[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sorts, removes duplicates and clips to `[min, max]`.
    ///
    /// Afterwards the coordinates are strictly increasing.
    pub fn normalize(&mut self, min: u32, max: u32) {
        let values = &mut self.values[..self.len];
        merge_sort(values);
        let len = dedup(values);
        self.len = saturate(&mut values[..len], min, max);
    }
}

/// Collects the x and y edge coordinates of `area` and `occupied`.
///
/// Each axis starts with the area's leading edge, then holds the two
/// edges of every box in input order, and ends with the area's
/// trailing edge. Returns `None` if `occupied` exceeds [`MAX_BOXES`].
pub fn build(area: &Rect, occupied: &[Rect]) -> Option<(Coords, Coords)> {
    if occupied.len() > MAX_BOXES {
        return None;
    }

    let mut xs = Coords::new();
    let mut ys = Coords::new();

    xs.push(u32::from(area.x));
    ys.push(u32::from(area.y));
    for b in occupied {
        xs.push(u32::from(b.x));
        xs.push(b.right());
        ys.push(u32::from(b.y));
        ys.push(b.bottom());
    }
    xs.push(area.right());
    ys.push(area.bottom());

    Some((xs, ys))
}

/// Stable in-place merge sort.
///
/// Each half is sorted recursively. Merging walks the left half and,
/// whenever the head of the right half is smaller, rotates it into
/// place, shifting the elements in between one slot right. Equal
/// values keep their input order.
pub fn merge_sort(values: &mut [u32]) {
    if values.len() < 2 {
        return;
    }
    let mid = values.len() / 2;
    merge_sort(&mut values[..mid]);
    merge_sort(&mut values[mid..]);
    merge(values, mid);
}

fn merge(values: &mut [u32], mut mid: usize) {
    let mut left = 0;
    while left < mid && mid < values.len() {
        if values[left] <= values[mid] {
            left += 1;
        } else {
            values[left..=mid].rotate_right(1);
            left += 1;
            mid += 1;
        }
    }
}

/// Removes adjacent duplicates by shifting the tail left.
///
/// Returns the new logical length. Elements past it are stale.
pub fn dedup(values: &mut [u32]) -> usize {
    let mut len = values.len();
    let mut i = 1;
    while i < len {
        if values[i] == values[i - 1] {
            values.copy_within(i..len, i - 1);
            len -= 1;
        } else {
            i += 1;
        }
    }
    len
}

/// Drops every value outside `[min, max]`, keeping order.
///
/// Runs as two passes: values below `min` first, then values above
/// `max`. Returns the new logical length.
pub fn saturate(values: &mut [u32], min: u32, max: u32) -> usize {
    let len = compact(values, |v| v >= min);
    compact(&mut values[..len], |v| v <= max)
}

fn compact(values: &mut [u32], keep: impl Fn(u32) -> bool) -> usize {
    let mut kept = 0;
    for i in 0..values.len() {
        if keep(values[i]) {
            values[kept] = values[i];
            kept += 1;
        }
    }
    kept
}
