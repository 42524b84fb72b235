//! Greedy grouping of edge-adjacent rectangles.
//!
//! Two rectangles merge when they line up on one axis and touch on the
//! other: same `x` and `width` stacked vertically, or same `y` and
//! `height` side by side. Pairs are visited earliest index first and
//! passes repeat until nothing merges, so the result is a local
//! fixpoint, not a minimal tiling. When a rectangle could merge with
//! several neighbours, visitation order decides which merge happens;
//! the covered pixels are the same either way.

use crate::Rect;

/// Merges adjacent rectangles in place and compacts the slice.
///
/// Returns the new length. The first `len` entries hold the merged
/// rectangles in the order of their first-encountered representative.
/// Entries past it are left as empty markers. Empty input rectangles
/// take no part in merging and are dropped.
///
/// Does not allocate.
pub fn group(rects: &mut [Rect]) -> usize {
    while merge_pass(rects) {}
    compact(rects)
}

/// Runs one pass over every pair. Returns whether anything merged.
fn merge_pass(rects: &mut [Rect]) -> bool {
    let mut merged = false;
    for i in 0..rects.len() {
        for j in i + 1..rects.len() {
            if rects[i].is_empty() {
                break;
            }
            if rects[j].is_empty() {
                continue;
            }
            if let Some(joined) = try_merge(&rects[i], &rects[j]) {
                rects[i] = joined;
                rects[j] = Rect::EMPTY;
                merged = true;
            }
        }
    }
    merged
}

/// Returns the union of `a` and `b` if they form a rectangle.
///
/// `None` if they are not aligned and adjacent, or if the merged
/// extent would not fit in 16 bits.
pub fn try_merge(a: &Rect, b: &Rect) -> Option<Rect> {
    let stacked = a.bottom() == u32::from(b.y) || b.bottom() == u32::from(a.y);
    if a.x == b.x && a.width == b.width && stacked {
        return Some(Rect {
            y: a.y.min(b.y),
            height: a.height.checked_add(b.height)?,
            ..*a
        });
    }

    let side_by_side = a.right() == u32::from(b.x) || b.right() == u32::from(a.x);
    if a.y == b.y && a.height == b.height && side_by_side {
        return Some(Rect {
            x: a.x.min(b.x),
            width: a.width.checked_add(b.width)?,
            ..*a
        });
    }
    None
}

/// Moves non-empty rectangles to the front, keeping their order.
fn compact(rects: &mut [Rect]) -> usize {
    let mut len = 0;
    for i in 0..rects.len() {
        if !rects[i].is_empty() {
            rects.swap(len, i);
            len += 1;
        }
    }
    len
}
