//! Corner candidate scanning
//!
//! The walks below are nearest-first: among several corner markers at
//! increasing distance the closest one is always tried before any
//! farther one, which is what makes minimal rectangles win over larger
//! ones sharing the same top-left anchor.

use crate::algorithm::outline::is_outline;
use crate::spatial::{CharGrid, RectSpan};

/// Rows below `row` whose cell in `col` is a corner marker, nearest first
pub fn corners_below(
    grid: &CharGrid,
    row: usize,
    col: usize,
) -> impl Iterator<Item = usize> + '_ {
    (row + 1..grid.rows()).filter(move |&candidate| grid.is_corner(candidate, col))
}

/// Columns right of `col` whose cell in `row` is a corner marker, nearest first
pub fn corners_right(
    grid: &CharGrid,
    row: usize,
    col: usize,
) -> impl Iterator<Item = usize> + '_ {
    (col + 1..grid.cols()).filter(move |&candidate| grid.is_corner(row, candidate))
}

/// Find the rectangle anchored at a prospective top-left corner
///
/// Walks candidate bottom rows and right columns nearest-first, requires
/// a corner marker at the implied bottom-right, and validates the full
/// span. The first span that validates is returned and the walk stops:
/// an anchor yields at most one rectangle, so a larger superset sharing
/// the same anchor is never re-detected. Anchors whose walks run off the
/// grid without closing simply yield nothing.
pub fn anchored_span(grid: &CharGrid, row: usize, col: usize) -> Option<RectSpan> {
    for bottom in corners_below(grid, row, col) {
        for right in corners_right(grid, row, col) {
            if grid.is_corner(bottom, right) {
                let span = RectSpan::new([row, col], [bottom, right]);
                if is_outline(grid, &span) {
                    return Some(span);
                }
            }
        }
    }

    None
}
