//! Lazy enumeration of the rectangles composing a figure

use crate::algorithm::render::render_block;
use crate::algorithm::scan::anchored_span;
use crate::spatial::CharGrid;

/// Break a figure into the rectangles it is made of
///
/// Rectangles are produced lazily: each call to `next` resumes the scan
/// exactly where the previous one stopped and computes at most one
/// block. Dropping the iterator early is not an error. The emission
/// order is deterministic (row-major by top-left anchor) but callers
/// should not rely on it.
///
/// Malformed figures are not rejected: unmatched corners are skipped and
/// only the well-formed subset is emitted, which may be nothing.
///
/// ```
/// let figure = "+--+\n|  |\n+--+\n";
/// let parts: Vec<String> = rectcarve::decompose(figure).collect();
/// assert_eq!(parts, vec![figure.to_string()]);
/// ```
pub fn decompose(figure: &str) -> Rectangles {
    Rectangles::new(CharGrid::from_figure(figure))
}

/// Lazy iterator over the rectangles of one figure
///
/// Owns its grid snapshot and scan cursor, so separate decompositions
/// share no state and may run concurrently on independent threads.
#[derive(Debug, Clone)]
pub struct Rectangles {
    grid: CharGrid,
    row: usize,
    col: usize,
}

impl Rectangles {
    /// Create an enumerator positioned at the top-left of the grid
    pub const fn new(grid: CharGrid) -> Self {
        Self { grid, row: 0, col: 0 }
    }
}

impl Iterator for Rectangles {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.grid.rows() {
            while self.col < self.grid.cols() {
                let (row, col) = (self.row, self.col);
                self.col += 1;

                // A corner consumed inside an earlier rectangle may still
                // anchor an adjacent one; the nearest-first walk keeps the
                // results disjoint without a visited set.
                if self.grid.is_corner(row, col) {
                    if let Some(span) = anchored_span(&self.grid, row, col) {
                        return Some(render_block(span.width(), span.height()));
                    }
                }
            }
            self.col = 0;
            self.row += 1;
        }

        None
    }
}
