//! Border validation for candidate rectangle spans

use crate::io::configuration::{CORNER_MARK, VERTICAL_MARK};
use crate::spatial::{CharGrid, RectSpan};

/// Decide whether a span encloses a well-formed rectangle outline
///
/// Every cell of the span is visited. On the top and bottom border rows
/// only the corner columns are enforced (they must be corner markers);
/// the cells between them are accepted as-is, so junction markers from
/// an abutting rectangle do not invalidate the span. Interior rows must
/// be free of corner markers and walled by vertical edges. The first
/// violation wins.
pub fn is_outline(grid: &CharGrid, span: &RectSpan) -> bool {
    for row in span.top()..=span.bottom() {
        for col in span.left()..=span.right() {
            let cell = grid.get(row, col);
            let edge_col = col == span.left() || col == span.right();

            if row == span.top() || row == span.bottom() {
                if edge_col && cell != Some(CORNER_MARK) {
                    return false;
                }
            } else {
                if cell == Some(CORNER_MARK) {
                    return false;
                }
                if edge_col && cell != Some(VERTICAL_MARK) {
                    return false;
                }
            }
        }
    }

    true
}
