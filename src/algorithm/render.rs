//! Canonical ASCII rendering of accepted rectangles

use crate::io::configuration::{CORNER_MARK, FILL_MARK, HORIZONTAL_MARK, VERTICAL_MARK};

/// Render a rectangle of the given outer dimensions as a bordered block
///
/// Corner markers at the four corners, horizontal edges between them,
/// vertical edges down the sides, fill inside. Every row is terminated
/// by a newline, so a rendered block is itself a decomposable figure.
/// Dimensions come from validated spans and are therefore at least 2.
pub fn render_block(width: usize, height: usize) -> String {
    let interior_width = width.saturating_sub(2);
    let interior_height = height.saturating_sub(2);

    let mut block = String::with_capacity(height * (width + 1));

    push_border_row(&mut block, interior_width);
    for _ in 0..interior_height {
        block.push(VERTICAL_MARK);
        for _ in 0..interior_width {
            block.push(FILL_MARK);
        }
        block.push(VERTICAL_MARK);
        block.push('\n');
    }
    push_border_row(&mut block, interior_width);

    block
}

// Top and bottom border rows share the same shape
fn push_border_row(block: &mut String, interior_width: usize) {
    block.push(CORNER_MARK);
    for _ in 0..interior_width {
        block.push(HORIZONTAL_MARK);
    }
    block.push(CORNER_MARK);
    block.push('\n');
}
