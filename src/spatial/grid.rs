//! Random-access character surface over raw figure text
//!
//! The grid is built once per decomposition and never mutated. Width is
//! taken from the first row; shorter rows read as fill beyond their end,
//! so a lookup outside a ragged row is simply "not a border marker".

use ndarray::Array2;

use crate::io::configuration::{CORNER_MARK, FILL_MARK};

/// Immutable 2-D character grid with bounds-checked lookup
///
/// Rows come from splitting the figure text on `\n`, with the empty
/// trailing row from a final newline discarded. Dimensions are cached
/// separately from the backing array so the accessors can be `const`.
#[derive(Debug, Clone)]
pub struct CharGrid {
    cells: Array2<char>,
    dimensions: (usize, usize),
}

impl CharGrid {
    /// Build a grid from figure text
    ///
    /// The grid is rectangular even when the input is not: short rows are
    /// padded with fill and long rows are truncated to the first row's
    /// width, reproducing the leniency of out-of-row lookups.
    pub fn from_figure(figure: &str) -> Self {
        let body = figure.strip_suffix('\n').unwrap_or(figure);
        let lines: Vec<&str> = body.split('\n').collect();

        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.chars().count());

        let mut cells = Array2::from_elem((height, width), FILL_MARK);
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().take(width).enumerate() {
                if let Some(cell) = cells.get_mut((row, col)) {
                    *cell = ch;
                }
            }
        }

        Self {
            cells,
            dimensions: (height, width),
        }
    }

    /// Get the number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Get the number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Bounds-checked cell lookup
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get((row, col)).copied()
    }

    /// Check whether the cell at a position is a corner marker
    pub fn is_corner(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(CORNER_MARK)
    }
}
