//! Decomposition of ASCII box figures into the rectangles they are made of
//!
//! A figure is a multi-line string drawn with `+`, `-`, `|`, and spaces.
//! The decomposition scans the figure for corner candidates, validates the
//! enclosed borders, and lazily yields each accepted rectangle rendered as
//! a standalone bordered block.

#![forbid(unsafe_code)]

/// Rectangle detection, validation, and lazy enumeration
pub mod algorithm;
/// Aggregation over decomposition output
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Character grid and span primitives
pub mod spatial;

pub use algorithm::decompose::{Rectangles, decompose};
pub use io::error::{FigureError, Result};
