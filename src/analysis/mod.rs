//! Aggregation over decomposition output

/// Size tallies for emitted rectangle blocks
pub mod tally;

pub use tally::SizeTally;
