//! Size tallies over emitted rectangle blocks
//!
//! Groups blocks by outer width and height for the summary output. The
//! tally works on rendered text so it can sit behind any consumer of the
//! lazy sequence without reaching into the scan state.

use std::collections::BTreeMap;

/// Running tally of rectangle sizes seen in one decomposition
#[derive(Debug, Default)]
pub struct SizeTally {
    counts: BTreeMap<(usize, usize), usize>,
    total: usize,
}

impl SizeTally {
    /// Create an empty tally
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    /// Record one rendered rectangle block
    ///
    /// Dimensions are recovered from the text: height is the line count
    /// and width the character length of the first line.
    pub fn record(&mut self, block: &str) {
        let height = block.lines().count();
        let width = block.lines().next().map_or(0, |line| line.chars().count());

        *self.counts.entry((width, height)).or_insert(0) += 1;
        self.total += 1;
    }

    /// Total number of recorded blocks
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Count recorded for one width x height size
    pub fn count_of(&self, width: usize, height: usize) -> usize {
        self.counts.get(&(width, height)).copied().unwrap_or(0)
    }

    /// Human-readable summary, one line per size plus a total line
    ///
    /// Sizes are ordered by width then height, so the summary is
    /// deterministic regardless of emission order.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .counts
            .iter()
            .map(|(&(width, height), &count)| format!("{width}x{height}: {count}"))
            .collect();
        lines.push(format!("total: {}", self.total));
        lines
    }
}
