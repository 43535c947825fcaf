//! Marker alphabet and runtime configuration defaults

// Figure alphabet
/// Corner marker character
pub const CORNER_MARK: char = '+';
/// Horizontal edge marker character
pub const HORIZONTAL_MARK: char = '-';
/// Vertical edge marker character
pub const VERTICAL_MARK: char = '|';
/// Interior fill character
pub const FILL_MARK: char = ' ';

// Output settings
/// Extension accepted for figure input files
pub const FIGURE_EXTENSION: &str = "txt";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_parts";
/// Separator written between rectangle blocks in file output
pub const BLOCK_SEPARATOR: &str = "\n";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Spinner tick interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 80;
