//! Input/output operations and error handling
//!
//! Everything that touches the file system or the terminal lives here;
//! the decomposition core itself is a pure transformation and never
//! errors.

/// Command-line interface and batch file processing
pub mod cli;
/// Marker alphabet and runtime configuration defaults
pub mod configuration;
/// Error types for file-backed decomposition runs
pub mod error;
/// Multi-file progress tracking
pub mod progress;
