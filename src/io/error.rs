//! Error types for file-backed decomposition runs
//!
//! The decomposition itself is total over its input alphabet; errors
//! only arise at the file system boundary, so the variants here all
//! carry a path.

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for figure processing operations
#[derive(Debug)]
pub enum FigureError {
    /// Target path is not usable as figure input
    InvalidTarget {
        /// Path that failed validation
        path: PathBuf,
        /// Explanation of why the target was rejected
        reason: String,
    },

    /// File system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FigureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidTarget { .. } => None,
        }
    }
}

/// Convenience type alias for figure processing results
pub type Result<T> = std::result::Result<T, FigureError>;

/// Create an invalid target error
pub fn invalid_target(path: &Path, reason: &impl ToString) -> FigureError {
    FigureError::InvalidTarget {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Create a file system error tied to a path and operation
pub fn fs_error(path: &Path, operation: &'static str, source: std::io::Error) -> FigureError {
    FigureError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

impl From<std::io::Error> for FigureError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}
