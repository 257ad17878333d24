//! Domain-specific errors for debug log persistence

use std::path::PathBuf;
use thiserror::Error;

/// Failure while writing the debug log.
///
/// Every variant carries the path the failing step was working on.
#[derive(Error, Debug)]
pub enum DebugLogError {
    /// The debug directory could not be created.
    #[error("Failed to create debug directory {}: {source}", path.display())]
    CreateDirectory {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A regular file sits where the debug directory should be and could
    /// not be removed.
    #[error("Failed to replace file occupying debug directory {}: {source}", path.display())]
    ReplaceFile {
        /// Path of the file in the way.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The debug directory could not be listed to pick a rotation index.
    #[error("Failed to scan debug directory {}: {source}", path.display())]
    ScanDirectory {
        /// Directory being scanned.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// `debug-log-4294967295.txt` already exists; there is no next index.
    #[error("No rotation index left in debug directory {}", path.display())]
    IndexExhausted {
        /// Directory being scanned.
        path: PathBuf,
    },

    /// The log file could not be opened or appended to.
    #[error("Failed to write debug log {}: {source}", path.display())]
    Write {
        /// Log file being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl DebugLogError {
    /// Path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::CreateDirectory { path, .. }
            | Self::ReplaceFile { path, .. }
            | Self::ScanDirectory { path, .. }
            | Self::IndexExhausted { path }
            | Self::Write { path, .. } => path,
        }
    }
}
