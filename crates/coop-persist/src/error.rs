//! # Persistence Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PersistError (this module) ← Adds the file path                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ConsoleError (console app) ← Printed, store keeps running              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Snapshot load/save errors.
#[derive(Debug, Error)]
pub enum PersistError {
    /// No snapshot at the given path.
    #[error("No saved data at {}", .0.display())]
    NotFound(PathBuf),

    /// Reading, writing or renaming the file failed.
    ///
    /// ## When This Occurs
    /// - Directory not writable
    /// - Disk full
    /// - File removed between check and read
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a valid snapshot document.
    #[error("Malformed snapshot {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file was written by an incompatible version.
    #[error("Unsupported snapshot format '{found}' (expected '{expected}')")]
    UnsupportedFormat {
        found: String,
        expected: &'static str,
    },
}

impl PersistError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        PersistError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        PersistError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;
