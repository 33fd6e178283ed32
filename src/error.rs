//! Error types for repository I/O.
//!
//! These never escape `DataRepository::save` / `load`; they exist so the
//! fallible paths can be tested and logged before being swallowed.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Errors observed while reading or writing the data file
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Data file could not be created or written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file exists but could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
