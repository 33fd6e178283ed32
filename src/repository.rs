//! Single-record persistence
//!
//! `DataRepository` is the seam callers depend on. Backends:
//! - `FileDataRepository`: one file, rewritten on every save
//! - `MemoryDataRepository`: in-process, for tests and dry runs
//!
//! `save` and `load` never fail. A missing or unreadable record loads as an
//! empty string and a failed write is skipped. The `try_` methods on the file
//! backend expose the underlying errors.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::consts::DATA_FILE;
use crate::error::{RepositoryError, Result};

/// Stores and retrieves one text record
pub trait DataRepository {
    /// Replace the stored record with `data`
    fn save(&mut self, data: &str);

    /// First line of the stored record, or `""` if there is none
    fn load(&self) -> String;
}

/// First line of `text` without its terminator
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// Repository backed by a single file
#[derive(Debug, Clone)]
pub struct FileDataRepository {
    path: PathBuf,
}

impl Default for FileDataRepository {
    fn default() -> Self {
        Self::new(DATA_FILE)
    }
}

impl FileDataRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the file and write exactly `data`
    pub fn try_save(&self, data: &str) -> Result<()> {
        fs::write(&self.path, data).map_err(|source| RepositoryError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the first line. A file that does not exist reads as empty.
    /// Bytes that are not valid UTF-8 come back as U+FFFD.
    pub fn try_load(&self) -> Result<String> {
        let read_err = |source: io::Error| RepositoryError::Read {
            path: self.path.clone(),
            source,
        };

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(String::new()),
            Err(e) => return Err(read_err(e)),
        };

        let mut line = Vec::new();
        BufReader::new(file)
            .read_until(b'\n', &mut line)
            .map_err(read_err)?;
        Ok(first_line(&String::from_utf8_lossy(&line)).to_string())
    }
}

impl DataRepository for FileDataRepository {
    fn save(&mut self, data: &str) {
        match self.try_save(data) {
            Ok(()) => log::debug!("Saved {} bytes to {}", data.len(), self.path.display()),
            Err(e) => log::debug!("Save skipped: {}", e),
        }
    }

    fn load(&self) -> String {
        self.try_load().unwrap_or_else(|e| {
            log::debug!("Load returned empty: {}", e);
            String::new()
        })
    }
}

/// Repository that keeps the record in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryDataRepository {
    record: Option<String>,
}

impl MemoryDataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full stored record, including anything after the first line
    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }
}

impl DataRepository for MemoryDataRepository {
    fn save(&mut self, data: &str) {
        self.record = Some(data.to_string());
    }

    fn load(&self) -> String {
        self.record.as_deref().map(first_line).unwrap_or("").to_string()
    }
}
