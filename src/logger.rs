//! Append-only file logger
//!
//! Each call opens the log file, appends one line and closes it again.
//! Failing to open the file is reported on stderr and never reaches the caller.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::consts::{LOG_FILE, LOG_OPEN_ERROR};

/// Writes messages to a log file, one line per call
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new(LOG_FILE)
    }
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `message` followed by a newline
    pub fn log(&self, message: &str) {
        self.log_with(message, &mut io::stderr().lock());
    }

    /// Like `log`, reporting an unopenable sink on `diag` instead of stderr
    pub fn log_with(&self, message: &str, diag: &mut dyn Write) {
        if let Err(e) = self.append_line(message) {
            log::warn!("Log write to {} failed: {}", self.path.display(), e);
            if let Err(e) = writeln!(diag, "{}", LOG_OPEN_ERROR) {
                log::warn!("Failed to report log error: {}", e);
            }
        }
    }

    fn append_line(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", message)
    }
}
