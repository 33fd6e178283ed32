//! Run settings
//!
//! Where the log and data files live. Defaults are the fixed locations in
//! `consts`; an optional JSON file can relocate them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DATA_FILE, LOG_FILE, SETTINGS_FILE};

/// File locations used by a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Append-only log file
    pub log_path: PathBuf,
    /// Single-record data file
    pub data_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(LOG_FILE),
            data_path: PathBuf::from(DATA_FILE),
        }
    }
}

impl Settings {
    /// Settings with both files placed inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            log_path: dir.join(LOG_FILE),
            data_path: dir.join(DATA_FILE),
        }
    }

    /// Load settings from the settings file in the working directory
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or malformed
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if let Ok(json) = fs::read_to_string(path) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed {}: {}", path.display(), e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}
