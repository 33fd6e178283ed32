//! Solid Demo - shapes, logging and persistence wired through traits
//!
//! Core modules:
//! - `shapes`: Area computation behind the `Shape` trait
//! - `document`: Independent `Printable` / `Storable` capabilities
//! - `repository`: Save/load of a single text record (file or memory backed)
//! - `processor`: Transforms text and hands it to a repository
//! - `logger`: Append-only file logger
//! - `settings`: File locations, optionally loaded from JSON
//! - `app`: The fixed startup sequence

pub mod app;
pub mod document;
pub mod error;
pub mod logger;
pub mod processor;
pub mod repository;
pub mod settings;
pub mod shapes;

pub use document::{Document, Printable, Storable};
pub use error::RepositoryError;
pub use logger::FileLogger;
pub use processor::DataProcessor;
pub use repository::{DataRepository, FileDataRepository, MemoryDataRepository};
pub use settings::Settings;
pub use shapes::{Circle, Rectangle, Shape, print_shape_area, write_shape_area};

/// Fixed literals used across the program
pub mod consts {
    /// Default log file (relative to the working directory)
    pub const LOG_FILE: &str = "application.log";
    /// Default data file for the file repository
    pub const DATA_FILE: &str = "data.txt";
    /// Optional settings file read by the binary
    pub const SETTINGS_FILE: &str = "solid_demo.json";

    /// First line written to the log on every run
    pub const STARTUP_MESSAGE: &str = "Application started.";
    /// Written to stderr when the log file cannot be opened
    pub const LOG_OPEN_ERROR: &str = "Error: Could not open log file.";

    /// Appended by `DataProcessor::process_and_save`
    pub const PROCESSED_SUFFIX: &str = " (processed)";
    /// Record processed during startup
    pub const INITIAL_DATA: &str = "Initial data";

    /// Demo shapes
    pub const DEMO_RECT_WIDTH: f64 = 5.0;
    pub const DEMO_RECT_HEIGHT: f64 = 10.0;
    pub const DEMO_CIRCLE_RADIUS: f64 = 7.0;

    /// Document console messages
    pub const PRINTING_MESSAGE: &str = "Printing document...";
    pub const STORING_MESSAGE: &str = "Storing document...";
}
