//! Startup sequence
//!
//! Log, print two areas, process one record into the repository, then print
//! and store a document. Every step is infallible from here.

use std::io::{self, Write};

use crate::consts::{
    DEMO_CIRCLE_RADIUS, DEMO_RECT_HEIGHT, DEMO_RECT_WIDTH, INITIAL_DATA, STARTUP_MESSAGE,
};
use crate::document::{Document, Printable, Storable};
use crate::logger::FileLogger;
use crate::processor::DataProcessor;
use crate::repository::FileDataRepository;
use crate::settings::Settings;
use crate::shapes::{Circle, Rectangle, Shape, write_shape_area};

/// Run the fixed sequence against the files named in `settings`
pub fn run(settings: &Settings) {
    run_with(settings, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Run the fixed sequence with console output on `out` and diagnostics on `diag`
pub fn run_with(settings: &Settings, out: &mut dyn Write, diag: &mut dyn Write) {
    let logger = FileLogger::new(&settings.log_path);
    logger.log_with(STARTUP_MESSAGE, diag);

    let rect = Rectangle::new(DEMO_RECT_WIDTH, DEMO_RECT_HEIGHT);
    let circle = Circle::new(DEMO_CIRCLE_RADIUS);
    let shapes: [&dyn Shape; 2] = [&rect, &circle];
    for shape in shapes {
        if let Err(e) = write_shape_area(out, shape) {
            log::warn!("Failed to print area: {}", e);
        }
    }

    let mut repository = FileDataRepository::new(&settings.data_path);
    let mut processor = DataProcessor::new(&mut repository);
    processor.process_and_save(INITIAL_DATA);

    let doc = Document::new();
    if let Err(e) = doc.print_to(out) {
        log::warn!("Print failed: {}", e);
    }
    if let Err(e) = doc.store_to(out) {
        log::warn!("Store failed: {}", e);
    }

    log::info!("Run complete");
}
