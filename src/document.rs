//! Printable and storable capabilities
//!
//! Two single-behavior traits so a type only takes on what it actually does.
//! `Document` happens to do both.

use std::io::{self, Write};

use crate::consts::{PRINTING_MESSAGE, STORING_MESSAGE};

/// Can be printed
pub trait Printable {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Print to stdout
    fn print(&self) {
        if let Err(e) = self.print_to(&mut io::stdout().lock()) {
            log::warn!("Print failed: {}", e);
        }
    }
}

/// Can be stored
pub trait Storable {
    fn store_to(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Store, reporting on stdout
    fn store(&self) {
        if let Err(e) = self.store_to(&mut io::stdout().lock()) {
            log::warn!("Store failed: {}", e);
        }
    }
}

/// Stateless document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Document;

impl Document {
    pub fn new() -> Self {
        Self
    }
}

impl Printable for Document {
    fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", PRINTING_MESSAGE)
    }
}

impl Storable for Document {
    fn store_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", STORING_MESSAGE)
    }
}
