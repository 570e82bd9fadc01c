// Tue Jan 13 2026 - Alex

pub mod formatter;
pub mod json;

pub use formatter::OutputFormatter;
pub use json::{JsonError, JsonSerializer};

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One `#define` line per value, written as each value resolves
    #[default]
    Define,
    /// A single JSON object, written only once every value resolved
    Json,
}

/// Opens `path` for writing, or stdout when none is given.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stdout())),
    }
}
