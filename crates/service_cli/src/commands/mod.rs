//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod point_source;
pub mod sweep;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::Result;

/// Open `path` for writing, or stdout when no path is given
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}
