pub mod output;

pub use output::{
    create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, TerminalWriter,
};

use crate::errors::{QuotemapError, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| QuotemapError::from_io(e, Some(path)))
}
