// Reading corpora and writing reports. Input is UTF-8.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{CrabError, Result};

/// Path label used in errors for standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// Read a whole corpus file.
pub fn read_corpus(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CrabError::io(path, e))
}

/// Read a whole corpus from standard input.
pub fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .map_err(|e| CrabError::io(STDIN_LABEL, e))?;
    Ok(text)
}

/// Write a finished report, replacing any existing file.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report).map_err(|e| CrabError::io(path, e))
}
