//! Bundle file formatting.
//!
//! Each readable file becomes a block:
//!
//! ```text
//!
//! ================================================================================
//! File: /abs/path/to/file.rs
//! ================================================================================
//!
//! <contents>
//! ```
//!
//! followed by a newline. Unreadable files become a single
//! `Error reading file <path>: <message>` line.

use crate::types::FileOutcome;
use std::io::{self, Write};
use std::path::Path;

/// Width of the `=` separator lines.
pub const SEPARATOR_WIDTH: usize = 80;

/// Writes the header and contents of one file.
pub fn write_block<W: Write>(out: &mut W, absolute: &Path, content: &str) -> io::Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    writeln!(out)?;
    writeln!(out, "{separator}")?;
    writeln!(out, "File: {}", absolute.display())?;
    writeln!(out, "{separator}")?;
    writeln!(out)?;
    out.write_all(content.as_bytes())?;
    out.write_all(b"\n")
}

pub fn write_error<W: Write>(out: &mut W, path: &Path, message: &str) -> io::Result<()> {
    writeln!(out, "Error reading file {}: {}", path.display(), message)
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &FileOutcome) -> io::Result<()> {
    match outcome {
        FileOutcome::Content {
            absolute, content, ..
        } => write_block(out, absolute, content),
        FileOutcome::Failed { path, message } => write_error(out, path, message),
    }
}
