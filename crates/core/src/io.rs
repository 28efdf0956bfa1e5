//! Output handling with stdout/stderr separation contract
//!
//! Rendered boxes and style listings go to stdout through [`Output`]; logs
//! and diagnostics go to stderr via tracing.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

/// Line writer that prefixes every line with a fixed indentation
///
/// # Examples
///
/// ```
/// use boxit_core::io::Output;
///
/// let mut output = Output::new(4);
/// output.write_line("┌──┐").unwrap();
/// output.flush().unwrap();
/// ```
pub struct Output {
    writer: Box<dyn Write>,
    indent: String,
}

impl Output {
    /// Output on stdout indented by `indent` spaces
    pub fn new(indent: usize) -> Self {
        Self::with_writer(Box::new(io::stdout()), indent)
    }

    /// Output on an arbitrary writer
    pub fn with_writer(writer: Box<dyn Write>, indent: usize) -> Self {
        Self {
            writer,
            indent: " ".repeat(indent),
        }
    }

    /// Write one newline-terminated, indented line
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}{}", self.indent, line).context("Failed to write output line")
    }

    pub fn write_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Write a value as pretty JSON followed by a newline
    ///
    /// Indentation is not applied; JSON output must stay machine-readable.
    pub fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)
            .context("Failed to serialize JSON output")?;
        writeln!(self.writer).context("Failed to write output line")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush output")
    }
}
