//! The output sink handed to every command handler.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use osctl_core::table::{project, show_fields};
use osctl_core::{Fields, Formatters};

use super::{json, table};
use crate::cli::OutputFormat;
use crate::error::Result;

/// Writes command results to stdout and warnings to stderr.
///
/// Results follow the configured [`OutputFormat`]; informational messages
/// are dropped in quiet mode, warnings never are.
pub struct Console {
    format: OutputFormat,
    quiet: bool,
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Console {
    /// Console writing to the process's stdout and stderr.
    pub fn stdio(format: OutputFormat, quiet: bool) -> Self {
        Self::new(format, quiet, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn new(
        format: OutputFormat,
        quiet: bool,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            format,
            quiet,
            out,
            err,
        }
    }

    /// Print `objects` projected onto `columns`.
    pub fn list<T: Fields>(
        &mut self,
        objects: &[T],
        columns: &[&str],
        formatters: &Formatters,
    ) -> Result<()> {
        let projection = project(objects, columns, formatters);
        let rendered = match self.format {
            OutputFormat::Table => table::render_rows(&projection.headers, projection.rows),
            OutputFormat::Json => {
                json::format_json(&json::rows_to_json(&projection.headers, projection.rows))
            }
        };
        writeln!(self.out, "{}", rendered.trim_end())?;
        Ok(())
    }

    /// Print every attribute present on `object`, sorted by name.
    pub fn show<T: Fields>(&mut self, object: &T) -> Result<()> {
        let fields = show_fields(object);
        let rendered = match self.format {
            OutputFormat::Table => table::render_fields(&fields),
            OutputFormat::Json => json::format_json(&json::fields_to_json(&fields)),
        };
        writeln!(self.out, "{}", rendered.trim_end())?;
        Ok(())
    }

    /// Print an informational line unless quiet.
    pub fn message(&mut self, text: &str) -> Result<()> {
        if !self.quiet {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    /// Print a warning to stderr.
    pub fn warn(&mut self, text: &str) -> Result<()> {
        tracing::debug!(warning = %text, "console warning");
        writeln!(self.err, "{}", text)?;
        Ok(())
    }
}

/// Cloneable in-memory writer, for capturing console output.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
