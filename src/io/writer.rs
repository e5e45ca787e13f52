//! Line-at-a-time output.

use crate::core::Line;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Buffered writer over the output file.
pub type FileLineSink = LineSink<BufWriter<File>>;

/// Appends lines to a sink in call order.
///
/// # Examples
///
/// ```
/// use revline::core::Line;
/// use revline::io::LineSink;
///
/// let mut sink = LineSink::new(Vec::new(), "<memory>");
/// sink.write_line(&Line::from_bytes(b"cba\n")).unwrap();
/// sink.flush().unwrap();
/// assert_eq!(sink.into_inner(), b"cba\n");
/// ```
#[derive(Debug)]
pub struct LineSink<W: Write> {
    inner: W,
    label: String,
}

impl<W: Write> LineSink<W> {
    /// Wraps `inner`, labelling errors with `label`.
    pub fn new(inner: W, label: impl Into<String>) -> Self {
        Self {
            inner,
            label: label.into(),
        }
    }

    /// Returns the label used in error messages.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Writes every valid byte of `line`, newline included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the write fails.
    pub fn write_line(&mut self, line: &Line) -> Result<()> {
        self.inner
            .write_all(line.as_bytes())
            .map_err(|e| Error::io(&self.label, &e))
    }

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(|e| Error::io(&self.label, &e))
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Creates or truncates `path` for writing.
///
/// # Errors
///
/// Returns [`Error::FileOpen`] naming `path` if the file cannot be created.
pub fn create_output<P: AsRef<Path>>(path: P) -> Result<FileLineSink> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::file_open(path, &e))?;
    debug!(path = %path.display(), "opened output");
    Ok(LineSink::new(
        BufWriter::new(file),
        path.display().to_string(),
    ))
}
