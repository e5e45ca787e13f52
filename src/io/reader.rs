//! Line-at-a-time input.
//!
//! [`LineReader`] wraps any [`BufRead`] source and refills a caller-owned
//! [`Line`] on each call, so one allocation is reused for the whole run.

use crate::core::Line;
use crate::core::line::NEWLINE;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Buffered reader over the input file.
pub type FileLineReader = LineReader<BufReader<File>>;

/// Reads newline-delimited lines from a buffered source.
///
/// # Examples
///
/// ```
/// use revline::core::Line;
/// use revline::io::LineReader;
///
/// let mut reader = LineReader::new(&b"one\ntwo"[..], "<memory>");
/// let mut line = Line::new();
///
/// assert_eq!(reader.read_line(&mut line).unwrap(), Some(4));
/// assert_eq!(line.as_bytes(), b"one\n");
/// assert_eq!(reader.read_line(&mut line).unwrap(), Some(3));
/// assert_eq!(line.as_bytes(), b"two");
/// assert_eq!(reader.read_line(&mut line).unwrap(), None);
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    /// Underlying source.
    inner: R,
    /// Name used in error messages.
    label: String,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps `inner`, labelling errors with `label`.
    pub fn new(inner: R, label: impl Into<String>) -> Self {
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

    /// Reads the next line into `line`, replacing its previous contents.
    ///
    /// The line keeps its trailing newline when the source had one; the last
    /// line of a source without a final newline is returned as-is. Returns
    /// `Ok(None)` once the source is exhausted. An empty line (`"\n"`) is
    /// `Some(1)`, never end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the underlying read fails.
    pub fn read_line(&mut self, line: &mut Line) -> Result<Option<usize>> {
        line.clear();
        let read = self
            .inner
            .read_until(NEWLINE, line.buffer_mut())
            .map_err(|e| Error::io(&self.label, &e))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(read))
    }
}

/// Opens `path` for reading.
///
/// # Errors
///
/// Returns [`Error::FileOpen`] naming `path` if the file cannot be opened.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<FileLineReader> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_open(path, &e))?;
    debug!(path = %path.display(), "opened input");
    Ok(LineReader::new(
        BufReader::new(file),
        path.display().to_string(),
    ))
}
