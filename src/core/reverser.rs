//! The line reversal loop.
//!
//! [`LineReverser`] owns both streams and the line buffer for the length of a
//! run. Dropping it closes the streams, so every exit path releases them.

use crate::core::Line;
use crate::error::Result;
use crate::io::{FileLineReader, FileLineSink, LineReader, LineSink, create_output, open_input};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Initial line buffer capacity; grows as needed.
const INITIAL_LINE_CAPACITY: usize = 128;

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read and written.
    pub lines: u64,
    /// Bytes read and written.
    pub bytes: u64,
}

/// Streams lines from a reader to a sink, reversing each.
///
/// # Examples
///
/// ```
/// use revline::core::LineReverser;
/// use revline::io::{LineReader, LineSink};
///
/// let reader = LineReader::new(&b"hello\nworld\n"[..], "<in>");
/// let sink = LineSink::new(Vec::new(), "<out>");
///
/// let mut reverser = LineReverser::new(reader, sink);
/// let summary = reverser.run().unwrap();
///
/// assert_eq!(summary.lines, 2);
/// assert_eq!(reverser.into_sink().into_inner(), b"olleh\ndlrow\n");
/// ```
#[derive(Debug)]
pub struct LineReverser<R: BufRead, W: Write> {
    reader: LineReader<R>,
    sink: LineSink<W>,
    line: Line,
}

impl LineReverser<std::io::BufReader<std::fs::File>, std::io::BufWriter<std::fs::File>> {
    /// Opens `input` for reading, then creates or truncates `output`.
    ///
    /// The input is opened first, so a missing input never creates the
    /// output file. If the output cannot be created the input is closed
    /// before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileOpen`] naming whichever path failed.
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<Self> {
        let reader: FileLineReader = open_input(input)?;
        let sink: FileLineSink = create_output(output)?;
        Ok(Self::new(reader, sink))
    }
}

impl<R: BufRead, W: Write> LineReverser<R, W> {
    /// Creates a reverser over an already-open reader and sink.
    pub fn new(reader: LineReader<R>, sink: LineSink<W>) -> Self {
        Self {
            reader,
            sink,
            line: Line::with_capacity(INITIAL_LINE_CAPACITY),
        }
    }

    /// Reverses every line until the input is exhausted, then flushes.
    ///
    /// Lines keep their order; only the bytes within each line are
    /// reversed, with a trailing newline left in place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] on the first read, write or flush
    /// failure. No retry is attempted.
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        while let Some(read) = self.reader.read_line(&mut self.line)? {
            self.line.reverse();
            self.sink.write_line(&self.line)?;

            summary.lines += 1;
            summary.bytes += read as u64;
            trace!(line = summary.lines, bytes = read, "reversed line");
        }

        self.sink.flush()?;
        debug!(
            input = self.reader.label(),
            output = self.sink.label(),
            lines = summary.lines,
            bytes = summary.bytes,
            "input exhausted"
        );
        Ok(summary)
    }

    /// Consumes the reverser, returning the sink.
    pub fn into_sink(self) -> LineSink<W> {
        self.sink
    }
}

/// Reverses every line of `input` into `output`.
///
/// # Errors
///
/// Returns an error if either file cannot be opened or any read or write
/// fails.
pub fn reverse_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<RunSummary> {
    LineReverser::from_paths(input, output)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io;
    use tempfile::TempDir;
    use test_case::test_case;

    fn reverse_bytes(input: &[u8]) -> (Vec<u8>, RunSummary) {
        let reader = LineReader::new(input, "<in>");
        let sink = LineSink::new(Vec::new(), "<out>");
        let mut reverser = LineReverser::new(reader, sink);
        let summary = reverser.run().unwrap();
        (reverser.into_sink().into_inner(), summary)
    }

    #[test_case(b"hello\nworld\n", b"olleh\ndlrow\n" ; "two lines")]
    #[test_case(b"a\n\nbc\n", b"a\n\ncb\n" ; "empty middle line")]
    #[test_case(b"noeol", b"loeon" ; "no trailing newline")]
    #[test_case(b"", b"" ; "empty input")]
    #[test_case(b"\n\n\n", b"\n\n\n" ; "only newlines")]
    #[test_case(b"ab\ncd", b"ba\ndc" ; "last line lacks newline")]
    fn test_run(input: &[u8], expected: &[u8]) {
        let (output, _) = reverse_bytes(input);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_summary_counts() {
        let (_, summary) = reverse_bytes(b"a\n\nbc\n");
        assert_eq!(summary, RunSummary { lines: 3, bytes: 6 });

        let (_, summary) = reverse_bytes(b"");
        assert_eq!(summary, RunSummary::default());
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_aborts_run() {
        let reader = LineReader::new(&b"one\ntwo\n"[..], "<in>");
        let sink = LineSink::new(BrokenSink, "<out>");
        let err = LineReverser::new(reader, sink).run().unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_flush_failure_aborts_run() {
        // Small lines stay in the BufWriter until the final flush.
        let reader = LineReader::new(&b"one\ntwo\n"[..], "<in>");
        let sink = LineSink::new(io::BufWriter::new(BrokenSink), "out.txt");
        let err = LineReverser::new(reader, sink).run().unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if path == "out.txt"));
    }

    #[test]
    fn test_reverse_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        std::fs::write(&input, "hello\nworld\n").unwrap();

        let summary = reverse_file(&input, &output).unwrap();
        assert_eq!(summary.lines, 2);
        assert_eq!(std::fs::read(&output).unwrap(), b"olleh\ndlrow\n");
    }

    #[test]
    fn test_missing_input_does_not_create_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.txt");
        let output = temp_dir.path().join("out.txt");

        let err = reverse_file(&input, &output).unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
        assert!(err.to_string().contains("missing.txt"));
        assert!(!output.exists());
    }

    #[test]
    fn test_unopenable_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        std::fs::write(&input, "x\n").unwrap();

        // A directory cannot be opened as a file for writing.
        let err = reverse_file(&input, temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
    }
}
