//! Error types for revline.
//!
//! Every failure is terminal for a run: errors propagate with `?` up to the
//! binary entry point, which reports them on stderr and exits non-zero.

use std::path::Path;
use thiserror::Error;

/// Result type alias for revline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of arguments.
    #[error("Usage: {program} [in-file] [out-file]")]
    Usage {
        /// Program name as invoked (`argv[0]`).
        program: String,
    },

    /// Input or output path could not be opened in the required mode.
    #[error("failed to open file: {path}: {reason}")]
    FileOpen {
        /// Path that failed to open.
        path: String,
        /// Reason reported by the operating system.
        reason: String,
    },

    /// Read, write or flush failure after streaming started.
    #[error("I/O error on {path}: {reason}")]
    Io {
        /// Path of the stream that failed.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

impl Error {
    /// Builds a [`Error::FileOpen`] for `path`.
    pub fn file_open(path: &Path, err: &std::io::Error) -> Self {
        Self::FileOpen {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Builds an [`Error::Io`] for the stream labelled `path`.
    pub fn io(path: &str, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_usage_display() {
        let err = Error::Usage {
            program: "revline".to_string(),
        };
        assert_eq!(err.to_string(), "Usage: revline [in-file] [out-file]");
    }

    #[test]
    fn test_file_open_names_path() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let err = Error::file_open(&PathBuf::from("/tmp/missing.txt"), &io_err);
        assert!(matches!(err, Error::FileOpen { .. }));
        assert_eq!(
            err.to_string(),
            "failed to open file: /tmp/missing.txt: No such file or directory"
        );
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::WriteZero, "disk full");
        let err = Error::io("out.txt", &io_err);
        assert!(err.to_string().contains("out.txt"));
        assert!(err.to_string().contains("disk full"));
    }
}
