//! # revline
//!
//! Reverses the characters of every line in a text file.
//!
//! revline streams its input one line at a time through a single reusable
//! buffer, reverses the bytes of each line while keeping any trailing
//! newline in place, and appends the result to the output file. Line order
//! is preserved.
//!
//! ## Example
//!
//! ```
//! use revline::{Line, LineReader, LineReverser, LineSink};
//!
//! let reader = LineReader::new(&b"a\n\nbc\n"[..], "<in>");
//! let sink = LineSink::new(Vec::new(), "<out>");
//! let mut reverser = LineReverser::new(reader, sink);
//! reverser.run().unwrap();
//! assert_eq!(reverser.into_sink().into_inner(), b"a\n\ncb\n");
//!
//! let mut line = Line::from_bytes(b"noeol");
//! line.reverse();
//! assert_eq!(line.as_bytes(), b"loeon");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core types
pub use crate::core::{Line, LineReverser, RunSummary, reverse_file};

// Re-export I/O types
pub use io::{LineReader, LineSink, create_output, open_input};

// Re-export CLI types
pub use cli::{Cli, execute};
