//! I/O utilities for revline.
//!
//! Provides buffered line-at-a-time reading and writing over files or any
//! in-memory source and sink.

pub mod reader;
pub mod writer;

pub use reader::{FileLineReader, LineReader, open_input};
pub use writer::{FileLineSink, LineSink, create_output};
