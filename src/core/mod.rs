//! Core types for revline.
//!
//! This module contains the line buffer and the loop that reverses a
//! stream of lines.

pub mod line;
pub mod reverser;

pub use line::Line;
pub use reverser::{LineReverser, RunSummary, reverse_file};
