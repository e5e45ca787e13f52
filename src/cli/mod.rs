//! CLI layer for revline.
//!
//! Parses the two positional paths with clap and runs the reversal.

pub mod commands;
pub mod parser;

pub use commands::execute;
pub use parser::Cli;
