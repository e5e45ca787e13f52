//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Exactly two
//! arguments are accepted and both are taken as paths, even when they start
//! with `-`. Anything else is reported with the short usage line.

use crate::error::{Error, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Program name used when `argv[0]` is unavailable.
pub const DEFAULT_PROGRAM_NAME: &str = "revline";

/// Arguments expected after the program name.
const PATH_ARGS: usize = 2;

/// revline: reverse the characters of every line in a file.
///
/// Reads `IN_FILE` line by line and writes each line, reversed, to
/// `OUT_FILE`. Line order and trailing newlines are preserved.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "revline")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// File to read. Must exist.
    #[arg(value_name = "IN_FILE", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// File to write. Created or truncated.
    #[arg(value_name = "OUT_FILE", allow_hyphen_values = true)]
    pub output: PathBuf,
}

impl Cli {
    /// Parses `args`, where the first element is the program name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] unless exactly two arguments follow the
    /// program name.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program = program_name(&args);

        if args.len() != PATH_ARGS + 1 {
            return Err(Error::Usage { program });
        }

        // `--` would be eaten as clap's terminator; it is a path here.
        let mut parser_args = Vec::with_capacity(PATH_ARGS + 2);
        parser_args.push(args[0].clone());
        parser_args.push(OsString::from("--"));
        parser_args.extend(args[1..].iter().cloned());

        Self::try_parse_from(parser_args).map_err(|_| Error::Usage { program })
    }
}

/// Returns the program name as invoked.
fn program_name(args: &[OsString]) -> String {
    args.first().map_or_else(
        || DEFAULT_PROGRAM_NAME.to_string(),
        |arg| arg.to_string_lossy().into_owned(),
    )
}
