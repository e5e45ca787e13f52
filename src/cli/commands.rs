//! CLI command implementation.

use crate::cli::parser::Cli;
use crate::core::{LineReverser, RunSummary};
use crate::error::Result;
use tracing::info;

/// Executes the reversal described by `cli`.
///
/// # Errors
///
/// Returns an error if either file cannot be opened or the run fails
/// part-way. Both files are closed before this returns.
pub fn execute(cli: &Cli) -> Result<RunSummary> {
    let summary = LineReverser::from_paths(&cli.input, &cli.output)?.run()?;

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        lines = summary.lines,
        bytes = summary.bytes,
        "reversed file"
    );
    Ok(summary)
}
