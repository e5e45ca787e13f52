//! Binary entry point for revline.

#![allow(clippy::print_stderr)]

use revline::cli::{Cli, execute};
use revline::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let cli = match Cli::from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match execute(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
