//! Main entry point for the `dirtable` CLI application.
//!
//! `dirtable` writes the immediate entries of a directory to a table file:
//! one row per entry with its name, its joined path and whether it is a
//! directory.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Initialises `env_logger` (diagnostics on stderr, `RUST_LOG` to tune)
//! - Delegates listing and writing to [`dirtable::run`]
//! - Prints user-facing messages on stdout and maps failures to exit codes
//!
//! # Exit Codes
//! - `0`: table written
//! - `1`: the directory could not be read or the output could not be written
//! - `2`: wrong number of directories or unknown `--format`

use clap::Parser;
use dirtable::cli::CliError;
use dirtable::{Args, run};
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let invocation = match Args::parse().resolve() {
        Ok(invocation) => invocation,
        Err(err) => {
            if let CliError::InvalidFormat(value) = &err {
                debug!("rejected --format value {value:?}");
            }
            println!("{err}");
            return ExitCode::from(2);
        }
    };

    match run(&invocation) {
        Ok(report) => {
            println!("{} file created successfully!", report.format.label());
            println!("Output saved to: {}", report.path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
