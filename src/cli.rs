//! CLI interface definitions for the `dirtable` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the raw struct parsed from CLI inputs
//! - [`OutputFormat`]: the two supported table formats and their extensions
//! - [`Invocation`]: the validated request handed to [`crate::run`]
//!
//! Validation is kept out of clap on purpose so that a wrong positional count
//! prints the usage line and an unknown format prints the fixed format message.
//!
//! # Example
//!
//! ```bash
//! dirtable --format xlsx --output listing ~/Downloads
//! ```

use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Usage line printed when the positional arguments are wrong.
pub const USAGE: &str = "Usage: dirtable --format <csv|xlsx> --output <filename> <directory>";

/// Message printed for any `--format` value other than `csv` or `xlsx`.
pub const INVALID_FORMAT: &str = "Invalid output format. Please use 'csv' or 'xlsx'.";

/// Command-line arguments for `dirtable`.
///
/// The positional list is collected as-is; [`Args::resolve`] checks that
/// exactly one directory was given.
#[derive(Parser, Debug)]
#[command(name = "dirtable", version, about)]
pub struct Args {
    /// Output format (csv or xlsx)
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Output file name (defaults to file_list.<ext>)
    #[arg(long, default_value = "")]
    pub output: String,

    /// Directory to list
    #[arg(value_name = "DIRECTORY")]
    pub paths: Vec<PathBuf>,
}

/// Errors raised while turning [`Args`] into an [`Invocation`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("{}", USAGE)]
    Usage,
    #[error("{}", INVALID_FORMAT)]
    InvalidFormat(String),
}

/// Supported table formats.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

impl OutputFormat {
    /// Canonical extension, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => ".csv",
            OutputFormat::Xlsx => ".xlsx",
        }
    }

    /// Upper-case name used in status messages.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Xlsx => "XLSX",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "xlsx" => Ok(OutputFormat::Xlsx),
            other => Err(CliError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Xlsx => "xlsx",
        })
    }
}

/// A validated request: what to list and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub format: OutputFormat,
    /// User-supplied output name; empty means "use the default".
    pub output: String,
    pub directory: PathBuf,
}

impl Args {
    /// Validates the positional count, then the format.
    pub fn resolve(self) -> Result<Invocation, CliError> {
        let mut paths = self.paths;
        if paths.len() != 1 {
            return Err(CliError::Usage);
        }
        let directory = paths.remove(0);
        let format = self.format.parse::<OutputFormat>()?;

        Ok(Invocation {
            format,
            output: self.output,
            directory,
        })
    }
}
