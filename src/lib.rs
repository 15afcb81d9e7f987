//! Library crate for dirtable
//!
//! Lists the immediate entries of one directory and writes them, one row per
//! entry, to a CSV file or an XLSX workbook without overwriting anything that
//! already exists.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and argument validation
//! - [`data`]: Core data structures (`DirectoryEntry`, `EntryOutcome`, `OutputRow`)
//! - [`scan`]: One-level directory enumeration
//! - [`utils`]: Collision-free output file allocation
//! - [`output`]: CSV and XLSX writers

pub mod cli;
pub mod data;
pub mod output;
pub mod scan;
pub mod utils;

pub use cli::{Args, Invocation, OutputFormat};
pub use data::{DirectoryEntry, EntryOutcome, Listing, OutputRow};

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub format: OutputFormat,
    /// The collision-free path that was written.
    pub path: PathBuf,
    pub rows_written: usize,
    pub skipped: usize,
}

/// Lists `invocation.directory` and writes the table.
///
/// The directory is read before any output file is created, so a bad
/// directory leaves nothing behind. Skipped entries are reported on stdout
/// before the table is written.
///
/// # Errors
/// Returns an error if the directory cannot be read, the output file cannot
/// be created, or the rows cannot be written. The outermost context names
/// the failing step.
pub fn run(invocation: &Invocation) -> Result<Report> {
    let listing =
        scan::list_directory(&invocation.directory).context("Error reading directory")?;

    report_skipped(&listing, io::stdout().lock()).context("failed to write to stdout")?;
    write_listing(invocation, &listing)
}

/// Writes one `Error getting file info: <path>: <reason>` line per skipped entry.
pub fn report_skipped<W: Write>(listing: &Listing, mut out: W) -> io::Result<()> {
    for (path, reason) in listing.skipped() {
        writeln!(out, "Error getting file info: {}: {}", path.display(), reason)?;
    }
    out.flush()
}

/// Allocates the output file for `invocation` and writes the listed entries.
pub fn write_listing(invocation: &Invocation, listing: &Listing) -> Result<Report> {
    let rows = listing.rows();
    let (path, file) = utils::create_output_file(&invocation.output, invocation.format)
        .context("Error creating file")?;

    emit(invocation.format, &rows, &path, file)?;

    debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(Report {
        format: invocation.format,
        path,
        rows_written: rows.len(),
        skipped: listing.skipped_count(),
    })
}

/// Renders `rows` into `writer`, which backs the file created at `path`.
///
/// If rendering fails the file at `path` is removed before the error is
/// returned.
pub fn emit<W>(format: OutputFormat, rows: &[OutputRow], path: &Path, writer: W) -> Result<()>
where
    W: Write + Seek + Send,
{
    let written = match format {
        OutputFormat::Csv => output::render_csv(rows, writer).context("Error writing CSV file"),
        OutputFormat::Xlsx => output::render_xlsx(rows, writer).context("Error saving XLSX file"),
    };

    if let Err(err) = written {
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("could not remove {}: {}", path.display(), remove_err);
        }
        return Err(err);
    }
    Ok(())
}
