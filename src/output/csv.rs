//! CSV output formatter for directory listings.
//!
//! Writes the header `File Name,Path,Is Directory` followed by one record per
//! row. Quoting follows the `csv` crate defaults (fields holding a comma,
//! quote or line break are quoted, embedded quotes are doubled).

use crate::data::OutputRow;
use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;

/// Header written before any row, also emitted for an empty listing.
pub const HEADER: [&str; 3] = ["File Name", "Path", "Is Directory"];

/// Renders rows to CSV.
///
/// # Arguments
/// * `rows` - Rows in enumeration order
/// * `writer` - Destination; buffered by the CSV writer
///
/// # Returns
/// * `Result<()>` - Ok once every row is written and the buffer is flushed
///
/// # Note
/// The header is written explicitly rather than inferred from the first
/// serialized row, so an empty directory still yields a header line.
pub fn render<W: Write>(rows: &[OutputRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .context("failed to write CSV header")?;

    for row in rows {
        csv_writer
            .serialize(row)
            .with_context(|| format!("failed to write CSV row for {}", row.path))?;
    }

    flush(csv_writer)
}

fn flush<W: Write>(mut csv_writer: Writer<W>) -> Result<()> {
    csv_writer.flush().context("failed to flush CSV output")?;
    let mut inner = csv_writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush CSV output: {}", err.error()))?;
    inner.flush().context("failed to flush CSV output")?;
    Ok(())
}
