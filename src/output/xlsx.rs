//! XLSX output formatter for directory listings.
//!
//! Builds a workbook with a single `Files` sheet holding one row per entry and
//! three string cells per row. Unlike the CSV form there is no header row.
//! The workbook is assembled in memory and written out in one save call.

use crate::data::OutputRow;
use anyhow::{Context, Result};
use rust_xlsxwriter::{ColNum, RowNum, Workbook};
use std::io::{Seek, Write};

/// Name of the only worksheet.
pub const SHEET_NAME: &str = "Files";

/// Renders rows to an XLSX workbook.
///
/// # Arguments
/// * `rows` - Rows in enumeration order; row `i` lands in sheet row `i`
/// * `writer` - Destination for the finished archive
///
/// # Returns
/// * `Result<()>` - Ok once the workbook has been saved and flushed
pub fn render<W>(rows: &[OutputRow], mut writer: W) -> Result<()>
where
    W: Write + Seek + Send,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .context("failed to create sheet")?;

    for (i, row) in rows.iter().enumerate() {
        let row_num = RowNum::try_from(i).context("too many entries for one sheet")?;
        for (col, value) in row.cells().into_iter().enumerate() {
            worksheet
                .write_string(row_num, col as ColNum, value)
                .with_context(|| format!("failed to write cell for {}", row.path))?;
        }
    }

    workbook
        .save_to_writer(&mut writer)
        .context("failed to save workbook")?;
    writer.flush().context("failed to flush workbook")?;
    Ok(())
}
