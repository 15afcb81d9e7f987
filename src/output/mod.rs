//! Table writers for the `dirtable` application.
//!
//! Each writer accepts a slice of [`OutputRow`](crate::data::OutputRow)
//! values plus a destination and knows nothing about scanning or naming.
//!
//! # Available Formatters
//!
//! - **CSV**: header row plus one record per entry
//! - **XLSX**: a single `Files` sheet, one row per entry, no header row

pub mod csv;
pub mod xlsx;

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use csv::render as render_csv;

/// XLSX output renderer function.
///
/// See [`xlsx::render`] for full documentation.
pub use xlsx::render as render_xlsx;
