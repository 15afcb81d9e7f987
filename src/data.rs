//! Data structures for representing directory listings.
//!
//! A scan produces one [`EntryOutcome`] per child of the target directory.
//! Successful outcomes carry a [`DirectoryEntry`]; failed ones carry the path
//! and the reason so callers can report and count them.

use std::path::PathBuf;

/// One immediate child of the scanned directory.
///
/// # Fields
/// * `name` - Base name of the entry
/// * `path` - The scanned directory joined with `name`
/// * `is_dir` - Whether the entry itself is a directory (links are not followed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Result of reading a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Listed(DirectoryEntry),
    /// Metadata could not be read; the entry is left out of the table.
    Skipped { path: PathBuf, reason: String },
}

/// Everything a single scan returned, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub outcomes: Vec<EntryOutcome>,
}

impl Listing {
    /// Entries that made it into the table.
    pub fn entries(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            EntryOutcome::Listed(entry) => Some(entry),
            EntryOutcome::Skipped { .. } => None,
        })
    }

    /// `(path, reason)` for each entry that was skipped.
    pub fn skipped(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            EntryOutcome::Skipped { path, reason } => Some((path, reason.as_str())),
            EntryOutcome::Listed(_) => None,
        })
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    /// Rows for the output writers, one per listed entry.
    pub fn rows(&self) -> Vec<OutputRow> {
        self.entries().map(OutputRow::from).collect()
    }
}

/// A single output record (used for CSV serialization and workbook cells).
///
/// The serde renames produce the CSV header `File Name,Path,Is Directory`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OutputRow {
    #[serde(rename = "File Name")]
    pub name: String,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Is Directory")]
    pub is_directory: bool,
}

impl OutputRow {
    /// The three cells as text, in column order.
    pub fn cells(&self) -> [&str; 3] {
        [
            self.name.as_str(),
            self.path.as_str(),
            if self.is_directory { "true" } else { "false" },
        ]
    }
}

impl From<&DirectoryEntry> for OutputRow {
    fn from(entry: &DirectoryEntry) -> Self {
        OutputRow {
            name: entry.name.clone(),
            path: entry.path.to_string_lossy().into_owned(),
            is_directory: entry.is_dir,
        }
    }
}
