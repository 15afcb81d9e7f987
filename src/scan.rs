//! Directory enumeration for `dirtable`.
//!
//! [`list_directory`] reads exactly one level of a directory with [`WalkDir`]
//! (`min_depth(1)`, `max_depth(1)`, links not followed) and returns a
//! [`Listing`] in the order the filesystem hands entries back.
//!
//! Failure policy:
//! - The target itself missing, unreadable, or not a directory is an error.
//! - A child whose metadata cannot be read becomes [`EntryOutcome::Skipped`]
//!   and the scan carries on.
//!
//! Entry paths are the directory joined with the entry name and then cleaned
//! lexically (`.` dropped, `..` collapsed), so `./d` lists `d/a.txt`.

use crate::data::{DirectoryEntry, EntryOutcome, Listing};
use anyhow::{Context, Result, bail};
use log::{debug, warn};
use path_clean::PathClean;
use std::ffi::OsStr;
use std::fmt::Display;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the immediate children of `dir`.
///
/// # Arguments
/// * `dir` - The directory to read; entry paths are built by joining onto it
///
/// # Returns
/// * `Result<Listing>` - One outcome per child, in enumeration order
///
/// # Errors
/// Returns an error if `dir` does not exist, is not a directory, or cannot be read.
pub fn list_directory(dir: &Path) -> Result<Listing> {
    let meta = fs::metadata(dir).with_context(|| format!("cannot access {}", dir.display()))?;
    if !meta.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let mut listing = Listing::default();

    for item in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = match item {
            Ok(entry) => entry,
            // Depth 0 is the target itself, e.g. read_dir was denied.
            Err(err) if err.depth() == 0 => {
                return Err(err).with_context(|| format!("cannot read {}", dir.display()));
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::clean)
                    .unwrap_or_else(|| dir.clean());
                warn!("skipping {}: {}", path.display(), err);
                listing.outcomes.push(EntryOutcome::Skipped {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        listing
            .outcomes
            .push(entry_outcome(dir, entry.file_name(), entry.metadata()));
    }

    debug!(
        "listed {} entries in {} ({} skipped)",
        listing.outcomes.len(),
        dir.display(),
        listing.skipped_count()
    );
    Ok(listing)
}

/// Joins `name` onto `dir` and cleans the result.
pub fn entry_path(dir: &Path, name: &OsStr) -> PathBuf {
    dir.join(name).clean()
}

/// Turns one child's metadata lookup into an outcome.
///
/// A failed lookup is logged and becomes [`EntryOutcome::Skipped`] carrying
/// the error text.
pub fn entry_outcome<E: Display>(
    dir: &Path,
    name: &OsStr,
    metadata: Result<Metadata, E>,
) -> EntryOutcome {
    let path = entry_path(dir, name);
    match metadata {
        Ok(meta) => EntryOutcome::Listed(DirectoryEntry {
            name: name.to_string_lossy().into_owned(),
            path,
            is_dir: meta.is_dir(),
        }),
        Err(err) => {
            warn!("skipping {}: {}", path.display(), err);
            EntryOutcome::Skipped {
                path,
                reason: err.to_string(),
            }
        }
    }
}
