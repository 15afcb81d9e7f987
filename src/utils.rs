//! Output file allocation for `dirtable`.
//!
//! This module provides:
//! - [`resolve_output_path`]: a pure name resolver that takes the existence
//!   check as a parameter, so it can be exercised without touching disk
//! - [`create_output_file`]: resolves against the real filesystem and creates
//!   the chosen file
//!
//! An existing file is never overwritten. Probing is sequential and assumes no
//! other process is allocating names in the same directory at the same time.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use log::debug;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf, is_separator};

/// Base name used when `--output` is empty.
pub const DEFAULT_BASE_NAME: &str = "file_list";

/// Picks the first path that `exists` reports as free.
///
/// # Arguments
/// * `desired` - User-supplied name; empty means [`DEFAULT_BASE_NAME`], and a
///   name that is only a directory (`reports/`, `..`) gets it appended
/// * `extension` - Canonical extension including the dot, e.g. `".csv"`
/// * `exists` - Existence check for candidate paths
///
/// # Behavior
/// * The extension is appended when `desired` does not already end with it
/// * If that path is free it is returned as-is
/// * Otherwise `<base>_1<ext>`, `<base>_2<ext>`, ... are probed in order
pub fn resolve_output_path<F>(desired: &str, extension: &str, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let base = if desired.is_empty() {
        DEFAULT_BASE_NAME.to_string()
    } else if desired.ends_with(is_separator) || Path::new(desired).file_name().is_none() {
        Path::new(desired)
            .join(DEFAULT_BASE_NAME)
            .to_string_lossy()
            .into_owned()
    } else {
        desired.strip_suffix(extension).unwrap_or(desired).to_string()
    };

    let first = PathBuf::from(format!("{base}{extension}"));
    if !exists(&first) {
        return first;
    }

    (1u64..)
        .map(|i| PathBuf::from(format!("{base}_{i}{extension}")))
        .find(|candidate| !exists(candidate))
        .unwrap_or(first)
}

/// Resolves a free name for `format` and creates the file.
///
/// The file is opened with `create_new`, so a path that appears between the
/// probe and the create is reported as an error instead of being truncated.
///
/// # Returns
/// * `Result<(PathBuf, File)>` - The path that was created and its open handle
///
/// # Errors
/// Returns an error if the chosen file cannot be created. No further candidates
/// are tried after a creation failure.
pub fn create_output_file(desired: &str, format: OutputFormat) -> Result<(PathBuf, File)> {
    let path = resolve_output_path(desired, format.extension(), |p| p.exists());
    debug!("allocated {} output at {}", format, path.display());

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("cannot create {}", path.display()))?;

    Ok((path, file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn taken(names: &[&str]) -> impl Fn(&Path) -> bool {
        let set: HashSet<PathBuf> = names.iter().map(PathBuf::from).collect();
        move |p: &Path| set.contains(p)
    }

    #[test]
    fn test_default_name_per_format() {
        assert_eq!(
            resolve_output_path("", ".csv", taken(&[])),
            PathBuf::from("file_list.csv")
        );
        assert_eq!(
            resolve_output_path("", ".xlsx", taken(&[])),
            PathBuf::from("file_list.xlsx")
        );
    }

    #[test]
    fn test_extension_appended_when_missing() {
        assert_eq!(
            resolve_output_path("out", ".csv", taken(&[])),
            PathBuf::from("out.csv")
        );
        assert_eq!(
            resolve_output_path("out.csv", ".csv", taken(&[])),
            PathBuf::from("out.csv")
        );
    }

    #[test]
    fn test_suffixes_increase_until_free() {
        let exists = taken(&["out.csv", "out_1.csv", "out_2.csv"]);
        assert_eq!(
            resolve_output_path("out", ".csv", exists),
            PathBuf::from("out_3.csv")
        );
    }

    #[test]
    fn test_gap_in_suffixes_is_reused() {
        let exists = taken(&["file_list.xlsx", "file_list_2.xlsx"]);
        assert_eq!(
            resolve_output_path("", ".xlsx", exists),
            PathBuf::from("file_list_1.xlsx")
        );
    }

    #[test]
    fn test_other_extension_is_kept_in_base() {
        let exists = taken(&["report.txt.csv"]);
        assert_eq!(
            resolve_output_path("report.txt", ".csv", exists),
            PathBuf::from("report.txt_1.csv")
        );
    }

    #[test]
    fn test_directory_component_is_preserved() {
        let exists = taken(&["out/list.csv"]);
        assert_eq!(
            resolve_output_path("out/list.csv", ".csv", exists),
            PathBuf::from("out/list_1.csv")
        );
    }

    #[test]
    fn test_directory_only_name_gets_default_base() {
        assert_eq!(
            resolve_output_path("reports/", ".csv", taken(&[])),
            PathBuf::from("reports/file_list.csv")
        );
        assert_eq!(
            resolve_output_path("..", ".xlsx", taken(&[])),
            PathBuf::from("../file_list.xlsx")
        );

        let exists = taken(&["reports/file_list.csv"]);
        assert_eq!(
            resolve_output_path("reports/", ".csv", exists),
            PathBuf::from("reports/file_list_1.csv")
        );
    }
}
