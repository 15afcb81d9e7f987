#![allow(dead_code)]

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch area with a directory to list and a separate directory for output.
pub struct Fixture {
    _tmp: TempDir,
    pub listed: PathBuf,
    pub out: PathBuf,
}

impl Fixture {
    /// `listed/` holds `a.txt` and an empty subdirectory `b/`.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let listed = tmp.path().join("d");
        let out = tmp.path().join("out");
        fs::create_dir(&listed).expect("create listed dir");
        fs::create_dir(&out).expect("create out dir");
        fs::write(listed.join("a.txt"), "a").expect("write a.txt");
        fs::create_dir(listed.join("b")).expect("create b");

        Self {
            _tmp: tmp,
            listed,
            out,
        }
    }

    /// Output name inside the output directory, as a string for `--output`.
    pub fn out_name(&self, name: &str) -> String {
        self.out.join(name).to_string_lossy().into_owned()
    }

    /// File names present in the output directory, sorted.
    pub fn out_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.out)
            .expect("read out dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Reads one member of an `.xlsx` archive as text.
pub fn xlsx_part(path: &Path, member: &str) -> String {
    let file = fs::File::open(path).expect("open workbook");
    let mut archive = zip::ZipArchive::new(file).expect("workbook is a zip archive");
    let mut xml = String::new();
    archive
        .by_name(member)
        .expect("member present")
        .read_to_string(&mut xml)
        .expect("member is utf-8");
    xml
}

/// Number of rows in the first worksheet.
pub fn xlsx_row_count(path: &Path) -> usize {
    xlsx_part(path, "xl/worksheets/sheet1.xml")
        .matches("<row ")
        .count()
}
