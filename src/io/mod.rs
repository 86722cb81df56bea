//! File exports and the project snapshot.
//!
//! - `export`: spreadsheet export (results + input summary sheets)
//! - `project`: project snapshot JSON (save and reload)

pub mod export;
pub mod project;

use std::path::{Path, PathBuf};

/// Append `suffix` to the file name of `stem` (`out/run` + `_x.csv` -> `out/run_x.csv`).
pub(crate) fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
