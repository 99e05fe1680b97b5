//! Layout of the yearly Kp index archive.
//!
//! The archive is a flat tree: one directory per year holding that year's
//! data file, plus a summary document at the root:
//!
//!   1932/kp-index-1932.json
//!   1933/kp-index-1933.json
//!   ...
//!   index.json
//!
//! This module centralizes the path scheme so both maintenance utilities
//! agree on where files live, and resolves which directory the archive
//! occupies on this machine.

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::path::PathBuf;

/// Name of the summary document at the archive root.
pub const INDEX_FILE_NAME: &str = "index.json";

/// Returns the root directory of the Kp index archive.
///
/// Order of precedence:
/// 1. `KPINDEX_DATA_DIR` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn data_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("KPINDEX_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("kpindex").join("json-by-year"))
}

/// Convenience struct exposing the archive's fixed paths.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub root: PathBuf,
}

impl DatasetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path to the summary document.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE_NAME)
    }

    /// Relative location of a year's data file, as recorded in the index.
    pub fn year_file_name(year: i32) -> String {
        format!("{year}/kp-index-{year}.json")
    }

    /// Absolute path to a year's data file.
    pub fn year_file_path(&self, year: i32) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("kp-index-{year}.json"))
    }
}
