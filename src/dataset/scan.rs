use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Lists the years present as directories under the archive root.
///
/// Only immediate children count, and only when the entry is a directory
/// whose name is exactly four ASCII digits; names like `199`, `19999` or
/// `abcd` are excluded, as are plain files. The result is sorted ascending,
/// and since directory listings never repeat a name it is strictly
/// increasing. An empty archive yields an empty list.
pub fn scan_years(root: &Path) -> Result<Vec<i32>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to list dataset directory {}", root.display()))?;
    let mut years = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(year) = parse_year_name(name) {
            years.push(year);
        }
    }
    years.sort_unstable();
    Ok(years)
}

fn parse_year_name(name: &str) -> Option<i32> {
    if name.len() != 4 || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}
