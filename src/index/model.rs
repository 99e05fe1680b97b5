//! Serde models for the archive's summary document (`index.json`).
//!
//! Field names on disk are camelCase to stay compatible with existing
//! consumers of the dataset; the structs use ordinary Rust naming and map
//! through serde renames.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DATASET_DESCRIPTION: &str = "NOAA Daily Geomagnetic Data (Kp Index) by Year";
pub const DATASET_SOURCE: &str = "NOAA Space Weather Prediction Center";
pub const DATASET_FORMAT: &str = "JSON";
pub const DATASET_STRUCTURE: &str = "One file per year: YYYY/kp-index-YYYY.json";

/// The `index.json` document: dataset-wide metadata plus one entry per year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDocument {
    pub metadata: IndexMetadata,
    pub years: Vec<YearRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexMetadata {
    pub description: String,
    pub source: String,
    pub format: String,
    pub structure: String,
    /// Build timestamp, serialized as an RFC 3339 string.
    pub last_updated: DateTime<Utc>,
    pub total_years: u64,
    /// Absent when the archive holds no years at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_range: Option<YearRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

/// One entry in the index's `years` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: i32,
    /// Relative path of the year's data file, e.g. `"1999/kp-index-1999.json"`.
    pub file: String,
    pub record_count: u64,
    pub date_range: DateRange,
}

/// Date bounds of a year's records; both `null` when the year has no data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A single daily record as stored in a per-year file. Only the `date`
/// field matters for indexing; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyRecord {
    #[serde(default)]
    pub date: Option<String>,
}

/// Reads and parses the summary document at `path`.
pub fn read_index(path: &Path) -> Result<IndexDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index {}", path.display()))?;
    let index = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid index {}", path.display()))?;
    Ok(index)
}
