//! Regenerates `index.json` from the year directories currently on disk.
//!
//! The builder never patches the existing document: it reads every year's
//! data file, assembles a fresh index, and overwrites the old one. Problems
//! with individual year files degrade to zero/null defaults plus a warning
//! so a single bad file cannot block the rebuild.

use anyhow::{Context, Result};
use chrono::Utc;
use rayon::prelude::*;
use std::fs;

use super::model::{
    DailyRecord, DateRange, IndexDocument, IndexMetadata, YearRange, YearRecord,
    DATASET_DESCRIPTION, DATASET_FORMAT, DATASET_SOURCE, DATASET_STRUCTURE,
};
use crate::dataset::DatasetPaths;

/// Builds the index entry for one year.
///
/// Returns the record plus an optional warning when the data file exists
/// but is malformed, not an array, or empty. A missing file is normal for
/// a freshly created year directory and yields zero/null defaults silently.
pub fn build_year_record(paths: &DatasetPaths, year: i32) -> (YearRecord, Option<String>) {
    let mut record = YearRecord {
        year,
        file: DatasetPaths::year_file_name(year),
        record_count: 0,
        date_range: DateRange::default(),
    };

    let path = paths.year_file_path(year);
    if !path.exists() {
        return (record, None);
    }

    let parsed: Result<Vec<DailyRecord>> = fs::read_to_string(&path)
        .map_err(anyhow::Error::from)
        .and_then(|raw| serde_json::from_str(&raw).map_err(anyhow::Error::from));
    let records = match parsed {
        Ok(records) => records,
        Err(_) => {
            return (record, Some(format!("Could not parse {}", path.display())));
        }
    };
    if records.is_empty() {
        return (record, Some(format!("No records in {}", path.display())));
    }

    // Per-year files are stored ascending by date, so the first and last
    // entries bound the range without re-sorting.
    record.record_count = records.len() as u64;
    record.date_range.start = records.first().and_then(|r| r.date.clone());
    record.date_range.end = records.last().and_then(|r| r.date.clone());
    (record, None)
}

/// Assembles a fresh index document for the given years.
///
/// Year files are read in parallel; the assembled records are re-sorted
/// ascending by year afterwards, and warnings are collected rather than
/// printed so the caller controls output ordering.
pub fn build_index(paths: &DatasetPaths, years: &[i32]) -> (IndexDocument, Vec<String>) {
    let mut outcomes: Vec<(YearRecord, Option<String>)> = years
        .par_iter()
        .map(|&year| build_year_record(paths, year))
        .collect();
    outcomes.sort_by_key(|(record, _)| record.year);

    let mut records = Vec::with_capacity(outcomes.len());
    let mut warnings = Vec::new();
    for (record, warning) in outcomes {
        records.push(record);
        warnings.extend(warning);
    }

    let year_range = match (records.first(), records.last()) {
        (Some(first), Some(last)) => Some(YearRange {
            start: first.year,
            end: last.year,
        }),
        _ => None,
    };

    let document = IndexDocument {
        metadata: IndexMetadata {
            description: DATASET_DESCRIPTION.to_string(),
            source: DATASET_SOURCE.to_string(),
            format: DATASET_FORMAT.to_string(),
            structure: DATASET_STRUCTURE.to_string(),
            last_updated: Utc::now(),
            total_years: records.len() as u64,
            year_range,
        },
        years: records,
    };
    (document, warnings)
}

/// Writes the document over `index.json` at the archive root.
pub fn write_index(paths: &DatasetPaths, document: &IndexDocument) -> Result<()> {
    let path = paths.index_path();
    let data = serde_json::to_string_pretty(document)?;
    fs::write(&path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
