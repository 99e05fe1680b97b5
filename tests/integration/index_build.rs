use super::support::DatasetHarness;
use kpindex::dataset::scan_years;
use kpindex::index::{build_index, read_index, write_index};

#[test]
fn records_carry_count_and_date_bounds() {
    let harness = DatasetHarness::new();
    harness
        .add_year(1999, &["1999-01-01", "1999-01-02", "1999-01-03"])
        .add_year(2000, &["2000-01-01"]);

    let years = scan_years(harness.path()).expect("scan");
    let (document, warnings) = build_index(&harness.paths(), &years);

    assert!(warnings.is_empty());
    assert_eq!(document.years.len(), 2);
    let first = &document.years[0];
    assert_eq!(first.year, 1999);
    assert_eq!(first.file, "1999/kp-index-1999.json");
    assert_eq!(first.record_count, 3);
    assert_eq!(first.date_range.start.as_deref(), Some("1999-01-01"));
    assert_eq!(first.date_range.end.as_deref(), Some("1999-01-03"));

    assert_eq!(document.metadata.total_years, 2);
    let range = document.metadata.year_range.expect("year range");
    assert_eq!(range.start, 1999);
    assert_eq!(range.end, 2000);
}

#[test]
fn missing_data_file_defaults_to_zero_and_null_but_keeps_the_year() {
    let harness = DatasetHarness::new();
    harness.add_dir("2005");

    let years = scan_years(harness.path()).expect("scan");
    let (document, warnings) = build_index(&harness.paths(), &years);

    assert!(warnings.is_empty());
    assert_eq!(document.years.len(), 1);
    let record = &document.years[0];
    assert_eq!(record.year, 2005);
    assert_eq!(record.record_count, 0);
    assert!(record.date_range.start.is_none());
    assert!(record.date_range.end.is_none());
}

#[test]
fn malformed_empty_and_non_array_files_warn_and_default() {
    let harness = DatasetHarness::new();
    harness
        .write_raw_year_file(2001, "{ this is not json")
        .write_raw_year_file(2002, "[]")
        .write_raw_year_file(2003, "{\"date\": \"2003-01-01\"}");

    let years = scan_years(harness.path()).expect("scan");
    let (document, warnings) = build_index(&harness.paths(), &years);

    assert_eq!(warnings.len(), 3);
    assert!(warnings.iter().any(|w| w.contains("kp-index-2001.json")));
    for record in &document.years {
        assert_eq!(record.record_count, 0);
        assert!(record.date_range.start.is_none());
        assert!(record.date_range.end.is_none());
    }
}

#[test]
fn records_without_date_fields_yield_null_bounds() {
    let harness = DatasetHarness::new();
    harness.write_raw_year_file(1998, "[{\"kp\": [1, 2, 3]}, {\"kp\": [2, 3, 4]}]");

    let years = scan_years(harness.path()).expect("scan");
    let (document, warnings) = build_index(&harness.paths(), &years);

    assert!(warnings.is_empty());
    let record = &document.years[0];
    assert_eq!(record.record_count, 2);
    assert!(record.date_range.start.is_none());
    assert!(record.date_range.end.is_none());
}

#[test]
fn years_are_assembled_ascending() {
    let harness = DatasetHarness::new();
    harness
        .add_year(2010, &["2010-01-01"])
        .add_year(1932, &["1932-01-01"])
        .add_year(1975, &["1975-01-01"]);

    let years = scan_years(harness.path()).expect("scan");
    let (document, _) = build_index(&harness.paths(), &years);

    let listed: Vec<i32> = document.years.iter().map(|record| record.year).collect();
    assert_eq!(listed, vec![1932, 1975, 2010]);
}

#[test]
fn rebuild_is_idempotent_except_for_the_timestamp() {
    let harness = DatasetHarness::new();
    harness
        .add_year(1999, &["1999-01-01", "1999-12-31"])
        .add_dir("2000");

    let years = scan_years(harness.path()).expect("scan");
    let (first, _) = build_index(&harness.paths(), &years);
    write_index(&harness.paths(), &first).expect("write index");
    let reread = read_index(&harness.paths().index_path()).expect("reread");
    let (second, _) = build_index(&harness.paths(), &years);

    assert_eq!(first.years, reread.years);
    assert_eq!(first.years, second.years);
    assert_eq!(first.metadata.total_years, second.metadata.total_years);
    assert_eq!(first.metadata.year_range, second.metadata.year_range);
}

#[test]
fn empty_dataset_writes_a_valid_index_without_a_year_range() {
    let harness = DatasetHarness::new();

    let years = scan_years(harness.path()).expect("scan");
    let (document, warnings) = build_index(&harness.paths(), &years);
    write_index(&harness.paths(), &document).expect("write index");

    assert!(warnings.is_empty());
    assert_eq!(document.metadata.total_years, 0);
    assert!(document.metadata.year_range.is_none());

    let raw = std::fs::read_to_string(harness.paths().index_path()).expect("read raw index");
    assert!(!raw.contains("yearRange"));
    assert!(raw.contains("\"totalYears\": 0"));

    let reread = read_index(&harness.paths().index_path()).expect("reread");
    assert!(reread.years.is_empty());
}

#[test]
fn index_uses_camel_case_field_names_on_disk() {
    let harness = DatasetHarness::new();
    harness.add_year(1999, &["1999-01-01"]);

    let years = scan_years(harness.path()).expect("scan");
    let (document, _) = build_index(&harness.paths(), &years);
    write_index(&harness.paths(), &document).expect("write index");

    let raw = std::fs::read_to_string(harness.paths().index_path()).expect("read raw index");
    for field in ["lastUpdated", "totalYears", "yearRange", "recordCount", "dateRange"] {
        assert!(raw.contains(field), "expected {field} in index.json");
    }
}
