use super::support::DatasetHarness;
use kpindex::dataset::scan_years;
use std::fs;

#[test]
fn keeps_only_directories_named_as_exactly_four_digits() {
    let harness = DatasetHarness::new();
    harness
        .add_dir("1999")
        .add_dir("2000")
        .add_dir("199")
        .add_dir("19999")
        .add_dir("abcd")
        .add_dir("20a0");
    // A plain file with a year-shaped name must not count.
    fs::write(harness.path().join("2001"), "not a directory").expect("write file");

    let years = scan_years(harness.path()).expect("scan");
    assert_eq!(years, vec![1999, 2000]);
}

#[test]
fn output_is_sorted_ascending() {
    let harness = DatasetHarness::new();
    harness.add_dir("2010").add_dir("1932").add_dir("1975");

    let years = scan_years(harness.path()).expect("scan");
    assert_eq!(years, vec![1932, 1975, 2010]);
}

#[test]
fn empty_dataset_yields_empty_list() {
    let harness = DatasetHarness::new();
    let years = scan_years(harness.path()).expect("scan");
    assert!(years.is_empty());
}

#[test]
fn missing_base_directory_is_an_error() {
    let harness = DatasetHarness::new();
    let missing = harness.path().join("does-not-exist");
    let error = scan_years(&missing).expect_err("must fail");
    assert!(error.to_string().contains("Failed to list dataset directory"));
}
