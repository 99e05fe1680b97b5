//! Audits the year directories against `index.json` and prints a report.
//! Run: cargo run --bin check_years -- [dataset-dir]

use anyhow::Result;
use kpindex::dataset::{data_root, scan_years, DatasetPaths};
use kpindex::index::read_index;
use kpindex::report::render_report;
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let root = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => data_root()?,
    };
    let paths = DatasetPaths::new(root);
    let years = scan_years(&paths.root)?;
    let index = read_index(&paths.index_path());
    print!("{}", render_report(&years, index));
    Ok(())
}
