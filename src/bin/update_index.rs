//! Regenerates `index.json` from the year directories currently on disk.
//! Run: cargo run --bin update_index -- [dataset-dir]

use anyhow::Result;
use kpindex::dataset::{data_root, scan_years, DatasetPaths};
use kpindex::index::{build_index, write_index};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let root = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => data_root()?,
    };
    let paths = DatasetPaths::new(root);
    let years = scan_years(&paths.root)?;
    if years.is_empty() {
        println!(
            "⚠️  No year directories found under {}; writing an empty index.",
            paths.root.display()
        );
    }

    let (document, warnings) = build_index(&paths, &years);
    for warning in &warnings {
        println!("⚠️  Warning: {warning}");
    }
    write_index(&paths, &document)?;

    match document.metadata.year_range {
        Some(range) => println!(
            "✅ Updated index.json with {} years ({}-{})",
            years.len(),
            range.start,
            range.end
        ),
        None => println!("✅ Updated index.json with 0 years"),
    }
    Ok(())
}
