pub mod dataset;
pub mod index;
pub mod report;

// Re-export commonly used types for convenience.
pub use dataset::{data_root, scan_years, DatasetPaths};
pub use index::{build_index, read_index, write_index, IndexDocument, YearRecord};
pub use report::render_report;
