mod layout;
mod scan;

pub use layout::{data_root, DatasetPaths, INDEX_FILE_NAME};
pub use scan::scan_years;
