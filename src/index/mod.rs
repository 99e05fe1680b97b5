mod builder;
mod model;

pub use builder::{build_index, build_year_record, write_index};
pub use model::{
    read_index, DailyRecord, DateRange, IndexDocument, IndexMetadata, YearRange, YearRecord,
    DATASET_DESCRIPTION, DATASET_FORMAT, DATASET_SOURCE, DATASET_STRUCTURE,
};
