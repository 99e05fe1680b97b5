//! Consistency reporting for the yearly archive.
//!
//! The computations (decade grouping, index cross-checks, gap detection)
//! are pure functions over year lists; rendering assembles them into the
//! report text that `check_years` prints.

mod audit;
mod decades;
mod render;

pub use audit::{cross_check, range_gaps, CrossCheck};
pub use decades::{group_by_decade, DecadeBucket};
pub use render::{elided_list, render_report};

pub(crate) fn join_years(years: &[i32]) -> String {
    years
        .iter()
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
