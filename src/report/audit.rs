use std::collections::BTreeSet;

/// Set differences between the on-disk year directories and the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossCheck {
    /// Present as a directory but absent from the index.
    pub missing_in_index: Vec<i32>,
    /// Listed in the index but with no corresponding directory.
    pub extra_in_index: Vec<i32>,
}

impl CrossCheck {
    pub fn is_in_sync(&self) -> bool {
        self.missing_in_index.is_empty() && self.extra_in_index.is_empty()
    }
}

/// Compares directory years against the index's year list, both directions.
pub fn cross_check(dir_years: &[i32], index_years: &[i32]) -> CrossCheck {
    let dirs: BTreeSet<i32> = dir_years.iter().copied().collect();
    let indexed: BTreeSet<i32> = index_years.iter().copied().collect();
    CrossCheck {
        missing_in_index: dirs.difference(&indexed).copied().collect(),
        extra_in_index: indexed.difference(&dirs).copied().collect(),
    }
}

/// Missing years over the full contiguous `[min, max]` span of an ascending
/// year list. An empty input has no span and yields no gaps.
pub fn range_gaps(years: &[i32]) -> Vec<i32> {
    if years.is_empty() {
        return Vec::new();
    }
    let present: BTreeSet<i32> = years.iter().copied().collect();
    let (min, max) = (years[0], years[years.len() - 1]);
    (min..=max).filter(|year| !present.contains(year)).collect()
}
