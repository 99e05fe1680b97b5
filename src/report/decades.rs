use std::collections::BTreeMap;

/// Years grouped by decade, with completeness bookkeeping for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeBucket {
    /// Decade label, e.g. `1990` for 1990-1999.
    pub decade: i32,
    /// Years observed in this bucket, ascending.
    pub years: Vec<i32>,
    pub start_year: i32,
    pub end_year: i32,
    pub count: usize,
    /// Years the bucket would hold if the observed span had no holes.
    pub expected: usize,
    /// Missing years within `[start_year, end_year]`, ascending.
    pub missing: Vec<i32>,
}

/// Partitions an ascending year list into decade buckets, ascending by
/// decade. The span checked for holes is the observed `[min, max]` of each
/// bucket, not the full calendar decade.
pub fn group_by_decade(years: &[i32]) -> Vec<DecadeBucket> {
    let mut by_decade: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for &year in years {
        by_decade.entry((year / 10) * 10).or_default().push(year);
    }

    by_decade
        .into_iter()
        .map(|(decade, mut years)| {
            years.sort_unstable();
            let start_year = years[0];
            let end_year = years[years.len() - 1];
            let expected = (end_year - start_year + 1) as usize;
            let missing = (start_year..=end_year)
                .filter(|year| !years.contains(year))
                .collect();
            DecadeBucket {
                decade,
                start_year,
                end_year,
                count: years.len(),
                expected,
                missing,
                years,
            }
        })
        .collect()
}
