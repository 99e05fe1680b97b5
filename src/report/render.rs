use anyhow::Result;

use super::{cross_check, group_by_decade, join_years, range_gaps};
use crate::index::IndexDocument;

const RULER_WIDTH: usize = 60;

/// Joins years verbatim when there are at most `verbatim_limit` of them,
/// otherwise shows the first `head` plus a count of the remainder.
pub fn elided_list(years: &[i32], verbatim_limit: usize, head: usize) -> String {
    if years.len() <= verbatim_limit {
        return join_years(years);
    }
    format!(
        "{} ... and {} more",
        join_years(&years[..head]),
        years.len() - head
    )
}

/// Renders the full consistency report for `check_years`.
///
/// `years` is the Directory Scanner's ascending output; `index` is the
/// outcome of loading `index.json`. A failed index load is reported inline
/// and only suppresses the cross-check section; decade grouping and the
/// summary depend solely on the directory listing. With zero year
/// directories the min/max-dependent sections are replaced by an explicit
/// diagnostic, but the index audit still runs so a stale index gets
/// reported.
pub fn render_report(years: &[i32], index: Result<IndexDocument>) -> String {
    let mut out = String::new();
    out.push_str("\n📊 Checking Available Kp Index JSON Files\n\n");
    out.push_str(&ruler());
    out.push('\n');

    if years.is_empty() {
        out.push_str("\n⚠️  No years found: the dataset contains no four-digit year directories.\n");
    } else {
        out.push_str(&format!("\n✅ Found {} year directories:\n\n", years.len()));
    }

    let buckets = group_by_decade(years);
    for bucket in &buckets {
        out.push_str(&format!(
            "📅 {}s ({}-{}):\n",
            bucket.decade, bucket.start_year, bucket.end_year
        ));
        out.push_str(&format!("   ✅ {} years available\n", bucket.count));
        if !bucket.missing.is_empty() {
            out.push_str(&format!("   ⚠️  {} years missing\n", bucket.missing.len()));
            out.push_str(&format!(
                "   ❌ Missing: {}\n",
                elided_list(&bucket.missing, 10, 5)
            ));
        }
        out.push_str(&format!("   📁 Years: {}\n\n", join_years(&bucket.years)));
    }

    out.push_str("\n📋 Checking index.json...\n\n");
    match index {
        Ok(document) => {
            out.push_str("✅ index.json found\n");
            out.push_str(&format!(
                "   Total years in index: {}\n",
                document.years.len()
            ));
            let (start, end) = match document.metadata.year_range {
                Some(range) => (range.start.to_string(), range.end.to_string()),
                None => ("N/A".to_string(), "N/A".to_string()),
            };
            out.push_str(&format!("   Year range in index: {start} - {end}\n"));

            let index_years: Vec<i32> = document.years.iter().map(|record| record.year).collect();
            let check = cross_check(years, &index_years);
            if !check.missing_in_index.is_empty() {
                out.push_str(&format!(
                    "\n   ⚠️  {} years in directories but NOT in index.json:\n",
                    check.missing_in_index.len()
                ));
                out.push_str(&format!("      {}\n", join_years(&check.missing_in_index)));
            }
            if !check.extra_in_index.is_empty() {
                out.push_str(&format!(
                    "\n   ⚠️  {} years in index.json but NOT in directories:\n",
                    check.extra_in_index.len()
                ));
                out.push_str(&format!("      {}\n", join_years(&check.extra_in_index)));
            }
            if check.is_in_sync() {
                out.push_str("\n   ✅ index.json is in sync with directories\n");
            }
        }
        Err(error) => {
            out.push_str(&format!("   ❌ Error reading index.json: {error:#}\n"));
        }
    }

    if !years.is_empty() {
        out.push('\n');
        out.push_str(&ruler());
        out.push_str("\n\n📈 SUMMARY\n\n");
        out.push_str(&format!("   Total years available: {}\n", years.len()));
        out.push_str(&format!(
            "   Year range: {} - {}\n",
            years[0],
            years[years.len() - 1]
        ));
        out.push_str(&format!("   Complete decades: {}\n", buckets.len()));

        let gaps = range_gaps(years);
        if gaps.is_empty() {
            out.push_str("\n   ✅ No gaps in year range!\n");
        } else {
            out.push_str(&format!("\n   ⚠️  {} years missing in range:\n", gaps.len()));
            out.push_str(&format!("      {}\n", elided_list(&gaps, 20, 10)));
        }
    }

    out.push('\n');
    out.push_str(&ruler());
    out.push('\n');
    out
}

fn ruler() -> String {
    "=".repeat(RULER_WIDTH)
}
