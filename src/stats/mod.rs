pub mod report;

pub use report::{run, Report};

use crate::entries::FrequencyTable;

/// Sum of every count in the table.
pub fn total_count(table: &FrequencyTable) -> usize {
    table.iter().map(|(_, &count)| count).sum()
}

/// Number of distinct values in the table.
pub fn distinct_count(table: &FrequencyTable) -> usize {
    table.len()
}

/// Number of values present in both tables, whatever their counts.
pub fn distinct_overlap(a: &FrequencyTable, b: &FrequencyTable) -> usize {
    a.iter().filter_map(|(key, _)| b.get(key)).count()
}

/// Combined occurrences, from both sides, of every value the tables share.
///
/// Shared keys contribute `a[key] + b[key]`; this is the total number of
/// rows across both files whose value also appears in the other file, not
/// the size of a multiset intersection.
pub fn total_overlap(a: &FrequencyTable, b: &FrequencyTable) -> usize {
    a.iter()
        .filter_map(|(key, &count)| b.get(key).map(|other| count + other))
        .sum()
}
