// src/ingest/filter.rs
use std::collections::HashSet;

use crate::ingest::normalize::fold;

/// Keep the rows whose publish-flag field folds to a member of `truthy`.
/// A row shorter than `idx_publish + 1` has an empty flag and is dropped.
/// Order is preserved; rows that fail the test are dropped silently, never
/// reported as errors.
pub fn filter_rows(
    rows: Vec<Vec<String>>,
    idx_publish: usize,
    truthy: &HashSet<String>,
) -> Vec<Vec<String>> {
    rows.into_iter()
        .filter(|row| {
            let flag = row.get(idx_publish).map(String::as_str).unwrap_or("");
            truthy.contains(&fold(flag))
        })
        .collect()
}
