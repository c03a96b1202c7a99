// Logbook - core/stats.rs
//
// Per-level record counts. Pure logic, recomputed on every run.

use crate::core::model::{LevelCounts, LogRecord};

/// Count records per exact level string (case-sensitive, as captured).
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for record in records {
        *counts.entry(record.level.clone()).or_insert(0) += 1;
    }
    counts
}

/// Levels and their counts, sorted lexicographically by level name.
pub fn sorted_counts(counts: &LevelCounts) -> Vec<(&str, usize)> {
    let mut rows: Vec<(&str, usize)> = counts.iter().map(|(l, c)| (l.as_str(), *c)).collect();
    rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
    rows
}
