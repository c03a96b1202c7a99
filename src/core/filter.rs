// Logbook - core/filter.rs
//
// Level filter for parsed records.
// Core layer: pure logic, no I/O dependencies.

use crate::core::model::LogRecord;

/// Records whose level equals `level`, ignoring case, in their original order.
pub fn filter_by_level<'a>(records: &'a [LogRecord], level: &str) -> Vec<&'a LogRecord> {
    let wanted = level.to_uppercase();
    records
        .iter()
        .filter(|record| record.level.to_uppercase() == wanted)
        .collect()
}
