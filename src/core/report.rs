// Logbook - core/report.rs
//
// Text rendering of the level count table and the per-level listing.
// Core layer: writes to any Write trait object.

use crate::core::model::{LevelCounts, LogRecord};
use crate::core::stats::sorted_counts;
use crate::util::constants;
use std::io::{self, Write};

/// Render the two-column count table, one row per level in
/// lexicographic order. `level_width` is the left-justified width of the
/// level column.
pub fn write_level_counts<W: Write + ?Sized>(
    out: &mut W,
    counts: &LevelCounts,
    level_width: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<level_width$} | {}",
        constants::LEVEL_HEADER,
        constants::COUNT_HEADER
    )?;
    writeln!(
        out,
        "{}|{}",
        "-".repeat(level_width + 1),
        "-".repeat(constants::COUNT_COLUMN_WIDTH)
    )?;
    for (level, count) in sorted_counts(counts) {
        writeln!(out, "{level:<level_width$} | {count}")?;
    }
    Ok(())
}

/// Render the listing for one requested level as `timestamp - message`
/// lines. The header is written even when `records` is empty.
pub fn write_level_details<W: Write + ?Sized>(
    out: &mut W,
    level: &str,
    records: &[&LogRecord],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Log details for level '{}':", level.to_uppercase())?;
    for record in records {
        writeln!(out, "{} - {}", record.timestamp, record.message)?;
    }
    Ok(())
}
