// Logbook - app/loader.rs
//
// Reads one log file into parsed records. The only component of the
// report pipeline that touches storage.
//
// Failures are non-fatal: a missing file gives no records, any other
// I/O error keeps whatever was parsed before it. Either way the error is
// returned next to the records so the caller can report it.

use crate::core::model::LogRecord;
use crate::core::parser;
use crate::platform::fs;
use crate::util::error::LoadError;
use std::io;
use std::path::Path;

/// Load and parse `path`, preserving file order.
pub fn load_logs(path: &Path) -> (Vec<LogRecord>, Option<LoadError>) {
    let mut records = Vec::new();

    let reader = match fs::open_buffered(path) {
        Ok(reader) => reader,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Log file not found");
            return (
                records,
                Some(LoadError::NotFound {
                    path: path.to_path_buf(),
                }),
            );
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to open log file");
            return (
                records,
                Some(LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }),
            );
        }
    };

    match parser::parse_reader(reader, &mut records) {
        Ok(stats) => {
            tracing::info!(
                path = %path.display(),
                records = records.len(),
                skipped = stats.lines_skipped,
                "Log file loaded"
            );
            (records, None)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                records = records.len(),
                "Read failed; keeping partial results"
            );
            (
                records,
                Some(LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }),
            )
        }
    }
}
