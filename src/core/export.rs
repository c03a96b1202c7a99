// Logbook - core/export.rs
//
// CSV and JSON export of parsed log records.
// Core layer: writes to any Write trait object.

use crate::core::model::LogRecord;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Output format for exported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick the format from the file extension: `.json` means JSON,
    /// anything else CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Export records to CSV with a `timestamp,level,message` header.
pub fn export_csv<W: Write>(
    records: &[&LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    csv_writer
        .write_record(["timestamp", "level", "message"])
        .map_err(csv_err)?;

    for record in records {
        csv_writer
            .write_record([&record.timestamp, &record.level, &record.message])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(records.len())
}

/// Export records as a pretty-printed JSON array of objects.
pub fn export_json<W: Write>(
    records: &[&LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_record(level: &str, message: &str) -> LogRecord {
        LogRecord {
            timestamp: "2024-01-01 10:00:00".to_string(),
            level: level.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("out.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("OUT.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Csv);
    }

    #[test]
    fn test_csv_export() {
        let a = make_record("ERROR", "disk full");
        let b = make_record("INFO", "comma, quoted");
        let mut buf = Vec::new();
        let count = export_csv(&[&a, &b], &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().next(), Some("timestamp,level,message"));
        assert!(output.contains("2024-01-01 10:00:00,ERROR,disk full"));
        assert!(output.contains("\"comma, quoted\""));
    }

    #[test]
    fn test_json_export() {
        let a = make_record("ERROR", "disk full");
        let mut buf = Vec::new();
        let count = export_json(&[&a], &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["level"], "ERROR");
        assert_eq!(value[0]["message"], "disk full");
        assert_eq!(value[0]["timestamp"], "2024-01-01 10:00:00");
    }
}
