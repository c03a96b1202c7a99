// Logbook - app/report.rs
//
// Log report orchestration: load -> count -> render -> optional level
// listing -> optional export. User-facing text goes to `out`; the binary
// passes stdout.

use crate::app::loader;
use crate::core::export::{self, ExportFormat};
use crate::core::filter;
use crate::core::model::LogRecord;
use crate::core::report;
use crate::core::stats;
use crate::util::constants;
use crate::util::error::{ExportError, LogbookError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for one report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Level to list records for (matched case-insensitively). An empty
    /// level lists nothing, like `None`.
    pub level: Option<String>,
    /// Width of the level column in the count table.
    pub level_width: usize,
    /// Where to export the listed records, if anywhere.
    pub export_path: Option<PathBuf>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            level: None,
            level_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            export_path: None,
        }
    }
}

/// What a report run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Records parsed from the file.
    pub records: usize,
    /// Records listed for the requested level (None if no level or an empty
    /// one was given).
    pub listed: Option<usize>,
    /// Records written to the export file (None if no export was requested).
    pub exported: Option<usize>,
}

/// Run the full report for `log_path`, writing user-facing output to `out`.
///
/// Load failures are printed and are not errors. Errors are returned only
/// for failures to write `out` or the export file; the report text has
/// already been written when an export error is returned.
pub fn run<W: Write + ?Sized>(
    log_path: &Path,
    options: &ReportOptions,
    out: &mut W,
) -> Result<ReportSummary> {
    let io_err = |e| LogbookError::Io {
        operation: "writing report",
        source: e,
    };

    let (records, load_error) = loader::load_logs(log_path);
    if let Some(err) = load_error {
        writeln!(out, "{err}").map_err(io_err)?;
    }

    let mut summary = ReportSummary {
        records: records.len(),
        ..Default::default()
    };

    if records.is_empty() {
        writeln!(out, "{}", constants::NO_LOGS_FOUND).map_err(io_err)?;
        return Ok(summary);
    }

    let counts = stats::count_by_level(&records);
    report::write_level_counts(out, &counts, options.level_width).map_err(io_err)?;

    let selected: Vec<&LogRecord> = match options.level.as_deref().filter(|l| !l.is_empty()) {
        Some(level) => {
            let matching = filter::filter_by_level(&records, level);
            report::write_level_details(out, level, &matching).map_err(io_err)?;
            summary.listed = Some(matching.len());
            matching
        }
        None => records.iter().collect(),
    };
    out.flush().map_err(io_err)?;

    if let Some(ref export_path) = options.export_path {
        let exported = export_records(&selected, export_path)?;
        tracing::info!(
            path = %export_path.display(),
            records = exported,
            "Records exported"
        );
        summary.exported = Some(exported);
    }

    Ok(summary)
}

/// Write `records` to `path`, choosing CSV or JSON by extension.
pub fn export_records(records: &[&LogRecord], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = std::io::BufWriter::new(file);

    let count = match ExportFormat::from_path(path) {
        ExportFormat::Json => export::export_json(records, &mut writer, path)?,
        ExportFormat::Csv => export::export_csv(records, &mut writer, path)?,
    };
    writer.flush().map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count)
}
