// Logbook - tests/e2e_log_report.rs
//
// End-to-end tests for the log report pipeline.
//
// These exercise real files on disk (fixtures and temp files), the real
// line parser, aggregation, rendering and export: everything the
// `log-report` binary does except argument parsing.

use logbook::app::loader::load_logs;
use logbook::app::report::{run, ReportOptions};
use logbook::core::stats::count_by_level;
use logbook::util::error::LoadError;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run_to_string(path: &Path, options: &ReportOptions) -> String {
    let mut out = Vec::new();
    run(path, options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn with_level(level: &str) -> ReportOptions {
    ReportOptions {
        level: Some(level.to_string()),
        ..Default::default()
    }
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn e2e_fixture_loads_only_matching_lines() {
    let (records, error) = load_logs(&fixture("sample.log"));
    assert!(error.is_none(), "unexpected error: {error:?}");
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].timestamp, "2024-01-22 08:30:01");
    assert_eq!(records[9].message, "Scheduled maintenance.");

    let counts = count_by_level(&records);
    assert_eq!(counts.values().sum::<usize>(), records.len());
    assert_eq!(counts["INFO"], 4);
    assert_eq!(counts["DEBUG"], 3);
    assert_eq!(counts["ERROR"], 2);
    assert_eq!(counts["WARNING"], 1);
}

#[test]
fn e2e_missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.log");

    let (records, error) = load_logs(&path);
    assert!(records.is_empty());
    assert!(matches!(error, Some(LoadError::NotFound { .. })));

    let output = run_to_string(&path, &ReportOptions::default());
    assert_eq!(
        output,
        format!(
            "File {} not found.\nNo logs found or the file is empty.\n",
            path.display()
        )
    );
}

// =============================================================================
// Report output
// =============================================================================

#[test]
fn e2e_single_error_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    fs::write(&path, "2024-01-01 10:00:00 ERROR disk full\ngarbage line\n").unwrap();

    let (records, _) = load_logs(&path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, "ERROR");
    assert_eq!(records[0].message, "disk full");

    let mut out = Vec::new();
    let summary = run(&path, &with_level("error"), &mut out).unwrap();
    assert_eq!(summary.records, 1);
    assert_eq!(summary.listed, Some(1));

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output,
        "Log level       | Count\n\
         ----------------|----------\n\
         ERROR           | 1\n\
         \n\
         Log details for level 'ERROR':\n\
         2024-01-01 10:00:00 - disk full\n"
    );
}

#[test]
fn e2e_count_table_sorted_without_level() {
    let output = run_to_string(&fixture("sample.log"), &ReportOptions::default());
    let rows: Vec<&str> = output.lines().skip(2).collect();
    assert_eq!(
        rows,
        vec![
            "DEBUG           | 3",
            "ERROR           | 2",
            "INFO            | 4",
            "WARNING         | 1",
        ]
    );
    assert!(!output.contains("Log details"));
}

#[test]
fn e2e_unknown_level_prints_header_only() {
    let output = run_to_string(&fixture("sample.log"), &with_level("critical"));
    assert!(output.ends_with("\nLog details for level 'CRITICAL':\n"));
}

#[test]
fn e2e_empty_level_skips_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    fs::write(&path, "2024-01-01 10:00:00 ERROR disk full\n").unwrap();

    let mut out = Vec::new();
    let summary = run(&path, &with_level(""), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(!output.contains("Log details"));
    assert!(output.ends_with("ERROR           | 1\n"));
    assert_eq!(summary.listed, None);
}

#[test]
fn e2e_empty_file_reports_no_logs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.log");
    fs::write(&path, "just noise\n\nmore noise\n").unwrap();

    let output = run_to_string(&path, &with_level("info"));
    assert_eq!(output, "No logs found or the file is empty.\n");
}

#[test]
fn e2e_custom_level_width() {
    let options = ReportOptions {
        level_width: 7,
        ..Default::default()
    };
    let output = run_to_string(&fixture("sample.log"), &options);
    assert!(output.starts_with("Log level | Count\n--------|----------\n"));
    assert!(output.contains("\nERROR   | 2\n"));
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn e2e_export_filtered_records_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("errors.json");
    let options = ReportOptions {
        level: Some("ERROR".to_string()),
        export_path: Some(export_path.clone()),
        ..Default::default()
    };

    let mut out = Vec::new();
    let summary = run(&fixture("sample.log"), &options, &mut out).unwrap();
    assert_eq!(summary.exported, Some(2));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    let messages: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec!["Database connection failed.", "Backup process failed."]
    );
}

#[test]
fn e2e_export_all_records_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("all.csv");
    let options = ReportOptions {
        export_path: Some(export_path.clone()),
        ..Default::default()
    };

    let mut out = Vec::new();
    let summary = run(&fixture("sample.log"), &options, &mut out).unwrap();
    assert_eq!(summary.exported, Some(10));

    let csv_text = fs::read_to_string(&export_path).unwrap();
    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "timestamp,level,message");
    assert_eq!(lines[1], "2024-01-22 08:30:01,INFO,User logged in successfully.");
}

#[test]
fn e2e_export_to_missing_directory_fails_after_report() {
    let dir = tempfile::tempdir().unwrap();
    let options = ReportOptions {
        export_path: Some(dir.path().join("no").join("such").join("dir.csv")),
        ..Default::default()
    };

    let mut out = Vec::new();
    let result = run(&fixture("sample.log"), &options, &mut out);
    assert!(result.is_err());
    assert!(String::from_utf8(out).unwrap().starts_with("Log level"));
}
