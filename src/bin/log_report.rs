// Logbook - bin/log_report.rs
//
// Log report entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Log path resolution against the executable's directory
// 4. Report run (counts, optional level listing, optional export)
//
// Always exits 0: load failures are reported on stdout and are not fatal.

use clap::Parser;
use logbook::app::report::{self, ReportOptions};
use logbook::platform::{config, fs};
use logbook::util;
use std::path::PathBuf;

/// Count log records per level and list the records of one level.
///
/// Reads lines of the form `YYYY-MM-DD HH:MM:SS LEVEL message`; anything
/// else is skipped. LOGFILE is resolved relative to this program's directory.
#[derive(Parser, Debug)]
#[command(name = "log-report", version, about)]
struct Cli {
    /// Log file to read.
    logfile: Option<PathBuf>,

    /// Level whose records are listed after the count table.
    level: Option<String>,

    /// Write the listed records to this file (.json for JSON, otherwise CSV).
    #[arg(short = 'e', long = "export")]
    export: Option<PathBuf>,

    /// Read configuration from this file instead of the platform default.
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(|| config::PlatformPaths::resolve().config_file());
    let (app_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &config_warnings {
        tracing::warn!(path = %config_path.display(), "{}", warning);
    }

    let Some(logfile) = cli.logfile else {
        println!("{}", util::constants::REPORT_USAGE);
        return;
    };

    let log_path = fs::resolve_log_path(&logfile);
    tracing::debug!(
        path = %log_path.display(),
        level = ?cli.level,
        "Running log report"
    );

    let options = ReportOptions {
        level: cli.level,
        level_width: app_config.level_column_width,
        export_path: cli.export,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match report::run(&log_path, &options, &mut out) {
        Ok(summary) => {
            tracing::debug!(
                records = summary.records,
                listed = ?summary.listed,
                exported = ?summary.exported,
                "Report complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Report failed");
            eprintln!("Error: {e}");
        }
    }
}
