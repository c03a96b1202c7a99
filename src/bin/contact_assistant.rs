// Logbook - bin/contact_assistant.rs
//
// Interactive contact assistant entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. The stdin/stdout session loop
//
// Contacts live in memory only and are gone when the session ends.

use clap::Parser;
use logbook::app::session::Session;
use logbook::platform::config;
use logbook::util;
use std::path::PathBuf;

/// Interactive contact book: add, change, phone, all, hello, close/exit.
#[derive(Parser, Debug)]
#[command(name = "contact-assistant", version, about)]
struct Cli {
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

    let mut session = Session::new(app_config.prompt);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = session.run(stdin.lock(), &mut out) {
        tracing::error!(error = %e, "Session terminated by I/O error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
