// Logbook - util/constants.rs
//
// Single source of truth for named constants, limits, defaults and the
// fixed user-facing strings of both tools.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Logbook";

/// Application identifier used for the config directory.
pub const APP_ID: &str = "Logbook";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log report
// =============================================================================

/// Pattern for one log line: `YYYY-MM-DD HH:MM:SS LEVEL message`.
/// Anchored at the start only; the message runs to the end of the line.
pub const LOG_LINE_PATTERN: &str = r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}) (\w+) (.+)";

/// Default width the level column is left-justified to in the count table.
pub const DEFAULT_LEVEL_COLUMN_WIDTH: usize = 15;

/// Minimum configurable level column width.
pub const MIN_LEVEL_COLUMN_WIDTH: usize = 1;

/// Maximum configurable level column width.
pub const MAX_LEVEL_COLUMN_WIDTH: usize = 64;

/// Width of the dashed count column in the table separator.
pub const COUNT_COLUMN_WIDTH: usize = 10;

/// Count table header labels.
pub const LEVEL_HEADER: &str = "Log level";
pub const COUNT_HEADER: &str = "Count";

/// Printed when the report binary is started without a log file.
pub const REPORT_USAGE: &str = "Usage: log-report <logfile> [level]";

/// Printed when no records were loaded.
pub const NO_LOGS_FOUND: &str = "No logs found or the file is empty.";

// =============================================================================
// Contact assistant
// =============================================================================

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const NO_CONTACTS: &str = "No contacts found.";
pub const INVALID_COMMAND: &str =
    "Invalid command. Available commands: hello, add, change, phone, all, close, exit";

pub const ADD_USAGE: &str = "Usage: add <name> <phone>";
pub const CHANGE_USAGE: &str = "Usage: change <name> <new_phone>";
pub const PHONE_USAGE: &str = "Usage: phone <name>";

pub const MSG_EMPTY_INPUT: &str = "Please enter a command.";
pub const MSG_CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const MSG_MISSING_ARGUMENTS: &str = "Give me name and phone please.";
pub const MSG_INSUFFICIENT_ARGUMENTS: &str = "Insufficient arguments.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
