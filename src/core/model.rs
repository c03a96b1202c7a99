// Logbook - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Log Record (output of line parsing)
// =============================================================================

/// One successfully parsed log line.
///
/// Only ever built from a line that matched the fixed
/// `YYYY-MM-DD HH:MM:SS LEVEL message` pattern; the three fields are the
/// captured text, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// `YYYY-MM-DD HH:MM:SS`, as written in the source line.
    pub timestamp: String,

    /// Severity token, case preserved (e.g. `ERROR`, `INFO`).
    pub level: String,

    /// Remainder of the line after the level.
    pub message: String,
}

impl LogRecord {
    /// Rebuild the line this record was parsed from.
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.timestamp, self.level, self.message)
    }
}

/// Number of records per exact level string.
///
/// Unordered; the reporter sorts by level name for presentation.
pub type LevelCounts = HashMap<String, usize>;

// =============================================================================
// Contact
// =============================================================================

/// One entry of the contact store. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)
    }
}
