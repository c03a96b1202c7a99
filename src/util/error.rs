// Logbook - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The contact assistant's command errors render as their fixed
// user-facing strings through `Display`.

use crate::util::constants;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Logbook operations.
#[derive(Debug)]
pub enum LogbookError {
    /// Reading a log file failed.
    Load(LoadError),

    /// A contact assistant command could not be carried out.
    Command(CommandError),

    /// Export of records failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with operation context.
    Io {
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Command(e) => write!(f, "Command error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io { operation, source } => write!(f, "I/O error during {operation}: {source}"),
        }
    }
}

impl std::error::Error for LogbookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Command(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors raised while reading a log file. Both are non-fatal: the caller
/// reports them and carries on with whatever records were collected.
#[derive(Debug)]
pub enum LoadError {
    /// The log file does not exist.
    NotFound { path: PathBuf },

    /// Any other I/O failure, including invalid UTF-8 content.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "File {} not found.", path.display()),
            Self::Io { source, .. } => {
                write!(f, "An error occurred while reading the file: {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<LoadError> for LogbookError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

/// Failure kinds of the contact assistant. Each kind maps to exactly one
/// fixed message, so one kind never masks another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The input line contained no tokens.
    EmptyInput,

    /// The named contact is not in the store.
    ContactNotFound,

    /// A name/phone pair was expected but the value count did not match.
    MissingArguments,

    /// A positional argument was requested beyond those provided.
    InsufficientArguments,
}

impl CommandError {
    /// The fixed user-facing message for this failure kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyInput => constants::MSG_EMPTY_INPUT,
            Self::ContactNotFound => constants::MSG_CONTACT_NOT_FOUND,
            Self::MissingArguments => constants::MSG_MISSING_ARGUMENTS,
            Self::InsufficientArguments => constants::MSG_INSUFFICIENT_ARGUMENTS,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CommandError {}

impl From<CommandError> for LogbookError {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing exported records.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error creating or writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for LogbookError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LogbookError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for Logbook results.
pub type Result<T> = std::result::Result<T, LogbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_errors_render_fixed_messages() {
        assert_eq!(CommandError::EmptyInput.to_string(), "Please enter a command.");
        assert_eq!(CommandError::ContactNotFound.to_string(), "Contact not found.");
        assert_eq!(
            CommandError::MissingArguments.to_string(),
            "Give me name and phone please."
        );
        assert_eq!(
            CommandError::InsufficientArguments.to_string(),
            "Insufficient arguments."
        );
    }

    #[test]
    fn test_load_error_messages() {
        let not_found = LoadError::NotFound {
            path: PathBuf::from("missing.log"),
        };
        assert_eq!(not_found.to_string(), "File missing.log not found.");

        let io = LoadError::Io {
            path: PathBuf::from("bad.log"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert_eq!(
            io.to_string(),
            "An error occurred while reading the file: stream did not contain valid UTF-8"
        );
    }

    #[test]
    fn test_top_level_error_preserves_source() {
        use std::error::Error;
        let err: LogbookError = LoadError::Io {
            path: PathBuf::from("bad.log"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        }
        .into();
        assert!(err.to_string().starts_with("Load error:"));
        assert!(err.source().is_some());
    }
}
