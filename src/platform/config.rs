// Logbook - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Logbook configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logbook/ or %APPDATA%\Logbook\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[report]` section.
    pub report: ReportSection,
    /// `[assistant]` section.
    pub assistant: AssistantSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Width the level column of the count table is padded to.
    pub level_column_width: Option<usize>,
}

/// `[assistant]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AssistantSection {
    /// Prompt printed before each command is read.
    pub prompt: Option<String>,
}

/// Validated configuration shared by both binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Level column width for the count table.
    pub level_column_width: usize,
    /// REPL prompt.
    pub prompt: String,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            level_column_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            prompt: constants::DEFAULT_PROMPT.to_string(),
            log_level: None,
        }
    }
}

/// Parse config.toml content.
pub fn parse_config(content: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate config.toml at `path`.
///
/// Returns the validated config and a list of non-fatal warnings. A missing
/// file gives defaults with no warnings; an unreadable or unparseable file
/// gives defaults with one warning.
///
/// Runs before logging is initialised (the config carries the log level),
/// so warnings are returned rather than logged here.
pub fn load_config(path: &Path) -> (AppConfig, Vec<String>) {
    if !path.exists() {
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    match parse_config(&content, path) {
        Ok(raw) => validate(raw),
        Err(err) => (AppConfig::default(), vec![format!("{err}. Using defaults.")]),
    }
}

/// Validate each field against named constants, accumulating all warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Report: level_column_width --
    if let Some(width) = raw.report.level_column_width {
        if (constants::MIN_LEVEL_COLUMN_WIDTH..=constants::MAX_LEVEL_COLUMN_WIDTH).contains(&width)
        {
            config.level_column_width = width;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "report.level_column_width".to_string(),
                value: width.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_LEVEL_COLUMN_WIDTH,
                    constants::MAX_LEVEL_COLUMN_WIDTH
                ),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_LEVEL_COLUMN_WIDTH
            ));
        }
    }

    // -- Assistant: prompt --
    if let Some(prompt) = raw.assistant.prompt {
        if prompt.trim().is_empty() {
            warnings.push(
                "[assistant] prompt must not be empty. Using default.".to_string(),
            );
        } else {
            config.prompt = prompt;
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL
            ));
        }
    }

    (config, warnings)
}
