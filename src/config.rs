//! Configuration management for filesim
//!
//! Settings are loaded from environment variables with sensible defaults.
//! A variable that is set but cannot be parsed is an error, not a silent
//! fallback. Command-line flags override whatever is loaded here.
//!
//! # Environment Variables
//!
//! - `FILESIM_LOG_LEVEL`: Logging level - default: "info"
//! - `FILESIM_LOG_JSON`: Emit diagnostics as JSON (true|false) - default: "false"
//! - `FILESIM_LOG_LOCATION`: Source file and line on diagnostics (true|false) - default: "false"
//! - `FILESIM_PLAIN`: Undecorated console lines (true|false) - default: "false"
//! - `FILESIM_STRICT`: Exit non-zero when input is rejected (true|false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use filesim::FilesimConfig;
//!
//! let config = FilesimConfig::from_env().expect("Invalid environment");
//! config.validate().expect("Invalid configuration");
//! ```

use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;
const DEFAULT_LOG_LOCATION: bool = false;
const DEFAULT_PLAIN: bool = false;
const DEFAULT_STRICT: bool = false;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesimConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit diagnostics as JSON
    pub log_json: bool,

    /// Attach source file and line to diagnostics
    pub log_location: bool,

    /// Print report lines without glyphs
    pub plain: bool,

    /// Exit with status 1 when the input is rejected
    pub strict: bool,
}

impl Default for FilesimConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: DEFAULT_LOG_JSON,
            log_location: DEFAULT_LOG_LOCATION,
            plain: DEFAULT_PLAIN,
            strict: DEFAULT_STRICT,
        }
    }
}

impl FilesimConfig {
    /// Loads from `FILESIM_*` environment variables, using defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level = env::var("FILESIM_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Ok(Self {
            log_level,
            log_json: env_flag("FILESIM_LOG_JSON", DEFAULT_LOG_JSON)?,
            log_location: env_flag("FILESIM_LOG_LOCATION", DEFAULT_LOG_LOCATION)?,
            plain: env_flag("FILESIM_PLAIN", DEFAULT_PLAIN)?,
            strict: env_flag("FILESIM_STRICT", DEFAULT_STRICT)?,
        })
    }
}

fn env_flag(name: &str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(value) => parse_bool(name, &value),
        Err(_) => Ok(default),
    }
}

/// Parses `true/false`, `1/0`, `yes/no` (case-insensitive)
pub fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::ParseError {
            field: field.to_string(),
            error: format!("expected a boolean, got '{}'", other),
        }),
    }
}

impl FilesimConfig {
    /// Checks that the log level is one `tracing` understands
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                self.log_level
            ))),
        }
    }
}

impl fmt::Display for FilesimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Filesim Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  JSON Logs: {}", self.log_json)?;
        writeln!(f, "  Log Location: {}", self.log_location)?;
        writeln!(f, "  Plain Output: {}", self.plain)?;
        write!(f, "  Strict: {}", self.strict)
    }
}
