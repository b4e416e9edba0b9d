//! Diagnostic logging for filesim
//!
//! Diagnostics go through `tracing` and are written to stderr, so stdout
//! carries nothing but report lines. When `RUST_LOG` is set it replaces the
//! level-based filter entirely.
//!
//! # Example
//!
//! ```no_run
//! use filesim::util::logging::{init_logging, LoggingConfig};
//! use filesim::FilesimConfig;
//!
//! let config = FilesimConfig::from_env().expect("Invalid configuration");
//! init_logging(LoggingConfig::from_config(&config));
//!
//! tracing::debug!(file = "myFile.txt", "Processing");
//! ```

use crate::config::FilesimConfig;
use std::env;
use std::io;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Subscriber settings derived from [`FilesimConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Level,
    /// One JSON object per event instead of human-readable lines
    pub use_json: bool,
    /// Source file and line number on every event
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_config(config: &FilesimConfig) -> Self {
        Self {
            level: parse_level(&config.log_level),
            use_json: config.log_json,
            include_location: config.log_location,
        }
    }
}

/// Level name to `tracing::Level`, `INFO` for anything unrecognised
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

fn build_filter(level: Level) -> EnvFilter {
    match env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(format!("filesim={}", level)),
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let location = config.include_location;

        let json = config.use_json.then(|| {
            fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_file(location)
                .with_line_number(location)
        });
        let text = (!config.use_json).then(|| {
            fmt::layer()
                .with_writer(io::stderr)
                .with_file(location)
                .with_line_number(location)
        });

        tracing_subscriber::registry()
            .with(build_filter(config.level))
            .with(json)
            .with(text)
            .init();
    });
}
