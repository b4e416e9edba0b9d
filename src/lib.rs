//! filesim - simulated file processing with guaranteed cleanup
//!
//! A single routine validates a file name and some file data, pretends to
//! open, read and write the file, and always finishes with a cleanup step.
//! Nothing touches the real filesystem: every step is reported as a line
//! through a [`ReportSink`].
//!
//! # Core Concepts
//!
//! - **Validation**: three ordered checks (missing name, non-string data,
//!   blank data); the first failure wins
//! - **Session**: [`FileSession`] holds the simulated handle and releases it
//!   in `Drop`, so cleanup runs on every path
//! - **Sinks**: console, `tracing`, in-memory and no-op destinations for
//!   report lines
//!
//! # Example Usage
//!
//! ```
//! use filesim::{FileProcessor, Outcome, RecordingSink, ValidationError};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let processor = FileProcessor::new(sink.clone());
//!
//! let name = json!("myFile.txt");
//! let data = json!(42);
//! let report = processor.process(Some(&name), Some(&data));
//!
//! assert_eq!(report.outcome, Outcome::Rejected(ValidationError::InvalidType));
//! assert_eq!(
//!     sink.messages(),
//!     vec![
//!         "Error: File data must be a string.",
//!         "Cleanup complete (finally block executed).",
//!     ]
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processor;
pub mod report;
pub mod resource;
pub mod scenario;
pub mod util;
pub mod validation;

pub use config::{ConfigError, FilesimConfig};
pub use error::{ErrorKind, ValidationError};
pub use processor::{FileProcessor, Outcome, ProcessReport, ProcessState};
pub use report::{
    Channel, ConsoleSink, LoggingSink, NoOpSink, ProcessEvent, RecordingSink, ReportLine,
    ReportSink,
};
pub use resource::FileSession;
pub use util::{init_logging, LoggingConfig};
pub use validation::{validate, ValidatedInput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
