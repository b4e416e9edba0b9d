//! Report events and the sink trait

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Output channel a line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Info,
    Error,
}

/// Signals emitted during a single `process` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    /// The simulated file is being opened
    Opening { file_name: String },

    Processing { file_name: String },

    /// Echo of the data that will be written
    Content { data: String },

    Reading,

    Writing,

    /// All simulated operations finished
    Succeeded,

    /// Validation rejected the inputs
    Failed { error: ValidationError },

    /// The simulated file is being released
    Closing { file_name: String },

    /// Final cleanup line, emitted exactly once per call
    CleanupComplete,
}

impl ProcessEvent {
    pub fn message(&self) -> String {
        match self {
            ProcessEvent::Opening { file_name } => format!("Opening file: {}...", file_name),
            ProcessEvent::Processing { file_name } => format!("Processing file: {}", file_name),
            ProcessEvent::Content { data } => format!("File content: {}", data),
            ProcessEvent::Reading => "Reading file...".to_string(),
            ProcessEvent::Writing => "Writing file...".to_string(),
            ProcessEvent::Succeeded => "File processed successfully!".to_string(),
            ProcessEvent::Failed { error } => format!("Error: {}", error),
            ProcessEvent::Closing { file_name } => format!("Closing file: {}", file_name),
            ProcessEvent::CleanupComplete => {
                "Cleanup complete (finally block executed).".to_string()
            }
        }
    }

    pub fn channel(&self) -> Channel {
        match self {
            ProcessEvent::Failed { .. } => Channel::Error,
            _ => Channel::Info,
        }
    }

    /// Short identifier used as a structured log field
    pub fn name(&self) -> &'static str {
        match self {
            ProcessEvent::Opening { .. } => "opening",
            ProcessEvent::Processing { .. } => "processing",
            ProcessEvent::Content { .. } => "content",
            ProcessEvent::Reading => "reading",
            ProcessEvent::Writing => "writing",
            ProcessEvent::Succeeded => "succeeded",
            ProcessEvent::Failed { .. } => "failed",
            ProcessEvent::Closing { .. } => "closing",
            ProcessEvent::CleanupComplete => "cleanup_complete",
        }
    }
}

/// Destination for report lines
///
/// Implementors only need `emit` and `emit_error`; `on_event` routes each
/// event to the right channel and can be overridden by sinks that want the
/// structured event.
pub trait ReportSink: Send + Sync {
    fn emit(&self, message: &str);

    fn emit_error(&self, message: &str);

    fn on_event(&self, event: &ProcessEvent) {
        match event.channel() {
            Channel::Info => self.emit(&event.message()),
            Channel::Error => self.emit_error(&event.message()),
        }
    }
}

/// Sink that discards every line
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSink;

impl ReportSink for NoOpSink {
    fn emit(&self, _message: &str) {}

    fn emit_error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSink {
        info: Arc<AtomicUsize>,
        errors: Arc<AtomicUsize>,
    }

    impl ReportSink for CountingSink {
        fn emit(&self, _message: &str) {
            self.info.fetch_add(1, Ordering::SeqCst);
        }

        fn emit_error(&self, _message: &str) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_default_routing() {
        let info = Arc::new(AtomicUsize::new(0));
        let errors = Arc::new(AtomicUsize::new(0));
        let sink = CountingSink {
            info: info.clone(),
            errors: errors.clone(),
        };

        sink.on_event(&ProcessEvent::Reading);
        sink.on_event(&ProcessEvent::Failed {
            error: ValidationError::EmptyData,
        });
        sink.on_event(&ProcessEvent::CleanupComplete);

        assert_eq!(info.load(Ordering::SeqCst), 2);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_messages() {
        let opening = ProcessEvent::Opening {
            file_name: "myFile.txt".to_string(),
        };
        assert_eq!(opening.message(), "Opening file: myFile.txt...");

        let failed = ProcessEvent::Failed {
            error: ValidationError::MissingName,
        };
        assert_eq!(failed.message(), "Error: File name is missing.");
        assert_eq!(failed.channel(), Channel::Error);

        assert_eq!(
            ProcessEvent::CleanupComplete.message(),
            "Cleanup complete (finally block executed)."
        );
    }

    #[test]
    fn test_noop_sink() {
        let sink = NoOpSink;
        sink.on_event(&ProcessEvent::Succeeded);
    }
}
