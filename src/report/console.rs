//! Console sink

use super::{Channel, ProcessEvent, ReportSink};
use std::io::{self, Write};

/// Writes report lines to stdout, errors to stderr
///
/// Decorated output marks success, failure and cleanup lines with a glyph
/// and separates calls with a blank line.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    decorated: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self { decorated: true }
    }
}

impl ConsoleSink {
    pub fn new(decorated: bool) -> Self {
        Self { decorated }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Line as printed for an event, without the trailing newline
    pub fn render(&self, event: &ProcessEvent) -> String {
        let message = event.message();
        if !self.decorated {
            return message;
        }
        match event {
            ProcessEvent::Succeeded => format!("✅ {}", message),
            ProcessEvent::Failed { .. } => format!("❌ {}", message),
            ProcessEvent::CleanupComplete => format!("🔒 {}\n", message),
            _ => message,
        }
    }
}

impl ReportSink for ConsoleSink {
    fn emit(&self, message: &str) {
        // A closed stdout must not abort cleanup reporting
        let _ = writeln!(io::stdout().lock(), "{}", message);
    }

    fn emit_error(&self, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{}", message);
    }

    fn on_event(&self, event: &ProcessEvent) {
        let line = self.render(event);
        match event.channel() {
            Channel::Info => self.emit(&line),
            Channel::Error => self.emit_error(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_plain_render() {
        let sink = ConsoleSink::plain();
        assert_eq!(sink.render(&ProcessEvent::Succeeded), "File processed successfully!");
        assert_eq!(
            sink.render(&ProcessEvent::CleanupComplete),
            "Cleanup complete (finally block executed)."
        );
    }

    #[test]
    fn test_decorated_render() {
        let sink = ConsoleSink::default();
        assert_eq!(
            sink.render(&ProcessEvent::Succeeded),
            "✅ File processed successfully!"
        );
        assert_eq!(
            sink.render(&ProcessEvent::Failed {
                error: ValidationError::InvalidType
            }),
            "❌ Error: File data must be a string."
        );
        assert_eq!(
            sink.render(&ProcessEvent::CleanupComplete),
            "🔒 Cleanup complete (finally block executed).\n"
        );
        assert_eq!(sink.render(&ProcessEvent::Reading), "Reading file...");
    }
}
