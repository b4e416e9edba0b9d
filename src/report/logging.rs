//! Tracing-based sink

use super::{ProcessEvent, ReportSink};
use tracing::{error, info};

/// Sink that reports through `tracing` instead of the console
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl ReportSink for LoggingSink {
    fn emit(&self, message: &str) {
        info!("{}", message);
    }

    fn emit_error(&self, message: &str) {
        error!("{}", message);
    }

    fn on_event(&self, event: &ProcessEvent) {
        match event {
            ProcessEvent::Failed { error } => {
                error!(event = event.name(), kind = %error.kind(), "{}", event.message());
            }
            _ => {
                info!(event = event.name(), "{}", event.message());
            }
        }
    }
}
