//! In-memory sink

use super::{Channel, ReportSink};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// One captured report line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub channel: Channel,
    pub message: String,
}

/// Captures lines in order so they can be inspected or serialized later
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<ReportLine>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<ReportLine>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, channel: Channel, message: &str) {
        self.guard().push(ReportLine {
            channel,
            message: message.to_string(),
        });
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        self.guard().clone()
    }

    /// Message text of every line, regardless of channel
    pub fn messages(&self) -> Vec<String> {
        self.guard().iter().map(|l| l.message.clone()).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.guard()
            .iter()
            .filter(|l| l.channel == Channel::Error)
            .map(|l| l.message.clone())
            .collect()
    }

    /// Drains the captured lines, leaving the sink empty
    pub fn take(&self) -> Vec<ReportLine> {
        std::mem::take(&mut *self.guard())
    }
}

impl ReportSink for RecordingSink {
    fn emit(&self, message: &str) {
        self.push(Channel::Info, message);
    }

    fn emit_error(&self, message: &str) {
        self.push(Channel::Error, message);
    }
}
