//! Simulated file handle with guaranteed release
//!
//! A [`FileSession`] is created before validation runs. Dropping it performs
//! the cleanup step: a closing line if the file was opened, then the cleanup
//! line. Because release lives in `Drop`, cleanup also happens when the
//! success path unwinds.

use crate::report::{ProcessEvent, ReportSink};
use tracing::debug;

pub struct FileSession<'a> {
    sink: &'a dyn ReportSink,
    file_name: Option<String>,
}

impl<'a> FileSession<'a> {
    pub fn new(sink: &'a dyn ReportSink) -> Self {
        Self {
            sink,
            file_name: None,
        }
    }

    /// Marks the simulated file as open and reports it
    pub fn open(&mut self, file_name: &str) {
        self.sink.on_event(&ProcessEvent::Opening {
            file_name: file_name.to_string(),
        });
        self.file_name = Some(file_name.to_string());
        debug!(file = %file_name, "Simulated file acquired");
    }

    pub fn is_acquired(&self) -> bool {
        self.file_name.is_some()
    }

    pub fn report(&self, event: ProcessEvent) {
        self.sink.on_event(&event);
    }
}

impl Drop for FileSession<'_> {
    fn drop(&mut self) {
        if let Some(file_name) = self.file_name.take() {
            self.sink.on_event(&ProcessEvent::Closing {
                file_name: file_name.clone(),
            });
            debug!(file = %file_name, "Simulated file released");
        }
        self.sink.on_event(&ProcessEvent::CleanupComplete);
    }
}
