//! The file processing routine
//!
//! [`FileProcessor::process`] validates its inputs, runs the simulated file
//! operations and always finishes with cleanup. Validation failures are
//! reported through the sink and never returned as an `Err`; the returned
//! [`ProcessReport`] only describes what happened.
//!
//! # Example
//!
//! ```
//! use filesim::{FileProcessor, Outcome, RecordingSink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let processor = FileProcessor::new(sink.clone());
//!
//! let report = processor.process_str(Some("myFile.txt"), Some("Hello, world!"));
//! assert_eq!(report.outcome, Outcome::Processed);
//! assert_eq!(
//!     sink.messages().last().map(String::as_str),
//!     Some("Cleanup complete (finally block executed).")
//! );
//! ```

use crate::error::ValidationError;
use crate::input::type_name;
use crate::report::{ProcessEvent, ReportSink};
use crate::resource::FileSession;
use crate::validation::{validate, ValidatedInput};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Per-call lifecycle
///
/// `Start → Validating → (Opened → Processing → Done | Failed) → Cleanup → End`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    Start,
    Validating,
    Opened,
    Processing,
    Done,
    Failed,
    Cleanup,
    End,
}

impl ProcessState {
    pub fn can_transition_to(self, next: ProcessState) -> bool {
        use ProcessState::*;
        matches!(
            (self, next),
            (Start, Validating)
                | (Validating, Opened)
                | (Validating, Failed)
                | (Opened, Processing)
                | (Processing, Done)
                | (Done, Cleanup)
                | (Failed, Cleanup)
                | (Cleanup, End)
        )
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessState::Start => "start",
            ProcessState::Validating => "validating",
            ProcessState::Opened => "opened",
            ProcessState::Processing => "processing",
            ProcessState::Done => "done",
            ProcessState::Failed => "failed",
            ProcessState::Cleanup => "cleanup",
            ProcessState::End => "end",
        };
        f.write_str(name)
    }
}

/// How a call ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum Outcome {
    Processed,
    Rejected(ValidationError),
}

impl Outcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, Outcome::Processed)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Outcome::Processed => None,
            Outcome::Rejected(error) => Some(error),
        }
    }
}

/// Summary of one call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub outcome: Outcome,
    /// Every state visited, from `Start` to `End`
    pub states: Vec<ProcessState>,
}

#[derive(Debug)]
struct StateTrail {
    states: Vec<ProcessState>,
}

impl StateTrail {
    fn new() -> Self {
        Self {
            states: vec![ProcessState::Start],
        }
    }

    fn current(&self) -> ProcessState {
        // never empty: seeded with Start
        self.states[self.states.len() - 1]
    }

    fn advance(&mut self, next: ProcessState) {
        let current = self.current();
        debug_assert!(
            current.can_transition_to(next),
            "illegal transition {} -> {}",
            current,
            next
        );
        debug!(from = %current, to = %next, "State transition");
        self.states.push(next);
    }
}

/// Runs the simulated file operation against a report sink
#[derive(Clone)]
pub struct FileProcessor {
    sink: Arc<dyn ReportSink>,
}

impl fmt::Debug for FileProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileProcessor").finish_non_exhaustive()
    }
}

impl FileProcessor {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }

    /// Validates, processes and cleans up.
    ///
    /// `None` means the argument was not supplied at all.
    pub fn process(&self, file_name: Option<&Value>, file_data: Option<&Value>) -> ProcessReport {
        let mut trail = StateTrail::new();
        trail.advance(ProcessState::Validating);

        let outcome = {
            let mut session = FileSession::new(self.sink.as_ref());

            let outcome = match validate(file_name, file_data) {
                Ok(input) => {
                    self.run(&mut session, &mut trail, &input);
                    Outcome::Processed
                }
                Err(error) => {
                    trail.advance(ProcessState::Failed);
                    debug!(
                        kind = %error.kind(),
                        name_type = type_name(file_name),
                        data_type = type_name(file_data),
                        "Rejected input: {}",
                        error
                    );
                    session.report(ProcessEvent::Failed {
                        error: error.clone(),
                    });
                    Outcome::Rejected(error)
                }
            };

            trail.advance(ProcessState::Cleanup);
            outcome
            // session dropped here: closing + cleanup lines
        };

        trail.advance(ProcessState::End);

        ProcessReport {
            outcome,
            states: trail.states,
        }
    }

    /// Convenience wrapper for string inputs
    pub fn process_str(&self, file_name: Option<&str>, file_data: Option<&str>) -> ProcessReport {
        let name = file_name.map(|s| Value::String(s.to_string()));
        let data = file_data.map(|s| Value::String(s.to_string()));
        self.process(name.as_ref(), data.as_ref())
    }

    fn run(&self, session: &mut FileSession<'_>, trail: &mut StateTrail, input: &ValidatedInput) {
        session.open(&input.name);
        trail.advance(ProcessState::Opened);

        trail.advance(ProcessState::Processing);
        session.report(ProcessEvent::Processing {
            file_name: input.name.clone(),
        });
        session.report(ProcessEvent::Content {
            data: input.data.clone(),
        });
        session.report(ProcessEvent::Reading);
        session.report(ProcessEvent::Writing);
        session.report(ProcessEvent::Succeeded);

        trail.advance(ProcessState::Done);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingSink;
    use serde_json::json;

    fn processor() -> (FileProcessor, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        (FileProcessor::new(sink.clone()), sink)
    }

    #[test]
    fn test_transitions() {
        use ProcessState::*;
        assert!(Start.can_transition_to(Validating));
        assert!(Validating.can_transition_to(Failed));
        assert!(Failed.can_transition_to(Cleanup));
        assert!(!Validating.can_transition_to(Done));
        assert!(!Failed.can_transition_to(Opened));
        assert!(!End.can_transition_to(Start));
        assert!(!End.can_transition_to(Cleanup));
    }

    #[test]
    fn test_success_states() {
        let (processor, _) = processor();
        let report = processor.process_str(Some("myFile.txt"), Some("Hello, world!"));
        assert_eq!(
            report.states,
            vec![
                ProcessState::Start,
                ProcessState::Validating,
                ProcessState::Opened,
                ProcessState::Processing,
                ProcessState::Done,
                ProcessState::Cleanup,
                ProcessState::End,
            ]
        );
    }

    #[test]
    fn test_failure_states() {
        let (processor, _) = processor();
        let report = processor.process(None, None);
        assert_eq!(
            report.states,
            vec![
                ProcessState::Start,
                ProcessState::Validating,
                ProcessState::Failed,
                ProcessState::Cleanup,
                ProcessState::End,
            ]
        );
        assert_eq!(report.outcome, Outcome::Rejected(ValidationError::MissingName));
    }

    #[test]
    fn test_success_lines() {
        let (processor, sink) = processor();
        processor.process_str(Some("myFile.txt"), Some("Hello, world!"));
        assert_eq!(
            sink.messages(),
            vec![
                "Opening file: myFile.txt...",
                "Processing file: myFile.txt",
                "File content: Hello, world!",
                "Reading file...",
                "Writing file...",
                "File processed successfully!",
                "Closing file: myFile.txt",
                "Cleanup complete (finally block executed).",
            ]
        );
        assert!(sink.errors().is_empty());
    }

    #[test]
    fn test_invalid_type_lines() {
        let (processor, sink) = processor();
        let name = json!("myFile.txt");
        let data = json!(42);
        let report = processor.process(Some(&name), Some(&data));

        assert_eq!(report.outcome.error(), Some(&ValidationError::InvalidType));
        assert_eq!(
            sink.messages(),
            vec![
                "Error: File data must be a string.",
                "Cleanup complete (finally block executed).",
            ]
        );
        assert_eq!(sink.errors(), vec!["Error: File data must be a string."]);
    }

    #[test]
    fn test_report_serializes() {
        let (processor, _) = processor();
        let report = processor.process_str(Some("a.txt"), Some(""));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"]["status"], "rejected");
        assert_eq!(json["outcome"]["error"]["kind"], "empty_data");
        assert_eq!(json["states"][2], "failed");
    }
}
