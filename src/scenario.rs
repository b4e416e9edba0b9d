//! Canonical demonstration calls, one per branch of the routine

use crate::error::ErrorKind;
use crate::processor::{FileProcessor, ProcessReport};
use serde_json::{json, Value};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub file_name: Option<Value>,
    pub file_data: Option<Value>,
    /// `None` when the call is expected to succeed
    pub expected: Option<ErrorKind>,
}

/// The four calls in the order they are demonstrated
pub fn canonical() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "missing-name",
            file_name: None,
            file_data: None,
            expected: Some(ErrorKind::MissingName),
        },
        Scenario {
            name: "invalid-type",
            file_name: Some(json!("myFile.txt")),
            file_data: Some(json!(42)),
            expected: Some(ErrorKind::InvalidType),
        },
        Scenario {
            name: "empty-data",
            file_name: Some(json!("myFile.txt")),
            file_data: Some(json!("")),
            expected: Some(ErrorKind::EmptyData),
        },
        Scenario {
            name: "success",
            file_name: Some(json!("myFile.txt")),
            file_data: Some(json!("Hello, world!")),
            expected: None,
        },
    ]
}

impl Scenario {
    pub fn run(&self, processor: &FileProcessor) -> ProcessReport {
        debug!(scenario = self.name, "Running scenario");
        processor.process(self.file_name.as_ref(), self.file_data.as_ref())
    }

    /// Whether a report matches this scenario's expectation
    pub fn matches(&self, report: &ProcessReport) -> bool {
        report.outcome.error().map(|e| e.kind()) == self.expected
    }
}

pub fn run_all(processor: &FileProcessor) -> Vec<(Scenario, ProcessReport)> {
    canonical()
        .into_iter()
        .map(|scenario| {
            let report = scenario.run(processor);
            (scenario, report)
        })
        .collect()
}
