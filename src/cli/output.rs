//! Structured output for recorded runs
//!
//! Human output is streamed straight to the console while a call runs. For
//! JSON and YAML the lines are recorded instead and serialized together with
//! the outcome.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::processor::{Outcome, ProcessReport, ProcessState};
use crate::report::ReportLine;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
}

/// One recorded call
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub outcome: Outcome,
    pub states: Vec<ProcessState>,
    pub lines: Vec<ReportLine>,
}

impl RunRecord {
    pub fn new(scenario: Option<&str>, report: ProcessReport, lines: Vec<ReportLine>) -> Self {
        Self {
            scenario: scenario.map(str::to_string),
            outcome: report.outcome,
            states: report.states,
            lines,
        }
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, runs: &[RunRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(runs),
            OutputFormat::Yaml => self.format_yaml(runs),
        }
    }

    fn format_json(&self, runs: &[RunRecord]) -> Result<String> {
        serde_json::to_string_pretty(runs).context("Failed to serialize runs to JSON")
    }

    fn format_yaml(&self, runs: &[RunRecord]) -> Result<String> {
        serde_yaml::to_string(runs).context("Failed to serialize runs to YAML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::report::Channel;

    fn rejected_run() -> RunRecord {
        RunRecord {
            scenario: Some("empty-data".to_string()),
            outcome: Outcome::Rejected(ValidationError::EmptyData),
            states: vec![
                ProcessState::Start,
                ProcessState::Validating,
                ProcessState::Failed,
                ProcessState::Cleanup,
                ProcessState::End,
            ],
            lines: vec![
                ReportLine {
                    channel: Channel::Error,
                    message: "Error: File data cannot be empty.".to_string(),
                },
                ReportLine {
                    channel: Channel::Info,
                    message: "Cleanup complete (finally block executed).".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_json_output() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format(&[rejected_run()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["scenario"], "empty-data");
        assert_eq!(parsed[0]["outcome"]["status"], "rejected");
        assert_eq!(parsed[0]["lines"][0]["channel"], "error");
        assert_eq!(parsed[0]["states"][4], "end");
    }

    #[test]
    fn test_yaml_output() {
        let formatter = OutputFormatter::new(OutputFormat::Yaml);
        let output = formatter.format(&[rejected_run()]).unwrap();
        assert!(output.contains("scenario: empty-data"));
        assert!(output.contains("status: rejected"));
    }

    #[test]
    fn test_scenario_omitted_when_absent() {
        let mut run = rejected_run();
        run.scenario = None;
        let output = OutputFormatter::new(OutputFormat::Json)
            .format(&[run])
            .unwrap();
        assert!(!output.contains("scenario"));
    }
}
