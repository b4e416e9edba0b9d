//! Command handlers
//!
//! Each handler returns the process exit code: 0 on completion, 1 when
//! `--strict` is set and an input was rejected, 2 for usage or output errors.

use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::commands::{DemoArgs, OutputFormatArg, ProcessArgs};
use super::output::{OutputFormat, OutputFormatter, RunRecord};
use crate::config::FilesimConfig;
use crate::processor::{FileProcessor, ProcessReport};
use crate::report::{ConsoleSink, LoggingSink, RecordingSink, ReportSink};
use crate::scenario;

pub const EXIT_OK: i32 = 0;
pub const EXIT_REJECTED: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Converts a raw command-line argument into a boundary value
pub fn parse_input(raw: Option<&str>, as_json: bool, label: &str) -> Result<Option<Value>> {
    match raw {
        None => Ok(None),
        Some(text) if as_json => serde_json::from_str(text)
            .map(Some)
            .with_context(|| format!("{} is not a valid JSON literal: {}", label, text)),
        Some(text) => Ok(Some(Value::String(text.to_string()))),
    }
}

/// Sink for formats that stream lines while the call runs
fn streaming_sink(format: OutputFormatArg, plain: bool) -> Arc<dyn ReportSink> {
    match format {
        OutputFormatArg::Log => Arc::new(LoggingSink),
        _ => Arc::new(ConsoleSink::new(!plain)),
    }
}

pub fn handle_process(args: &ProcessArgs, config: &FilesimConfig) -> i32 {
    match run_process(args, config) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_USAGE
        }
    }
}

fn run_process(args: &ProcessArgs, config: &FilesimConfig) -> Result<i32> {
    let name = parse_input(args.name.as_deref(), args.json, "NAME")?;
    let data = parse_input(args.data.as_deref(), args.json, "DATA")?;
    debug!(?name, ?data, "Parsed inputs");

    let plain = args.plain || config.plain;
    let report = match args.format.structured() {
        None => {
            let processor = FileProcessor::new(streaming_sink(args.format, plain));
            processor.process(name.as_ref(), data.as_ref())
        }
        Some(format) => {
            let sink = Arc::new(RecordingSink::new());
            let processor = FileProcessor::new(sink.clone());
            let report = processor.process(name.as_ref(), data.as_ref());
            let record = RunRecord::new(None, report.clone(), sink.take());
            print_structured(format, &[record])?;
            report
        }
    };

    Ok(exit_code(&[report], args.strict || config.strict))
}

pub fn handle_demo(args: &DemoArgs, config: &FilesimConfig) -> i32 {
    match run_demo(args, config) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_USAGE
        }
    }
}

fn run_demo(args: &DemoArgs, config: &FilesimConfig) -> Result<i32> {
    let plain = args.plain || config.plain;

    let reports: Vec<ProcessReport> = match args.format.structured() {
        None => {
            let processor = FileProcessor::new(streaming_sink(args.format, plain));
            scenario::run_all(&processor)
                .into_iter()
                .map(|(_, report)| report)
                .collect()
        }
        Some(format) => {
            let sink = Arc::new(RecordingSink::new());
            let processor = FileProcessor::new(sink.clone());
            let mut records = Vec::new();
            let mut reports = Vec::new();
            for scenario in scenario::canonical() {
                let report = scenario.run(&processor);
                records.push(RunRecord::new(Some(scenario.name), report.clone(), sink.take()));
                reports.push(report);
            }
            print_structured(format, &records)?;
            reports
        }
    };

    let processed = reports.iter().filter(|r| r.outcome.is_processed()).count();
    info!(
        scenarios = reports.len(),
        processed,
        rejected = reports.len() - processed,
        "Demo complete"
    );

    // the demo rejects three inputs on purpose
    Ok(EXIT_OK)
}

fn print_structured(format: OutputFormat, records: &[RunRecord]) -> Result<()> {
    let output = OutputFormatter::new(format).format(records)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn exit_code(reports: &[ProcessReport], strict: bool) -> i32 {
    if strict && reports.iter().any(|r| !r.outcome.is_processed()) {
        EXIT_REJECTED
    } else {
        EXIT_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::processor::{Outcome, ProcessState};
    use serde_json::json;

    #[test]
    fn test_parse_input_plain() {
        assert_eq!(parse_input(None, false, "NAME").unwrap(), None);
        assert_eq!(
            parse_input(Some("42"), false, "DATA").unwrap(),
            Some(json!("42"))
        );
    }

    #[test]
    fn test_parse_input_json() {
        assert_eq!(
            parse_input(Some("42"), true, "DATA").unwrap(),
            Some(json!(42))
        );
        assert_eq!(
            parse_input(Some("null"), true, "NAME").unwrap(),
            Some(Value::Null)
        );
        assert_eq!(
            parse_input(Some("\"text\""), true, "DATA").unwrap(),
            Some(json!("text"))
        );
    }

    #[test]
    fn test_parse_input_invalid_json() {
        let err = parse_input(Some("myFile.txt"), true, "NAME").unwrap_err();
        assert!(err.to_string().contains("NAME is not a valid JSON literal"));
    }

    #[test]
    fn test_exit_code() {
        let processed = ProcessReport {
            outcome: Outcome::Processed,
            states: vec![ProcessState::Start],
        };
        let rejected = ProcessReport {
            outcome: Outcome::Rejected(ValidationError::MissingName),
            states: vec![ProcessState::Start],
        };

        assert_eq!(exit_code(&[rejected.clone()], false), EXIT_OK);
        assert_eq!(exit_code(&[rejected], true), EXIT_REJECTED);
        assert_eq!(exit_code(&[processed], true), EXIT_OK);
    }
}
