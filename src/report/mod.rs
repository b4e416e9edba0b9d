//! Report lines emitted while a file is processed

mod console;
mod event;
mod logging;
mod recording;

pub use console::ConsoleSink;
pub use event::{Channel, NoOpSink, ProcessEvent, ReportSink};
pub use logging::LoggingSink;
pub use recording::{RecordingSink, ReportLine};
