pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, DemoArgs, OutputFormatArg, ProcessArgs};
pub use output::{OutputFormat, OutputFormatter, RunRecord};
