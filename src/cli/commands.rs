use clap::{Parser, Subcommand, ValueEnum};

use super::output::OutputFormat;

/// Simulated file processing with ordered validation and guaranteed cleanup
#[derive(Parser, Debug)]
#[command(
    name = "filesim",
    about = "Simulated file processing with ordered validation and guaranteed cleanup",
    version,
    long_about = "filesim validates a file name and file data, simulates opening, reading \
                  and writing the file, and always reports cleanup, whether or not the \
                  input was accepted. No real files are touched."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug diagnostics")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,

    #[arg(long, global = true, help = "Show source file and line on diagnostics")]
    pub log_location: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Process a single simulated file",
        long_about = "Validates the given file name and data, then runs the simulated \
                      file operations. Missing arguments are treated as absent.\n\n\
                      Examples:\n  \
                      filesim process myFile.txt \"Hello, world!\"\n  \
                      filesim process myFile.txt 42 --json\n  \
                      filesim process --format json"
    )]
    Process(ProcessArgs),

    #[command(
        about = "Run the four canonical scenarios",
        long_about = "Runs one call per branch: missing name, non-string data, empty data \
                      and a successful call.\n\n\
                      Examples:\n  \
                      filesim demo\n  \
                      filesim demo --plain\n  \
                      filesim demo --format yaml"
    )]
    Demo(DemoArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    #[arg(value_name = "NAME", allow_hyphen_values = true, help = "File name")]
    pub name: Option<String>,

    #[arg(value_name = "DATA", allow_hyphen_values = true, help = "File data")]
    pub data: Option<String>,

    #[arg(long, help = "Parse NAME and DATA as JSON literals (e.g. 42, null, \"text\")")]
    pub json: bool,

    #[arg(long, help = "Print report lines without glyphs")]
    pub plain: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, help = "Exit with status 1 when the input is rejected")]
    pub strict: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    #[arg(long, help = "Print report lines without glyphs")]
    pub plain: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    /// Report lines through the diagnostic log instead of stdout
    Log,
    Json,
    Yaml,
}

impl OutputFormatArg {
    /// Serialized format, or `None` when lines are streamed as they happen
    pub fn structured(self) -> Option<OutputFormat> {
        match self {
            OutputFormatArg::Human | OutputFormatArg::Log => None,
            OutputFormatArg::Json => Some(OutputFormat::Json),
            OutputFormatArg::Yaml => Some(OutputFormat::Yaml),
        }
    }
}
