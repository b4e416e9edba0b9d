use filesim::cli::commands::{CliArgs, Commands};
use filesim::cli::handlers::{handle_demo, handle_process, EXIT_USAGE};
use filesim::util::logging::{init_logging, LoggingConfig};
use filesim::{ConfigError, FilesimConfig, VERSION};

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };
    init_logging(LoggingConfig::from_config(&config));

    debug!("filesim v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Process(process_args) => handle_process(process_args, &config),
        Commands::Demo(demo_args) => handle_demo(demo_args, &config),
    };

    std::process::exit(exit_code);
}

/// Environment configuration with command-line overrides applied
fn config_from_args(args: &CliArgs) -> Result<FilesimConfig, ConfigError> {
    let mut config = FilesimConfig::from_env()?;

    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    } else if args.verbose {
        config.log_level = "debug".to_string();
    } else if args.quiet {
        config.log_level = "error".to_string();
    }
    if args.log_location {
        config.log_location = true;
    }

    config.validate()?;
    Ok(config)
}
