//! CLI command implementations

mod generate;
mod info;
mod init;
mod optimize;
mod report;
mod run;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command, OutputFormat};
use crate::error::{Error, Result};
use serde::Serialize;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Generate(args) => generate::run_generate(args, log_level),
        Command::Report(args) => report::run_report(args, log_level),
        Command::Run(args) => run::run_pipeline(args, log_level),
        Command::Optimize(args) => optimize::run_optimize(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
    }
}

/// Serialize `value` for a structured format; `None` for text.
pub(crate) fn structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(Some)
            .map_err(|e| Error::Render(format!("JSON serialization error: {e}"))),
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map(Some)
            .map_err(|e| Error::Render(format!("YAML serialization error: {e}"))),
    }
}
