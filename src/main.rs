//! Energia CLI
//!
//! # Usage
//!
//! ```bash
//! # Write ai_energy_data.csv for batch sizes 1..=128
//! energia generate
//!
//! # Print optima and charts
//! energia report ai_energy_data.csv
//!
//! # Both, from a config file
//! energia run --config energia.yaml
//! ```

use clap::Parser;
use energia::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.code(), user_error = e.is_user_error(), "command failed");
            eprintln!("Error [{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}
