//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{save_config, EnergySpec, InitArgs};
use crate::error::Result;

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<()> {
    save_config(&EnergySpec::default(), &args.output, args.force)?;
    log(
        level,
        LogLevel::Normal,
        &format!("Wrote default configuration to {}", args.output.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("Next: energia run --config {}", args.output.display()),
    );
    Ok(())
}
