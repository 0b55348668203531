//! Info command implementation

use super::structured;
use super::validate::{format_model_info, format_output_info, format_sweep_info};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, InfoArgs};
use crate::error::Result;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<()> {
    let spec = load_config(&args.config)?;

    match structured(&spec, args.format)? {
        Some(out) => println!("{out}"),
        None => {
            log(level, LogLevel::Normal, "Configuration Info:");
            log(level, LogLevel::Normal, &format_sweep_info(&spec));
            log(level, LogLevel::Normal, &format_model_info(&spec));
            log(level, LogLevel::Normal, &format_output_info(&spec));
        }
    }

    Ok(())
}
