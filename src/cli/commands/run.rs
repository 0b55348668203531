//! Run command: generate then report in one process

use super::generate::{generate_dataset, resolve_spec};
use super::report::present;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, RunArgs};
use crate::error::Result;

pub fn run_pipeline(args: RunArgs, level: LogLevel) -> Result<()> {
    let spec = resolve_spec(args.config.as_deref(), &args.sweep, args.output.as_ref())?;

    // keep stdout parseable for structured formats
    let generate_level = if args.format == OutputFormat::Text { level } else { LogLevel::Quiet };
    let summary = generate_dataset(&spec, generate_level)?;
    log(
        generate_level,
        LogLevel::Normal,
        &format!("Wrote {} rows to {}\n", summary.rows, summary.path.display()),
    );

    present(&summary.path, &args.charts, args.format, level)
}
