//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! energia generate --start 1 --stop 128
//! energia generate --config energia.yaml --batch-sizes 1,2,4,8 --output data.csv
//! energia report data.csv --charts sparkline
//! energia run --config energia.yaml
//! energia optimize --precision int8 --max 512
//! energia validate energia.yaml
//! ```

mod core;
mod types;

#[cfg(test)]
mod tests;

pub use self::core::{
    apply_overrides, parse_args, ChartArgs, Cli, Command, GenerateArgs, InfoArgs, InitArgs,
    OptimizeArgs, ReportArgs, RunArgs, SweepArgs, ValidateArgs,
};
pub use self::types::OutputFormat;
