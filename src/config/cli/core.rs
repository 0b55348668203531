//! Core CLI types - Cli, Command, and argument structs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::schema::{EnergySpec, DEFAULT_OUTPUT_PATH};
use crate::error::{Error, Result};
use crate::model::Precision;
use crate::report::ChartBackend;
use crate::sweep::{parse_batch_list, SweepSpec};

/// Energia: energy and efficiency modeling for AI inference batches
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "energia")]
#[command(version)]
#[command(about = "Model inference energy across batch sizes and precisions, then report the most efficient batch")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Sweep batch sizes through the cost model and write the dataset
    Generate(GenerateArgs),

    /// Load a dataset, print optima and render charts
    Report(ReportArgs),

    /// Generate then report in one process
    Run(RunArgs),

    /// Search every batch size in a range for the efficiency optimum
    Optimize(OptimizeArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Display a resolved configuration
    Info(InfoArgs),

    /// Write a default configuration file
    Init(InitArgs),
}

/// Batch-size sweep overrides
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct SweepArgs {
    /// First batch size of a range or geometric sweep
    #[arg(long)]
    pub start: Option<u32>,

    /// Last batch size of a range or geometric sweep (inclusive)
    #[arg(long)]
    pub stop: Option<u32>,

    /// Step of a range sweep
    #[arg(long)]
    pub step: Option<u32>,

    /// Explicit comma-separated batch sizes, e.g. 1,2,4,8
    #[arg(long, value_name = "LIST", conflicts_with_all = ["start", "stop", "step"])]
    pub batch_sizes: Option<String>,
}

/// Chart rendering options
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct ChartArgs {
    /// Chart backend (curve, sparkline, none)
    #[arg(long, value_name = "BACKEND")]
    pub charts: Option<ChartBackend>,

    /// Chart width in columns (defaults to the terminal width)
    #[arg(long)]
    pub width: Option<u32>,

    /// Chart height in rows
    #[arg(long)]
    pub height: Option<u32>,
}

/// Arguments for the generate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Path to YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Override dataset output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Summary format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Dataset written by `generate`
    #[arg(value_name = "DATA", default_value = DEFAULT_OUTPUT_PATH)]
    pub data: PathBuf,

    #[command(flatten)]
    pub charts: ChartArgs,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Override dataset output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub charts: ChartArgs,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the optimize command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct OptimizeArgs {
    /// Precision to optimize (fp32, fp16, int8)
    #[arg(short, long)]
    pub precision: Precision,

    /// Smallest batch size to consider
    #[arg(long, default_value_t = 1)]
    pub min: u32,

    /// Largest batch size to consider
    #[arg(long, default_value_t = 1024)]
    pub max: u32,

    /// Path to YAML configuration file (for cost constants)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Result format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(short, long, default_value = "energia.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to an EnergySpec
///
/// `--batch-sizes` replaces the sweep with a list. `--start`/`--stop` move the
/// bounds of a range or geometric sweep and keep its shape; `--step` only
/// applies to ranges. Bound flags on a list sweep are rejected.
pub fn apply_overrides(spec: &mut EnergySpec, sweep: &SweepArgs, output: Option<&PathBuf>) -> Result<()> {
    if let Some(list) = &sweep.batch_sizes {
        spec.sweep = SweepSpec::List(parse_batch_list(list)?);
    } else if sweep.start.is_some() || sweep.stop.is_some() || sweep.step.is_some() {
        spec.sweep = match spec.sweep {
            SweepSpec::Range { start, stop, step } => SweepSpec::Range {
                start: sweep.start.unwrap_or(start),
                stop: sweep.stop.unwrap_or(stop),
                step: sweep.step.unwrap_or(step),
            },
            SweepSpec::Geometric { start, stop, factor } => {
                if let Some(step) = sweep.step {
                    return Err(Error::invalid_input(
                        step,
                        "--step applies to range sweeps; the configured sweep is geometric",
                    ));
                }
                SweepSpec::Geometric {
                    start: sweep.start.unwrap_or(start),
                    stop: sweep.stop.unwrap_or(stop),
                    factor,
                }
            }
            SweepSpec::List(_) => {
                return Err(Error::invalid_input(
                    "--start/--stop/--step",
                    "the configured sweep is a list; use --batch-sizes to replace it",
                ));
            }
        };
    }
    if let Some(path) = output {
        spec.output.path = path.clone();
    }
    Ok(())
}
