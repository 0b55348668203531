//! Declarative configuration
//!
//! - [`schema`] - the YAML layout ([`EnergySpec`])
//! - [`validate`] - value and ordering constraints
//! - [`cli`] - command-line arguments and overrides

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validate;

pub use cli::{
    apply_overrides, parse_args, ChartArgs, Cli, Command, GenerateArgs, InfoArgs, InitArgs,
    OptimizeArgs, OutputFormat, ReportArgs, RunArgs, SweepArgs, ValidateArgs,
};
pub use loader::{load_config, load_or_default, parse_config, save_config, to_yaml};
pub use schema::{EnergySpec, OutputSpec, DEFAULT_OUTPUT_PATH};
pub use validate::{validate_config, validate_model, validate_sweep, ValidationError};
