//! Generate command implementation

use super::structured;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_or_default, validate_config, EnergySpec, GenerateArgs, SweepArgs};
use crate::dataset::EnergyDataset;
use crate::error::Result;
use crate::model::Precision;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What a generate run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub min_batch_size: u32,
    pub max_batch_size: u32,
}

impl GenerateSummary {
    fn new(path: &Path, dataset: &EnergyDataset) -> Self {
        let sizes = dataset.batch_sizes();
        Self {
            path: path.to_path_buf(),
            rows: dataset.len(),
            min_batch_size: sizes.first().copied().unwrap_or_default(),
            max_batch_size: sizes.last().copied().unwrap_or_default(),
        }
    }
}

/// Resolve config and overrides into a validated specification.
pub(crate) fn resolve_spec(
    config: Option<&Path>,
    sweep: &SweepArgs,
    output: Option<&PathBuf>,
) -> Result<EnergySpec> {
    let mut spec = load_or_default(config)?;
    apply_overrides(&mut spec, sweep, output)?;
    validate_config(&spec)?;
    Ok(spec)
}

/// Run the engine for `spec` and persist the dataset.
pub(crate) fn generate_dataset(spec: &EnergySpec, level: LogLevel) -> Result<GenerateSummary> {
    let sizes = spec.batch_sizes()?;
    log(
        level,
        LogLevel::Verbose,
        &format!("Sweeping {} batch sizes ({}..={})", sizes.len(), sizes[0], sizes[sizes.len() - 1]),
    );

    let dataset = spec.engine().generate(&sizes, &spec.output.path)?;

    if level == LogLevel::Verbose {
        for precision in Precision::ALL {
            let energies = dataset.energies(precision);
            let lo = energies.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = energies.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            log(level, LogLevel::Verbose, &format!("  {precision}: energy {lo:.2} .. {hi:.2} J"));
        }
    }
    Ok(GenerateSummary::new(&spec.output.path, &dataset))
}

pub fn run_generate(args: GenerateArgs, level: LogLevel) -> Result<()> {
    let spec = resolve_spec(args.config.as_deref(), &args.sweep, args.output.as_ref())?;
    let summary = generate_dataset(&spec, level)?;

    match structured(&summary, args.format)? {
        Some(out) => println!("{out}"),
        None => log(
            level,
            LogLevel::Normal,
            &format!("Wrote {} rows to {}", summary.rows, summary.path.display()),
        ),
    }
    Ok(())
}
