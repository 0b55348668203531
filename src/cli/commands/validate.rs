//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{parse_config, validate_config, EnergySpec, ValidateArgs};
use crate::error::Result;
use crate::model::Precision;
use crate::sweep::SweepSpec;

/// Format the sweep section as a string
pub fn format_sweep_info(spec: &EnergySpec) -> String {
    let shape = match &spec.sweep {
        SweepSpec::Range { start, stop, step } => format!("range {start}..={stop} step {step}"),
        SweepSpec::Geometric { start, stop, factor } => {
            format!("geometric {start}..={stop} factor {factor}")
        }
        SweepSpec::List(sizes) => format!("list of {}", sizes.len()),
    };
    match spec.batch_sizes() {
        Ok(sizes) => format!("  Sweep: {shape} ({} batch sizes)", sizes.len()),
        Err(_) => format!("  Sweep: {shape} (invalid)"),
    }
}

/// Format the cost model as a string
pub fn format_model_info(spec: &EnergySpec) -> String {
    let mut lines = vec!["  Cost model:".to_string()];
    for precision in Precision::ALL {
        let c = spec.model.cost(precision);
        let mut line = format!(
            "    {precision}: fixed={} per_sample={} congestion={}",
            c.fixed, c.per_sample, c.congestion
        );
        if let Some(opt) = c.analytic_optimum() {
            line.push_str(&format!(" (peak near batch {opt:.0})"));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Format the output section as a string
pub fn format_output_info(spec: &EnergySpec) -> String {
    format!("  Output: {}", spec.output.path.display())
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &EnergySpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_sweep_info(spec));
    println!("{}", format_model_info(spec));
    println!("{}", format_output_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = parse_config(&args.config)?;
    validate_config(&spec)?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed && level != LogLevel::Quiet {
        print_detailed_summary(&spec);
    }

    Ok(())
}
