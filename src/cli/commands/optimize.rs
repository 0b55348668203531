//! Optimize command implementation

use super::structured;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_or_default, OptimizeArgs};
use crate::error::Result;

pub fn run_optimize(args: OptimizeArgs, level: LogLevel) -> Result<()> {
    let spec = load_or_default(args.config.as_deref())?;
    let engine = spec.engine();
    let best = engine.optimize_batch_size(args.precision, args.min, args.max)?;

    if let Some(out) = structured(&best, args.format)? {
        println!("{out}");
        return Ok(());
    }

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Optimal batch size for {} in {}..={}: {}\nMaximum efficiency: {:.4} samples/joule",
            best.precision, args.min, args.max, best.batch_size, best.efficiency
        ),
    );
    if let Some(analytic) = engine.model().cost(args.precision).analytic_optimum() {
        log(level, LogLevel::Verbose, &format!("Continuous optimum: {analytic:.2}"));
    }
    Ok(())
}
