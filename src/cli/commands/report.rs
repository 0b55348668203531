//! Report command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{ChartArgs, OutputFormat, ReportArgs};
use crate::error::Result;
use crate::report::capability::{self, TerminalCapabilities};
use crate::report::{charts, load_dataset, ChartOptions, Report};
use std::path::Path;

/// Chart options from flags, falling back to the detected terminal.
fn chart_options(args: &ChartArgs, caps: &TerminalCapabilities) -> ChartOptions {
    ChartOptions {
        width: args.width.unwrap_or(u32::from(caps.width)).max(16),
        height: args.height.unwrap_or(24).max(4),
        mode: caps.recommended_mode(),
    }
}

/// Load `data`, print the optima and, for text output, the charts.
pub(crate) fn present(data: &Path, chart_args: &ChartArgs, format: OutputFormat, level: LogLevel) -> Result<()> {
    let backend = chart_args.charts.unwrap_or_default();
    capability::require(backend)?;

    let dataset = load_dataset(data)?;
    let report = Report::from_dataset(&dataset);
    tracing::debug!(path = %data.display(), rows = report.rows, %backend, "report loaded");

    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Yaml => {
            if let Some(yaml) = super::structured(&report, OutputFormat::Yaml)? {
                println!("{yaml}");
            }
        }
        OutputFormat::Text => {
            log(level, LogLevel::Verbose, &format!("Dataset: {} ({} rows)", data.display(), report.rows));
            log(level, LogLevel::Normal, report.to_text().trim_end());

            let options = chart_options(chart_args, &TerminalCapabilities::detect());
            let rendered = charts::render(&dataset, backend, options)?;
            if !rendered.is_empty() {
                log(level, LogLevel::Normal, "");
                log(level, LogLevel::Normal, rendered.trim_end());
            }
        }
    }
    Ok(())
}

pub fn run_report(args: ReportArgs, level: LogLevel) -> Result<()> {
    present(&args.data, &args.charts, args.format, level)
}
