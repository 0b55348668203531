//! Terminal charts for a sweep.
//!
//! Two charts, one series per precision:
//! - Energy Consumption vs Batch Size
//! - Efficiency vs Batch Size (optimum marked)
//!
//! [`ChartBackend::Curve`] draws trueno-viz line curves and needs the
//! `visualization` feature. [`ChartBackend::Sparkline`] is always available.

use super::capability::TerminalMode;
use super::optimum::find_optimal;
use crate::dataset::EnergyDataset;
use crate::error::Result;
use crate::model::Precision;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Title of the energy chart.
pub const ENERGY_TITLE: &str = "Energy Consumption vs Batch Size";
/// Title of the efficiency chart.
pub const EFFICIENCY_TITLE: &str = "Efficiency vs Batch Size";

/// Unicode sparkline characters, lowest to highest.
pub const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// ASCII ramp used when the terminal has no Unicode.
pub const ASCII_CHARS: [char; 8] = ['_', '.', '-', '~', '=', '+', '*', '#'];

/// How charts are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartBackend {
    /// trueno-viz line curves
    Curve,
    /// Inline sparklines
    Sparkline,
    /// No charts
    None,
}

impl ChartBackend {
    /// Curves when compiled in, sparklines otherwise.
    pub const fn preferred() -> Self {
        if super::capability::curves_available() {
            Self::Curve
        } else {
            Self::Sparkline
        }
    }
}

impl Default for ChartBackend {
    fn default() -> Self {
        Self::preferred()
    }
}

impl FromStr for ChartBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "curve" | "curves" => Ok(Self::Curve),
            "sparkline" | "spark" => Ok(Self::Sparkline),
            "none" | "off" => Ok(Self::None),
            _ => Err(format!("Unknown chart backend: {s}. Valid backends: curve, sparkline, none")),
        }
    }
}

impl fmt::Display for ChartBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curve => write!(f, "curve"),
            Self::Sparkline => write!(f, "sparkline"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Chart size and rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Width in columns
    pub width: u32,
    /// Height in pixel rows (two per terminal line in curve mode)
    pub height: u32,
    /// Character set and colour
    pub mode: TerminalMode,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { width: 80, height: 24, mode: TerminalMode::Unicode }
    }
}

/// Which column a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Energy,
    Efficiency,
}

impl Metric {
    fn title(self) -> &'static str {
        match self {
            Self::Energy => ENERGY_TITLE,
            Self::Efficiency => EFFICIENCY_TITLE,
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Self::Energy => "J",
            Self::Efficiency => "samples/J",
        }
    }

    fn values(self, dataset: &EnergyDataset, precision: Precision) -> Vec<f64> {
        match self {
            Self::Energy => dataset.energies(precision),
            Self::Efficiency => dataset.efficiencies(precision),
        }
    }
}

/// Render both charts for `dataset`.
///
/// Returns an empty string for [`ChartBackend::None`]. Callers are expected
/// to have checked [`require`](super::capability::require) first.
pub fn render(dataset: &EnergyDataset, backend: ChartBackend, options: ChartOptions) -> Result<String> {
    if dataset.is_empty() {
        return Ok(String::new());
    }
    let mut out = String::new();
    for metric in [Metric::Energy, Metric::Efficiency] {
        let chart = match backend {
            ChartBackend::None => return Ok(String::new()),
            ChartBackend::Sparkline => sparkline_chart(dataset, metric, options),
            ChartBackend::Curve => curve_chart(dataset, metric, options)?,
        };
        out.push_str(&chart);
        out.push('\n');
    }
    Ok(out)
}

fn sparkline_chart(dataset: &EnergyDataset, metric: Metric, options: ChartOptions) -> String {
    let chars = match options.mode {
        TerminalMode::Ascii => &ASCII_CHARS,
        TerminalMode::Unicode | TerminalMode::Ansi => &SPARK_CHARS,
    };
    // name column plus range annotation
    let width = (options.width as usize).saturating_sub(40).max(8);

    let mut out = format!("{} ({})\n", metric.title(), metric.unit());
    for precision in Precision::ALL {
        let values = metric.values(dataset, precision);
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let _ = write!(
            out,
            "  {:<5} {}  {} .. {}",
            precision.name(),
            sparkline(&values, width, chars),
            format_value(lo),
            format_value(hi)
        );
        if metric == Metric::Efficiency {
            if let Some(best) = find_optimal(dataset.points(), precision) {
                let _ = write!(out, "  peak @ {}", best.batch_size);
            }
        }
        out.push('\n');
    }
    out.push_str(&axis_label(dataset));
    out
}

/// Sampled batch sizes listed in full up to this count.
const MAX_LISTED_SIZES: usize = 12;

// Both backends place rows at equal spacing, so the x axis only reads as
// batch size when the sweep itself is evenly spaced.
fn axis_label(dataset: &EnergyDataset) -> String {
    let sizes = dataset.batch_sizes();
    match sizes.as_slice() {
        [] => String::new(),
        [only] => format!("  batch size {only}\n"),
        [first, second, ..] => {
            let last = sizes[sizes.len() - 1];
            let step = second - first;
            if sizes.windows(2).all(|w| w[1] - w[0] == step) {
                format!("  batch size {first} .. {last} ({} points, step {step})\n", sizes.len())
            } else {
                format!(
                    "  x axis: sample index ({} points), batch sizes {}\n",
                    sizes.len(),
                    list_sizes(&sizes)
                )
            }
        }
    }
}

fn list_sizes(sizes: &[u32]) -> String {
    let join = |s: &[u32]| s.iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
    if sizes.len() <= MAX_LISTED_SIZES {
        join(sizes)
    } else {
        let head = MAX_LISTED_SIZES - 1;
        format!("{}, .., {}", join(&sizes[..head]), sizes[sizes.len() - 1])
    }
}

fn format_value(v: f64) -> String {
    if v.abs() >= 100.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.4}")
    }
}

/// Map `values` onto `chars`, pooling to at most `width` cells.
///
/// Each cell shows the maximum of the values it covers, so a peak is never
/// dropped when a dense sweep is narrowed.
pub fn sparkline(values: &[f64], width: usize, chars: &[char; 8]) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let values: Vec<f64> = if values.len() > width {
        let n = values.len();
        (0..width)
            .map(|i| {
                values[i * n / width..(i + 1) * n / width]
                    .iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect()
    } else {
        values.to_vec()
    };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= f64::EPSILON * max.abs().max(1.0) {
        return chars[4].to_string().repeat(values.len());
    }

    values
        .iter()
        .map(|v| {
            let idx = ((v - min) / range * 7.0).round() as usize;
            chars[idx.min(7)]
        })
        .collect()
}

#[cfg(feature = "visualization")]
fn curve_chart(dataset: &EnergyDataset, metric: Metric, options: ChartOptions) -> Result<String> {
    use crate::error::Error;
    use trueno_viz::output::{TerminalEncoder, TerminalMode as TruenoTerminalMode};
    use trueno_viz::plots::{LossCurve, MetricSeries};
    use trueno_viz::prelude::{Rgba, WithDimensions};

    // a line needs two points
    if dataset.len() < 2 {
        return Ok(sparkline_chart(dataset, metric, options));
    }

    let mut curve = LossCurve::new()
        .add_series(MetricSeries::new("fp32", Rgba::rgb(66, 133, 244)))
        .add_series(MetricSeries::new("fp16", Rgba::rgb(255, 128, 0)))
        .add_series(MetricSeries::new("int8", Rgba::rgb(52, 168, 83)))
        .dimensions(options.width, options.height)
        .margin(2)
        .best_markers(metric == Metric::Efficiency)
        .lower_is_better(metric == Metric::Energy)
        .build()
        .map_err(|e| Error::Render(format!("failed to build {} chart: {e}", metric.title())))?;

    let columns: Vec<Vec<f64>> = Precision::ALL.iter().map(|&p| metric.values(dataset, p)).collect();
    for i in 0..dataset.len() {
        curve.push_all(&[columns[0][i] as f32, columns[1][i] as f32, columns[2][i] as f32]);
    }

    let fb = curve
        .to_framebuffer()
        .map_err(|e| Error::Render(format!("failed to draw {} chart: {e}", metric.title())))?;

    let mode = match options.mode {
        TerminalMode::Ascii => TruenoTerminalMode::Ascii,
        TerminalMode::Unicode => TruenoTerminalMode::UnicodeHalfBlock,
        TerminalMode::Ansi => TruenoTerminalMode::AnsiTrueColor,
    };
    let body = TerminalEncoder::new()
        .mode(mode)
        .width(options.width)
        .height((options.height / 2).max(1))
        .render(&fb);

    let mut out = format!("{} ({})\n{body}\n", metric.title(), metric.unit());
    out.push_str("  series: fp32 (blue), fp16 (orange), int8 (green)\n");
    if metric == Metric::Efficiency {
        for precision in Precision::ALL {
            if let Some(best) = find_optimal(dataset.points(), precision) {
                let _ = writeln!(
                    out,
                    "  {:<5} peak {} @ batch {}",
                    precision.name(),
                    format_value(best.efficiency),
                    best.batch_size
                );
            }
        }
    }
    out.push_str(&axis_label(dataset));
    Ok(out)
}

#[cfg(not(feature = "visualization"))]
fn curve_chart(dataset: &EnergyDataset, metric: Metric, options: ChartOptions) -> Result<String> {
    super::capability::require(ChartBackend::Curve)?;
    Ok(sparkline_chart(dataset, metric, options))
}
