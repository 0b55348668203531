//! Result visualizer.
//!
//! Reads a persisted dataset, reports the most efficient batch size per
//! precision and renders charts:
//! - [`optimum`] - argmax over efficiency
//! - [`charts`] - curve and sparkline backends
//! - [`capability`] - backend availability and terminal detection

pub mod capability;
pub mod charts;
pub mod optimum;

pub use charts::{ChartBackend, ChartOptions};
pub use optimum::{find_optimal, OptimalBatchResult};

use crate::dataset::{read_csv, EnergyDataset};
use crate::error::{Error, Result};
use crate::model::Precision;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// Load a dataset written by the engine.
///
/// Fails with [`Error::DataNotFound`] when the file is absent and
/// [`Error::DataFormat`] when it does not match the table layout.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<EnergyDataset> {
    read_csv(path)
}

/// Summary of a sweep and its optima.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Number of sampled batch sizes
    pub rows: usize,
    /// Smallest sampled batch size
    pub min_batch_size: u32,
    /// Largest sampled batch size
    pub max_batch_size: u32,
    /// Optimum per precision, FP32 first
    pub optima: Vec<OptimalBatchResult>,
}

impl Report {
    /// Summarize `dataset`.
    pub fn from_dataset(dataset: &EnergyDataset) -> Self {
        let sizes = dataset.batch_sizes();
        Self {
            rows: dataset.len(),
            min_batch_size: sizes.first().copied().unwrap_or_default(),
            max_batch_size: sizes.last().copied().unwrap_or_default(),
            optima: Precision::ALL
                .iter()
                .filter_map(|&p| find_optimal(dataset.points(), p))
                .collect(),
        }
    }

    /// Optimum for `precision`.
    pub fn optimum(&self, precision: Precision) -> Option<&OptimalBatchResult> {
        self.optima.iter().find(|o| o.precision == precision)
    }

    /// Plain-text rendering, two lines per precision.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for o in &self.optima {
            let _ = writeln!(out, "Optimal batch size for {}: {}", o.precision, o.batch_size);
            let _ = writeln!(out, "Maximum efficiency: {:.4} samples/joule", o.efficiency);
        }
        out
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Render(format!("report JSON: {e}")))
    }
}
