//! YAML schema for energy sweep configuration
//!
//! Every section is optional:
//!
//! ```yaml
//! sweep:
//!   geometric: { start: 1, stop: 128, factor: 2 }
//! model:
//!   fp32: { fixed: 50.0, per_sample: 2.0, congestion: 0.01 }
//! output:
//!   path: ai_energy_data.csv
//! ```

use crate::engine::EnergyEngine;
use crate::error::Result;
use crate::model::CostModel;
use crate::sweep::SweepSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default dataset location.
pub const DEFAULT_OUTPUT_PATH: &str = "ai_energy_data.csv";

/// Complete energy sweep specification
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnergySpec {
    /// Batch sizes to sample, written as `range: {..}`, `geometric: {..}` or `list: [..]`
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub sweep: SweepSpec,

    /// Per-precision cost constants
    #[serde(default)]
    pub model: CostModel,

    /// Where the dataset goes
    #[serde(default)]
    pub output: OutputSpec,
}

/// Dataset output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSpec {
    /// CSV file path
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self { path: default_output_path() }
    }
}

impl EnergySpec {
    /// Engine for this specification's cost model.
    pub fn engine(&self) -> EnergyEngine {
        EnergyEngine::new(self.model.clone())
    }

    /// Resolved batch sizes.
    pub fn batch_sizes(&self) -> Result<Vec<u32>> {
        self.sweep.batch_sizes()
    }
}
