//! Energy and efficiency modeling for AI inference workloads.
//!
//! This crate estimates how much energy an inference batch costs at three
//! numeric precisions (FP32, FP16, INT8) and how many samples per joule each
//! batch size delivers:
//! - [`engine`] - sweep batch sizes through the cost model and persist the table
//! - [`model`] - precision-specific cost constants and the energy formula
//! - [`dataset`] - the produced table and its CSV encoding
//! - [`report`] - read a persisted table, find optima, render charts
//! - [`config`] - YAML configuration and CLI argument parsing
//!
//! # Example
//!
//! ```no_run
//! use energia::{CostModel, EnergyEngine, Precision};
//!
//! let engine = EnergyEngine::new(CostModel::default());
//! let dataset = engine.generate(&[1, 2, 4, 8, 16, 32, 64, 128], "ai_energy_data.csv")?;
//!
//! let best = energia::report::find_optimal(dataset.points(), Precision::Fp32);
//! println!("{best:?}");
//! # Ok::<(), energia::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod sweep;

pub use dataset::{BatchSweepPoint, EnergyDataset, PrecisionSample};
pub use engine::EnergyEngine;
pub use error::{Error, Result};
pub use model::{CostModel, Precision, PrecisionCost};
pub use report::{OptimalBatchResult, Report};
pub use sweep::SweepSpec;

use std::path::Path;

/// Run the engine over `batch_sizes` with `model` and write the table to `output`.
pub fn generate<P: AsRef<Path>>(
    batch_sizes: &[u32],
    model: &CostModel,
    output: P,
) -> Result<EnergyDataset> {
    EnergyEngine::new(model.clone()).generate(batch_sizes, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_table() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("energy.csv");

        let dataset = generate(&[1, 8, 64], &CostModel::default(), &path).expect("generate");

        assert_eq!(dataset.len(), 3);
        assert!(path.exists());
    }

    #[test]
    fn test_generate_rejects_empty_sweep() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("energy.csv");

        let err = generate(&[], &CostModel::default(), &path).unwrap_err();

        assert!(matches!(err, Error::InvalidInput { .. }));
        assert!(!path.exists());
    }
}
