//! Energy dataset produced by one engine run.
//!
//! - [`EnergyDataset`] - ordered sweep points, strictly increasing batch size
//! - [`table`] - CSV encoding of the dataset

pub mod table;

use crate::model::Precision;
use serde::{Deserialize, Serialize};

pub use table::{read_csv, write_csv, COLUMNS};

/// Energy and efficiency of one batch at one precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecisionSample {
    /// Energy per batch invocation (joules)
    pub energy: f64,
    /// Samples processed per joule (`batch_size / energy`)
    pub efficiency: f64,
}

impl PrecisionSample {
    /// Derive the sample from an energy reading.
    pub fn from_energy(batch_size: u32, energy: f64) -> Self {
        Self { energy, efficiency: f64::from(batch_size) / energy }
    }
}

/// One sampled batch size with a result for every precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSweepPoint {
    /// Sampled batch size
    pub batch_size: u32,
    /// FP32 result
    pub fp32: PrecisionSample,
    /// FP16 result
    pub fp16: PrecisionSample,
    /// INT8 result
    pub int8: PrecisionSample,
}

impl BatchSweepPoint {
    /// Result for `precision`.
    pub fn sample(&self, precision: Precision) -> &PrecisionSample {
        match precision {
            Precision::Fp32 => &self.fp32,
            Precision::Fp16 => &self.fp16,
            Precision::Int8 => &self.int8,
        }
    }

    /// Energy for `precision`.
    pub fn energy(&self, precision: Precision) -> f64 {
        self.sample(precision).energy
    }

    /// Efficiency for `precision`.
    pub fn efficiency(&self, precision: Precision) -> f64 {
        self.sample(precision).efficiency
    }
}

/// Ordered sweep results, one point per batch size.
///
/// Points are only added through [`EnergyDataset::from_points`], which the
/// engine and the CSV reader call after checking ordering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyDataset {
    points: Vec<BatchSweepPoint>,
}

impl EnergyDataset {
    /// Wrap points already ordered by strictly increasing batch size.
    pub(crate) fn from_points(points: Vec<BatchSweepPoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].batch_size < w[1].batch_size));
        Self { points }
    }

    /// All points in ascending batch-size order.
    pub fn points(&self) -> &[BatchSweepPoint] {
        &self.points
    }

    /// Number of sampled batch sizes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sampled batch sizes in order.
    pub fn batch_sizes(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.batch_size).collect()
    }

    /// Energy column for `precision`.
    pub fn energies(&self, precision: Precision) -> Vec<f64> {
        self.points.iter().map(|p| p.energy(precision)).collect()
    }

    /// Efficiency column for `precision`.
    pub fn efficiencies(&self, precision: Precision) -> Vec<f64> {
        self.points.iter().map(|p| p.efficiency(precision)).collect()
    }

    /// Point for `batch_size`, if it was sampled.
    pub fn get(&self, batch_size: u32) -> Option<&BatchSweepPoint> {
        self.points
            .binary_search_by_key(&batch_size, |p| p.batch_size)
            .ok()
            .map(|i| &self.points[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(batch_size: u32) -> BatchSweepPoint {
        let b = f64::from(batch_size);
        BatchSweepPoint {
            batch_size,
            fp32: PrecisionSample::from_energy(batch_size, 10.0 + 3.0 * b),
            fp16: PrecisionSample::from_energy(batch_size, 6.0 + 2.0 * b),
            int8: PrecisionSample::from_energy(batch_size, 3.0 + b),
        }
    }

    #[test]
    fn test_sample_efficiency_is_derived() {
        let s = PrecisionSample::from_energy(8, 4.0);
        assert_eq!(s.efficiency, 2.0);
    }

    #[test]
    fn test_point_accessors() {
        let p = point(2);
        assert_eq!(p.energy(Precision::Fp32), 16.0);
        assert_eq!(p.energy(Precision::Fp16), 10.0);
        assert_eq!(p.energy(Precision::Int8), 5.0);
        assert_eq!(p.efficiency(Precision::Int8), 0.4);
    }

    #[test]
    fn test_dataset_columns() {
        let ds = EnergyDataset::from_points(vec![point(1), point(2), point(4)]);
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.batch_sizes(), vec![1, 2, 4]);
        assert_eq!(ds.energies(Precision::Int8), vec![4.0, 5.0, 7.0]);
    }

    #[test]
    fn test_get_by_batch_size() {
        let ds = EnergyDataset::from_points(vec![point(1), point(8), point(64)]);
        assert_eq!(ds.get(8).map(|p| p.batch_size), Some(8));
        assert!(ds.get(9).is_none());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(EnergyDataset::default().is_empty());
    }
}
