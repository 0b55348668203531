//! Energy model engine.
//!
//! The engine is a pure function from a batch-size sweep and a [`CostModel`]
//! to an [`EnergyDataset`]. Persisting the dataset is one explicit write at
//! the end of [`EnergyEngine::generate`]; nothing is shared between calls.

use crate::dataset::{write_csv, BatchSweepPoint, EnergyDataset, PrecisionSample};
use crate::error::{Error, Result};
use crate::model::{CostModel, Precision};
use crate::report::optimum::{argmax_efficiency, OptimalBatchResult};
use crate::sweep::{validate_batch_sizes, SweepSpec};
use std::path::Path;

/// Computes energy and efficiency for batch-size sweeps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyEngine {
    model: CostModel,
}

impl EnergyEngine {
    /// Create an engine with the given cost constants.
    pub fn new(model: CostModel) -> Self {
        Self { model }
    }

    /// Cost constants in use.
    pub fn model(&self) -> &CostModel {
        &self.model
    }

    /// Energy and efficiency of one batch at one precision.
    pub fn sample(&self, batch_size: u32, precision: Precision) -> Result<PrecisionSample> {
        if batch_size == 0 {
            return Err(Error::invalid_input(batch_size, "batch size must be >= 1"));
        }
        let energy = self.model.energy(batch_size, precision);
        if !energy.is_finite() || energy <= 0.0 {
            return Err(Error::Computation { batch_size, precision, energy });
        }
        Ok(PrecisionSample::from_energy(batch_size, energy))
    }

    /// All precisions at one batch size.
    pub fn point(&self, batch_size: u32) -> Result<BatchSweepPoint> {
        Ok(BatchSweepPoint {
            batch_size,
            fp32: self.sample(batch_size, Precision::Fp32)?,
            fp16: self.sample(batch_size, Precision::Fp16)?,
            int8: self.sample(batch_size, Precision::Int8)?,
        })
    }

    /// Compute the dataset for `batch_sizes` without touching the filesystem.
    ///
    /// `batch_sizes` must be non-empty, >= 1 and strictly increasing.
    pub fn compute(&self, batch_sizes: &[u32]) -> Result<EnergyDataset> {
        validate_batch_sizes(batch_sizes)?;

        let points = batch_sizes.iter().map(|&b| self.point(b)).collect::<Result<Vec<_>>>()?;

        tracing::info!(
            rows = points.len(),
            first = batch_sizes[0],
            last = batch_sizes[batch_sizes.len() - 1],
            "sweep computed"
        );
        Ok(EnergyDataset::from_points(points))
    }

    /// Compute the dataset and write it to `output` as CSV.
    ///
    /// Nothing is written when the sweep is invalid or the model fails.
    pub fn generate<P: AsRef<Path>>(&self, batch_sizes: &[u32], output: P) -> Result<EnergyDataset> {
        let dataset = self.compute(batch_sizes)?;
        write_csv(&dataset, output.as_ref())?;
        tracing::info!(path = %output.as_ref().display(), rows = dataset.len(), "dataset persisted");
        Ok(dataset)
    }

    /// Resolve `sweep` and run [`generate`](Self::generate).
    pub fn generate_sweep<P: AsRef<Path>>(&self, sweep: &SweepSpec, output: P) -> Result<EnergyDataset> {
        self.generate(&sweep.batch_sizes()?, output)
    }

    /// Most efficient batch size in `min_batch..=max_batch` for `precision`.
    ///
    /// Every batch size in the range is evaluated; nothing is persisted.
    /// Ties resolve to the smallest batch size.
    pub fn optimize_batch_size(
        &self,
        precision: Precision,
        min_batch: u32,
        max_batch: u32,
    ) -> Result<OptimalBatchResult> {
        let sizes = SweepSpec::range(min_batch, max_batch).batch_sizes()?;

        let samples = sizes
            .iter()
            .map(|&b| self.sample(b, precision).map(|s| (b, s.efficiency)))
            .collect::<Result<Vec<_>>>()?;

        let (batch_size, efficiency) = argmax_efficiency(samples)
            .ok_or_else(|| Error::invalid_input("[]", "empty search range"))?;

        tracing::debug!(%precision, batch_size, efficiency, "dense optimum found");
        Ok(OptimalBatchResult { precision, batch_size, efficiency })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrecisionCost;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use tempfile::TempDir;

    const POWERS: [u32; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

    fn reference_model() -> CostModel {
        CostModel::default().with_cost(Precision::Fp32, PrecisionCost::new(50.0, 2.0, 0.001))
    }

    #[test]
    fn test_reference_energy_at_batch_one() {
        let engine = EnergyEngine::new(reference_model());
        let s = engine.sample(1, Precision::Fp32).expect("sample");
        assert_abs_diff_eq!(s.energy, 52.002, epsilon = 1e-9);
        assert_abs_diff_eq!(s.efficiency, 0.01923, epsilon = 1e-5);
    }

    #[test]
    fn test_compute_matches_input_sweep() {
        let ds = EnergyEngine::default().compute(&POWERS).expect("compute");
        assert_eq!(ds.batch_sizes(), POWERS.to_vec());
    }

    #[test]
    fn test_efficiency_is_batch_over_energy() {
        let ds = EnergyEngine::default().compute(&POWERS).expect("compute");
        for p in ds.points() {
            for precision in Precision::ALL {
                let s = p.sample(precision);
                assert_relative_eq!(
                    s.efficiency,
                    f64::from(p.batch_size) / s.energy,
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_lower_precision_is_cheaper() {
        let ds = EnergyEngine::default().compute(&POWERS).expect("compute");
        for p in ds.points() {
            assert!(p.fp32.energy > p.fp16.energy);
            assert!(p.fp16.energy > p.int8.energy);
        }
    }

    #[test]
    fn test_default_curves_peak_inside_sweep() {
        let ds = EnergyEngine::default().compute(&POWERS).expect("compute");
        for precision in Precision::ALL {
            let eff = ds.efficiencies(precision);
            let (best, _) = eff
                .iter()
                .enumerate()
                .fold((0, f64::MIN), |acc, (i, &e)| if e > acc.1 { (i, e) } else { acc });
            assert!(best > 0 && best < eff.len() - 1, "{precision} peaks at index {best}");
        }
    }

    #[test]
    fn test_single_batch_boundary() {
        let ds = EnergyEngine::default().compute(&[1]).expect("compute");
        assert_eq!(ds.len(), 1);
        for precision in Precision::ALL {
            let s = ds.points()[0].sample(precision);
            assert!(s.energy.is_finite() && s.energy > 0.0);
            assert!(s.efficiency.is_finite() && s.efficiency > 0.0);
        }
    }

    #[test]
    fn test_invalid_sweeps_rejected() {
        let engine = EnergyEngine::default();
        for sweep in [&[][..], &[0, 1][..], &[4, 4][..], &[8, 2][..]] {
            assert!(matches!(engine.compute(sweep), Err(Error::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_negative_energy_is_computation_error() {
        let broken = CostModel::default().with_cost(Precision::Fp16, PrecisionCost::new(-100.0, 1.0, 0.0));
        let err = EnergyEngine::new(broken).compute(&[1, 2]).unwrap_err();
        match err {
            Error::Computation { batch_size, precision, energy } => {
                assert_eq!(batch_size, 1);
                assert_eq!(precision, Precision::Fp16);
                assert!(energy < 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nan_energy_is_computation_error() {
        let broken = CostModel::default().with_cost(Precision::Int8, PrecisionCost::new(f64::NAN, 1.0, 0.0));
        assert!(matches!(
            EnergyEngine::new(broken).sample(3, Precision::Int8),
            Err(Error::Computation { .. })
        ));
    }

    #[test]
    fn test_generate_does_not_write_on_computation_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.csv");
        let broken = CostModel::default().with_cost(Precision::Fp32, PrecisionCost::new(0.0, 0.0, 0.0));

        assert!(EnergyEngine::new(broken).generate(&[1, 2], &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_generate_sweep_resolves_spec() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.csv");
        let ds = EnergyEngine::default()
            .generate_sweep(&SweepSpec::powers_of_two(1, 128), &path)
            .expect("generate");
        assert_eq!(ds.batch_sizes(), POWERS.to_vec());
    }

    #[test]
    fn test_dense_optimum_near_analytic() {
        let engine = EnergyEngine::default();
        for precision in Precision::ALL {
            let best = engine.optimize_batch_size(precision, 1, 256).expect("optimize");
            let analytic = engine.model().cost(precision).analytic_optimum().expect("interior");
            assert!(
                (f64::from(best.batch_size) - analytic).abs() <= 1.0,
                "{precision}: {} vs {analytic}",
                best.batch_size
            );
            assert_eq!(best.precision, precision);
        }
    }

    #[test]
    fn test_dense_optimum_without_congestion_is_upper_bound() {
        let linear = CostModel::default().with_cost(Precision::Fp32, PrecisionCost::new(50.0, 2.0, 0.0));
        let best = EnergyEngine::new(linear).optimize_batch_size(Precision::Fp32, 1, 40).expect("optimize");
        assert_eq!(best.batch_size, 40);
    }

    #[test]
    fn test_dense_optimum_rejects_bad_range() {
        let engine = EnergyEngine::default();
        assert!(engine.optimize_batch_size(Precision::Fp32, 0, 10).is_err());
        assert!(engine.optimize_batch_size(Precision::Fp32, 10, 5).is_err());
    }

    #[test]
    fn test_sample_rejects_zero_batch() {
        assert!(matches!(
            EnergyEngine::default().sample(0, Precision::Fp32),
            Err(Error::InvalidInput { .. })
        ));
    }
}
