//! Efficiency optimum search over a sampled sweep.

use crate::dataset::BatchSweepPoint;
use crate::model::Precision;
use serde::{Deserialize, Serialize};

/// Most efficient sampled batch size for one precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalBatchResult {
    /// Precision the optimum belongs to
    pub precision: Precision,
    /// Batch size with the highest efficiency
    pub batch_size: u32,
    /// Efficiency at that batch size (samples per joule)
    pub efficiency: f64,
}

/// Highest-efficiency `(batch_size, efficiency)` pair.
///
/// Ties go to the smallest batch size regardless of input order. NaN
/// efficiencies never win.
pub fn argmax_efficiency<I>(samples: I) -> Option<(u32, f64)>
where
    I: IntoIterator<Item = (u32, f64)>,
{
    samples
        .into_iter()
        .filter(|(_, e)| !e.is_nan())
        .fold(None, |best: Option<(u32, f64)>, (b, e)| match best {
            Some((bb, be)) if be > e || (be == e && bb <= b) => Some((bb, be)),
            _ => Some((b, e)),
        })
}

/// Most efficient point for `precision`, `None` for an empty slice.
pub fn find_optimal(points: &[BatchSweepPoint], precision: Precision) -> Option<OptimalBatchResult> {
    argmax_efficiency(points.iter().map(|p| (p.batch_size, p.efficiency(precision))))
        .map(|(batch_size, efficiency)| OptimalBatchResult { precision, batch_size, efficiency })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PrecisionSample;

    fn point(batch_size: u32, fp32_eff: f64) -> BatchSweepPoint {
        let s = PrecisionSample { energy: f64::from(batch_size) / fp32_eff, efficiency: fp32_eff };
        BatchSweepPoint { batch_size, fp32: s, fp16: s, int8: s }
    }

    #[test]
    fn test_empty_has_no_optimum() {
        assert!(find_optimal(&[], Precision::Fp32).is_none());
    }

    #[test]
    fn test_picks_maximum() {
        let points = [point(1, 0.1), point(2, 0.3), point(4, 0.2)];
        let best = find_optimal(&points, Precision::Fp32).expect("optimum");
        assert_eq!(best.batch_size, 2);
        assert_eq!(best.efficiency, 0.3);
        assert_eq!(best.precision, Precision::Fp32);
    }

    #[test]
    fn test_tie_goes_to_smallest_batch() {
        let points = [point(1, 0.1), point(2, 0.3), point(4, 0.3), point(8, 0.2)];
        assert_eq!(find_optimal(&points, Precision::Int8).map(|r| r.batch_size), Some(2));
    }

    #[test]
    fn test_tie_order_independent() {
        assert_eq!(argmax_efficiency([(8, 0.5), (4, 0.5), (16, 0.5)]), Some((4, 0.5)));
    }

    #[test]
    fn test_nan_ignored() {
        assert_eq!(argmax_efficiency([(1, f64::NAN), (2, 0.1)]), Some((2, 0.1)));
        assert_eq!(argmax_efficiency([(1, f64::NAN)]), None);
    }
}
