//! Precision-specific energy cost model.
//!
//! ```text
//! energy(b) = fixed + per_sample * b * (1 + congestion * b)
//! ```
//!
//! `fixed` is the per-invocation overhead (kernel launch, memory setup) and
//! makes efficiency climb at small batches. The marginal term grows
//! superlinearly through `congestion` (cache and memory-bandwidth pressure)
//! and pulls efficiency back down at large batches, so efficiency peaks at
//! `sqrt(fixed / (per_sample * congestion))`.

use super::precision::Precision;
use serde::{Deserialize, Serialize};

/// Cost constants for one precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecisionCost {
    /// Fixed overhead per batch invocation (joules)
    pub fixed: f64,
    /// Marginal cost per sample at batch size 1 (joules)
    pub per_sample: f64,
    /// Superlinear growth of the marginal cost per extra sample
    pub congestion: f64,
}

impl PrecisionCost {
    /// Create new cost constants.
    pub const fn new(fixed: f64, per_sample: f64, congestion: f64) -> Self {
        Self { fixed, per_sample, congestion }
    }

    /// Default FP32 constants.
    pub const fn fp32() -> Self {
        Self::new(50.0, 2.0, 0.010)
    }

    /// Default FP16 constants.
    pub const fn fp16() -> Self {
        Self::new(30.0, 1.2, 0.008)
    }

    /// Default INT8 constants.
    pub const fn int8() -> Self {
        Self::new(15.0, 0.6, 0.006)
    }

    /// Energy in joules for one invocation at `batch_size`.
    ///
    /// Not validated: callers that need a positive result go through
    /// [`EnergyEngine`](crate::EnergyEngine).
    pub fn energy(&self, batch_size: u32) -> f64 {
        let b = f64::from(batch_size);
        self.fixed + self.per_sample * b * (1.0 + self.congestion * b)
    }

    /// Continuous batch size that maximizes `b / energy(b)`.
    ///
    /// `None` when there is no interior maximum (no congestion, or no
    /// overhead to amortize).
    pub fn analytic_optimum(&self) -> Option<f64> {
        let denom = self.per_sample * self.congestion;
        if denom > 0.0 && self.fixed > 0.0 {
            Some((self.fixed / denom).sqrt())
        } else {
            None
        }
    }

    /// All constants are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.fixed.is_finite() && self.per_sample.is_finite() && self.congestion.is_finite()
    }
}

/// Cost constants for every precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// FP32 constants
    #[serde(default = "PrecisionCost::fp32")]
    pub fp32: PrecisionCost,
    /// FP16 constants
    #[serde(default = "PrecisionCost::fp16")]
    pub fp16: PrecisionCost,
    /// INT8 constants
    #[serde(default = "PrecisionCost::int8")]
    pub int8: PrecisionCost,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            fp32: PrecisionCost::fp32(),
            fp16: PrecisionCost::fp16(),
            int8: PrecisionCost::int8(),
        }
    }
}

impl CostModel {
    /// Create a cost model from explicit constants.
    pub fn new(fp32: PrecisionCost, fp16: PrecisionCost, int8: PrecisionCost) -> Self {
        Self { fp32, fp16, int8 }
    }

    /// Constants for `precision`.
    pub fn cost(&self, precision: Precision) -> &PrecisionCost {
        match precision {
            Precision::Fp32 => &self.fp32,
            Precision::Fp16 => &self.fp16,
            Precision::Int8 => &self.int8,
        }
    }

    /// Replace the constants for `precision`.
    pub fn with_cost(mut self, precision: Precision, cost: PrecisionCost) -> Self {
        match precision {
            Precision::Fp32 => self.fp32 = cost,
            Precision::Fp16 => self.fp16 = cost,
            Precision::Int8 => self.int8 = cost,
        }
        self
    }

    /// Raw energy in joules, unchecked.
    pub fn energy(&self, batch_size: u32, precision: Precision) -> f64 {
        self.cost(precision).energy(batch_size)
    }

    /// Pairs of adjacent precisions, more expensive first.
    pub fn adjacent_pairs(&self) -> [(Precision, Precision); 2] {
        [(Precision::Fp32, Precision::Fp16), (Precision::Fp16, Precision::Int8)]
    }
}
