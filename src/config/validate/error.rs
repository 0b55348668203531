//! Validation error types
//!
//! Every constraint an energy configuration can violate.

use crate::model::Precision;

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Batch-size list cannot be empty")]
    EmptyBatchList,

    #[error("Invalid sweep step: {0} (must be > 0)")]
    InvalidSweepStep(u32),

    #[error("Invalid geometric factor: {0} (must be >= 2)")]
    InvalidGeometricFactor(u32),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(u32),

    #[error("Invalid sweep bounds: start {start} exceeds stop {stop}")]
    InvalidSweepBounds { start: u32, stop: u32 },

    #[error("Batch sizes must be strictly increasing: {value} follows {previous}")]
    NonIncreasingBatchList { previous: u32, value: u32 },

    #[error("Sweep too large: {0} points (maximum {max})", max = crate::sweep::MAX_SWEEP_POINTS)]
    SweepTooLarge(usize),

    #[error("Non-finite {field} constant for {precision}")]
    NonFiniteConstant { precision: Precision, field: &'static str },

    #[error("Invalid fixed cost for {precision}: {value} (must be >= 0)")]
    InvalidFixedCost { precision: Precision, value: f64 },

    #[error("Invalid per-sample cost for {precision}: {value} (must be > 0)")]
    InvalidPerSampleCost { precision: Precision, value: f64 },

    #[error("Invalid congestion for {precision}: {value} (must be >= 0)")]
    InvalidCongestion { precision: Precision, value: f64 },

    #[error("{field} out of order: {higher} has {higher_value}, {lower} has {lower_value} (lower precisions must be cheaper)")]
    CostOrdering {
        field: &'static str,
        higher: Precision,
        lower: Precision,
        higher_value: f64,
        lower_value: f64,
    },
}
