//! Batch-size sweep definitions.
//!
//! A sweep is either an inclusive arithmetic range, a geometric progression
//! (powers of two by default) or an explicit list. Whatever the source, the
//! resolved batch sizes must be non-empty, >= 1 and strictly increasing.

use crate::config::ValidationError;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of sampled batch sizes in one sweep.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// How the batch sizes of a sweep are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepSpec {
    /// `start, start + step, ...` up to and including `stop`
    Range { start: u32, stop: u32, step: u32 },
    /// `start, start * factor, ...` up to and including `stop`
    Geometric { start: u32, stop: u32, factor: u32 },
    /// Explicit batch sizes
    List(Vec<u32>),
}

impl Default for SweepSpec {
    fn default() -> Self {
        Self::Range { start: 1, stop: 128, step: 1 }
    }
}

impl SweepSpec {
    /// Inclusive range with unit step.
    pub fn range(start: u32, stop: u32) -> Self {
        Self::Range { start, stop, step: 1 }
    }

    /// Powers of two from `start` up to `stop`.
    pub fn powers_of_two(start: u32, stop: u32) -> Self {
        Self::Geometric { start, stop, factor: 2 }
    }

    /// Check the shape of the sweep without resolving it.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        match self {
            Self::Range { start, stop, step } => {
                if *step == 0 {
                    return Err(ValidationError::InvalidSweepStep(*step));
                }
                check_bounds(*start, *stop)?;
                let count = ((stop - start) / step) as usize + 1;
                if count > MAX_SWEEP_POINTS {
                    return Err(ValidationError::SweepTooLarge(count));
                }
                Ok(())
            }
            Self::Geometric { start, stop, factor } => {
                if *factor < 2 {
                    return Err(ValidationError::InvalidGeometricFactor(*factor));
                }
                check_bounds(*start, *stop)
            }
            Self::List(sizes) => check_batch_list(sizes),
        }
    }

    /// Resolve the sweep into validated batch sizes.
    pub fn batch_sizes(&self) -> Result<Vec<u32>> {
        self.validate().map_err(input_error)?;
        let sizes = match self {
            Self::Range { start, stop, step } => (*start..=*stop).step_by(*step as usize).collect(),
            Self::Geometric { start, stop, factor } => {
                let mut sizes = Vec::new();
                let mut current = Some(*start);
                while let Some(b) = current.filter(|b| b <= stop) {
                    sizes.push(b);
                    current = b.checked_mul(*factor);
                }
                sizes
            }
            Self::List(sizes) => sizes.clone(),
        };
        Ok(sizes)
    }
}

fn check_bounds(start: u32, stop: u32) -> std::result::Result<(), ValidationError> {
    if start == 0 {
        return Err(ValidationError::InvalidBatchSize(0));
    }
    if start > stop {
        return Err(ValidationError::InvalidSweepBounds { start, stop });
    }
    Ok(())
}

fn check_batch_list(sizes: &[u32]) -> std::result::Result<(), ValidationError> {
    let Some(&first) = sizes.first() else {
        return Err(ValidationError::EmptyBatchList);
    };
    if first == 0 {
        return Err(ValidationError::InvalidBatchSize(0));
    }
    if sizes.len() > MAX_SWEEP_POINTS {
        return Err(ValidationError::SweepTooLarge(sizes.len()));
    }
    if let Some(w) = sizes.windows(2).find(|w| w[1] <= w[0]) {
        return Err(ValidationError::NonIncreasingBatchList { previous: w[0], value: w[1] });
    }
    Ok(())
}

/// Engine-facing form of a sweep violation: the offending value plus the reason.
fn input_error(err: ValidationError) -> Error {
    let value = match &err {
        ValidationError::EmptyBatchList => "[]".to_string(),
        ValidationError::InvalidSweepStep(v)
        | ValidationError::InvalidGeometricFactor(v)
        | ValidationError::InvalidBatchSize(v) => v.to_string(),
        ValidationError::InvalidSweepBounds { start, stop } => format!("{start}..={stop}"),
        ValidationError::NonIncreasingBatchList { value, .. } => value.to_string(),
        ValidationError::SweepTooLarge(count) => count.to_string(),
        _ => String::new(),
    };
    Error::invalid_input(value, err.to_string())
}

/// Check that `batch_sizes` is non-empty, >= 1 and strictly increasing.
pub fn validate_batch_sizes(batch_sizes: &[u32]) -> Result<()> {
    check_batch_list(batch_sizes).map_err(input_error)
}

/// Parse a comma-separated list such as `1,2,4,8`.
pub fn parse_batch_list(s: &str) -> Result<Vec<u32>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<u32>()
                .map_err(|e| Error::invalid_input(t, format!("not a batch size: {e}")))
        })
        .collect()
}
