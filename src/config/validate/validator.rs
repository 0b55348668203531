//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::EnergySpec;
use crate::model::{CostModel, Precision, PrecisionCost};
use crate::sweep::SweepSpec;

/// Validate an energy specification
///
/// Checks:
/// - The sweep resolves to a non-empty, strictly increasing list of batch sizes >= 1
/// - Every cost constant is finite and in range
/// - Lower precisions are cheaper than higher ones
pub fn validate_config(spec: &EnergySpec) -> Result<(), ValidationError> {
    validate_sweep(&spec.sweep)?;
    validate_model(&spec.model)
}

/// Validate the shape of a sweep without resolving it.
pub fn validate_sweep(sweep: &SweepSpec) -> Result<(), ValidationError> {
    sweep.validate()
}

/// Validate cost constants and their ordering across precisions.
pub fn validate_model(model: &CostModel) -> Result<(), ValidationError> {
    for precision in Precision::ALL {
        validate_cost(precision, model.cost(precision))?;
    }

    for (higher, lower) in model.adjacent_pairs() {
        let (h, l) = (model.cost(higher), model.cost(lower));
        let ordering = |field, higher_value, lower_value| ValidationError::CostOrdering {
            field,
            higher,
            lower,
            higher_value,
            lower_value,
        };
        if h.fixed <= l.fixed {
            return Err(ordering("fixed", h.fixed, l.fixed));
        }
        if h.per_sample <= l.per_sample {
            return Err(ordering("per_sample", h.per_sample, l.per_sample));
        }
        if h.congestion < l.congestion {
            return Err(ordering("congestion", h.congestion, l.congestion));
        }
    }
    Ok(())
}

fn validate_cost(precision: Precision, cost: &PrecisionCost) -> Result<(), ValidationError> {
    for (field, value) in [
        ("fixed", cost.fixed),
        ("per_sample", cost.per_sample),
        ("congestion", cost.congestion),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteConstant { precision, field });
        }
    }
    if cost.fixed < 0.0 {
        return Err(ValidationError::InvalidFixedCost { precision, value: cost.fixed });
    }
    if cost.per_sample <= 0.0 {
        return Err(ValidationError::InvalidPerSampleCost { precision, value: cost.per_sample });
    }
    if cost.congestion < 0.0 {
        return Err(ValidationError::InvalidCongestion { precision, value: cost.congestion });
    }
    Ok(())
}
