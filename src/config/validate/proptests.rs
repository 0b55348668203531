//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::model::{CostModel, PrecisionCost};
use crate::sweep::SweepSpec;
use proptest::prelude::*;

/// Models whose constants shrink with precision.
fn arb_ordered_model() -> impl Strategy<Value = CostModel> {
    (
        1.0f64..100.0,  // int8 fixed
        0.1f64..2.0,    // int8 per_sample
        0.0f64..0.01,   // int8 congestion
        1.1f64..3.0,    // step-up ratio
    )
        .prop_map(|(fixed, per_sample, congestion, ratio)| {
            CostModel::new(
                PrecisionCost::new(fixed * ratio * ratio, per_sample * ratio * ratio, congestion * ratio),
                PrecisionCost::new(fixed * ratio, per_sample * ratio, congestion),
                PrecisionCost::new(fixed, per_sample, congestion),
            )
        })
}

fn arb_valid_spec() -> impl Strategy<Value = EnergySpec> {
    (arb_ordered_model(), 1u32..1000, 0u32..1000, 1u32..100).prop_map(|(model, start, len, step)| {
        EnergySpec {
            sweep: SweepSpec::Range { start, stop: start + len, step },
            model,
            output: OutputSpec::default(),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_zero_step_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        if let SweepSpec::Range { step, .. } = &mut spec.sweep {
            *step = 0;
        }
        prop_assert!(matches!(validate_config(&spec), Err(ValidationError::InvalidSweepStep(0))));
    }

    #[test]
    fn prop_swapped_precisions_fail(spec in arb_valid_spec()) {
        let mut spec = spec;
        std::mem::swap(&mut spec.model.fp32, &mut spec.model.int8);
        let rejected = matches!(
            validate_config(&spec),
            Err(ValidationError::CostOrdering { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_negative_per_sample_fails(spec in arb_valid_spec(), value in -10.0f64..=0.0) {
        let mut spec = spec;
        spec.model.fp16.per_sample = value;
        let rejected = matches!(
            validate_config(&spec),
            Err(ValidationError::InvalidPerSampleCost { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_valid_spec_resolves(spec in arb_valid_spec()) {
        let sizes = spec.batch_sizes().expect("valid sweep");
        prop_assert!(!sizes.is_empty());
        prop_assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }
}
