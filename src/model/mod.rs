//! Energy cost model
//!
//! - [`precision`] - the three supported precisions
//! - [`cost`] - per-precision constants and the energy formula

pub mod cost;
pub mod precision;

pub use cost::{CostModel, PrecisionCost};
pub use precision::Precision;
