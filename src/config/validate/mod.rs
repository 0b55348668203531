//! Configuration validation
//!
//! Validates energy specifications before any engine run.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_config, validate_model, validate_sweep};
