//! Error types with actionable diagnostics.
//!
//! Every variant tells the operator what went wrong and what to do next.
//! Nothing here is retried: the whole pipeline is deterministic, so a failure
//! is a configuration or environment problem to fix and re-run.

use crate::config::ValidationError;
use crate::model::Precision;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for energia operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the engine, the report and the CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed batch-size sweep.
    #[error("Invalid batch-size sweep: {reason} (offending value: {value})\n  → Batch sizes must be >= 1, strictly increasing, and the sweep must not be empty")]
    InvalidInput { value: String, reason: String },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}\n  → Check the YAML syntax or run `energia init` to write a default config")]
    Config(String),

    /// Configuration values violate a constraint.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// The cost model produced a non-positive or non-finite energy.
    #[error("Energy model produced {energy} J for batch size {batch_size} at {precision}\n  → Cost constants must be finite with fixed >= 0, per_sample > 0 and congestion >= 0")]
    Computation {
        batch_size: u32,
        precision: Precision,
        energy: f64,
    },

    /// Writing the dataset failed.
    #[error("Failed to write dataset to {path}\n  Cause: {source}\n  → Check that the directory is writable; any partial output is invalid, re-run `energia generate`")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No dataset at the expected location.
    #[error("Dataset not found: {path}\n  → Run `energia generate` first to produce it")]
    DataNotFound { path: PathBuf },

    /// Dataset exists but does not match the expected table layout.
    #[error("Malformed dataset {path}: {message}\n  → Re-run `energia generate` to rebuild it")]
    DataFormat { path: PathBuf, message: String },

    /// A required rendering capability is not available in this build.
    #[error("Missing capability: {capability}\n  → {hint}")]
    MissingCapability { capability: String, hint: String },

    /// A chart backend failed while drawing.
    #[error("Chart rendering failed: {0}")]
    Render(String),
}

impl Error {
    /// Build an [`Error::InvalidInput`] from the offending value.
    pub fn invalid_input(value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidInput { value: value.to_string(), reason: reason.into() }
    }

    /// Build an [`Error::Persistence`] for `path`.
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence { path: path.into(), source }
    }

    /// Build an [`Error::DataFormat`] for `path`.
    pub fn data_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DataFormat { path: path.into(), message: message.into() }
    }

    /// Whether the operator can fix this by changing inputs or environment.
    ///
    /// `Computation` and `Render` indicate defects rather than bad input.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Computation { .. } | Self::Render(_))
    }

    /// Stable error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "E001",
            Self::Config(_) => "E002",
            Self::Validation(_) => "E003",
            Self::Computation { .. } => "E010",
            Self::Persistence { .. } => "E020",
            Self::DataNotFound { .. } => "E030",
            Self::DataFormat { .. } => "E031",
            Self::MissingCapability { .. } => "E040",
            Self::Render(_) => "E041",
        }
    }
}
