//! CLI module for energia
//!
//! Command handlers and console output helpers.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::{init_tracing, log, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
