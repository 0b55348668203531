//! Rendering capability checks.
//!
//! Chart backends are checked up front so a missing feature fails before any
//! output is written, and the terminal is probed to pick a rendering mode.

use super::charts::ChartBackend;
use crate::error::{Error, Result};
use std::env;
use std::io::{stdout, IsTerminal};

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII only (widest compatibility)
    Ascii,
    /// Unicode block characters
    #[default]
    Unicode,
    /// 24-bit ANSI colour
    Ansi,
}

/// Detected terminal capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    /// Supports Unicode characters
    pub unicode: bool,
    /// Supports 24-bit true colour
    pub true_color: bool,
    /// Stdout is an interactive TTY
    pub is_tty: bool,
}

impl Default for TerminalCapabilities {
    fn default() -> Self {
        Self { width: 80, height: 24, unicode: true, true_color: false, is_tty: true }
    }
}

impl TerminalCapabilities {
    /// Probe the environment.
    pub fn detect() -> Self {
        let lang = env::var("LC_ALL").or_else(|_| env::var("LANG")).unwrap_or_default();
        let colorterm = env::var("COLORTERM").unwrap_or_default();
        let term = env::var("TERM").unwrap_or_default();

        Self {
            width: env_dimension("COLUMNS").unwrap_or(80),
            height: env_dimension("LINES").unwrap_or(24),
            unicode: lang.to_ascii_lowercase().contains("utf"),
            true_color: term != "dumb" && (colorterm == "truecolor" || colorterm == "24bit"),
            is_tty: stdout().is_terminal(),
        }
    }

    /// Best mode for these capabilities.
    pub fn recommended_mode(&self) -> TerminalMode {
        if !self.is_tty {
            TerminalMode::Ascii
        } else if self.true_color {
            TerminalMode::Ansi
        } else if self.unicode {
            TerminalMode::Unicode
        } else {
            TerminalMode::Ascii
        }
    }
}

fn env_dimension(key: &str) -> Option<u16> {
    env::var(key).ok()?.trim().parse().ok().filter(|&n: &u16| n > 0)
}

/// Whether this build carries the curve chart backend.
pub const fn curves_available() -> bool {
    cfg!(feature = "visualization")
}

/// Fail with [`Error::MissingCapability`] when `backend` cannot be rendered.
pub fn require(backend: ChartBackend) -> Result<()> {
    match backend {
        ChartBackend::Curve if !curves_available() => Err(Error::MissingCapability {
            capability: "curve charts (trueno-viz)".to_string(),
            hint: "rebuild with `--features visualization`, or pass `--charts sparkline`".to_string(),
        }),
        _ => Ok(()),
    }
}
