//! Numeric precision formats covered by the energy model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric precision an inference batch runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 32-bit IEEE 754 floating point (baseline)
    Fp32,
    /// 16-bit IEEE 754 floating point
    Fp16,
    /// 8-bit integer quantization
    Int8,
}

impl Precision {
    /// All precisions, from most to least expensive.
    pub const ALL: [Precision; 3] = [Precision::Fp32, Precision::Fp16, Precision::Int8];

    /// Canonical lowercase name, also the CSV column prefix.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fp32 => "fp32",
            Self::Fp16 => "fp16",
            Self::Int8 => "int8",
        }
    }

    /// Size in bits of a single element.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Fp32 => 32,
            Self::Fp16 => 16,
            Self::Int8 => 8,
        }
    }

    /// Name of the energy column in the persisted table.
    pub const fn energy_column(self) -> &'static str {
        match self {
            Self::Fp32 => "fp32_energy",
            Self::Fp16 => "fp16_energy",
            Self::Int8 => "int8_energy",
        }
    }

    /// Name of the efficiency column in the persisted table.
    pub const fn efficiency_column(self) -> &'static str {
        match self {
            Self::Fp32 => "fp32_efficiency",
            Self::Fp16 => "fp16_efficiency",
            Self::Int8 => "int8_efficiency",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fp32" | "f32" | "float32" => Ok(Self::Fp32),
            "fp16" | "f16" | "float16" | "half" => Ok(Self::Fp16),
            "int8" | "i8" | "q8" => Ok(Self::Int8),
            other => Err(format!("Unknown precision: {other}. Supported: fp32, fp16, int8")),
        }
    }
}
