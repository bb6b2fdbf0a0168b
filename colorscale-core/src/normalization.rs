//! Normalization scales applied to data before color mapping.
//!
//! The scale choice is independent of the range and gradient state. Each
//! mode carries the scalar forward/backward transform a renderer needs to
//! convert display levels, and a validity predicate for values outside the
//! transform's domain.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Scale applied to data values before they are mapped to colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NormalizationMode {
    /// Identity scale.
    #[default]
    Linear,
    /// Base-10 logarithm; undefined for values <= 0.
    Log,
    /// Square root; undefined for negative values.
    Sqrt,
    /// Inverse hyperbolic sine, a log-like scale defined everywhere.
    Arcsinh,
}

impl NormalizationMode {
    /// All supported normalizations, in presentation order.
    pub const ALL: [NormalizationMode; 4] = [
        NormalizationMode::Linear,
        NormalizationMode::Log,
        NormalizationMode::Sqrt,
        NormalizationMode::Arcsinh,
    ];

    /// Stable lowercase name used in host-facing state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NormalizationMode::Linear => "linear",
            NormalizationMode::Log => "log",
            NormalizationMode::Sqrt => "sqrt",
            NormalizationMode::Arcsinh => "arcsinh",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NormalizationMode::Linear => "Linear",
            NormalizationMode::Log => "Logarithmic",
            NormalizationMode::Sqrt => "Square root",
            NormalizationMode::Arcsinh => "Arcsinh",
        }
    }

    /// Resolves a normalization from its stable name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedNormalization`] for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "linear" => Ok(NormalizationMode::Linear),
            "log" => Ok(NormalizationMode::Log),
            "sqrt" => Ok(NormalizationMode::Sqrt),
            "arcsinh" => Ok(NormalizationMode::Arcsinh),
            _ => Err(Error::UnsupportedNormalization(name.to_owned())),
        }
    }

    /// Forward conversion of a data value to its normalized value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            NormalizationMode::Linear => value,
            NormalizationMode::Log => value.log10(),
            NormalizationMode::Sqrt => value.sqrt(),
            NormalizationMode::Arcsinh => value.asinh(),
        }
    }

    /// Backward conversion of a normalized value to a data value.
    #[must_use]
    pub fn revert(self, value: f64) -> f64 {
        match self {
            NormalizationMode::Linear => value,
            NormalizationMode::Log => 10f64.powf(value),
            NormalizationMode::Sqrt => value * value,
            NormalizationMode::Arcsinh => value.sinh(),
        }
    }

    /// Returns true for values outside the transform's domain.
    #[must_use]
    pub fn is_invalid(self, value: f64) -> bool {
        match self {
            NormalizationMode::Linear | NormalizationMode::Arcsinh => false,
            NormalizationMode::Log => value <= 0.0,
            NormalizationMode::Sqrt => value < 0.0,
        }
    }
}

impl FromStr for NormalizationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
