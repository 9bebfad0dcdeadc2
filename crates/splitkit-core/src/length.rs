//! Pane dimension values.
//!
//! A [`PaneLength`] is a numeric value paired with a unit: absolute layout
//! units, or a percentage of the available length at resolve time. Hosts
//! declare pane sizes and bounds with these; the engine resolves them against
//! the working length of each layout pass.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit of a [`PaneLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// The value is in layout units.
    Absolute,
    /// The value is a percentage (0–100) of the available length.
    Percent,
}

/// A declared pane dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneLength {
    value: f64,
    unit: LengthUnit,
}

impl PaneLength {
    /// Create a length, rejecting non-finite or negative values.
    pub fn new(value: f64, unit: LengthUnit) -> Result<Self, LengthError> {
        if !value.is_finite() {
            return Err(LengthError::NonFinite { value });
        }
        if value < 0.0 {
            return Err(LengthError::Negative { value });
        }
        Ok(Self { value, unit })
    }

    /// Create an absolute length.
    pub fn absolute(value: f64) -> Result<Self, LengthError> {
        Self::new(value, LengthUnit::Absolute)
    }

    /// Create a percentage length.
    pub fn percent(value: f64) -> Result<Self, LengthError> {
        Self::new(value, LengthUnit::Percent)
    }

    /// Numeric value (always finite and non-negative).
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Unit of the value.
    #[must_use]
    pub const fn unit(self) -> LengthUnit {
        self.unit
    }

    /// Resolve against a basis length.
    ///
    /// Percentages resolve to `basis * value / 100`; a non-finite basis
    /// resolves percentages to 0 so measure passes against unbounded space
    /// stay finite.
    #[must_use]
    pub fn resolve(self, basis: f64) -> f64 {
        match self.unit {
            LengthUnit::Absolute => self.value,
            LengthUnit::Percent => {
                if basis.is_finite() {
                    basis * self.value / 100.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Failure to construct a [`PaneLength`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthError {
    /// The value was NaN or infinite.
    NonFinite { value: f64 },
    /// The value was negative.
    Negative { value: f64 },
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { value } => {
                write!(f, "pane length must be finite, got {value}")
            }
            Self::Negative { value } => {
                write!(f, "pane length must be non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for LengthError {}
