//! Input field parsing
//!
//! The host reads sheet dimensions, fold position, and bend direction as raw
//! text. Anything that is not a finite number counts as a missing value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Parses a numeric input field.
///
/// Returns `None` for empty, non-numeric, NaN, or infinite input.
pub fn parse_field(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Bend direction of a fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BendDirection {
    /// Bend toward the viewer
    #[default]
    Up,
    /// Bend away from the viewer
    Down,
}

impl BendDirection {
    /// Lowercase name used in markup classes and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Stroke colour of the fold on the 2D canvas.
    pub fn stroke_color(&self) -> &'static str {
        match self {
            Self::Up => "#00f",
            Self::Down => "#f00",
        }
    }
}

impl fmt::Display for BendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BendDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(ValidationError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}
