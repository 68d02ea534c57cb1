//! Direction value object: whether higher or lower raw values are preferred.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Preference direction of a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Higher raw value is preferable.
    #[default]
    Benefit,
    /// Lower raw value is preferable.
    Cost,
}

impl Direction {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Benefit => "Benefit",
            Direction::Cost => "Cost",
        }
    }

    /// Returns true if higher values are better.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Direction::Benefit)
    }

    /// Picks the (ideal, anti-ideal) pair from a column's extremes.
    pub fn ideal_pair(&self, min: f64, max: f64) -> (f64, f64) {
        match self {
            Direction::Benefit => (max, min),
            Direction::Cost => (min, max),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "benefit" => Ok(Direction::Benefit),
            "cost" => Ok(Direction::Cost),
            _ => Err(ValidationError::invalid_format(
                "direction",
                format!("expected Benefit or Cost, got '{}'", s),
            )),
        }
    }
}
