//! Criterion and Alternative input types.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Direction, ValidationError, Weight};

/// A weighted evaluation criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub direction: Direction,
    pub weight: Weight,
}

impl Criterion {
    /// Creates a new criterion, validating the name and weight.
    pub fn new(
        name: impl Into<String>,
        direction: Direction,
        weight: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion name"));
        }
        Ok(Self {
            name,
            direction,
            weight: Weight::try_new(weight)?,
        })
    }

    /// Creates a benefit criterion.
    pub fn benefit(name: impl Into<String>, weight: f64) -> Result<Self, ValidationError> {
        Self::new(name, Direction::Benefit, weight)
    }

    /// Creates a cost criterion.
    pub fn cost(name: impl Into<String>, weight: f64) -> Result<Self, ValidationError> {
        Self::new(name, Direction::Cost, weight)
    }
}

/// An alternative together with its raw values, one per criterion.
///
/// `None` marks a cell the user has not filled in yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    #[serde(default)]
    pub values: Vec<Option<f64>>,
}

impl Alternative {
    /// Creates an alternative with a complete row of values.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Some).collect(),
        }
    }

    /// Creates an alternative whose row may have gaps.
    pub fn with_gaps(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}
