//! Decision Problem - The immutable input handed to the engine in one piece.

use serde::{Deserialize, Serialize};

use super::{Alternative, Criterion, DecisionMatrix, TopsisError};
use crate::domain::foundation::{Direction, Weight};

/// Serialized form of a decision problem, as read from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDocument {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

/// Criteria plus a validated matrix whose columns line up with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProblemDocument", into = "ProblemDocument")]
pub struct DecisionProblem {
    criteria: Vec<Criterion>,
    matrix: DecisionMatrix,
}

impl DecisionProblem {
    /// Validates criteria and alternatives and assembles the problem.
    pub fn new(criteria: Vec<Criterion>, alternatives: Vec<Alternative>) -> Result<Self, TopsisError> {
        let mut builder = DecisionMatrix::builder()
            .alternatives(alternatives.iter().map(|a| a.name.clone()).collect::<Vec<_>>())
            .criteria(criteria.iter().map(|c| c.name.clone()).collect::<Vec<_>>());
        for alternative in alternatives {
            builder = builder.partial_row(alternative.name, alternative.values);
        }
        let matrix = builder.build()?;

        Ok(Self { criteria, matrix })
    }

    /// Returns the criteria in column order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Returns the decision matrix.
    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    /// Returns the weight vector in column order.
    pub fn weights(&self) -> Vec<Weight> {
        self.criteria.iter().map(|c| c.weight).collect()
    }

    /// Returns the direction vector in column order.
    pub fn directions(&self) -> Vec<Direction> {
        self.criteria.iter().map(|c| c.direction).collect()
    }
}

impl TryFrom<ProblemDocument> for DecisionProblem {
    type Error = TopsisError;

    fn try_from(document: ProblemDocument) -> Result<Self, Self::Error> {
        Self::new(document.criteria, document.alternatives)
    }
}

impl From<DecisionProblem> for ProblemDocument {
    fn from(problem: DecisionProblem) -> Self {
        let alternatives = problem
            .matrix
            .alternatives()
            .iter()
            .zip(problem.matrix.rows())
            .map(|(name, row)| Alternative::new(name.clone(), row.to_vec()))
            .collect();
        Self {
            criteria: problem.criteria,
            alternatives,
        }
    }
}
