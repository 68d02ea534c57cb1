//! TOPSIS Module - Ranking alternatives by closeness to an ideal solution.
//!
//! # Components
//!
//! - `DecisionMatrix` - Fixed-shape alternatives x criteria table
//! - `DecisionProblem` - Criteria plus matrix, passed to the engine whole
//! - `TopsisEngine` - Normalization, weighting, ideal solutions, distances, ranking
//! - `StepLog` - Labeled intermediate tables for audit and export
//! - `WeightAdvisory` - Weight-sum check, reported but never enforced here
//!
//! Everything in this module is pure. Nothing here logs or touches I/O.

mod criterion;
mod decision_matrix;
mod engine;
mod errors;
mod problem;
mod ranking;
mod step_log;
mod weight_advisory;

/// Fewest alternatives the engine accepts.
pub const MIN_ALTERNATIVES: usize = 2;
/// Fewest criteria the engine accepts.
pub const MIN_CRITERIA: usize = 2;
/// Upper bound on alternatives, rejects absurdly large input.
pub const MAX_ALTERNATIVES: usize = 100;
/// Upper bound on criteria, rejects absurdly large input.
pub const MAX_CRITERIA: usize = 50;

pub use criterion::{Alternative, Criterion};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use engine::{ScoreResult, TopsisEngine, TopsisOutcome, TIE_EDGE_SCORE};
pub use errors::{TopsisError, TopsisValidation};
pub use problem::{DecisionProblem, ProblemDocument};
pub use ranking::competition_ranks;
pub use step_log::{
    round_to, StepLog, StepRow, StepTable, DISPLAY_PRECISION, DISTANCES, IDEAL_SOLUTIONS,
    NORMALIZED_MATRIX, TOPSIS_SCORES, WEIGHTED_MATRIX,
};
pub use weight_advisory::{WeightAdvisory, WEIGHT_SUM_TOLERANCE};
