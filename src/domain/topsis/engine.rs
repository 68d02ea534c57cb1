//! TOPSIS Engine - Closeness-to-ideal scoring and ranking.

use serde::{Deserialize, Serialize};

use super::ranking::competition_ranks;
use super::step_log::{
    StepLog, StepTable, DISTANCES, IDEAL_SOLUTIONS, NORMALIZED_MATRIX, TOPSIS_SCORES,
    WEIGHTED_MATRIX,
};
use super::{DecisionMatrix, DecisionProblem, TopsisError, TopsisValidation};
use crate::domain::foundation::{Direction, Weight};

/// Score assigned when an alternative sits on both the ideal and the
/// anti-ideal solution.
pub const TIE_EDGE_SCORE: f64 = 0.5;

/// Score and rank of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub alternative: String,
    /// Raw criterion values, in criterion order.
    pub values: Vec<f64>,
    /// Relative closeness to the ideal solution, in [0, 1].
    pub score: f64,
    /// Competition rank, 1 is best.
    pub rank: u32,
    pub distance_to_ideal: f64,
    pub distance_to_anti_ideal: f64,
    /// Both distances were zero and the score was set by convention.
    pub tie_edge: bool,
}

/// Engine output: per-alternative scores plus the intermediate tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisOutcome {
    /// Criterion names, in column order.
    pub criteria: Vec<String>,
    /// Scores in alternative insertion order.
    pub scores: Vec<ScoreResult>,
    pub step_log: StepLog,
}

impl TopsisOutcome {
    /// Returns scores ordered by rank, ties kept in insertion order.
    pub fn ranked(&self) -> Vec<&ScoreResult> {
        let mut ranked: Vec<&ScoreResult> = self.scores.iter().collect();
        ranked.sort_by_key(|s| s.rank);
        ranked
    }

    /// Returns the single top-ranked alternative, or None if rank 1 is shared.
    pub fn best(&self) -> Option<&ScoreResult> {
        let mut leaders = self.scores.iter().filter(|s| s.rank == 1);
        let first = leaders.next()?;
        match leaders.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Returns the score for a named alternative.
    pub fn score_of(&self, alternative: &str) -> Option<&ScoreResult> {
        self.scores.iter().find(|s| s.alternative == alternative)
    }

    /// True if any alternative was scored by the tie-edge convention.
    pub fn has_tie_edge(&self) -> bool {
        self.scores.iter().any(|s| s.tie_edge)
    }
}

/// TOPSIS computation functions.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Scores and ranks every alternative of a decision problem.
    pub fn evaluate(problem: &DecisionProblem) -> Result<TopsisOutcome, TopsisError> {
        Self::compute(problem.matrix(), &problem.weights(), &problem.directions())
    }

    /// Runs TOPSIS over a decision matrix.
    ///
    /// # Algorithm
    /// 1. `r[i][j] = x[i][j] / sqrt(sum_i x[i][j]^2)`
    /// 2. `v[i][j] = r[i][j] * w[j]`
    /// 3. Ideal is the column max for Benefit and min for Cost; anti-ideal is
    ///    the opposite extreme.
    /// 4. `d+`, `d-` are Euclidean distances to ideal and anti-ideal.
    /// 5. `score = d- / (d+ + d-)`, or 0.5 when both distances are zero.
    /// 6. Competition ranking on descending score.
    ///
    /// # Errors
    /// - `Validation` if `weights` or `directions` do not match the column count
    /// - `DegenerateCriterion` if a column is entirely zero
    pub fn compute(
        matrix: &DecisionMatrix,
        weights: &[Weight],
        directions: &[Direction],
    ) -> Result<TopsisOutcome, TopsisError> {
        let width = matrix.criterion_count();
        if weights.len() != width {
            return Err(TopsisValidation::dimension_mismatch("weights", width, weights.len()).into());
        }
        if directions.len() != width {
            return Err(
                TopsisValidation::dimension_mismatch("directions", width, directions.len()).into(),
            );
        }

        let mut log = StepLog::new();
        let alternatives = matrix.alternatives();
        let criteria = matrix.criteria();

        let norms = Self::column_norms(matrix)?;
        let normalized: Vec<Vec<f64>> = matrix
            .rows()
            .map(|row| row.iter().zip(&norms).map(|(x, norm)| norm.apply(*x)).collect())
            .collect();
        log.record(StepTable::from_rows(
            NORMALIZED_MATRIX,
            criteria.to_vec(),
            alternatives,
            normalized.iter().cloned(),
        ));

        let weighted: Vec<Vec<f64>> = normalized
            .iter()
            .map(|row| row.iter().zip(weights).map(|(r, w)| r * w.value()).collect())
            .collect();
        log.record(StepTable::from_rows(
            WEIGHTED_MATRIX,
            criteria.to_vec(),
            alternatives,
            weighted.iter().cloned(),
        ));

        let (ideal, anti_ideal) = Self::ideal_solutions(&weighted, directions);
        log.record(
            StepTable::new(IDEAL_SOLUTIONS, criteria.to_vec())
                .with_row("Ideal", ideal.clone())
                .with_row("Negative Ideal", anti_ideal.clone()),
        );

        let to_ideal: Vec<f64> = weighted.iter().map(|row| euclidean(row, &ideal)).collect();
        let to_anti_ideal: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean(row, &anti_ideal))
            .collect();
        log.record(StepTable::from_rows(
            DISTANCES,
            vec!["Distance to Ideal", "Distance to Negative Ideal"],
            alternatives,
            to_ideal.iter().zip(&to_anti_ideal).map(|(p, n)| vec![*p, *n]),
        ));

        let closeness: Vec<(f64, bool)> = to_ideal
            .iter()
            .zip(&to_anti_ideal)
            .map(|(d_pos, d_neg)| relative_closeness(*d_pos, *d_neg))
            .collect();
        let score_values: Vec<f64> = closeness.iter().map(|(s, _)| *s).collect();
        let ranks = competition_ranks(&score_values);
        log.record(StepTable::from_rows(
            TOPSIS_SCORES,
            vec!["TOPSIS Score", "Rank"],
            alternatives,
            score_values.iter().zip(&ranks).map(|(s, r)| vec![*s, f64::from(*r)]),
        ));

        let scores = alternatives
            .iter()
            .enumerate()
            .map(|(i, name)| ScoreResult {
                alternative: name.clone(),
                values: matrix.row(i).to_vec(),
                score: closeness[i].0,
                rank: ranks[i],
                distance_to_ideal: to_ideal[i],
                distance_to_anti_ideal: to_anti_ideal[i],
                tie_edge: closeness[i].1,
            })
            .collect();

        Ok(TopsisOutcome {
            criteria: criteria.to_vec(),
            scores,
            step_log: log,
        })
    }

    /// Euclidean norm of every column; fails on an all-zero column.
    fn column_norms(matrix: &DecisionMatrix) -> Result<Vec<ColumnNorm>, TopsisError> {
        (0..matrix.criterion_count())
            .map(|j| {
                ColumnNorm::of(matrix.column(j)).ok_or_else(|| TopsisError::DegenerateCriterion {
                    criterion: matrix.criteria()[j].clone(),
                    index: j,
                })
            })
            .collect()
    }

    /// Per-column (ideal, anti-ideal) vectors of the weighted matrix.
    fn ideal_solutions(weighted: &[Vec<f64>], directions: &[Direction]) -> (Vec<f64>, Vec<f64>) {
        directions
            .iter()
            .enumerate()
            .map(|(j, direction)| {
                let (min, max) = weighted.iter().map(|row| row[j]).fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), v| (lo.min(v), hi.max(v)),
                );
                direction.ideal_pair(min, max)
            })
            .unzip()
    }
}

/// Column norm held as `scale * length` so that neither factor leaves the
/// finite range, however large or small the cells are.
#[derive(Debug, Clone, Copy)]
struct ColumnNorm {
    scale: f64,
    length: f64,
}

impl ColumnNorm {
    /// Returns None when every value is zero.
    fn of(column: impl Iterator<Item = f64> + Clone) -> Option<Self> {
        let max_abs = column.clone().fold(0.0_f64, |m, x| m.max(x.abs()));
        if max_abs == 0.0 {
            return None;
        }

        let sum_sq: f64 = column.clone().map(|x| x * x).sum();
        if sum_sq.is_finite() && sum_sq >= f64::MIN_POSITIVE {
            return Some(Self {
                scale: 1.0,
                length: sum_sq.sqrt(),
            });
        }

        // Squares overflowed or went subnormal: measure relative to max_abs.
        let scaled_sq: f64 = column.map(|x| (x / max_abs).powi(2)).sum();
        Some(Self {
            scale: max_abs,
            length: scaled_sq.sqrt(),
        })
    }

    fn apply(&self, x: f64) -> f64 {
        x / self.scale / self.length
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Returns the closeness score and whether the tie-edge convention applied.
fn relative_closeness(d_pos: f64, d_neg: f64) -> (f64, bool) {
    let total = d_pos + d_neg;
    if total == 0.0 {
        (TIE_EDGE_SCORE, true)
    } else {
        (d_neg / total, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{Alternative, Criterion};

    fn weights(values: &[f64]) -> Vec<Weight> {
        values.iter().map(|v| Weight::try_new(*v).unwrap()).collect()
    }

    /// Benefit 0.5 / Cost 0.5, A=[8,2], B=[4,6].
    fn two_car_problem() -> DecisionProblem {
        DecisionProblem::new(
            vec![
                Criterion::benefit("Comfort", 0.5).unwrap(),
                Criterion::cost("Price", 0.5).unwrap(),
            ],
            vec![Alternative::new("A", vec![8.0, 2.0]), Alternative::new("B", vec![4.0, 6.0])],
        )
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {} to be within 1e-3 of {}",
            actual,
            expected
        );
    }

    #[test]
    fn dominant_alternative_scores_one() {
        let outcome = TopsisEngine::evaluate(&two_car_problem()).unwrap();

        let a = outcome.score_of("A").unwrap();
        let b = outcome.score_of("B").unwrap();
        assert_eq!(a.score, 1.0);
        assert_eq!(a.rank, 1);
        assert_eq!(b.score, 0.0);
        assert_eq!(b.rank, 2);
        assert_eq!(a.distance_to_ideal, 0.0);
        assert_close(a.distance_to_anti_ideal, 0.387);
        assert_close(b.distance_to_ideal, 0.387);
        assert_eq!(outcome.best().unwrap().alternative, "A");
    }

    #[test]
    fn intermediate_tables_match_hand_calculation() {
        let outcome = TopsisEngine::evaluate(&two_car_problem()).unwrap();
        let log = &outcome.step_log;

        let normalized = log.get(NORMALIZED_MATRIX).unwrap();
        assert_close(normalized.row("A").unwrap().values[0], 0.894);
        assert_close(normalized.row("A").unwrap().values[1], 0.316);
        assert_close(normalized.row("B").unwrap().values[0], 0.447);
        assert_close(normalized.row("B").unwrap().values[1], 0.949);

        let weighted = log.get(WEIGHTED_MATRIX).unwrap();
        assert_close(weighted.row("A").unwrap().values[0], 0.447);
        assert_close(weighted.row("B").unwrap().values[1], 0.474);

        let ideal = log.get(IDEAL_SOLUTIONS).unwrap();
        assert_close(ideal.row("Ideal").unwrap().values[0], 0.447);
        assert_close(ideal.row("Ideal").unwrap().values[1], 0.158);
        assert_close(ideal.row("Negative Ideal").unwrap().values[0], 0.224);
        assert_close(ideal.row("Negative Ideal").unwrap().values[1], 0.474);
    }

    #[test]
    fn step_log_has_five_tables_in_order() {
        let outcome = TopsisEngine::evaluate(&two_car_problem()).unwrap();
        assert_eq!(
            outcome.step_log.labels(),
            vec![
                NORMALIZED_MATRIX,
                WEIGHTED_MATRIX,
                IDEAL_SOLUTIONS,
                DISTANCES,
                TOPSIS_SCORES
            ]
        );
        let scores = outcome.step_log.get(TOPSIS_SCORES).unwrap();
        assert_eq!(scores.columns, vec!["TOPSIS Score", "Rank"]);
        assert_eq!(scores.row("B").unwrap().values, vec![0.0, 2.0]);
    }

    #[test]
    fn cost_criterion_prefers_smaller_value() {
        let matrix = DecisionMatrix::from_rows(
            vec!["Cheap", "Pricey"],
            vec!["Price", "Colour"],
            vec![vec![10.0, 3.0], vec![20.0, 3.0]],
        )
        .unwrap();
        let outcome = TopsisEngine::compute(
            &matrix,
            &weights(&[0.5, 0.5]),
            &[Direction::Cost, Direction::Benefit],
        )
        .unwrap();

        assert_eq!(outcome.score_of("Cheap").unwrap().rank, 1);
        assert_eq!(outcome.score_of("Pricey").unwrap().rank, 2);
    }

    #[test]
    fn benefit_criterion_prefers_larger_value() {
        let matrix = DecisionMatrix::from_rows(
            vec!["Slow", "Fast"],
            vec!["Speed", "Colour"],
            vec![vec![100.0, 3.0], vec![200.0, 3.0]],
        )
        .unwrap();
        let outcome = TopsisEngine::compute(
            &matrix,
            &weights(&[0.5, 0.5]),
            &[Direction::Benefit, Direction::Benefit],
        )
        .unwrap();

        assert_eq!(outcome.score_of("Fast").unwrap().rank, 1);
        assert_eq!(outcome.score_of("Slow").unwrap().rank, 2);
    }

    #[test]
    fn identical_rows_tie_with_competition_ranks() {
        let matrix = DecisionMatrix::from_rows(
            vec!["A", "B", "C"],
            vec!["Speed", "Price"],
            vec![vec![5.0, 3.0], vec![5.0, 3.0], vec![1.0, 9.0]],
        )
        .unwrap();
        let outcome = TopsisEngine::compute(
            &matrix,
            &weights(&[0.5, 0.5]),
            &[Direction::Benefit, Direction::Cost],
        )
        .unwrap();

        let a = outcome.score_of("A").unwrap();
        let b = outcome.score_of("B").unwrap();
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        assert_eq!(a.rank, 1);
        assert_eq!(b.rank, 1);
        assert_eq!(outcome.score_of("C").unwrap().rank, 3);
        assert!(outcome.best().is_none());
    }

    #[test]
    fn all_identical_alternatives_use_tie_edge_score() {
        let matrix = DecisionMatrix::from_rows(
            vec!["A", "B"],
            vec!["Speed", "Price"],
            vec![vec![5.0, 3.0], vec![5.0, 3.0]],
        )
        .unwrap();
        let outcome = TopsisEngine::compute(
            &matrix,
            &weights(&[0.5, 0.5]),
            &[Direction::Benefit, Direction::Cost],
        )
        .unwrap();

        assert!(outcome.has_tie_edge());
        for score in &outcome.scores {
            assert_eq!(score.score, TIE_EDGE_SCORE);
            assert_eq!(score.rank, 1);
            assert!(score.tie_edge);
        }
    }

    #[test]
    fn zero_column_is_degenerate() {
        let matrix = DecisionMatrix::from_rows(
            vec!["A", "B"],
            vec!["Speed", "Safety"],
            vec![vec![5.0, 0.0], vec![3.0, 0.0]],
        )
        .unwrap();
        let err = TopsisEngine::compute(
            &matrix,
            &weights(&[0.5, 0.5]),
            &[Direction::Benefit, Direction::Benefit],
        )
        .unwrap_err();

        assert_eq!(
            err,
            TopsisError::DegenerateCriterion {
                criterion: "Safety".to_string(),
                index: 1
            }
        );
    }

    #[test]
    fn huge_values_keep_their_criterion() {
        let matrix = DecisionMatrix::from_rows(
            vec!["A", "B"],
            vec!["X", "Y"],
            vec![vec![2e200, 3e200], vec![1e200, 1e200]],
        )
        .unwrap();
        let outcome = TopsisEngine::compute(
            &matrix,
            &weights(&[0.5, 0.5]),
            &[Direction::Benefit, Direction::Benefit],
        )
        .unwrap();

        let a = outcome.score_of("A").unwrap();
        assert_eq!(a.score, 1.0);
        assert_eq!(a.rank, 1);
        assert!(!a.tie_edge);
        assert_eq!(outcome.score_of("B").unwrap().score, 0.0);

        let normalized = outcome.step_log.get(NORMALIZED_MATRIX).unwrap();
        assert_close(normalized.row("A").unwrap().values[0], 2.0 / 5f64.sqrt());
        assert_close(normalized.row("B").unwrap().values[1], 1.0 / 10f64.sqrt());
    }

    #[test]
    fn tiny_nonzero_column_is_not_degenerate() {
        let matrix = DecisionMatrix::from_rows(
            vec!["A", "B"],
            vec!["X", "Y"],
            vec![vec![1e-170, 8.0], vec![3e-170, 4.0]],
        )
        .unwrap();
        let outcome = TopsisEngine::compute(
            &matrix,
            &weights(&[0.5, 0.5]),
            &[Direction::Benefit, Direction::Benefit],
        )
        .unwrap();

        let normalized = outcome.step_log.get(NORMALIZED_MATRIX).unwrap();
        assert_close(normalized.row("A").unwrap().values[0], 1.0 / 10f64.sqrt());
        assert_close(normalized.row("B").unwrap().values[0], 3.0 / 10f64.sqrt());
        for score in &outcome.scores {
            assert!((0.0..=1.0).contains(&score.score));
            assert!(!score.tie_edge);
        }
    }

    #[test]
    fn outcome_carries_raw_values() {
        let outcome = TopsisEngine::evaluate(&two_car_problem()).unwrap();

        assert_eq!(outcome.criteria, vec!["Comfort", "Price"]);
        assert_eq!(outcome.score_of("A").unwrap().values, vec![8.0, 2.0]);
        assert_eq!(outcome.score_of("B").unwrap().values, vec![4.0, 6.0]);
    }

    #[test]
    fn weight_count_mismatch_is_validation_error() {
        let problem = two_car_problem();
        let err = TopsisEngine::compute(
            problem.matrix(),
            &weights(&[1.0]),
            &problem.directions(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TopsisError::Validation(TopsisValidation::DimensionMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn direction_count_mismatch_is_validation_error() {
        let problem = two_car_problem();
        let err = TopsisEngine::compute(problem.matrix(), &problem.weights(), &[Direction::Cost])
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let problem = two_car_problem();
        let first = TopsisEngine::evaluate(&problem).unwrap();
        let second = TopsisEngine::evaluate(&problem).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ranked_orders_by_rank() {
        let matrix = DecisionMatrix::from_rows(
            vec!["Worst", "Best", "Middle"],
            vec!["Speed", "Range"],
            vec![vec![1.0, 1.0], vec![9.0, 9.0], vec![5.0, 5.0]],
        )
        .unwrap();
        let outcome = TopsisEngine::compute(
            &matrix,
            &weights(&[0.5, 0.5]),
            &[Direction::Benefit, Direction::Benefit],
        )
        .unwrap();

        let order: Vec<&str> = outcome
            .ranked()
            .iter()
            .map(|s| s.alternative.as_str())
            .collect();
        assert_eq!(order, vec!["Best", "Middle", "Worst"]);
    }

    #[test]
    fn negative_raw_values_are_accepted() {
        let matrix = DecisionMatrix::from_rows(
            vec!["A", "B"],
            vec!["Margin", "Price"],
            vec![vec![-2.0, 3.0], vec![4.0, 5.0]],
        )
        .unwrap();
        let outcome = TopsisEngine::compute(
            &matrix,
            &weights(&[0.5, 0.5]),
            &[Direction::Benefit, Direction::Cost],
        )
        .unwrap();
        for score in &outcome.scores {
            assert!((0.0..=1.0).contains(&score.score));
        }
    }
}
