//! RunAnalysisHandler - Command handler that scores a decision problem.
//!
//! Applies the caller-side policies the engine deliberately leaves out
//! (configured size limits, weight-sum advisory) and then runs TOPSIS.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::AnalysisError;
use crate::config::AnalysisConfig;
use crate::domain::foundation::{AnalysisId, Timestamp};
use crate::domain::topsis::{
    DecisionProblem, ScoreResult, TopsisEngine, TopsisError, TopsisOutcome, TopsisValidation,
    WeightAdvisory,
};

/// Command to run an analysis over a complete decision problem.
#[derive(Debug, Clone)]
pub struct RunAnalysisCommand {
    pub problem: DecisionProblem,
}

impl RunAnalysisCommand {
    pub fn new(problem: DecisionProblem) -> Self {
        Self { problem }
    }
}

/// Result of a successful analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: AnalysisId,
    pub computed_at: Timestamp,
    pub weight_advisory: WeightAdvisory,
    pub outcome: TopsisOutcome,
}

impl AnalysisReport {
    /// Scores ordered by rank.
    pub fn ranked(&self) -> Vec<&ScoreResult> {
        self.outcome.ranked()
    }

    /// Name of the single best alternative, None when rank 1 is shared.
    pub fn best_alternative(&self) -> Option<&str> {
        self.outcome.best().map(|s| s.alternative.as_str())
    }
}

/// Handler for running TOPSIS analyses.
pub struct RunAnalysisHandler {
    config: AnalysisConfig,
}

impl RunAnalysisHandler {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, cmd: RunAnalysisCommand) -> Result<AnalysisReport, AnalysisError> {
        let problem = cmd.problem;
        let matrix = problem.matrix();

        self.check_limits(matrix.alternative_count(), matrix.criterion_count())?;

        let weight_advisory = WeightAdvisory::assess(&problem.weights());
        match weight_advisory {
            WeightAdvisory::OverWeighted { total } if !self.config.allow_overweight => {
                return Err(AnalysisError::WeightsExceedOne { total });
            }
            WeightAdvisory::Balanced { .. } => {
                debug!(total = weight_advisory.total(), "Weights are balanced");
            }
            _ => warn!(total = weight_advisory.total(), "{}", weight_advisory),
        }

        let outcome = TopsisEngine::evaluate(&problem)?;
        if outcome.has_tie_edge() {
            warn!("Every alternative coincides with both ideal solutions, scores set to 0.5");
        }

        let report = AnalysisReport {
            analysis_id: AnalysisId::new(),
            computed_at: Timestamp::now(),
            weight_advisory,
            outcome,
        };

        info!(
            analysis_id = %report.analysis_id,
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            best = report.best_alternative().unwrap_or("<tie>"),
            "TOPSIS analysis complete"
        );

        Ok(report)
    }

    fn check_limits(&self, alternatives: usize, criteria: usize) -> Result<(), TopsisError> {
        if alternatives > self.config.max_alternatives {
            return Err(TopsisValidation::TooLarge {
                kind: "alternative",
                max: self.config.max_alternatives,
                actual: alternatives,
            }
            .into());
        }
        if criteria > self.config.max_criteria {
            return Err(TopsisValidation::TooLarge {
                kind: "criterion",
                max: self.config.max_criteria,
                actual: criteria,
            }
            .into());
        }
        Ok(())
    }
}
