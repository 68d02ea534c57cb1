//! Errors surfaced by the analysis handlers.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::topsis::TopsisError;
use crate::ports::{ExportError, SourceError};

/// Failure of an analysis run, from loading through export.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Engine(#[from] TopsisError),

    #[error("The total weight {total} exceeds 1, adjust the weights so they sum to 1 or less")]
    WeightsExceedOne { total: f64 },

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl AnalysisError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Source(inner) => inner.code(),
            AnalysisError::Engine(inner) => inner.code(),
            AnalysisError::WeightsExceedOne { .. } => ErrorCode::WeightsExceedOne,
            AnalysisError::Export(inner) => inner.code(),
        }
    }
}
