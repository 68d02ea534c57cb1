//! Problem Source Port - Where decision problems come from.
//!
//! The presentation layer collects criteria, alternatives, and cell values
//! through whatever mechanism it likes. Adapters implementing this port turn
//! that input into a validated `DecisionProblem`.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::topsis::{DecisionProblem, TopsisError};

/// Port for loading a decision problem.
///
/// # Contract
///
/// Implementations must:
/// - Return a fully validated problem or an error, never a partial one
/// - Surface domain validation failures as `SourceError::Invalid`
/// - Keep no state between calls
pub trait ProblemSource: Send + Sync {
    /// Loads the decision problem.
    fn load(&self) -> Result<DecisionProblem, SourceError>;

    /// Human-readable description of the source, used in log messages.
    fn describe(&self) -> String;
}

/// Errors that can occur while loading a decision problem.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be read.
    #[error("Could not read problem source '{location}': {reason}")]
    Unavailable { location: String, reason: String },

    /// The source format is not recognized.
    #[error("Unsupported problem format: {0}")]
    UnsupportedFormat(String),

    /// The content could not be parsed.
    #[error("Malformed problem document: {0}")]
    Malformed(String),

    /// The content parsed but failed domain validation.
    #[error(transparent)]
    Invalid(#[from] TopsisError),
}

impl SourceError {
    /// Creates an unavailable error.
    pub fn unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Creates a malformed document error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SourceError::Unavailable { .. } => ErrorCode::SourceUnavailable,
            SourceError::UnsupportedFormat(_) => ErrorCode::UnsupportedFormat,
            SourceError::Malformed(_) => ErrorCode::InvalidFormat,
            SourceError::Invalid(inner) => inner.code(),
        }
    }
}
