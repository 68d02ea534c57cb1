//! Error types for TOPSIS input validation and computation.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Malformed or incomplete engine input. Raised before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisValidation {
    #[error("At least {min} alternatives required, got {actual}")]
    TooFewAlternatives { min: usize, actual: usize },

    #[error("At least {min} criteria required, got {actual}")]
    TooFewCriteria { min: usize, actual: usize },

    #[error("{kind} count {actual} exceeds the limit of {max}")]
    TooLarge {
        kind: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{kind} name at position {position} cannot be empty")]
    EmptyName { kind: &'static str, position: usize },

    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("Unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },

    #[error("Expected {expected} {context}, got {actual}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Missing value for alternative '{alternative}' on criterion '{criterion}'")]
    MissingCell {
        alternative: String,
        criterion: String,
    },

    #[error("Value for alternative '{alternative}' on criterion '{criterion}' is not a finite number")]
    NonFiniteValue {
        alternative: String,
        criterion: String,
    },

    #[error(transparent)]
    InvalidValue(#[from] ValidationError),
}

impl TopsisValidation {
    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        TopsisValidation::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }
}

/// Errors returned by the TOPSIS engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Validation failed: {0}")]
    Validation(#[from] TopsisValidation),

    #[error("Criterion '{criterion}' (column {index}) is all zeros, normalization is undefined")]
    DegenerateCriterion { criterion: String, index: usize },
}

impl TopsisError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::Validation(inner) => match inner {
                TopsisValidation::EmptyName { .. } => ErrorCode::EmptyField,
                TopsisValidation::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
                TopsisValidation::MissingCell { .. } => ErrorCode::MissingCell,
                TopsisValidation::TooLarge { .. } => ErrorCode::OutOfRange,
                TopsisValidation::InvalidValue(ValidationError::OutOfRange { .. }) => {
                    ErrorCode::OutOfRange
                }
                TopsisValidation::InvalidValue(ValidationError::InvalidFormat { .. }) => {
                    ErrorCode::InvalidFormat
                }
                TopsisValidation::InvalidValue(ValidationError::EmptyField { .. }) => {
                    ErrorCode::EmptyField
                }
                _ => ErrorCode::ValidationFailed,
            },
            TopsisError::DegenerateCriterion { .. } => ErrorCode::DegenerateCriterion,
        }
    }

    /// Returns true if this is an input validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, TopsisError::Validation(_))
    }
}

impl From<ValidationError> for TopsisError {
    fn from(err: ValidationError) -> Self {
        TopsisError::Validation(TopsisValidation::InvalidValue(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_criterion_names_the_column() {
        let err = TopsisError::DegenerateCriterion {
            criterion: "Safety".to_string(),
            index: 1,
        };
        assert_eq!(
            err.to_string(),
            "Criterion 'Safety' (column 1) is all zeros, normalization is undefined"
        );
        assert_eq!(err.code(), ErrorCode::DegenerateCriterion);
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_wraps_with_prefix() {
        let err: TopsisError = TopsisValidation::TooFewAlternatives { min: 2, actual: 1 }.into();
        assert_eq!(
            err.to_string(),
            "Validation failed: At least 2 alternatives required, got 1"
        );
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.is_validation());
    }

    #[test]
    fn foundation_errors_map_to_specific_codes() {
        let err: TopsisError = ValidationError::out_of_range("weight", 0.0, 1.0, 2.0).into();
        assert_eq!(err.code(), ErrorCode::OutOfRange);

        let err: TopsisError = TopsisValidation::MissingCell {
            alternative: "A".to_string(),
            criterion: "Price".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::MissingCell);
    }
}
