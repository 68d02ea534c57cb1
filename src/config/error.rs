//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Precision must be between 0 and 10")]
    InvalidPrecision,

    #[error("Alternative limit must be between 2 and 100")]
    InvalidAlternativeLimit,

    #[error("Criterion limit must be between 2 and 50")]
    InvalidCriterionLimit,

    #[error("Invalid log filter directive")]
    InvalidLogLevel,
}
