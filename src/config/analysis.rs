//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::topsis::{
    DISPLAY_PRECISION, MAX_ALTERNATIVES, MAX_CRITERIA, MIN_ALTERNATIVES, MIN_CRITERIA,
};

/// Highest decimal precision accepted for exports.
const MAX_PRECISION: u32 = 10;

/// Analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Decimal places shown in tables and exports
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Largest number of alternatives accepted per run
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// Largest number of criteria accepted per run
    #[serde(default = "default_max_criteria")]
    pub max_criteria: usize,

    /// Run even when weights sum to more than one (warns instead of failing)
    #[serde(default)]
    pub allow_overweight: bool,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::InvalidPrecision);
        }
        if !(MIN_ALTERNATIVES..=MAX_ALTERNATIVES).contains(&self.max_alternatives) {
            return Err(ValidationError::InvalidAlternativeLimit);
        }
        if !(MIN_CRITERIA..=MAX_CRITERIA).contains(&self.max_criteria) {
            return Err(ValidationError::InvalidCriterionLimit);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            max_alternatives: default_max_alternatives(),
            max_criteria: default_max_criteria(),
            allow_overweight: false,
        }
    }
}

fn default_precision() -> u32 {
    DISPLAY_PRECISION
}

fn default_max_alternatives() -> usize {
    MAX_ALTERNATIVES
}

fn default_max_criteria() -> usize {
    MAX_CRITERIA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.precision, 4);
        assert_eq!(config.max_alternatives, 100);
        assert_eq!(config.max_criteria, 50);
        assert!(!config.allow_overweight);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_precision_too_high() {
        let config = AnalysisConfig {
            precision: 11,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPrecision)));
    }

    #[test]
    fn test_alternative_limit_below_minimum() {
        let config = AnalysisConfig {
            max_alternatives: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidAlternativeLimit)
        ));
    }

    #[test]
    fn test_criterion_limit_above_engine_bound() {
        let config = AnalysisConfig {
            max_criteria: 51,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCriterionLimit)
        ));
    }

    #[test]
    fn test_analysis_config_deserialization() {
        let json = r#"{ "precision": 2, "allow_overweight": true }"#;
        let config: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.precision, 2);
        assert!(config.allow_overweight);
        assert_eq!(config.max_alternatives, 100);
    }
}
