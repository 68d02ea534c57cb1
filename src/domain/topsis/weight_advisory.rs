//! Weight-sum advisory. The engine never renormalizes weights; callers decide
//! what to do with an unbalanced total.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Weight;

/// Absolute tolerance when comparing the weight total against 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Outcome of checking that criterion weights sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeightAdvisory {
    Balanced { total: f64 },
    UnderWeighted { total: f64 },
    OverWeighted { total: f64 },
}

impl WeightAdvisory {
    /// Classifies the total of the given weights.
    pub fn assess(weights: &[Weight]) -> Self {
        let total = Weight::total(weights);
        if total > 1.0 + WEIGHT_SUM_TOLERANCE {
            WeightAdvisory::OverWeighted { total }
        } else if total < 1.0 - WEIGHT_SUM_TOLERANCE {
            WeightAdvisory::UnderWeighted { total }
        } else {
            WeightAdvisory::Balanced { total }
        }
    }

    /// Returns the weight total.
    pub fn total(&self) -> f64 {
        match self {
            WeightAdvisory::Balanced { total }
            | WeightAdvisory::UnderWeighted { total }
            | WeightAdvisory::OverWeighted { total } => *total,
        }
    }

    /// True when the total exceeds one.
    pub fn is_blocking(&self) -> bool {
        matches!(self, WeightAdvisory::OverWeighted { .. })
    }

    /// True when the total is one within tolerance.
    pub fn is_balanced(&self) -> bool {
        matches!(self, WeightAdvisory::Balanced { .. })
    }
}

impl fmt::Display for WeightAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightAdvisory::Balanced { .. } => write!(f, "The total weight is exactly 1.0"),
            WeightAdvisory::UnderWeighted { total } => {
                write!(f, "The total weight {} is less than 1, results may be biased", total)
            }
            WeightAdvisory::OverWeighted { total } => {
                write!(f, "The total weight {} exceeds 1", total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(values: &[f64]) -> Vec<Weight> {
        values.iter().map(|v| Weight::try_new(*v).unwrap()).collect()
    }

    #[test]
    fn exact_sum_is_balanced() {
        let advisory = WeightAdvisory::assess(&weights(&[0.5, 0.5]));
        assert!(advisory.is_balanced());
        assert!(!advisory.is_blocking());
    }

    #[test]
    fn float_noise_is_tolerated() {
        // 0.1 + 0.2 + 0.7 is not exactly 1.0 in binary floating point
        let advisory = WeightAdvisory::assess(&weights(&[0.1, 0.2, 0.7]));
        assert!(advisory.is_balanced());
    }

    #[test]
    fn under_one_warns_without_blocking() {
        let advisory = WeightAdvisory::assess(&weights(&[0.3, 0.3]));
        assert!(matches!(advisory, WeightAdvisory::UnderWeighted { .. }));
        assert!(!advisory.is_blocking());
        assert!((advisory.total() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn over_one_blocks() {
        let advisory = WeightAdvisory::assess(&weights(&[0.8, 0.8]));
        assert!(advisory.is_blocking());
        assert_eq!(advisory.to_string(), "The total weight 1.6 exceeds 1");
    }

    #[test]
    fn advisory_serializes_with_status_tag() {
        let json = serde_json::to_string(&WeightAdvisory::Balanced { total: 1.0 }).unwrap();
        assert_eq!(json, r#"{"status":"balanced","total":1.0}"#);
    }
}
