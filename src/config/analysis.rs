use super::traits::ConfigSection;
use crate::error::YieldCurveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest short/long mean gap still reported as a flat curve.
    /// Zero keeps the exact comparison.
    pub flat_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { flat_tolerance: 0.0 }
    }
}

impl ConfigSection for AnalysisConfig {
    fn section_name() -> &'static str {
        "analysis"
    }

    fn validate(&self) -> Result<(), YieldCurveError> {
        if !self.flat_tolerance.is_finite() || self.flat_tolerance < 0.0 {
            return Err(Self::invalid("Flat tolerance must be a non-negative number"));
        }
        Ok(())
    }
}
