use super::traits::ConfigSection;
use crate::error::YieldCurveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub y_axis_headroom: f64,
    pub default_y_max: f64,
    pub show_points: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            y_axis_headroom: 0.5,
            default_y_max: 5.0,
            show_points: true,
        }
    }
}

impl ConfigSection for ChartConfig {
    fn section_name() -> &'static str {
        "chart"
    }

    fn validate(&self) -> Result<(), YieldCurveError> {
        if !self.y_axis_headroom.is_finite() || !self.default_y_max.is_finite() {
            return Err(Self::invalid("Y axis bounds must be finite"));
        }
        if self.y_axis_headroom < 0.0 {
            return Err(Self::invalid("Y axis headroom must not be negative"));
        }
        if self.default_y_max <= 0.0 {
            return Err(Self::invalid("Default Y axis maximum must be positive"));
        }
        Ok(())
    }
}
