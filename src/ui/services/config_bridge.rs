use crate::config::{AnalysisConfig, ChartConfig};
use crate::engines::curve::{CurveClassifier, CurveEngine};
use crate::types::CurveSeries;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Build the curve engine from the analysis section
    pub fn to_curve_engine(config: &AnalysisConfig) -> CurveEngine {
        CurveEngine::new(CurveClassifier::new(config.flat_tolerance))
    }

    /// Upper bound of the chart's yield axis: highest plotted yield plus
    /// headroom, or the configured default when nothing is plotted.
    pub fn to_y_axis_max(config: &ChartConfig, series: &[CurveSeries]) -> f64 {
        series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.yield_pct))
            .fold(None, |max: Option<f64>, y| Some(max.map_or(y, |m| m.max(y))))
            .map(|max| max + config.y_axis_headroom)
            .unwrap_or(config.default_y_max)
    }
}
