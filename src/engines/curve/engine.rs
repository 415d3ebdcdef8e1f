// src/engines/curve/engine.rs
use crate::engines::curve::{CurveClassifier, YieldNormalizer};
use crate::types::{CurveSeries, YieldRecord};
use chrono::NaiveDate;

/// Turns a fetched record into everything the chart and details panel show.
pub struct CurveEngine {
    classifier: CurveClassifier,
}

impl CurveEngine {
    pub fn new(classifier: CurveClassifier) -> Self {
        Self { classifier }
    }

    pub fn build_series(&self, requested: NaiveDate, record: YieldRecord) -> CurveSeries {
        let points = YieldNormalizer::normalize(&record);
        let classification = self.classifier.classify(&record);

        CurveSeries {
            requested,
            record,
            points,
            classification,
        }
    }
}

impl Default for CurveEngine {
    fn default() -> Self {
        Self::new(CurveClassifier::default())
    }
}
