// src/engines/curve/classifier.rs
use crate::types::{CurveClassification, CurveShape, TermBucket, YieldRecord};

/// Labels a curve by comparing the average short-end yield (1M-6M) with the
/// average long-end yield (10Y-30Y).
///
/// With the default tolerance of zero the means are compared exactly, so two
/// conceptually tied means that differ in the last bit are not `Flat`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveClassifier {
    flat_tolerance: f64,
}

impl CurveClassifier {
    pub fn new(flat_tolerance: f64) -> Self {
        Self { flat_tolerance }
    }

    pub fn flat_tolerance(&self) -> f64 {
        self.flat_tolerance
    }

    pub fn classify(&self, record: &YieldRecord) -> CurveClassification {
        let short_term = Self::bucket_values(record, TermBucket::Short);
        let long_term = Self::bucket_values(record, TermBucket::Long);

        let (Some(short_mean), Some(long_mean)) = (mean(&short_term), mean(&long_term)) else {
            return CurveClassification::insufficient();
        };

        let shape = if self.flat_tolerance > 0.0
            && (short_mean - long_mean).abs() <= self.flat_tolerance
        {
            CurveShape::Flat
        } else if short_mean > long_mean {
            CurveShape::Inverted
        } else if short_mean < long_mean {
            CurveShape::Normal
        } else {
            CurveShape::Flat
        };

        CurveClassification {
            shape,
            short_mean: Some(short_mean),
            long_mean: Some(long_mean),
        }
    }

    fn bucket_values(record: &YieldRecord, bucket: TermBucket) -> Vec<f64> {
        record
            .entries()
            .filter(|(tenor, _)| tenor.bucket() == bucket)
            .filter_map(|(_, value)| value)
            .collect()
    }
}

/// Mean over the values actually present; `None` for an empty slice.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
