// src/engines/curve/normalizer.rs
use crate::types::{MaturityYieldPoint, YieldRecord};

pub struct YieldNormalizer;

impl YieldNormalizer {
    /// Present tenors of `record` as chart points, in curve order.
    pub fn normalize(record: &YieldRecord) -> Vec<MaturityYieldPoint> {
        record
            .entries()
            .filter_map(|(maturity, value)| {
                value.map(|yield_pct| MaturityYieldPoint { maturity, yield_pct })
            })
            .collect()
    }
}
