pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;
pub mod ui;
pub mod utils;

pub use engines::curve::{CurveClassifier, CurveEngine, YieldNormalizer};
pub use error::{FetchError, Result, YieldCurveError};
pub use types::{
    CurveClassification, CurveSeries, CurveShape, MaturityYieldPoint, Tenor, YieldRecord,
};
