pub mod classifier;
pub mod engine;
pub mod normalizer;

pub use classifier::CurveClassifier;
pub use engine::CurveEngine;
pub use normalizer::YieldNormalizer;
