use crate::error::YieldCurveError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), YieldCurveError>;

    fn invalid(message: &str) -> YieldCurveError {
        YieldCurveError::Configuration(format!("[{}] {}", Self::section_name(), message))
    }
}
