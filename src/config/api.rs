use super::traits::ConfigSection;
use crate::error::YieldCurveError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub request_timeout_secs: u64,
    /// Calendar days searched back from a requested date when the provider
    /// published nothing on the date itself.
    pub lookback_days: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            request_timeout_secs: 10,
            lookback_days: 7,
        }
    }
}

impl ConfigSection for ApiConfig {
    fn section_name() -> &'static str {
        "api"
    }

    fn validate(&self) -> Result<(), YieldCurveError> {
        if self.base_url.trim().is_empty() {
            return Err(Self::invalid("Base URL must not be empty"));
        }
        if !(1..=120).contains(&self.request_timeout_secs) {
            return Err(Self::invalid("Request timeout must be between 1 and 120 seconds"));
        }
        if self.lookback_days > 31 {
            return Err(Self::invalid("Lookback must be at most 31 days"));
        }
        Ok(())
    }
}
