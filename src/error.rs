use thiserror::Error;

/// Failure of a single treasury fetch. Cloned into UI messages, so it carries
/// descriptions rather than the source errors themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("API returned status code {code}")]
    Status { code: u16 },

    #[error("Failed to fetch data: {0}")]
    Transport(String),

    #[error("Failed to fetch data: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code } => Some(*code),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum YieldCurveError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, YieldCurveError>;
