pub mod traits;
pub mod api;
pub mod analysis;
pub mod chart;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use api::ApiConfig;
pub use analysis::AnalysisConfig;
pub use chart::ChartConfig;
pub use traits::ConfigSection;
