mod app;
mod panels;
mod widgets;
pub mod services;
pub mod state;

pub use app::YieldCurveApp;
pub use state::{AppState, DateOutcome, FetchOutcome, FetchRequest, FetchTarget, Message, ViewMode};
