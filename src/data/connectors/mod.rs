mod treasury;
mod types;

pub use treasury::{decode_response, latest_on_or_before, TreasuryClient};
pub use types::{DateWindow, RawYieldRecord};
