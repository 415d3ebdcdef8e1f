pub mod connectors;

pub use connectors::{
    decode_response, latest_on_or_before, DateWindow, RawYieldRecord, TreasuryClient,
};
