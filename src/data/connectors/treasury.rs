use super::types::DateWindow;
use crate::config::ApiConfig;
use crate::error::{FetchError, Result, YieldCurveError};
use crate::types::YieldRecord;
use crate::utils::format_date;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

const TREASURY_PATH: &str = "api/v4/treasury";

/// Client for the par yield curve endpoint.
pub struct TreasuryClient {
    client: Client,
    base_url: String,
    api_key: String,
    lookback_days: u32,
}

impl TreasuryClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                YieldCurveError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            lookback_days: config.lookback_days,
        })
    }

    pub fn request_url(&self, window: DateWindow) -> std::result::Result<Url, FetchError> {
        let endpoint = format!("{}/{}", self.base_url.trim_end_matches('/'), TREASURY_PATH);
        let from = format_date(window.from);
        let to = format_date(window.to);

        Url::parse_with_params(
            &endpoint,
            &[
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("apikey", self.api_key.as_str()),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }

    /// All records the provider publishes inside `window`.
    pub async fn fetch_window(
        &self,
        window: DateWindow,
    ) -> std::result::Result<Vec<YieldRecord>, FetchError> {
        let url = self.request_url(window)?;
        log::debug!("GET {}", redact_api_key(&url));

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_response(status, &body)
    }

    /// The curve for `date`: the latest record on or before it within the
    /// configured lookback. `Ok(None)` when nothing was published.
    pub async fn fetch_curve(
        &self,
        date: NaiveDate,
    ) -> std::result::Result<Option<YieldRecord>, FetchError> {
        let window = DateWindow::ending_on(date, self.lookback_days);
        let records = self.fetch_window(window).await?;
        log::debug!(
            "{} record(s) between {} and {}",
            records.len(),
            window.from,
            window.to
        );
        Ok(latest_on_or_before(records, date))
    }
}

/// Map an HTTP status and body to records. Anything but 200 is an error
/// carrying the status code.
pub fn decode_response(
    status: StatusCode,
    body: &str,
) -> std::result::Result<Vec<YieldRecord>, FetchError> {
    if status != StatusCode::OK {
        log::debug!("API error response: {}", body);
        return Err(FetchError::Status {
            code: status.as_u16(),
        });
    }

    log::debug!("JSON response: {}", body);
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Newest record dated no later than `date`.
pub fn latest_on_or_before(records: Vec<YieldRecord>, date: NaiveDate) -> Option<YieldRecord> {
    records
        .into_iter()
        .filter(|r| r.date <= date)
        .max_by_key(|r| r.date)
}

fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
