use crate::config::AppConfig;
use crate::engines::curve::CurveEngine;
use crate::error::FetchError;
use crate::types::{CurveSeries, YieldRecord};
use crate::ui::services::ConfigBridge;
use crate::utils::{format_date, previous_working_day};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// One date, chart plus curve shape
    Single,
    /// Two dates overlaid, no combined classification
    Compare,
}

/// Dates a fetch cycle covers. Compare mode always fetches exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Single(NaiveDate),
    Compare(NaiveDate, NaiveDate),
}

/// Work order handed to the fetch runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub target: FetchTarget,
}

/// Result of fetching one requested date
#[derive(Debug, Clone, PartialEq)]
pub struct DateOutcome {
    pub requested: NaiveDate,
    pub result: Result<Option<YieldRecord>, FetchError>,
}

/// Everything a fetch cycle produced, tagged with the generation that issued it
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub generation: u64,
    pub results: Vec<DateOutcome>,
}

/// State transitions. UI widgets and the fetch runner both go through
/// [`AppState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ModeChanged(ViewMode),
    PrimaryDateChanged(NaiveDate),
    ComparisonDateChanged(NaiveDate),
    FetchRequested,
    FetchCompleted(FetchOutcome),
}

/// Central application state for the UI
pub struct AppState {
    // Selection
    pub mode: ViewMode,
    pub primary_date: NaiveDate,
    pub comparison_date: NaiveDate,

    // Fetch cycle
    pub generation: u64,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub notices: Vec<String>,
    pub status_message: String,

    // Results
    pub series: Vec<CurveSeries>,

    engine: CurveEngine,
}

impl AppState {
    pub fn new(today: NaiveDate, config: &AppConfig) -> Self {
        Self {
            mode: ViewMode::Single,
            primary_date: today,
            comparison_date: previous_working_day(today),

            generation: 0,
            is_loading: false,
            error_message: None,
            notices: Vec::new(),
            status_message: "Ready".to_string(),

            series: Vec::new(),

            engine: ConfigBridge::to_curve_engine(&config.analysis),
        }
    }

    pub fn target(&self) -> FetchTarget {
        match self.mode {
            ViewMode::Single => FetchTarget::Single(self.primary_date),
            ViewMode::Compare => FetchTarget::Compare(self.primary_date, self.comparison_date),
        }
    }

    /// Curve description shown under the chart. Only single-date mode gets
    /// one; compare mode never classifies the combined set.
    pub fn curve_description(&self) -> Option<&'static str> {
        match self.mode {
            ViewMode::Single => self
                .series
                .first()
                .map(|s| s.classification.shape.description()),
            ViewMode::Compare => None,
        }
    }

    /// Apply one transition. Returns the fetch the caller must start, if any.
    pub fn apply(&mut self, message: Message) -> Option<FetchRequest> {
        match message {
            Message::ModeChanged(mode) => {
                self.mode = mode;
                None
            }
            Message::PrimaryDateChanged(date) => {
                self.primary_date = date;
                None
            }
            Message::ComparisonDateChanged(date) => {
                self.comparison_date = date;
                None
            }
            Message::FetchRequested => Some(self.begin_fetch()),
            Message::FetchCompleted(outcome) => {
                self.complete_fetch(outcome);
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.is_loading = true;
        self.error_message = None;
        self.notices.clear();
        self.status_message = "Loading...".to_string();

        FetchRequest {
            generation: self.generation,
            target: self.target(),
        }
    }

    fn complete_fetch(&mut self, outcome: FetchOutcome) {
        if outcome.generation != self.generation {
            log::debug!(
                "Discarding stale outcome for generation {} (current {})",
                outcome.generation,
                self.generation
            );
            return;
        }

        self.is_loading = false;

        let mut fresh = Vec::new();
        let mut any_succeeded = false;

        for DateOutcome { requested, result } in outcome.results {
            match result {
                Ok(Some(record)) => {
                    any_succeeded = true;
                    fresh.push(self.engine.build_series(requested, record));
                }
                Ok(None) => {
                    any_succeeded = true;
                    self.notices
                        .push(format!("No yield data published for {}", format_date(requested)));
                }
                Err(e) => {
                    log::warn!("Fetch for {} failed: {}", requested, e);
                    // First failure wins the single error slot
                    if self.error_message.is_none() {
                        self.error_message = Some(e.to_string());
                    }
                }
            }
        }

        // A cycle where every fetch failed leaves the previous chart alone
        if any_succeeded {
            self.series = fresh;
        }

        self.status_message = match &self.error_message {
            Some(_) => "Fetch failed".to_string(),
            None => format!("Loaded {} curve(s)", self.series.len()),
        };
        log::info!(
            "Fetch cycle {} complete: {} series, error: {}",
            self.generation,
            self.series.len(),
            self.error_message.is_some()
        );
    }
}
