use chrono::NaiveDate;
use yieldcurve::config::{AnalysisConfig, AppConfig};
use yieldcurve::ui::{AppState, DateOutcome, FetchOutcome, FetchTarget, Message, ViewMode};
use yieldcurve::{CurveShape, FetchError, Tenor, YieldRecord};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn inverted(date: NaiveDate) -> YieldRecord {
    YieldRecord::from_pairs(date, vec![(Tenor::M1, 5.0), (Tenor::Y5, 3.4), (Tenor::Y10, 4.0)])
}

fn outcome(generation: u64, results: Vec<(NaiveDate, Result<Option<YieldRecord>, FetchError>)>) -> Message {
    Message::FetchCompleted(FetchOutcome {
        generation,
        results: results
            .into_iter()
            .map(|(requested, result)| DateOutcome { requested, result })
            .collect(),
    })
}

fn state() -> AppState {
    // Wednesday
    AppState::new(ymd(2024, 9, 18), &AppConfig::default())
}

#[test]
fn test_forbidden_leaves_chart_empty() {
    let mut state = state();
    let request = state.apply(Message::FetchRequested).unwrap();
    assert!(state.is_loading);

    state.apply(outcome(
        request.generation,
        vec![(ymd(2024, 9, 18), Err(FetchError::Status { code: 403 }))],
    ));

    assert!(!state.is_loading);
    assert!(state.series.is_empty());
    assert!(state.error_message.as_deref().unwrap().contains("403"));
    assert_eq!(state.curve_description(), None);
}

#[test]
fn test_success_builds_classified_series() {
    let mut state = state();
    let request = state.apply(Message::FetchRequested).unwrap();
    assert_eq!(request.target, FetchTarget::Single(ymd(2024, 9, 18)));

    state.apply(outcome(request.generation, vec![(ymd(2024, 9, 18), Ok(Some(inverted(ymd(2024, 9, 18)))))]));

    assert_eq!(state.series.len(), 1);
    assert_eq!(state.series[0].points.len(), 3);
    assert_eq!(state.series[0].classification.shape, CurveShape::Inverted);
    assert_eq!(state.curve_description(), Some(CurveShape::Inverted.description()));
    assert!(state.error_message.is_none());
}

#[test]
fn test_stale_outcome_is_discarded() {
    let mut state = state();
    let first = state.apply(Message::FetchRequested).unwrap();
    let second = state.apply(Message::FetchRequested).unwrap();
    assert!(second.generation > first.generation);

    // The older cycle finishes last
    state.apply(outcome(second.generation, vec![(ymd(2024, 9, 18), Ok(Some(inverted(ymd(2024, 9, 18)))))]));
    state.apply(outcome(first.generation, vec![(ymd(2024, 9, 18), Err(FetchError::Status { code: 500 }))]));

    assert_eq!(state.series.len(), 1);
    assert!(state.error_message.is_none());
}

#[test]
fn test_outcome_for_superseded_cycle_keeps_loading() {
    let mut state = state();
    let first = state.apply(Message::FetchRequested).unwrap();
    state.apply(Message::FetchRequested).unwrap();

    state.apply(outcome(first.generation, vec![(ymd(2024, 9, 18), Ok(Some(inverted(ymd(2024, 9, 18)))))]));

    assert!(state.is_loading);
    assert!(state.series.is_empty());
}

#[test]
fn test_compare_mode_partial_failure_renders_what_arrived() {
    let mut state = state();
    state.apply(Message::ModeChanged(ViewMode::Compare));
    let request = state.apply(Message::FetchRequested).unwrap();
    assert_eq!(request.target, FetchTarget::Compare(ymd(2024, 9, 18), ymd(2024, 9, 17)));

    state.apply(outcome(
        request.generation,
        vec![
            (ymd(2024, 9, 18), Ok(Some(inverted(ymd(2024, 9, 18))))),
            (ymd(2024, 9, 17), Err(FetchError::Transport("connection reset".to_string()))),
        ],
    ));

    assert_eq!(state.series.len(), 1);
    assert_eq!(
        state.error_message.as_deref(),
        Some("Failed to fetch data: connection reset")
    );
    // No combined classification in compare mode
    assert_eq!(state.curve_description(), None);
}

#[test]
fn test_first_error_is_reported() {
    let mut state = state();
    state.apply(Message::ModeChanged(ViewMode::Compare));
    let request = state.apply(Message::FetchRequested).unwrap();

    state.apply(outcome(
        request.generation,
        vec![
            (ymd(2024, 9, 18), Err(FetchError::Status { code: 429 })),
            (ymd(2024, 9, 17), Err(FetchError::Status { code: 500 })),
        ],
    ));

    assert!(state.error_message.as_deref().unwrap().contains("429"));
}

#[test]
fn test_total_failure_keeps_previous_chart() {
    let mut state = state();
    let request = state.apply(Message::FetchRequested).unwrap();
    state.apply(outcome(request.generation, vec![(ymd(2024, 9, 18), Ok(Some(inverted(ymd(2024, 9, 18)))))]));

    let request = state.apply(Message::FetchRequested).unwrap();
    assert!(state.error_message.is_none());
    state.apply(outcome(request.generation, vec![(ymd(2024, 9, 18), Err(FetchError::Status { code: 503 }))]));

    assert_eq!(state.series.len(), 1);
    assert!(state.error_message.is_some());
}

#[test]
fn test_no_data_is_a_notice_not_an_error() {
    let mut state = state();
    let request = state.apply(Message::FetchRequested).unwrap();
    state.apply(outcome(request.generation, vec![(ymd(2024, 9, 18), Ok(None))]));

    assert!(state.error_message.is_none());
    assert!(state.series.is_empty());
    assert_eq!(state.notices, vec!["No yield data published for 2024-09-18".to_string()]);
}

#[test]
fn test_substituted_record_is_flagged() {
    let mut state = state();
    let request = state.apply(Message::FetchRequested).unwrap();
    state.apply(outcome(request.generation, vec![(ymd(2024, 9, 18), Ok(Some(inverted(ymd(2024, 9, 16)))))]));

    assert!(state.series[0].is_substituted());
    assert_eq!(state.series[0].name(), "2024-09-18 (2024-09-16)");
}

#[test]
fn test_compare_dates_sharing_a_record_keep_distinct_names() {
    // Sunday: primary and comparison both resolve to Friday's record
    let mut state = AppState::new(ymd(2024, 9, 15), &AppConfig::default());
    state.apply(Message::ModeChanged(ViewMode::Compare));
    assert_eq!(state.comparison_date, ymd(2024, 9, 13));

    let request = state.apply(Message::FetchRequested).unwrap();
    let friday = inverted(ymd(2024, 9, 13));
    state.apply(outcome(
        request.generation,
        vec![
            (ymd(2024, 9, 15), Ok(Some(friday.clone()))),
            (ymd(2024, 9, 13), Ok(Some(friday))),
        ],
    ));

    let names: Vec<String> = state.series.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["2024-09-15 (2024-09-13)".to_string(), "2024-09-13".to_string()]);
    assert_ne!(names[0], names[1]);
}

#[test]
fn test_date_changes_feed_next_request() {
    let mut state = state();
    state.apply(Message::ModeChanged(ViewMode::Compare));
    state.apply(Message::PrimaryDateChanged(ymd(2024, 3, 1)));
    state.apply(Message::ComparisonDateChanged(ymd(2023, 3, 1)));

    let request = state.apply(Message::FetchRequested).unwrap();
    assert_eq!(request.target, FetchTarget::Compare(ymd(2024, 3, 1), ymd(2023, 3, 1)));
}

#[test]
fn test_flat_tolerance_from_config() {
    let config = AppConfig {
        analysis: AnalysisConfig { flat_tolerance: 0.25 },
        ..AppConfig::default()
    };
    let mut state = AppState::new(ymd(2024, 9, 18), &config);
    let request = state.apply(Message::FetchRequested).unwrap();

    let nearly_flat = YieldRecord::from_pairs(ymd(2024, 9, 18), vec![(Tenor::M3, 4.1), (Tenor::Y10, 4.0)]);
    state.apply(outcome(request.generation, vec![(ymd(2024, 9, 18), Ok(Some(nearly_flat)))]));

    assert_eq!(state.series[0].classification.shape, CurveShape::Flat);
}
