use chrono::{Datelike, Local, NaiveDate, Weekday};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The calendar day before `date`, stepping back over a weekend to Friday.
/// Public holidays are not considered.
pub fn previous_working_day(date: NaiveDate) -> NaiveDate {
    let mut day = date.pred_opt().unwrap_or(date);
    while matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
        day = match day.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }
    day
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
