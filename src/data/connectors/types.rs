use crate::types::{Tenor, YieldRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Treasury endpoint row exactly as published. Every tenor is optional and
/// `null` deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawYieldRecord {
    pub date: NaiveDate,
    pub month1: Option<f64>,
    pub month2: Option<f64>,
    pub month3: Option<f64>,
    pub month6: Option<f64>,
    pub year1: Option<f64>,
    pub year2: Option<f64>,
    pub year3: Option<f64>,
    pub year5: Option<f64>,
    pub year7: Option<f64>,
    pub year10: Option<f64>,
    pub year20: Option<f64>,
    pub year30: Option<f64>,
}

impl RawYieldRecord {
    fn value(&self, tenor: Tenor) -> Option<f64> {
        match tenor {
            Tenor::M1 => self.month1,
            Tenor::M2 => self.month2,
            Tenor::M3 => self.month3,
            Tenor::M6 => self.month6,
            Tenor::Y1 => self.year1,
            Tenor::Y2 => self.year2,
            Tenor::Y3 => self.year3,
            Tenor::Y5 => self.year5,
            Tenor::Y7 => self.year7,
            Tenor::Y10 => self.year10,
            Tenor::Y20 => self.year20,
            Tenor::Y30 => self.year30,
        }
    }
}

impl From<RawYieldRecord> for YieldRecord {
    fn from(raw: RawYieldRecord) -> Self {
        Tenor::ALL
            .into_iter()
            .fold(YieldRecord::empty(raw.date), |record, tenor| match raw.value(tenor) {
                Some(value) => record.with_yield(tenor, value),
                None => record,
            })
    }
}

/// Inclusive date window sent to the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// Window ending on `date` and reaching back `lookback_days` calendar days.
    pub fn ending_on(date: NaiveDate, lookback_days: u32) -> Self {
        let from = date
            .checked_sub_days(chrono::Days::new(u64::from(lookback_days)))
            .unwrap_or(date);
        Self { from, to: date }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_keys_match_schema() {
        let raw = RawYieldRecord {
            date: NaiveDate::from_ymd_opt(2024, 9, 16).unwrap(),
            month1: None,
            month2: None,
            month3: None,
            month6: None,
            year1: None,
            year2: None,
            year3: None,
            year5: None,
            year7: None,
            year10: None,
            year20: None,
            year30: None,
        };
        let json = serde_json::to_value(&raw).unwrap();

        for tenor in Tenor::ALL {
            assert!(json.get(tenor.wire_key()).is_some(), "missing {}", tenor.wire_key());
        }
    }

    #[test]
    fn test_missing_keys_decode_as_absent() {
        let record: YieldRecord = serde_json::from_str(r#"{"date":"2024-09-16","year5":3.2}"#).unwrap();

        assert_eq!(record.present_count(), 1);
        assert_eq!(record.get(Tenor::Y5), Some(3.2));
    }

    #[test]
    fn test_window_lookback() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let window = DateWindow::ending_on(date, 7);
        assert_eq!(window.from, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert_eq!(window.to, date);
        assert_eq!(DateWindow::ending_on(date, 0).from, date);
    }
}
