use chrono::NaiveDate;
use serde::Deserialize;

/// Maturity buckets published on the par yield curve, in curve order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tenor {
    M1,
    M2,
    M3,
    M6,
    Y1,
    Y2,
    Y3,
    Y5,
    Y7,
    Y10,
    Y20,
    Y30,
}

/// Which end of the curve a tenor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermBucket {
    Short,
    Mid,
    Long,
}

impl Tenor {
    pub const COUNT: usize = 12;

    pub const ALL: [Tenor; Tenor::COUNT] = [
        Self::M1,
        Self::M2,
        Self::M3,
        Self::M6,
        Self::Y1,
        Self::Y2,
        Self::Y3,
        Self::Y5,
        Self::Y7,
        Self::Y10,
        Self::Y20,
        Self::Y30,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::M1 => "1M",
            Self::M2 => "2M",
            Self::M3 => "3M",
            Self::M6 => "6M",
            Self::Y1 => "1Y",
            Self::Y2 => "2Y",
            Self::Y3 => "3Y",
            Self::Y5 => "5Y",
            Self::Y7 => "7Y",
            Self::Y10 => "10Y",
            Self::Y20 => "20Y",
            Self::Y30 => "30Y",
        }
    }

    /// Field name used by the treasury endpoint
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::M1 => "month1",
            Self::M2 => "month2",
            Self::M3 => "month3",
            Self::M6 => "month6",
            Self::Y1 => "year1",
            Self::Y2 => "year2",
            Self::Y3 => "year3",
            Self::Y5 => "year5",
            Self::Y7 => "year7",
            Self::Y10 => "year10",
            Self::Y20 => "year20",
            Self::Y30 => "year30",
        }
    }

    /// Position on the curve, also used as the chart x coordinate.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn bucket(&self) -> TermBucket {
        match self {
            Self::M1 | Self::M2 | Self::M3 | Self::M6 => TermBucket::Short,
            Self::Y10 | Self::Y20 | Self::Y30 => TermBucket::Long,
            _ => TermBucket::Mid,
        }
    }
}

/// One calendar date's published par yields.
///
/// Each tenor is either present with a value or absent. Decoding goes through
/// [`crate::data::RawYieldRecord`], so JSON `null` and missing keys both end up
/// absent rather than zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "crate::data::RawYieldRecord")]
pub struct YieldRecord {
    pub date: NaiveDate,
    yields: [Option<f64>; Tenor::COUNT],
}

impl YieldRecord {
    /// Record with no tenors published
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            yields: [None; Tenor::COUNT],
        }
    }

    pub fn with_yield(mut self, tenor: Tenor, value: f64) -> Self {
        self.yields[tenor.index()] = Some(value);
        self
    }

    pub fn from_pairs<I>(date: NaiveDate, pairs: I) -> Self
    where
        I: IntoIterator<Item = (Tenor, f64)>,
    {
        pairs
            .into_iter()
            .fold(Self::empty(date), |record, (tenor, value)| record.with_yield(tenor, value))
    }

    pub fn get(&self, tenor: Tenor) -> Option<f64> {
        self.yields[tenor.index()]
    }

    /// Every tenor in curve order with its optional value
    pub fn entries(&self) -> impl Iterator<Item = (Tenor, Option<f64>)> + '_ {
        Tenor::ALL
            .into_iter()
            .map(move |tenor| (tenor, self.get(tenor)))
    }

    pub fn present_count(&self) -> usize {
        self.yields.iter().filter(|y| y.is_some()).count()
    }
}

/// A single (tenor, yield) observation ready for charting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaturityYieldPoint {
    pub maturity: Tenor,
    pub yield_pct: f64,
}

impl MaturityYieldPoint {
    /// Chart coordinates: (tenor position, yield %)
    pub fn as_plot_point(&self) -> [f64; 2] {
        [self.maturity.index() as f64, self.yield_pct]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveShape {
    Inverted,
    Normal,
    Flat,
    InsufficientData,
}

impl CurveShape {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inverted => "Inverted",
            Self::Normal => "Normal",
            Self::Flat => "Flat",
            Self::InsufficientData => "Insufficient data",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Inverted => {
                "Inverted Yield Curve. Investors see more risks now than in the longer term"
            }
            Self::Normal => {
                "Normal Yield Curve. Investors have higher confidence now than in the longer term"
            }
            Self::Flat => "Flat Yield Curve. Investor uncertainty is high",
            Self::InsufficientData => "Insufficient data to determine yield curve type.",
        }
    }
}

/// Output of the curve classifier. Both means are `None` exactly when the
/// shape is [`CurveShape::InsufficientData`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveClassification {
    pub shape: CurveShape,
    pub short_mean: Option<f64>,
    pub long_mean: Option<f64>,
}

impl CurveClassification {
    pub fn insufficient() -> Self {
        Self {
            shape: CurveShape::InsufficientData,
            short_mean: None,
            long_mean: None,
        }
    }
}

/// One chart series: the record picked for a requested date plus what was
/// derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSeries {
    pub requested: NaiveDate,
    pub record: YieldRecord,
    pub points: Vec<MaturityYieldPoint>,
    pub classification: CurveClassification,
}

impl CurveSeries {
    /// Legend name. Built from the requested date so two requests resolving to
    /// the same record still get distinct entries.
    pub fn name(&self) -> String {
        let requested = crate::utils::format_date(self.requested);
        if self.is_substituted() {
            format!("{} ({})", requested, crate::utils::format_date(self.record.date))
        } else {
            requested
        }
    }

    /// True when the provider had nothing on the requested day and an earlier
    /// record was used.
    pub fn is_substituted(&self) -> bool {
        self.record.date != self.requested
    }
}
