use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One day of observed market data for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl HistoricalRecord {
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// One externally produced forecast sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub predicted_close: f64,
}

impl ForecastPoint {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, predicted_close: f64) -> Self {
        Self {
            timestamp,
            predicted_close,
        }
    }
}

/// Uniform point of the display series.
///
/// Forecast points are flattened so a single series can carry both kinds:
/// all four prices equal the predicted close and volume is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub is_predicted: bool,
}

impl DisplayPoint {
    #[must_use]
    pub fn prices(&self) -> [f64; 4] {
        [self.open, self.high, self.low, self.close]
    }
}

impl From<&HistoricalRecord> for DisplayPoint {
    fn from(record: &HistoricalRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
            volume: record.volume,
            is_predicted: false,
        }
    }
}

impl From<&ForecastPoint> for DisplayPoint {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            timestamp: point.timestamp,
            open: point.predicted_close,
            high: point.predicted_close,
            low: point.predicted_close,
            close: point.predicted_close,
            volume: 0,
            is_predicted: true,
        }
    }
}

/// Count of most-recent records kept in the display window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationWindow(u32);

impl DurationWindow {
    pub const ONE_MONTH: Self = Self(30);
    pub const THREE_MONTHS: Self = Self(90);
    pub const SIX_MONTHS: Self = Self(180);
    pub const ONE_YEAR: Self = Self(365);
    pub const TWO_YEARS: Self = Self(730);

    #[must_use]
    pub const fn new(records: u32) -> Self {
        Self(records)
    }

    #[must_use]
    pub const fn records(self) -> u32 {
        self.0
    }

    /// Window size as a slice length.
    #[must_use]
    pub fn len(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for DurationWindow {
    fn default() -> Self {
        Self::ONE_YEAR
    }
}

impl From<DurationPreset> for DurationWindow {
    fn from(preset: DurationPreset) -> Self {
        preset.window()
    }
}

/// Duration choices offered by the time-period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DurationPreset {
    OneMonth,
    ThreeMonths,
    SixMonths,
    #[default]
    OneYear,
    TwoYears,
}

impl DurationPreset {
    pub const ALL: [Self; 5] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
    ];

    #[must_use]
    pub fn window(self) -> DurationWindow {
        match self {
            Self::OneMonth => DurationWindow::ONE_MONTH,
            Self::ThreeMonths => DurationWindow::THREE_MONTHS,
            Self::SixMonths => DurationWindow::SIX_MONTHS,
            Self::OneYear => DurationWindow::ONE_YEAR,
            Self::TwoYears => DurationWindow::TWO_YEARS,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
            Self::TwoYears => "2 Years",
        }
    }
}

/// Padded price-axis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceDomain {
    pub min: f64,
    pub max: f64,
}

impl PriceDomain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Rendering mode selected by the chart-type toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartKind {
    #[default]
    Candlestick,
    Line,
}

impl ChartKind {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Candlestick => Self::Line,
            Self::Line => Self::Candlestick,
        }
    }
}

/// Close-only sample consumed by line rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub is_predicted: bool,
}

impl From<&DisplayPoint> for LinePoint {
    fn from(point: &DisplayPoint) -> Self {
        Self {
            timestamp: point.timestamp,
            value: point.close,
            is_predicted: point.is_predicted,
        }
    }
}
