//! Wire types for the stock data and prediction service payloads.
//!
//! Numeric fields are coerced leniently: numbers or numeric strings are
//! accepted and anything else becomes zero, leaving the price-domain step to
//! treat those zeros as missing.

mod convert;
mod serde_util;

use serde::{Deserialize, Serialize};

pub use convert::{forecast_from_wire, records_from_wire};

const DEFAULT_DATA_REJECTION: &str = "No data found for this symbol.";
const DEFAULT_PREDICTION_REJECTION: &str =
    "Prediction failed. Please ensure you have sufficient historical data.";

/// Historical record as served by the data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    pub date: String,
    #[serde(default, deserialize_with = "serde_util::lenient_f64")]
    pub open: f64,
    #[serde(default, deserialize_with = "serde_util::lenient_f64")]
    pub high: f64,
    #[serde(default, deserialize_with = "serde_util::lenient_f64")]
    pub low: f64,
    #[serde(default, deserialize_with = "serde_util::lenient_f64")]
    pub close: f64,
    #[serde(default, deserialize_with = "serde_util::lenient_u64")]
    pub volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StockDataPayload {
    #[serde(default)]
    pub records: Vec<WireRecord>,
    /// Server-side summary; passed through untouched.
    #[serde(default)]
    pub statistics: Option<serde_json::Value>,
}

/// `GET /stock/data/{symbol}` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDataResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<StockDataPayload>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Forecast sample as served by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireForecastPoint {
    pub date: String,
    #[serde(default, deserialize_with = "serde_util::lenient_f64")]
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WirePrediction {
    #[serde(default)]
    pub close_series: Vec<WireForecastPoint>,
}

/// `GET /stock/predict/{symbol}` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<WirePrediction>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Forecast horizon requested from the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PredictHorizon {
    Day,
    Week,
    #[default]
    Month,
}

impl PredictHorizon {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Next Day",
            Self::Week => "Next Week",
            Self::Month => "Next Month",
        }
    }
}
