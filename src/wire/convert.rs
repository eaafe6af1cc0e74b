use tracing::{debug, warn};

use crate::core::primitives::parse_service_date;
use crate::core::{ForecastPoint, HistoricalRecord};
use crate::error::{ChartError, ChartResult};

use super::{
    DEFAULT_DATA_REJECTION, DEFAULT_PREDICTION_REJECTION, PredictionResponse, StockDataResponse,
    WireForecastPoint, WireRecord,
};

/// Converts wire records, dropping any whose date cannot be parsed.
#[must_use]
pub fn records_from_wire(records: &[WireRecord]) -> Vec<HistoricalRecord> {
    let converted: Vec<HistoricalRecord> = records
        .iter()
        .filter_map(|record| {
            let Some(timestamp) = parse_service_date(&record.date) else {
                warn!(date = %record.date, "dropping record with unparseable date");
                return None;
            };
            Some(HistoricalRecord::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ))
        })
        .collect();
    debug!(
        received = records.len(),
        converted = converted.len(),
        "converted wire records"
    );
    converted
}

/// Converts wire forecast samples, dropping any whose date cannot be parsed.
#[must_use]
pub fn forecast_from_wire(points: &[WireForecastPoint]) -> Vec<ForecastPoint> {
    points
        .iter()
        .filter_map(|point| {
            let Some(timestamp) = parse_service_date(&point.date) else {
                warn!(date = %point.date, "dropping forecast point with unparseable date");
                return None;
            };
            Some(ForecastPoint::new(timestamp, point.close))
        })
        .collect()
}

impl StockDataResponse {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse stock data response: {e}"))
        })
    }

    /// Unwraps the envelope into historical records, in service order.
    pub fn into_records(self) -> ChartResult<Vec<HistoricalRecord>> {
        if !self.success {
            return Err(ChartError::ServiceRejected {
                message: self
                    .message
                    .unwrap_or_else(|| DEFAULT_DATA_REJECTION.to_owned()),
            });
        }
        Ok(self
            .data
            .map(|data| records_from_wire(&data.records))
            .unwrap_or_default())
    }
}

impl PredictionResponse {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse prediction response: {e}"))
        })
    }

    pub fn into_forecast(self) -> ChartResult<Vec<ForecastPoint>> {
        if !self.success {
            return Err(ChartError::ServiceRejected {
                message: self
                    .message
                    .unwrap_or_else(|| DEFAULT_PREDICTION_REJECTION.to_owned()),
            });
        }
        Ok(self
            .prediction
            .map(|prediction| forecast_from_wire(&prediction.close_series))
            .unwrap_or_default())
    }
}
