use tracing::debug;

use crate::core::{DisplayPoint, ForecastPoint, HistoricalRecord};

/// Builds the display series from a chronological window and an optional forecast.
///
/// Historical records keep their order. Forecast points are appended in their
/// given order after dropping any point that does not strictly follow the last
/// historical timestamp; the forecast itself is never re-sorted. With an empty
/// window every forecast point is admitted.
#[must_use]
pub fn merge_prediction(
    window: &[HistoricalRecord],
    forecast: Option<&[ForecastPoint]>,
) -> Vec<DisplayPoint> {
    let forecast = forecast.unwrap_or_default();
    let mut series = Vec::with_capacity(window.len() + forecast.len());
    series.extend(window.iter().map(DisplayPoint::from));

    if forecast.is_empty() {
        return series;
    }

    let boundary = window.last().map(|record| record.timestamp);
    let before = series.len();
    series.extend(
        forecast
            .iter()
            .filter(|point| boundary.is_none_or(|last| point.timestamp > last))
            .map(DisplayPoint::from),
    );

    let admitted = series.len() - before;
    if admitted < forecast.len() {
        debug!(
            supplied = forecast.len(),
            admitted,
            "dropped forecast points at or before the last historical record"
        );
    }
    series
}
