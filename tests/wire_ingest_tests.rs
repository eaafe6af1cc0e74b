use chrono::{TimeZone, Utc};
use forecast_chart::ChartError;
use forecast_chart::wire::{PredictHorizon, PredictionResponse, StockDataResponse};

#[test]
fn stock_data_envelope_coerces_numeric_fields() {
    let raw = r#"{
        "success": true,
        "data": {
            "records": [
                {"date": "2024-06-28", "open": "100.5", "high": 102, "low": "99.25", "close": "101", "volume": "120000"},
                {"date": "2024-06-27T00:00:00", "open": null, "high": "n/a", "low": 98.0, "close": 99.0, "volume": 3.7},
                {"date": "yesterday", "open": 1, "high": 1, "low": 1, "close": 1, "volume": 1}
            ],
            "statistics": {"period_days": 2}
        }
    }"#;

    let records = StockDataResponse::from_json_str(raw)
        .expect("parse envelope")
        .into_records()
        .expect("accepted envelope");

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].timestamp,
        Utc.with_ymd_and_hms(2024, 6, 28, 0, 0, 0).unwrap()
    );
    assert_eq!(records[0].open, 100.5);
    assert_eq!(records[0].high, 102.0);
    assert_eq!(records[0].low, 99.25);
    assert_eq!(records[0].volume, 120_000);

    assert_eq!(records[1].open, 0.0);
    assert_eq!(records[1].high, 0.0);
    assert_eq!(records[1].volume, 3);
}

#[test]
fn missing_numeric_fields_default_to_zero() {
    let raw = r#"{"success": true, "data": {"records": [{"date": "2024-01-02"}]}}"#;

    let records = StockDataResponse::from_json_str(raw)
        .and_then(StockDataResponse::into_records)
        .expect("records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].close, 0.0);
    assert_eq!(records[0].volume, 0);
}

#[test]
fn rejected_envelope_surfaces_service_message() {
    let raw = r#"{"success": false, "message": "Symbol not tracked"}"#;

    let err = StockDataResponse::from_json_str(raw)
        .and_then(StockDataResponse::into_records)
        .expect_err("rejected envelope");
    match err {
        ChartError::ServiceRejected { message } => assert_eq!(message, "Symbol not tracked"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejected_prediction_without_message_uses_default() {
    let raw = r#"{"success": false}"#;

    let err = PredictionResponse::from_json_str(raw)
        .and_then(PredictionResponse::into_forecast)
        .expect_err("rejected prediction");
    assert!(matches!(err, ChartError::ServiceRejected { ref message } if message.starts_with("Prediction failed")));
}

#[test]
fn prediction_envelope_yields_forecast_in_given_order() {
    let raw = r#"{
        "success": true,
        "prediction": {
            "close_series": [
                {"date": "2024-07-02", "close": 103.0},
                {"date": "2024-07-01", "close": "102.5"}
            ]
        }
    }"#;

    let forecast = PredictionResponse::from_json_str(raw)
        .and_then(PredictionResponse::into_forecast)
        .expect("forecast");
    assert_eq!(forecast.len(), 2);
    assert_eq!(forecast[0].predicted_close, 103.0);
    assert_eq!(forecast[1].predicted_close, 102.5);
    assert!(forecast[0].timestamp > forecast[1].timestamp);
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = StockDataResponse::from_json_str("{not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn predict_horizon_uses_lowercase_wire_names() {
    let horizon: PredictHorizon = serde_json::from_str("\"week\"").expect("horizon");
    assert_eq!(horizon, PredictHorizon::Week);
    assert_eq!(PredictHorizon::default().as_str(), "month");
    assert_eq!(PredictHorizon::Day.label(), "Next Day");
}
