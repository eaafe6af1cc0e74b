use approx::assert_relative_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use forecast_chart::api::{CHART_FRAME_JSON_SCHEMA_V1, DateLabelFormat, TickDensityPolicy};
use forecast_chart::core::{ChartKind, DurationPreset, DurationWindow, ForecastPoint, HistoricalRecord};
use forecast_chart::wire::StockDataResponse;
use forecast_chart::{ChartError, ChartFrame, ChartPipeline, ChartPipelineConfig};

fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(offset)
}

fn shuffled_records(count: i64) -> Vec<HistoricalRecord> {
    // Reverse-interleaved so the pipeline has to do its own ordering.
    let mut records: Vec<_> = (0..count)
        .map(|d| {
            let close = 100.0 + (d % 7) as f64;
            HistoricalRecord::new(
                day(d),
                close - 0.5,
                close + 1.0,
                close - 1.0,
                close,
                1_000 + d as u64,
            )
        })
        .collect();
    records.reverse();
    let (even, odd): (Vec<_>, Vec<_>) = records
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 2 == 0);
    even.into_iter().chain(odd).map(|(_, r)| r).collect()
}

#[test]
fn pipeline_smoke_flow() {
    let pipeline =
        ChartPipeline::new(ChartPipelineConfig::new(DurationWindow::ONE_MONTH)).expect("pipeline");
    let records = shuffled_records(120);
    let forecast = vec![
        ForecastPoint::new(day(118), 90.0),
        ForecastPoint::new(day(120), 110.0),
        ForecastPoint::new(day(121), 111.0),
    ];

    let frame = pipeline.prepare(&records, Some(&forecast));

    assert_eq!(frame.historical_len(), 30);
    assert_eq!(frame.predicted_len(), 2);
    assert_eq!(frame.series[0].timestamp, day(90));
    assert_eq!(frame.series[29].timestamp, day(119));
    assert_eq!(frame.series.last().map(|p| p.timestamp), Some(day(121)));

    assert_relative_eq!(frame.price_domain.min, 99.0 - 1.2, epsilon = 1e-9);
    assert_relative_eq!(frame.price_domain.max, 111.0 + 1.2, epsilon = 1e-9);

    assert_eq!(frame.ticks.format, DateLabelFormat::ShortDate);
    assert_eq!(frame.ticks.positions.last().copied(), Some(day(121)));
    assert_eq!(frame.tick_labels().last().map(String::as_str), Some("May 01"));

    let stats = frame.statistics.expect("window statistics");
    assert_eq!(stats.period_records, 30);
    assert_eq!(stats.volume.highest, 1_119);
}

#[test]
fn prepare_is_repeatable_and_tracks_duration_changes() {
    let mut pipeline = ChartPipeline::new(ChartPipelineConfig::default()).expect("pipeline");
    let records = shuffled_records(500);

    let first = pipeline.prepare(&records, None);
    let second = pipeline.prepare(&records, None);
    assert_eq!(first, second);
    assert_eq!(first.series.len(), 365);

    pipeline.set_duration(DurationPreset::SixMonths.into());
    let frame = pipeline.prepare(&records, None);
    assert_eq!(frame.series.len(), 180);
    assert_eq!(frame.ticks.format, DateLabelFormat::MonthYear);
}

#[test]
fn empty_inputs_produce_default_frame() {
    let pipeline = ChartPipeline::new(ChartPipelineConfig::default()).expect("pipeline");

    let frame = pipeline.prepare(&[], None);
    assert!(frame.series.is_empty());
    assert!(frame.ticks.is_empty());
    assert!(frame.statistics.is_none());
    assert_eq!(frame.price_domain.min, 0.0);
    assert_eq!(frame.price_domain.max, 100.0);
}

#[test]
fn chart_kind_toggle_switches_line_projection_mode() {
    let mut pipeline = ChartPipeline::new(ChartPipelineConfig::default()).expect("pipeline");
    assert_eq!(pipeline.chart_kind(), ChartKind::Candlestick);
    assert_eq!(pipeline.toggle_chart_kind(), ChartKind::Line);

    let records = shuffled_records(5);
    let forecast = [ForecastPoint::new(day(10), 120.0)];
    let frame = pipeline.prepare(&records, Some(&forecast));
    assert_eq!(frame.chart_kind, ChartKind::Line);

    let line = frame.line_points();
    assert_eq!(line.len(), 6);
    assert_eq!(line[5].value, 120.0);
    assert!(line[5].is_predicted);
    assert_eq!(line[0].value, frame.series[0].close);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = ChartPipelineConfig::default().with_tick_policy(TickDensityPolicy {
        short_stride_divisor: 0,
        ..TickDensityPolicy::default()
    });
    let err = ChartPipeline::new(config).expect_err("zero divisor must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn config_json_fills_omitted_fields_with_defaults() {
    let config = ChartPipelineConfig::from_json_str(r#"{"duration": 90, "chart_kind": "Line"}"#)
        .expect("config");
    assert_eq!(config.duration, DurationWindow::THREE_MONTHS);
    assert_eq!(config.chart_kind, ChartKind::Line);
    assert_eq!(config.tick_policy, TickDensityPolicy::default());

    let round = ChartPipelineConfig::from_json_str(&config.to_json_pretty().expect("json"))
        .expect("reparse");
    assert_eq!(round, config);

    assert!(ChartPipelineConfig::from_json_str(r#"{"duration": "long"}"#).is_err());
}

#[test]
fn frame_json_contract_accepts_wrapped_and_bare_payloads() {
    let pipeline = ChartPipeline::new(ChartPipelineConfig::new(DurationWindow::THREE_MONTHS))
        .expect("pipeline");
    let forecast = [ForecastPoint::new(day(45), 101.0)];
    let frame = pipeline.prepare(&shuffled_records(40), Some(&forecast));

    let wrapped = frame.to_json_contract_v1_pretty().expect("contract");
    assert!(wrapped.contains(&format!("\"schema_version\": {CHART_FRAME_JSON_SCHEMA_V1}")));
    assert_eq!(ChartFrame::from_json_compat_str(&wrapped).expect("wrapped"), frame);

    let bare = serde_json::to_string(&frame).expect("bare");
    assert_eq!(ChartFrame::from_json_compat_str(&bare).expect("bare"), frame);

    let future = wrapped.replacen(
        &format!("\"schema_version\": {CHART_FRAME_JSON_SCHEMA_V1}"),
        "\"schema_version\": 2",
        1,
    );
    assert!(ChartFrame::from_json_compat_str(&future).is_err());
}

#[test]
fn oversized_wire_volumes_saturate_instead_of_overflowing() {
    let raw = r#"{
        "success": true,
        "data": {
            "records": [
                {"date": "2024-03-01", "open": 10, "high": 11, "low": 9, "close": 10.5, "volume": 1e30},
                {"date": "2024-03-02", "open": 10.5, "high": 12, "low": 10, "close": 11, "volume": 1e30}
            ]
        }
    }"#;
    let records = StockDataResponse::from_json_str(raw)
        .and_then(StockDataResponse::into_records)
        .expect("records");
    assert!(records.iter().all(|r| r.volume == u64::MAX));

    let pipeline = ChartPipeline::new(ChartPipelineConfig::default()).expect("pipeline");
    let frame = pipeline.prepare(&records, None);
    let stats = frame.statistics.expect("window statistics");
    assert_eq!(stats.volume.total, u64::MAX);
    assert_eq!(stats.volume.highest, u64::MAX);
}
