pub mod axis_label_format;
pub mod axis_ticks;
mod json_contract;
mod validation;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ChartKind, DisplayPoint, DurationWindow, ForecastPoint, HistoricalRecord, LinePoint,
    PriceDomain, PriceDomainTuning, SeriesStatistics, compute_price_domain_with_tuning,
    compute_statistics, filter_window, merge_prediction,
};
use crate::error::ChartResult;

pub use axis_label_format::{
    DateLabelFormat, format_full_date, format_month_year, format_short_date,
};
pub use axis_ticks::{
    TickCadence, TickDensityPolicy, TickPlan, TickPositions, plan_ticks, plan_ticks_with_policy,
};
pub use json_contract::{CHART_FRAME_JSON_SCHEMA_V1, ChartFrameJsonContractV1};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChartPipelineConfig {
    pub duration: DurationWindow,
    pub chart_kind: ChartKind,
    pub tick_policy: TickDensityPolicy,
    pub domain_tuning: PriceDomainTuning,
}

impl ChartPipelineConfig {
    #[must_use]
    pub fn new(duration: DurationWindow) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_chart_kind(mut self, chart_kind: ChartKind) -> Self {
        self.chart_kind = chart_kind;
        self
    }

    #[must_use]
    pub fn with_tick_policy(mut self, tick_policy: TickDensityPolicy) -> Self {
        self.tick_policy = tick_policy;
        self
    }

    #[must_use]
    pub fn with_domain_tuning(mut self, domain_tuning: PriceDomainTuning) -> Self {
        self.domain_tuning = domain_tuning;
        self
    }
}

/// Everything the rendering layer needs for one chart render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub duration: DurationWindow,
    pub chart_kind: ChartKind,
    pub series: Vec<DisplayPoint>,
    pub price_domain: PriceDomain,
    pub ticks: TickPlan,
    pub statistics: Option<SeriesStatistics>,
}

impl ChartFrame {
    #[must_use]
    pub fn tick_labels(&self) -> Vec<String> {
        self.ticks.labels()
    }

    #[must_use]
    pub fn historical_len(&self) -> usize {
        self.series.iter().filter(|point| !point.is_predicted).count()
    }

    #[must_use]
    pub fn predicted_len(&self) -> usize {
        self.series.iter().filter(|point| point.is_predicted).count()
    }

    /// Close-only projection used when the chart is in line mode.
    #[must_use]
    pub fn line_points(&self) -> Vec<LinePoint> {
        self.series.iter().map(LinePoint::from).collect()
    }
}

/// Validated, stateless chart data preparation pipeline.
///
/// Only configuration is held; every `prepare` call recomputes the frame from
/// its inputs, so callers can re-invoke it whenever records, duration or the
/// forecast change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPipeline {
    config: ChartPipelineConfig,
}

impl ChartPipeline {
    pub fn new(config: ChartPipelineConfig) -> ChartResult<Self> {
        let config = validation::validate_pipeline_config(config)?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> ChartPipelineConfig {
        self.config
    }

    #[must_use]
    pub fn duration(&self) -> DurationWindow {
        self.config.duration
    }

    pub fn set_duration(&mut self, duration: DurationWindow) {
        self.config.duration = duration;
    }

    #[must_use]
    pub fn chart_kind(&self) -> ChartKind {
        self.config.chart_kind
    }

    pub fn toggle_chart_kind(&mut self) -> ChartKind {
        self.config.chart_kind = self.config.chart_kind.toggled();
        self.config.chart_kind
    }

    /// Runs window selection, forecast merge, domain and tick planning.
    #[must_use]
    pub fn prepare(
        &self,
        records: &[HistoricalRecord],
        forecast: Option<&[ForecastPoint]>,
    ) -> ChartFrame {
        let duration = self.config.duration;
        let window = filter_window(records, duration);
        let statistics = compute_statistics(&window);
        let series = merge_prediction(&window, forecast);
        let price_domain = compute_price_domain_with_tuning(&series, self.config.domain_tuning);
        let ticks = plan_ticks_with_policy(&series, duration, self.config.tick_policy);

        debug!(
            records = records.len(),
            window = window.len(),
            series = series.len(),
            domain_min = price_domain.min,
            domain_max = price_domain.max,
            ticks = ticks.len(),
            "prepared chart frame"
        );

        ChartFrame {
            duration,
            chart_kind: self.config.chart_kind,
            series,
            price_domain,
            ticks,
            statistics,
        }
    }
}
