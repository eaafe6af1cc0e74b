pub mod prediction;
pub mod price_domain;
pub mod primitives;
pub mod statistics;
pub mod symbol;
pub mod types;
pub mod windowing;

pub use prediction::merge_prediction;
pub use price_domain::{PriceDomainTuning, compute_price_domain, compute_price_domain_with_tuning};
pub use statistics::{
    PerformanceStatistics, PriceStatistics, SeriesStatistics, VolumeStatistics,
    compute_statistics,
};
pub use symbol::{Market, format_symbol, infer_market};
pub use types::{
    ChartKind, DisplayPoint, DurationPreset, DurationWindow, ForecastPoint, HistoricalRecord,
    LinePoint, PriceDomain,
};
pub use windowing::filter_window;
