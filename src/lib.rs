//! forecast-chart: chart data preparation for stock price history.
//!
//! Turns a raw, possibly unordered set of OHLCV records and an optional
//! forecast series into a bounded display window, a merged display series,
//! a padded price-axis domain and a duration-adaptive time-axis tick plan.
//! Every step is a pure function over immutable values.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;
pub mod wire;

pub use api::{ChartFrame, ChartPipeline, ChartPipelineConfig};
pub use error::{ChartError, ChartResult};
