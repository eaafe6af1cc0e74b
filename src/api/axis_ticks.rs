use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{DisplayPoint, DurationWindow};

use super::axis_label_format::DateLabelFormat;

pub const SHORT_TICK_MAX_DURATION: u32 = 30;
pub const MEDIUM_TICK_MAX_DURATION: u32 = 90;
pub const MONTHLY_TICK_MAX_DURATION: u32 = 180;
pub const SHORT_TICK_STRIDE_DIVISOR: usize = 4;
pub const MEDIUM_TICK_STRIDE_DIVISOR: usize = 6;
pub const LONG_TICK_STRIDE_DIVISOR: usize = 8;

/// Duration thresholds and stride divisors used to pick time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickDensityPolicy {
    pub short_max_duration: u32,
    pub medium_max_duration: u32,
    pub monthly_max_duration: u32,
    pub short_stride_divisor: usize,
    pub medium_stride_divisor: usize,
    pub long_stride_divisor: usize,
}

impl Default for TickDensityPolicy {
    fn default() -> Self {
        Self {
            short_max_duration: SHORT_TICK_MAX_DURATION,
            medium_max_duration: MEDIUM_TICK_MAX_DURATION,
            monthly_max_duration: MONTHLY_TICK_MAX_DURATION,
            short_stride_divisor: SHORT_TICK_STRIDE_DIVISOR,
            medium_stride_divisor: MEDIUM_TICK_STRIDE_DIVISOR,
            long_stride_divisor: LONG_TICK_STRIDE_DIVISOR,
        }
    }
}

/// Tick selection rule resolved from the duration bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickCadence {
    /// Every `len / divisor`-th point, at least every point.
    EvenStride { divisor: usize },
    /// First point of each new (year, month).
    MonthBoundary,
}

impl TickDensityPolicy {
    #[must_use]
    pub fn resolve(self, duration: DurationWindow) -> (TickCadence, DateLabelFormat) {
        let records = duration.records();
        if records <= self.short_max_duration {
            (
                TickCadence::EvenStride {
                    divisor: self.short_stride_divisor,
                },
                DateLabelFormat::ShortDate,
            )
        } else if records <= self.medium_max_duration {
            (
                TickCadence::EvenStride {
                    divisor: self.medium_stride_divisor,
                },
                DateLabelFormat::ShortDate,
            )
        } else if records <= self.monthly_max_duration {
            (TickCadence::MonthBoundary, DateLabelFormat::MonthYear)
        } else {
            (
                TickCadence::EvenStride {
                    divisor: self.long_stride_divisor,
                },
                DateLabelFormat::MonthYear,
            )
        }
    }
}

pub type TickPositions = SmallVec<[DateTime<Utc>; 16]>;

/// Time-axis tick positions plus the label format used to render them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub positions: TickPositions,
    pub format: DateLabelFormat,
}

impl TickPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn formatter(&self) -> fn(Option<DateTime<Utc>>) -> String {
        self.format.formatter()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.positions
            .iter()
            .map(|position| self.format.format(Some(*position)))
            .collect()
    }
}

/// Plans ticks with the default density policy.
#[must_use]
pub fn plan_ticks(series: &[DisplayPoint], duration: DurationWindow) -> TickPlan {
    plan_ticks_with_policy(series, duration, TickDensityPolicy::default())
}

/// Picks a sparse, ordered subset of series timestamps for the time axis.
///
/// The bucket is chosen from `duration`, not from the series length. The final
/// timestamp is always present exactly once and always last, even when the
/// series repeats it.
#[must_use]
pub fn plan_ticks_with_policy(
    series: &[DisplayPoint],
    duration: DurationWindow,
    policy: TickDensityPolicy,
) -> TickPlan {
    let (cadence, format) = policy.resolve(duration);
    let Some(last) = series.last() else {
        return TickPlan {
            positions: TickPositions::new(),
            format,
        };
    };

    let mut positions = match cadence {
        TickCadence::EvenStride { divisor } => even_stride_ticks(series, divisor),
        TickCadence::MonthBoundary => month_boundary_ticks(series),
    };
    // Duplicate timestamps can put the final one on the stride more than once.
    positions.retain(|position| *position != last.timestamp);
    positions.push(last.timestamp);

    trace!(
        points = series.len(),
        duration = duration.records(),
        ?cadence,
        ticks = positions.len(),
        "planned time-axis ticks"
    );
    TickPlan { positions, format }
}

fn even_stride_ticks(series: &[DisplayPoint], divisor: usize) -> TickPositions {
    let stride = (series.len() / divisor.max(1)).max(1);
    series
        .iter()
        .step_by(stride)
        .map(|point| point.timestamp)
        .collect()
}

fn month_boundary_ticks(series: &[DisplayPoint]) -> TickPositions {
    let mut positions = TickPositions::new();
    let mut current: Option<(i32, u32)> = None;
    for point in series {
        let key = (point.timestamp.year(), point.timestamp.month());
        if current != Some(key) {
            positions.push(point.timestamp);
            current = Some(key);
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{TickCadence, TickDensityPolicy, plan_ticks};
    use crate::api::axis_label_format::DateLabelFormat;
    use crate::core::{DisplayPoint, DurationWindow, HistoricalRecord};

    fn series(len: i64) -> Vec<DisplayPoint> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..len)
            .map(|day| {
                let record =
                    HistoricalRecord::new(base + Duration::days(day), 1.0, 1.0, 1.0, 1.0, 0);
                DisplayPoint::from(&record)
            })
            .collect()
    }

    #[test]
    fn bucket_boundaries_are_inclusive() {
        let policy = TickDensityPolicy::default();
        assert_eq!(
            policy.resolve(DurationWindow::new(30)),
            (
                TickCadence::EvenStride { divisor: 4 },
                DateLabelFormat::ShortDate
            )
        );
        assert_eq!(
            policy.resolve(DurationWindow::new(31)),
            (
                TickCadence::EvenStride { divisor: 6 },
                DateLabelFormat::ShortDate
            )
        );
        assert_eq!(
            policy.resolve(DurationWindow::new(180)),
            (TickCadence::MonthBoundary, DateLabelFormat::MonthYear)
        );
        assert_eq!(
            policy.resolve(DurationWindow::new(181)),
            (
                TickCadence::EvenStride { divisor: 8 },
                DateLabelFormat::MonthYear
            )
        );
    }

    #[test]
    fn short_series_uses_minimum_stride_of_one() {
        let points = series(3);
        let plan = plan_ticks(&points, DurationWindow::ONE_MONTH);
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn repeated_final_timestamp_is_ticked_once() {
        let mut points = series(2);
        points.push(points[1]);

        let plan = plan_ticks(&points, DurationWindow::ONE_MONTH);
        assert_eq!(
            plan.positions.as_slice(),
            &[points[0].timestamp, points[1].timestamp]
        );
    }

    #[test]
    fn empty_series_yields_empty_plan() {
        let plan = plan_ticks(&[], DurationWindow::SIX_MONTHS);
        assert!(plan.is_empty());
        assert_eq!(plan.format, DateLabelFormat::MonthYear);
        assert!(plan.labels().is_empty());
    }
}
