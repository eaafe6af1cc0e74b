use serde::{Deserialize, Serialize};

use crate::core::HistoricalRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceStatistics {
    pub open: f64,
    pub current: f64,
    pub highest: f64,
    pub lowest: f64,
    pub change_value: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeStatistics {
    pub average: u64,
    pub highest: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStatistics {
    pub positive_days: usize,
    pub negative_days: usize,
    /// Share of positive close-to-close moves, in percent.
    pub positive_ratio: f64,
    /// Mean close-to-close move, in percent.
    pub avg_daily_change: f64,
}

/// Summary figures shown next to the chart for the selected window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub period_records: usize,
    pub current_price: f64,
    pub opening_price: f64,
    pub price: PriceStatistics,
    pub volume: VolumeStatistics,
    pub performance: PerformanceStatistics,
}

/// Summarizes a chronological window. Returns `None` for an empty window.
///
/// `current_price` and `opening_price` come from the most recent record, so the
/// change figures describe that record's intraday move.
#[must_use]
pub fn compute_statistics(window: &[HistoricalRecord]) -> Option<SeriesStatistics> {
    let latest = window.last()?;

    let highest = window
        .iter()
        .map(|record| record.high)
        .fold(f64::NEG_INFINITY, f64::max);
    let lowest = window
        .iter()
        .map(|record| record.low)
        .fold(f64::INFINITY, f64::min);
    let change_value = latest.close - latest.open;
    let change_percent = if latest.open != 0.0 {
        round_to(change_value / latest.open * 100.0, 2)
    } else {
        0.0
    };

    // Coerced wire volumes can sit at u64::MAX.
    let total_volume = window
        .iter()
        .map(|record| record.volume)
        .fold(0u64, u64::saturating_add);
    let highest_volume = window.iter().map(|record| record.volume).max().unwrap_or(0);

    let daily_changes: Vec<f64> = window
        .windows(2)
        .map(|pair| {
            let previous = pair[0].close;
            if previous != 0.0 {
                (pair[1].close - previous) / previous * 100.0
            } else {
                0.0
            }
        })
        .collect();
    let positive_days = daily_changes.iter().filter(|change| **change > 0.0).count();
    let negative_days = daily_changes.iter().filter(|change| **change < 0.0).count();
    let (positive_ratio, avg_daily_change) = if daily_changes.is_empty() {
        (0.0, 0.0)
    } else {
        let count = daily_changes.len() as f64;
        (
            round_to(positive_days as f64 / count * 100.0, 1),
            round_to(daily_changes.iter().sum::<f64>() / count, 2),
        )
    };

    Some(SeriesStatistics {
        period_records: window.len(),
        current_price: latest.close,
        opening_price: latest.open,
        price: PriceStatistics {
            open: latest.open,
            current: latest.close,
            highest,
            lowest,
            change_value: round_to(change_value, 2),
            change_percent,
        },
        volume: VolumeStatistics {
            average: total_volume / window.len() as u64,
            highest: highest_volume,
            total: total_volume,
        },
        performance: PerformanceStatistics {
            positive_days,
            negative_days,
            positive_ratio,
            avg_daily_change,
        },
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
