use std::cmp::Ordering;

#[cfg(feature = "parallel-window")]
use rayon::prelude::*;
use tracing::trace;

use crate::core::{DurationWindow, HistoricalRecord};

/// Keeps the `duration` most recent records and returns them oldest first.
///
/// Input order is irrelevant: records are ranked newest first, truncated, then
/// re-sorted ascending. Duplicate timestamps are kept as distinct records.
#[must_use]
pub fn filter_window(records: &[HistoricalRecord], duration: DurationWindow) -> Vec<HistoricalRecord> {
    if records.is_empty() || duration.is_empty() {
        return Vec::new();
    }

    let mut ranked = records.to_vec();
    sort_records_by(&mut ranked, |left, right| right.timestamp.cmp(&left.timestamp));
    ranked.truncate(duration.len());
    sort_records_by(&mut ranked, |left, right| left.timestamp.cmp(&right.timestamp));

    trace!(
        available = records.len(),
        duration = duration.records(),
        kept = ranked.len(),
        "filtered record window"
    );
    ranked
}

fn sort_records_by<F>(records: &mut [HistoricalRecord], compare: F)
where
    F: Fn(&HistoricalRecord, &HistoricalRecord) -> Ordering + Sync,
{
    // Stable in both paths so duplicate timestamps keep their relative order.
    #[cfg(feature = "parallel-window")]
    {
        records.par_sort_by(compare);
    }

    #[cfg(not(feature = "parallel-window"))]
    {
        records.sort_by(compare);
    }
}
