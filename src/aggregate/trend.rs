use crate::models::observation::Observation;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

pub const TREND_WINDOW_DAYS: i64 = 7;

/// Per-day summed counts over the trailing week: records dated on or after
/// `now - 7 days`, keyed by the formatted date, keys ascending.
///
/// Keys are "%Y-%m-%d", so the ascending string sort is also chronological.
pub fn trend_last_7_days(list: &[Observation], now: NaiveDate) -> Vec<(String, i64)> {
    let cutoff = now - Duration::days(TREND_WINDOW_DAYS);

    let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
    for obs in list {
        if obs.date >= cutoff {
            *buckets.entry(obs.date_str()).or_insert(0) += obs.count;
        }
    }

    buckets.into_iter().collect()
}
