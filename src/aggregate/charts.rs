//! Chart-ready series. The crate draws nothing: these label/value pairs are
//! what the chart widgets (doughnut for species, line for the weekly trend)
//! consume, and what the `analysis` command prints as tables.

use crate::aggregate::{species, trend};
use crate::models::observation::Observation;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Doughnut chart: one slice per species, sized by its summed count.
pub fn species_series(list: &[Observation]) -> ChartSeries {
    let totals = species::species_totals(list);
    ChartSeries {
        labels: totals.iter().map(|(s, _)| s.to_string()).collect(),
        values: totals.iter().map(|(_, n)| *n).collect(),
    }
}

/// Line chart: daily totals over the trailing week, dates ascending.
pub fn trend_series(list: &[Observation], now: NaiveDate) -> ChartSeries {
    let buckets = trend::trend_last_7_days(list, now);
    ChartSeries {
        labels: buckets.iter().map(|(d, _)| d.clone()).collect(),
        values: buckets.iter().map(|(_, n)| *n).collect(),
    }
}
