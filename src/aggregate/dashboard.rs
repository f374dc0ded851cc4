use crate::models::observation::Observation;

/// A record counting more pests than this raises an alert.
pub const HIGH_RISK_THRESHOLD: i64 = 20;

/// Sum of all counts; 0 for an empty list.
pub fn total_count(list: &[Observation]) -> i64 {
    list.iter().map(|o| o.count).sum()
}

/// Number of records over the alert threshold.
pub fn high_risk_count(list: &[Observation]) -> usize {
    list.iter()
        .filter(|o| o.count > HIGH_RISK_THRESHOLD)
        .count()
}

/// Average density as a percentage string with one decimal: (total/100)*10.
/// A zero total prints as a plain "0%" for a clean dashboard tile.
pub fn density(list: &[Observation]) -> String {
    let total = total_count(list);
    if total > 0 {
        format!("{:.1}%", (total as f64 / 100.0) * 10.0)
    } else {
        "0%".to_string()
    }
}

/// The `limit` most recently added records, oldest-of-the-recent first.
/// The list is newest-first, so this is exactly: take the first `limit`,
/// then reverse.
pub fn recent_activity(list: &[Observation], limit: usize) -> Vec<Observation> {
    let mut recent: Vec<Observation> = list.iter().take(limit).cloned().collect();
    recent.reverse();
    recent
}
