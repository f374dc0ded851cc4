use super::species::Species;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded pest-count event for a species at a location/date.
/// Observations are created by manual entry or simulated detection and
/// deleted by id; they are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: i64,
    pub date: NaiveDate, // serialized "YYYY-MM-DD"
    pub species: Species,
    pub count: i64, // invariant: count >= 0, no upper bound
    pub location: String,
}

impl Observation {
    pub fn new(id: i64, date: NaiveDate, species: Species, count: i64, location: &str) -> Self {
        Self {
            id,
            date,
            species,
            count,
            location: location.to_string(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
