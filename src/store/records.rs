//! The observation list: load/save/add/delete plus simulated auto-detection.
//!
//! The list is kept newest-first (display convention) and persisted wholesale
//! under the `observations` blob on every mutation. A missing blob means the
//! fixed seed set; the seed is only written back once a real mutation happens.

use crate::errors::{AppError, AppResult};
use crate::models::observation::Observation;
use crate::models::species::Species;
use crate::storage::blobs::{self, Loaded};
use crate::storage::log::ttlog;
use crate::storage::pool::Storage;
use crate::utils::date;
use chrono::NaiveDate;
use rand::Rng;

/// Example records shown on a fresh install, before anything is saved.
pub fn seed_observations() -> Vec<Observation> {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    vec![
        Observation::new(1, d(2025, 12, 18), Species::Aphids, 25, "Field A, Zone 1"),
        Observation::new(
            2,
            d(2025, 12, 18),
            Species::Caterpillars,
            12,
            "Field B, Zone 2",
        ),
        Observation::new(3, d(2025, 12, 17), Species::Beetles, 8, "Field A, Zone 3"),
        Observation::new(4, d(2025, 12, 17), Species::Aphids, 35, "Field B, Zone 1"),
        Observation::new(
            5,
            d(2025, 12, 16),
            Species::Whiteflies,
            18,
            "Field A, Zone 2",
        ),
    ]
}

/// Load the current observation list. Never fails on absence: when the blob
/// does not exist yet the seed set is substituted, explicitly, right here.
pub fn load(storage: &Storage) -> AppResult<Vec<Observation>> {
    let saved: Loaded<Vec<Observation>> = blobs::read(storage, blobs::OBSERVATIONS)?;
    Ok(saved.unwrap_or_else(seed_observations))
}

pub fn save(storage: &Storage, list: &[Observation]) -> AppResult<()> {
    blobs::write(storage, blobs::OBSERVATIONS, &list)
}

/// Fresh id for a new record: one past the highest id in the list.
/// Monotonic under the single-writer model.
fn next_id(list: &[Observation]) -> i64 {
    list.iter().map(|o| o.id).max().unwrap_or(0) + 1
}

/// Record a new observation dated today and prepend it to the list.
pub fn add(storage: &Storage, species: Species, count: i64, location: &str) -> AppResult<Observation> {
    if count < 0 {
        return Err(AppError::InvalidCount(count));
    }

    let mut list = load(storage)?;
    let obs = Observation::new(next_id(&list), date::today(), species, count, location);

    list.insert(0, obs.clone());
    save(storage, &list)?;

    let _ = ttlog(
        &storage.conn,
        "add",
        species.as_str(),
        &format!("Recorded {} {} in {}", count, species, location),
    );

    Ok(obs)
}

/// Remove the record with the given id. Unknown ids are a silent no-op;
/// the list is persisted either way.
pub fn delete(storage: &Storage, id: i64) -> AppResult<()> {
    let mut list = load(storage)?;
    list.retain(|o| o.id != id);
    save(storage, &list)?;

    let _ = ttlog(
        &storage.conn,
        "del",
        &id.to_string(),
        &format!("Deleted observation {}", id),
    );

    Ok(())
}

/// Simulated auto-detection: a random species, a count between 5 and 34 and
/// a random field/zone. Returns the generated record so the caller can
/// report what was "detected".
pub fn simulate_detection(storage: &Storage) -> AppResult<Observation> {
    let mut rng = rand::rng();

    let species = Species::ALL[rng.random_range(0..Species::ALL.len())];
    let count: i64 = rng.random_range(5..35);
    let field = ["A", "B", "C"][rng.random_range(0..3)];
    let zone = rng.random_range(1..5);
    let location = format!("Field {}, Zone {}", field, zone);

    add(storage, species, count, &location)
}
