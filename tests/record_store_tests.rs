use pestwatch::aggregate::dashboard;
use pestwatch::errors::AppError;
use pestwatch::models::species::Species;
use pestwatch::storage::blobs;
use pestwatch::store::records;
use regex::Regex;

mod common;
use common::open_test_storage;

#[test]
fn test_load_substitutes_seed_when_nothing_saved() {
    let storage = open_test_storage("records_seed");

    let list = records::load(&storage).expect("load");
    assert_eq!(list.len(), 5);
    assert_eq!(list[0].id, 1);
    assert_eq!(dashboard::total_count(&list), 98);

    // a plain load must NOT write the seed back
    assert!(!blobs::exists(&storage, blobs::OBSERVATIONS).expect("exists"));
}

#[test]
fn test_add_prepends_and_survives_reload() {
    let storage = open_test_storage("records_add");

    let added = records::add(&storage, Species::Thrips, 9, "Field C, Zone 4").expect("add");
    assert_eq!(added.id, 6); // one past the highest seed id
    assert_eq!(added.count, 9);

    let list = records::load(&storage).expect("load");
    assert_eq!(list.len(), 6);
    assert_eq!(list[0], added);
}

#[test]
fn test_add_rejects_negative_count() {
    let storage = open_test_storage("records_negative");

    let err = records::add(&storage, Species::Aphids, -1, "Field A").unwrap_err();
    assert!(err.to_string().contains("Invalid pest count"));

    // nothing was persisted
    assert!(!blobs::exists(&storage, blobs::OBSERVATIONS).expect("exists"));
}

#[test]
fn test_delete_is_idempotent_and_persists() {
    let storage = open_test_storage("records_delete");

    records::delete(&storage, 3).expect("delete");
    let once = records::load(&storage).expect("load");
    assert_eq!(once.len(), 4);
    assert!(once.iter().all(|o| o.id != 3));

    // even the no-op delete persisted the list
    assert!(blobs::exists(&storage, blobs::OBSERVATIONS).expect("exists"));

    records::delete(&storage, 3).expect("delete again");
    let twice = records::load(&storage).expect("load");
    assert_eq!(once, twice);
}

#[test]
fn test_delete_unknown_id_is_silent() {
    let storage = open_test_storage("records_delete_unknown");

    records::delete(&storage, 999).expect("delete unknown");
    let list = records::load(&storage).expect("load");
    assert_eq!(list.len(), 5);
}

#[test]
fn test_simulated_detection_stays_in_bounds() {
    let storage = open_test_storage("records_detect");
    let location_re = Regex::new(r"^Field [ABC], Zone [1-4]$").expect("regex");

    for _ in 0..50 {
        let obs = records::simulate_detection(&storage).expect("detect");
        assert!((5..=34).contains(&obs.count), "count {} out of range", obs.count);
        assert!(Species::ALL.contains(&obs.species));
        assert!(
            location_re.is_match(&obs.location),
            "unexpected location '{}'",
            obs.location
        );
    }

    let list = records::load(&storage).expect("load");
    assert_eq!(list.len(), 55); // 5 seed + 50 detections
}

#[test]
fn test_malformed_blob_fails_closed() {
    let storage = open_test_storage("records_corrupt");

    storage
        .conn
        .execute(
            "INSERT INTO kv (key, value, updated_at) VALUES ('observations', 'not json', '')",
            [],
        )
        .expect("inject garbage");

    // a present-but-unparsable blob is an error, never a silent reset
    let err = records::load(&storage).unwrap_err();
    assert!(matches!(err, AppError::Corrupt(_, _)));
}

#[test]
fn test_ids_stay_unique_after_deletes() {
    let storage = open_test_storage("records_ids");

    records::delete(&storage, 1).expect("delete");
    let a = records::add(&storage, Species::Beetles, 2, "Field B").expect("add");
    let b = records::add(&storage, Species::Beetles, 3, "Field B").expect("add");
    assert_ne!(a.id, b.id);

    let list = records::load(&storage).expect("load");
    let mut ids: Vec<i64> = list.iter().map(|o| o.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), list.len());
}
