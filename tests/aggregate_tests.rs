use chrono::NaiveDate;
use pestwatch::aggregate::{charts, dashboard, species, trend};
use pestwatch::models::observation::Observation;
use pestwatch::models::species::Species;
use pestwatch::store::records::seed_observations;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn obs(id: i64, d: NaiveDate, sp: Species, count: i64) -> Observation {
    Observation::new(id, d, sp, count, "Field A, Zone 1")
}

#[test]
fn test_total_count_empty_list_is_zero() {
    assert_eq!(dashboard::total_count(&[]), 0);
}

#[test]
fn test_seed_scenario_totals() {
    let seed = seed_observations();
    assert_eq!(dashboard::total_count(&seed), 98);
    assert_eq!(dashboard::high_risk_count(&seed), 2); // the 25 and 35 entries
    assert_eq!(dashboard::density(&seed), "9.8%");
}

#[test]
fn test_density_empty_and_round_totals() {
    assert_eq!(dashboard::density(&[]), "0%");

    let d = date(2025, 12, 18);
    let list = vec![
        obs(1, d, Species::Aphids, 60),
        obs(2, d, Species::Beetles, 40),
    ];
    assert_eq!(dashboard::density(&list), "10.0%");
}

#[test]
fn test_high_risk_count_grows_with_new_alerts() {
    let d = date(2025, 12, 18);
    let mut list = vec![obs(1, d, Species::Aphids, 21)];
    assert_eq!(dashboard::high_risk_count(&list), 1);

    // at the threshold is not an alert
    list.push(obs(2, d, Species::Beetles, 20));
    assert_eq!(dashboard::high_risk_count(&list), 1);

    list.push(obs(3, d, Species::Thrips, 100));
    assert_eq!(dashboard::high_risk_count(&list), 2);
}

#[test]
fn test_recent_activity_is_first_n_reversed() {
    let d = date(2025, 12, 18);
    // newest-first list of 7 records
    let list: Vec<Observation> = (0..7)
        .map(|i| obs(70 - i * 10, d, Species::Aphids, 1))
        .collect();

    let recent = dashboard::recent_activity(&list, 5);

    // exactly positions [4,3,2,1,0] of the input, in that order
    let got: Vec<i64> = recent.iter().map(|o| o.id).collect();
    assert_eq!(got, vec![30, 40, 50, 60, 70]);
}

#[test]
fn test_recent_activity_shorter_than_limit() {
    let d = date(2025, 12, 18);
    let list = vec![obs(2, d, Species::Aphids, 1), obs(1, d, Species::Beetles, 2)];

    let recent = dashboard::recent_activity(&list, 5);
    let got: Vec<i64> = recent.iter().map(|o| o.id).collect();
    assert_eq!(got, vec![1, 2]);
}

#[test]
fn test_species_totals_first_seen_order() {
    let d = date(2025, 12, 18);
    let list = vec![
        obs(1, d, Species::Beetles, 5),
        obs(2, d, Species::Aphids, 10),
        obs(3, d, Species::Beetles, 7),
    ];

    let totals = species::species_totals(&list);
    assert_eq!(
        totals,
        vec![(Species::Beetles, 12), (Species::Aphids, 10)]
    );
}

#[test]
fn test_top_species_tie_goes_to_first_seen() {
    let d = date(2025, 12, 18);
    let list = vec![
        obs(1, d, Species::Whiteflies, 15),
        obs(2, d, Species::Aphids, 15),
    ];

    assert_eq!(
        species::top_species(&list),
        Some((Species::Whiteflies, 15))
    );
}

#[test]
fn test_top_species_empty_list() {
    assert_eq!(species::top_species(&[]), None);
}

#[test]
fn test_trend_window_and_ordering() {
    let now = date(2025, 12, 20);
    let list = vec![
        obs(4, date(2025, 12, 19), Species::Aphids, 10),
        obs(3, date(2025, 12, 13), Species::Beetles, 7), // exactly 7 days back: included
        obs(2, date(2025, 12, 19), Species::Thrips, 5),
        obs(1, date(2025, 12, 10), Species::Aphids, 99), // too old: excluded
    ];

    let buckets = trend::trend_last_7_days(&list, now);
    assert_eq!(
        buckets,
        vec![
            ("2025-12-13".to_string(), 7),
            ("2025-12-19".to_string(), 15),
        ]
    );
}

#[test]
fn test_chart_series_match_their_aggregates() {
    let seed = seed_observations();

    let doughnut = charts::species_series(&seed);
    assert_eq!(
        doughnut.labels,
        vec!["aphids", "caterpillars", "beetles", "whiteflies"]
    );
    assert_eq!(doughnut.values, vec![60, 12, 8, 18]);

    let line = charts::trend_series(&seed, date(2025, 12, 20));
    assert_eq!(
        line.labels,
        vec!["2025-12-16", "2025-12-17", "2025-12-18"]
    );
    assert_eq!(line.values, vec![18, 43, 37]);
}
