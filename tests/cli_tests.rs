use predicates::str::contains;

mod common;
use common::{pw, setup_test_storage};

#[test]
fn test_init_creates_storage() {
    let storage = setup_test_storage("cli_init");

    pw().args(["--storage", &storage, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&storage).exists());
}

#[test]
fn test_dashboard_shows_seed_metrics() {
    let storage = setup_test_storage("cli_dashboard");

    pw().args(["--storage", &storage, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Total pests"))
        .stdout(contains("98"))
        .stdout(contains("9.8%"))
        .stdout(contains("Recent activity"));
}

#[test]
fn test_add_then_list_shows_the_record() {
    let storage = setup_test_storage("cli_add_list");

    pw().args([
        "--storage",
        &storage,
        "add",
        "thrips",
        "14",
        "Field C, Zone 2",
    ])
    .assert()
    .success()
    .stdout(contains("Recorded 14 thrips"));

    pw().args(["--storage", &storage, "list"])
        .assert()
        .success()
        .stdout(contains("Thrips"))
        .stdout(contains("Field C, Zone 2"));
}

#[test]
fn test_add_rejects_unknown_species() {
    let storage = setup_test_storage("cli_add_bad_species");

    pw().args(["--storage", &storage, "add", "locusts", "10"])
        .assert()
        .failure()
        .stderr(contains("Unknown species"));
}

#[test]
fn test_del_reports_removed_counts() {
    let storage = setup_test_storage("cli_del");

    pw().args(["--storage", &storage, "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed 1 record(s)"));

    // deleting the same id again is a no-op, not an error
    pw().args(["--storage", &storage, "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed 0 record(s)"));
}

#[test]
fn test_detect_records_and_reports() {
    let storage = setup_test_storage("cli_detect");

    pw().args(["--storage", &storage, "detect"])
        .assert()
        .success()
        .stdout(contains("Auto-detected:"));
}

#[test]
fn test_analysis_shows_top_pest() {
    let storage = setup_test_storage("cli_analysis");

    pw().args(["--storage", &storage, "analysis"])
        .assert()
        .success()
        .stdout(contains("Most common pest: Aphids (60 total)"))
        .stdout(contains("Total detections: 5"))
        .stdout(contains("Species distribution"));
}

#[test]
fn test_login_logout_whoami_flow() {
    let storage = setup_test_storage("cli_session");

    pw().args(["--storage", &storage, "login", "admin", "admin123"])
        .assert()
        .success()
        .stdout(contains("Welcome back, Administrator!"));

    pw().args(["--storage", &storage, "whoami"])
        .assert()
        .success()
        .stdout(contains("admin"));

    pw().args(["--storage", &storage, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    pw().args(["--storage", &storage, "whoami"])
        .assert()
        .success()
        .stdout(contains("Not logged in"));
}

#[test]
fn test_login_failure() {
    let storage = setup_test_storage("cli_login_bad");

    pw().args(["--storage", &storage, "login", "admin", "nope"])
        .assert()
        .failure()
        .stderr(contains("Invalid credentials"));
}

#[test]
fn test_signup_then_login() {
    let storage = setup_test_storage("cli_signup");

    pw().args([
        "--storage",
        &storage,
        "signup",
        "--name",
        "Erin Vale",
        "--username",
        "erin",
        "--email",
        "erin@example.com",
        "--password",
        "orchard7",
    ])
    .assert()
    .success()
    .stdout(contains("Account 'erin' created"));

    pw().args(["--storage", &storage, "login", "erin", "orchard7"])
        .assert()
        .success()
        .stdout(contains("Welcome back, Erin Vale!"));
}

#[test]
fn test_signup_duplicate_username_is_rejected() {
    let storage = setup_test_storage("cli_signup_dup");

    let signup_args = [
        "--storage",
        storage.as_str(),
        "signup",
        "--name",
        "Erin Vale",
        "--username",
        "erin",
        "--email",
        "erin@example.com",
        "--password",
        "orchard7",
    ];

    pw().args(signup_args).assert().success();

    pw().args(signup_args)
        .assert()
        .failure()
        .stderr(contains("already taken"));
}

#[test]
fn test_password_reset_unknown_username_fails() {
    let storage = setup_test_storage("cli_pw_reset");

    pw().args(["--storage", &storage, "password", "--reset", "ghost"])
        .assert()
        .failure()
        .stderr(contains("No account found"));
}

#[test]
fn test_ops_panel_and_toggles() {
    let storage = setup_test_storage("cli_ops");

    pw().args(["--storage", &storage, "ops"])
        .assert()
        .success()
        .stdout(contains("Field devices"))
        .stdout(contains("Detection"));

    pw().args(["--storage", &storage, "ops", "--detection", "on"])
        .assert()
        .success()
        .stdout(contains("Auto-detection started"))
        .stdout(contains("Online"));

    pw().args(["--storage", &storage, "ops", "--emergency-spray", "--yes"])
        .assert()
        .success()
        .stdout(contains("Emergency spray initiated!"));

    pw().args(["--storage", &storage, "ops", "--camera", "9"])
        .assert()
        .failure()
        .stderr(contains("No camera"));
}

#[test]
fn test_storage_info() {
    let storage = setup_test_storage("cli_storage_info");

    pw().args(["--storage", &storage, "add", "beetles", "3"])
        .assert()
        .success();

    pw().args(["--storage", &storage, "storage", "--info"])
        .assert()
        .success()
        .stdout(contains("Observations"))
        .stdout(contains("6 record(s)"));
}

#[test]
fn test_log_print_after_mutations() {
    let storage = setup_test_storage("cli_log");

    pw().args(["--storage", &storage, "add", "aphids", "4"])
        .assert()
        .success();

    pw().args(["--storage", &storage, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("add"));
}
