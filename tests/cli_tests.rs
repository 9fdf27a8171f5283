use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{PASSWORD, hs, init_logged_in, setup_test_db, test_home};

#[test]
fn test_views_require_login() {
    let name = "cli_gate";
    let db_path = setup_test_db(name);

    hs(name)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    for view in ["dashboard", "assets", "patients", "alerts", "history", "timelogs"] {
        hs(name)
            .args(["--db", &db_path, view])
            .assert()
            .failure()
            .stderr(contains("Not logged in"));
    }

    hs(name)
        .args(["--db", &db_path, "locate", "A001"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_wrong_password_keeps_dashboard_locked() {
    let name = "cli_wrong_password";
    let db_path = setup_test_db(name);

    hs(name)
        .args(["--db", &db_path, "login", "--password", "guess"])
        .assert()
        .failure()
        .stderr(contains("Wrong password"));

    hs(name)
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Logged out"));
}

#[test]
fn test_password_can_be_typed_at_the_prompt() {
    let name = "cli_prompt";
    let db_path = setup_test_db(name);

    hs(name)
        .args(["--db", &db_path, "login"])
        .write_stdin(format!("{PASSWORD}\n"))
        .assert()
        .success()
        .stdout(contains("Logged in"));
}

#[test]
fn test_login_persists_until_logout() {
    let name = "cli_login_logout";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Logged in"));

    hs(name)
        .args(["--db", &db_path, "assets"])
        .assert()
        .success();

    hs(name)
        .args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    hs(name)
        .args(["--db", &db_path, "assets"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    // second logout is a no-op
    hs(name)
        .args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Not logged in"));
}

#[test]
fn test_asset_list_filters() {
    let name = "cli_assets";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "assets", "--status", "alert"])
        .assert()
        .success()
        .stdout(contains("Ventilator #3"))
        .stdout(contains("Showing 1 of 9 assets"));

    hs(name)
        .args(["--db", &db_path, "assets", "-s", "wheel", "--floor", "all"])
        .assert()
        .success()
        .stdout(contains("Wheelchair #1").and(contains("Wheelchair #2")))
        .stdout(contains("ECG Machine").not());

    hs(name)
        .args(["--db", &db_path, "assets", "--type", "Medical Equipment", "-f", "02"])
        .assert()
        .success()
        .stdout(contains("Patient Monitor"))
        .stdout(contains("Showing 1 of 9 assets"));
}

#[test]
fn test_search_all_lists_everything() {
    let name = "cli_search_all";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "assets", "--search", "all", "--status", "all"])
        .assert()
        .success()
        .stdout(contains("Showing 9 of 9 assets"));
}

#[test]
fn test_unknown_filter_value_is_reported() {
    let name = "cli_bad_filter";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "assets", "--status", "broken"])
        .assert()
        .failure()
        .stderr(contains("Invalid value 'broken' for asset status"));

    hs(name)
        .args(["--db", &db_path, "patients", "--floor", "ground"])
        .assert()
        .failure()
        .stderr(contains("Invalid floor"));

    hs(name)
        .args(["--db", &db_path, "history", "--date", "08/05/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_critical_patients_on_floor_one() {
    let name = "cli_patients";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "patients", "--status", "CRITICAL", "--floor", "1"])
        .assert()
        .success()
        .stdout(contains("P002").and(contains("P008")))
        .stdout(contains("P001").not())
        .stdout(contains("Showing 2 of 8 patients"));
}

#[test]
fn test_empty_result_shows_empty_state() {
    let name = "cli_empty";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "assets", "--search", "no-such-thing"])
        .assert()
        .success()
        .stdout(contains("No assets found matching your filters."));
}

#[test]
fn test_alert_cards() {
    let name = "cli_alerts";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "alerts", "--type", "geofence"])
        .assert()
        .success()
        .stdout(contains("Asset Left Geofence"))
        .stdout(contains("Patient P008 has left designated area"))
        .stdout(contains("Showing 2 of 6 alerts"));
}

#[test]
fn test_history_and_time_logs_by_date() {
    let name = "cli_dated";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "history", "--date", "2025-05-08"])
        .assert()
        .success()
        .stdout(contains("Showing 7 of 7 history entries"))
        .stdout(contains("Room 101 → Room 104"));

    hs(name)
        .args(["--db", &db_path, "history", "--date", "2025-05-09"])
        .assert()
        .success()
        .stdout(contains("No history entries found"));

    hs(name)
        .args([
            "--db",
            &db_path,
            "timelogs",
            "--department",
            "medical",
            "--date",
            "2025-05-08",
            "--basis",
            "record",
        ])
        .assert()
        .success()
        .stdout(contains("Showing 4 of 8 time logs"));
}

#[test]
fn test_dashboard() {
    let name = "cli_dashboard";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Floor 1 of 6"))
        .stdout(contains("Ventilator #3"))
        .stdout(contains("Recent patients"));

    hs(name)
        .args(["--db", &db_path, "dashboard", "--floor", "2", "--map", "--tab", "assets"])
        .assert()
        .success()
        .stdout(contains("Floor 2 of 6"))
        .stdout(contains("A = asset"))
        .stdout(contains("Recent patients").not());

    hs(name)
        .args(["--db", &db_path, "dashboard", "--floor", "4"])
        .assert()
        .success()
        .stdout(contains("No assets or patients on this floor."));

    hs(name)
        .args(["--db", &db_path, "dashboard", "--floor", "9"])
        .assert()
        .failure()
        .stderr(contains("Invalid floor"));
}

#[test]
fn test_locate() {
    let name = "cli_locate";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "locate", "P004"])
        .assert()
        .success()
        .stdout(contains("Dewi Anggraeni"))
        .stdout(contains("x=77%, y=44%"));

    hs(name)
        .args(["--db", &db_path, "locate", "A001"])
        .assert()
        .success()
        .stdout(contains("x=44%, y=77%"));

    hs(name)
        .args(["--db", &db_path, "locate", "Z404"])
        .assert()
        .failure()
        .stderr(contains("No asset or patient with id Z404"));
}

#[test]
fn test_internal_log_records_sessions() {
    let name = "cli_log";
    let db_path = setup_test_db(name);
    init_logged_in(name, &db_path);

    hs(name)
        .args(["--db", &db_path, "login", "--password", "nope"])
        .assert()
        .success()
        .stdout(contains("Already logged in"));

    hs(name)
        .args(["--db", &db_path, "logout"])
        .assert()
        .success();

    hs(name)
        .args(["--db", &db_path, "login", "--password", "nope"])
        .assert()
        .failure();

    hs(name)
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("Dashboard unlocked"))
        .stdout(contains("Dashboard locked"))
        .stdout(contains("Wrong access password"));
}

#[test]
fn test_config_check_and_print() {
    let name = "cli_config";

    hs(name)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));

    hs(name)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("total_floors: 6"))
        .stdout(contains("date_basis: record"));
}

#[test]
fn test_dataset_file_replaces_builtin_records() {
    let name = "cli_dataset";
    let db_path = setup_test_db(name);

    let home = std::env::temp_dir().join(format!("hospitrack_home_{name}"));
    let conf_dir = home.join(".hospitrack");
    std::fs::create_dir_all(&conf_dir).unwrap();
    std::fs::write(
        conf_dir.join("ward.yaml"),
        "assets:\n  - id: B100\n    name: Bed Lift\n    type: Mobility Equipment\n    \
         location: Ward 3\n    floor: 3\n    status: alert\n    last_updated: now\n    \
         pic: Technician Budi\n",
    )
    .unwrap();
    std::fs::write(conf_dir.join("hospitrack.conf"), "dataset: ward.yaml\n").unwrap();

    hs(name)
        .args(["config", "--check"])
        .assert()
        .success();

    hs(name)
        .args(["--db", &db_path, "login", "--password", PASSWORD])
        .assert()
        .success();

    hs(name)
        .args(["--db", &db_path, "assets"])
        .assert()
        .success()
        .stdout(contains("Bed Lift"))
        .stdout(contains("Showing 1 of 1 assets"));

    hs(name)
        .args(["--db", &db_path, "dashboard", "--floor", "3"])
        .assert()
        .success()
        .stdout(contains("emergency"));

    hs(name)
        .args(["--db", &db_path, "patients"])
        .assert()
        .success()
        .stdout(contains("No patients found matching your filters."));
}

#[test]
fn test_relative_db_lives_in_config_dir() {
    let name = "cli_relative_db";
    let rel = "cli_relative_db.sqlite";

    let cwd = std::env::temp_dir().join(format!("hospitrack_cwd_{name}"));
    std::fs::create_dir_all(&cwd).unwrap();
    let in_cwd = cwd.join(rel);
    let in_conf = test_home(name).join(".hospitrack").join(rel);
    std::fs::remove_file(&in_cwd).ok();
    std::fs::remove_file(&in_conf).ok();

    hs(name)
        .current_dir(&cwd)
        .args(["--db", rel, "--test", "init"])
        .assert()
        .success();

    hs(name)
        .current_dir(&cwd)
        .args(["--db", rel, "login", "--password", PASSWORD])
        .assert()
        .success();

    hs(name)
        .current_dir(&cwd)
        .args(["--db", rel, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("State database initialized"))
        .stdout(contains("Dashboard unlocked"));

    assert!(in_conf.exists());
    assert!(!in_cwd.exists());
}
