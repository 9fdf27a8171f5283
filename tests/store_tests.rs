use hospitrack::db::log::{audit, load_all};
use hospitrack::db::migrate::run_pending_migrations;
use hospitrack::db::pool::DbPool;
use hospitrack::errors::AppError;
use hospitrack::store::RecordStore;
use hospitrack::store::validate::validate;

const DATASET: &str = r#"
assets:
  - id: B100
    name: Bed Lift
    type: Mobility Equipment
    location: Ward 3
    floor: 3
    status: maintenance
    last_updated: 1 day ago
    pic: Technician Budi
patients:
  - id: Q200
    name: Rina Kusuma
    room: Room 301
    floor: 3
    status: emergency
    type: inpatient
    last_updated: now
    assigned_to: Dr. Ahmad
time_logs:
  - id: T1
    employee_id: E010
    employee_name: Porter Joko
    department: Support
    activity: check-in
    location: Loading Bay
    timestamp: "2025-06-01T06:00:00+07:00"
"#;

#[test]
fn test_builtin_dataset_is_valid() {
    let store = RecordStore::builtin();
    validate(&store, 6).unwrap();

    assert_eq!(store.assets.len(), 9);
    assert_eq!(store.patients.len(), 8);
    assert_eq!(store.alerts.len(), 6);
    assert_eq!(store.history.len(), 7);
    assert_eq!(store.time_logs.len(), 8);
}

#[test]
fn test_yaml_dataset_loads() {
    let store = RecordStore::from_yaml_str(DATASET, 6).unwrap();

    assert_eq!(store.assets[0].kind, "Mobility Equipment");
    assert!(store.patients[0].is_emergency());
    assert!(store.alerts.is_empty());
    assert!(store.find_patient("Q200").is_some());
    assert!(store.find_asset("Q200").is_none());
}

#[test]
fn test_yaml_dataset_rejects_unknown_status() {
    let bad = DATASET.replace("status: maintenance", "status: broken");
    assert!(matches!(
        RecordStore::from_yaml_str(&bad, 6),
        Err(AppError::Yaml(_))
    ));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut store = RecordStore::builtin();
    let copy = store.assets[0].clone();
    store.assets.push(copy);

    assert!(matches!(validate(&store, 6), Err(AppError::InvalidRecord(_))));
}

#[test]
fn test_empty_id_is_rejected() {
    let mut store = RecordStore::builtin();
    store.patients[2].id = "  ".into();

    assert!(matches!(validate(&store, 6), Err(AppError::InvalidRecord(_))));
}

#[test]
fn test_floor_outside_building_is_rejected() {
    assert!(matches!(
        RecordStore::from_yaml_str(DATASET, 2),
        Err(AppError::InvalidRecord(_))
    ));
    assert!(matches!(validate(&RecordStore::builtin(), 1), Err(AppError::InvalidRecord(_))));
}

#[test]
fn test_migrations_run_once() {
    let pool = DbPool::in_memory().unwrap();

    // DbPool already applied everything
    assert_eq!(run_pending_migrations(&pool.conn).unwrap(), 0);

    let applied: Vec<_> = load_all(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation == "migration_applied")
        .collect();
    assert_eq!(applied.len(), 2);
}

#[test]
fn test_audit_rows_are_appended_in_order() {
    let pool = DbPool::in_memory().unwrap();
    audit(&pool.conn, "login", "", "Dashboard unlocked").unwrap();
    audit(&pool.conn, "export", "history", "7 rows as csv to /tmp/h.csv").unwrap();

    let rows = load_all(&pool.conn).unwrap();
    let last_two: Vec<_> = rows.iter().rev().take(2).collect();
    assert_eq!(last_two[1].operation, "login");
    assert_eq!(last_two[0].operation, "export");
    assert_eq!(last_two[0].target, "history");
    assert!(last_two[0].id > last_two[1].id);
}
