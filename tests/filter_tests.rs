use chrono::NaiveDate;
use hospitrack::core::filter::{FilterCriteria, filter, filter_refs};
use hospitrack::models::{Activity, HistoryEntry, HistoryEventType, ItemType, TimeLogEntry};
use hospitrack::store::RecordStore;
use hospitrack::utils::date::DateBasis;

fn ids<T, F: Fn(&T) -> &str>(rows: &[T], id: F) -> Vec<String> {
    rows.iter().map(|r| id(r).to_string()).collect()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn log_at(id: &str, timestamp: &str) -> TimeLogEntry {
    TimeLogEntry {
        id: id.to_string(),
        employee_id: "E009".to_string(),
        employee_name: "Night Porter".to_string(),
        department: "Support".to_string(),
        activity: Activity::CheckIn,
        location: "Main Entrance".to_string(),
        timestamp: timestamp.to_string(),
        notes: None,
    }
}

#[test]
fn test_empty_criteria_returns_everything_in_order() {
    let store = RecordStore::builtin();
    let criteria = FilterCriteria::new();

    assert!(criteria.is_empty());
    assert_eq!(filter(&store.assets, &criteria), store.assets);
    assert_eq!(filter(&store.patients, &criteria), store.patients);
    assert_eq!(filter(&store.time_logs, &criteria), store.time_logs);
}

#[test]
fn test_critical_patients_on_floor_one() {
    let store = RecordStore::builtin();
    let criteria = FilterCriteria::new().status("critical").floor(1);

    let rows = filter(&store.patients, &criteria);
    assert_eq!(ids(&rows, |p| p.id.as_str()), ["P002", "P008"]);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let store = RecordStore::builtin();

    let rows = filter(&store.assets, &FilterCriteria::new().search("WHEEL"));
    assert_eq!(ids(&rows, |a| a.id.as_str()), ["A001", "A006"]);

    // ids and locations are searched too
    let rows = filter(&store.assets, &FilterCriteria::new().search("a00"));
    assert_eq!(rows.len(), store.assets.len());
    let rows = filter(&store.patients, &FilterCriteria::new().search("emergency room"));
    assert_eq!(ids(&rows, |p| p.id.as_str()), ["P002", "P008"]);
}

#[test]
fn test_all_means_no_constraint() {
    let store = RecordStore::builtin();
    let criteria = FilterCriteria::new()
        .status("all")
        .kind("ALL")
        .department("")
        .activity("All");

    assert!(criteria.is_empty());
    assert_eq!(filter(&store.assets, &criteria), store.assets);
    assert_eq!(filter(&store.time_logs, &criteria), store.time_logs);
}

#[test]
fn test_search_all_is_no_constraint() {
    let store = RecordStore::builtin();
    let criteria = FilterCriteria::new()
        .search("all")
        .status("all")
        .kind("all");

    assert!(criteria.is_empty());
    assert_eq!(filter(&store.assets, &criteria), store.assets);
    assert_eq!(filter(&store.alerts, &FilterCriteria::new().search("ALL")), store.alerts);
}

#[test]
fn test_single_record_matches_iff_every_field_does() {
    let store = RecordStore::builtin();
    let p002 = vec![store.find_patient("P002").unwrap().clone()];

    let both = FilterCriteria::new().status("critical").floor(1);
    assert_eq!(filter(&p002, &both), p002);

    let wrong_floor = FilterCriteria::new().status("critical").floor(2);
    assert!(filter(&p002, &wrong_floor).is_empty());
}

#[test]
fn test_empty_search_matches_everything() {
    let store = RecordStore::builtin();
    let criteria = FilterCriteria::new().search("");

    assert!(criteria.is_empty());
    assert_eq!(filter(&store.alerts, &criteria).len(), store.alerts.len());
}

#[test]
fn test_criteria_combine_with_and() {
    let store = RecordStore::builtin();
    let criteria = FilterCriteria::new()
        .kind("Medical Equipment")
        .status("active");

    let rows = filter(&store.assets, &criteria);
    assert_eq!(ids(&rows, |a| a.id.as_str()), ["A003", "A007"]);

    let rows = filter(&store.assets, &criteria.floor(2));
    assert_eq!(ids(&rows, |a| a.id.as_str()), ["A007"]);
}

#[test]
fn test_filtering_is_idempotent_and_keeps_order() {
    let store = RecordStore::builtin();
    let criteria = FilterCriteria::new().search("room").floor(1);

    let once = filter(&store.patients, &criteria);
    let twice = filter(&once, &criteria);
    assert_eq!(once, twice);

    let positions: Vec<usize> = once
        .iter()
        .map(|p| store.patients.iter().position(|q| q.id == p.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_filter_does_not_touch_input() {
    let store = RecordStore::builtin();
    let before = store.alerts.clone();

    let rows = filter_refs(&store.alerts, &FilterCriteria::new().status("new"));
    assert_eq!(rows.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), ["AL001", "AL002"]);
    assert_eq!(store.alerts, before);
}

#[test]
fn test_alert_type_and_floor() {
    let store = RecordStore::builtin();

    let rows = filter(&store.alerts, &FilterCriteria::new().kind("geofence"));
    assert_eq!(ids(&rows, |a| a.id.as_str()), ["AL002", "AL003"]);

    let rows = filter(&store.alerts, &FilterCriteria::new().floor(2));
    assert_eq!(ids(&rows, |a| a.id.as_str()), ["AL005"]);
}

#[test]
fn test_department_is_case_insensitive() {
    let store = RecordStore::builtin();

    let lower = filter(&store.time_logs, &FilterCriteria::new().department("medical"));
    let exact = filter(&store.time_logs, &FilterCriteria::new().department("Medical"));

    assert_eq!(lower, exact);
    assert_eq!(ids(&lower, |t| t.id.as_str()), ["TL001", "TL004", "TL005", "TL008"]);
}

#[test]
fn test_activity_facet() {
    let store = RecordStore::builtin();
    let rows = filter(&store.time_logs, &FilterCriteria::new().activity("check-out"));
    assert_eq!(ids(&rows, |t| t.id.as_str()), ["TL007", "TL008"]);
}

#[test]
fn test_history_item_type_and_event() {
    let store = RecordStore::builtin();

    let rows: Vec<HistoryEntry> = filter(
        &store.history,
        &FilterCriteria::new()
            .kind(ItemType::Asset.as_str())
            .event_type(HistoryEventType::Alert.as_str()),
    );
    assert_eq!(ids(&rows, |h| h.id.as_str()), ["H005"]);

    let rows = filter(&store.history, &FilterCriteria::new().event_type("statusChange"));
    assert_eq!(ids(&rows, |h| h.id.as_str()), ["H002", "H007"]);
}

#[test]
fn test_facet_missing_on_kind_is_ignored() {
    let store = RecordStore::builtin();

    // history has no status and no floor
    let rows = filter(&store.history, &FilterCriteria::new().status("active").floor(9));
    assert_eq!(rows.len(), store.history.len());
}

#[test]
fn test_date_filter_on_record_day() {
    let store = RecordStore::builtin();

    let rows = filter(&store.history, &FilterCriteria::new().date(day(2025, 5, 8)));
    assert_eq!(rows.len(), store.history.len());

    let rows = filter(&store.history, &FilterCriteria::new().date(day(2025, 5, 9)));
    assert!(rows.is_empty());
}

#[test]
fn test_date_basis_with_offset_timestamps() {
    let logs = vec![log_at("X1", "2025-05-08T23:30:00-05:00")];

    let on_record_day = FilterCriteria::new()
        .date(day(2025, 5, 8))
        .basis(DateBasis::Record);
    assert_eq!(filter(&logs, &on_record_day).len(), 1);

    let utc_next_day = FilterCriteria::new()
        .date(day(2025, 5, 9))
        .basis(DateBasis::Utc);
    assert_eq!(filter(&logs, &utc_next_day).len(), 1);

    let utc_same_day = FilterCriteria::new()
        .date(day(2025, 5, 8))
        .basis(DateBasis::Utc);
    assert!(filter(&logs, &utc_same_day).is_empty());
}

#[test]
fn test_unparseable_timestamp_never_matches_a_date() {
    let logs = vec![
        log_at("X1", "sometime on Thursday"),
        log_at("X2", "2025-05-08 07:00"),
    ];

    let rows = filter(&logs, &FilterCriteria::new().date(day(2025, 5, 8)));
    assert_eq!(ids(&rows, |t| t.id.as_str()), ["X2"]);

    // without a date criterion both are kept
    assert_eq!(filter(&logs, &FilterCriteria::new()).len(), 2);
}

#[test]
fn test_alert_display_times_never_match_a_date() {
    let store = RecordStore::builtin();
    let rows = filter(&store.alerts, &FilterCriteria::new().date(day(2025, 5, 8)));
    assert!(rows.is_empty());
}

#[test]
fn test_no_match_yields_empty() {
    let store = RecordStore::builtin();
    let rows = filter(&store.assets, &FilterCriteria::new().search("zzz-nothing"));
    assert!(rows.is_empty());
}
