//! Built-in demo dataset shown when no `dataset` file is configured.

use crate::models::{
    Activity, Alert, AlertStatus, AlertType, Asset, AssetStatus, HistoryEntry, HistoryEventType,
    ItemType, Patient, PatientStatus, PatientType, TimeLogEntry,
};

#[allow(clippy::too_many_arguments)]
fn asset(
    id: &str,
    name: &str,
    kind: &str,
    location: &str,
    floor: u32,
    status: AssetStatus,
    last_updated: &str,
    pic: &str,
) -> Asset {
    Asset {
        id: id.into(),
        name: name.into(),
        kind: kind.into(),
        location: location.into(),
        floor,
        status,
        last_updated: last_updated.into(),
        pic: pic.into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn patient(
    id: &str,
    name: &str,
    room: &str,
    floor: u32,
    status: PatientStatus,
    kind: PatientType,
    last_updated: &str,
    assigned_to: &str,
) -> Patient {
    Patient {
        id: id.into(),
        name: name.into(),
        room: room.into(),
        floor,
        status,
        kind,
        last_updated: last_updated.into(),
        assigned_to: assigned_to.into(),
    }
}

#[rustfmt::skip]
pub fn assets() -> Vec<Asset> {
    use AssetStatus as S;
    vec![
        asset("A001", "Wheelchair #1", "Mobility Equipment", "Room 101", 1, S::Active, "10 minutes ago", "Dr. Ahmad"),
        asset("A002", "ECG Machine", "Medical Equipment", "Emergency Room", 1, S::Maintenance, "1 hour ago", "Nurse Siti"),
        asset("A003", "Infusion Pump", "Medical Equipment", "Room 102", 1, S::Active, "30 minutes ago", "Dr. Rahman"),
        asset("A004", "Mobile X-Ray", "Diagnostic Equipment", "Nurses Station", 1, S::Inactive, "2 hours ago", "Dr. Fatimah"),
        asset("A005", "Ventilator #3", "Medical Equipment", "Room 105", 1, S::Alert, "5 minutes ago", "Dr. Ismail"),
        asset("A006", "Wheelchair #2", "Mobility Equipment", "Room 106", 1, S::Active, "20 minutes ago", "Dr. Ahmad"),
        asset("A007", "Patient Monitor", "Medical Equipment", "Room 103", 2, S::Active, "15 minutes ago", "Nurse Siti"),
        asset("A008", "Defibrillator", "Emergency Equipment", "Emergency Room", 2, S::Active, "1 hour ago", "Dr. Rahman"),
        asset("A009", "Ultrasound Machine", "Diagnostic Equipment", "Room 201", 2, S::Maintenance, "3 hours ago", "Dr. Fatimah"),
    ]
}

#[rustfmt::skip]
pub fn patients() -> Vec<Patient> {
    use PatientStatus as S;
    use PatientType as T;
    vec![
        patient("P001", "Andi Santoso", "Room 101", 1, S::Stable, T::Inpatient, "15 minutes ago", "Dr. Ahmad"),
        patient("P002", "Budi Pratama", "Emergency Room", 1, S::Critical, T::Emergency, "2 minutes ago", "Dr. Rahman"),
        patient("P003", "Citra Dewi", "Room 104", 1, S::Stable, T::Inpatient, "45 minutes ago", "Nurse Siti"),
        patient("P004", "Dewi Anggraeni", "Room 105", 1, S::Emergency, T::Inpatient, "1 minute ago", "Dr. Fatimah"),
        patient("P005", "Eko Prasetyo", "Room 201", 2, S::Stable, T::Inpatient, "30 minutes ago", "Dr. Ahmad"),
        patient("P006", "Fajar Nugroho", "Room 202", 2, S::Discharged, T::Outpatient, "1 hour ago", "Nurse Siti"),
        patient("P007", "Gita Indah", "Room 203", 2, S::Stable, T::Inpatient, "20 minutes ago", "Dr. Rahman"),
        patient("P008", "Hadi Santoso", "Emergency Room", 1, S::Critical, T::Emergency, "5 minutes ago", "Dr. Fatimah"),
    ]
}

pub fn alerts() -> Vec<Alert> {
    let alert = |id: &str,
                 title: &str,
                 message: &str,
                 kind: AlertType,
                 status: AlertStatus,
                 location: &str,
                 floor: u32,
                 timestamp: &str,
                 assigned_to: Option<&str>| Alert {
        id: id.into(),
        title: title.into(),
        message: message.into(),
        kind,
        status,
        location: location.into(),
        floor,
        timestamp: timestamp.into(),
        assigned_to: assigned_to.map(Into::into),
    };

    vec![
        alert(
            "AL001",
            "Emergency Button Pressed",
            "Patient P004 pressed emergency button in Room 105",
            AlertType::Emergency,
            AlertStatus::New,
            "Room 105",
            1,
            "2 minutes ago",
            Some("Dr. Fatimah"),
        ),
        alert(
            "AL002",
            "Asset Left Geofence",
            "Wheelchair A001 has left hospital perimeter",
            AlertType::Geofence,
            AlertStatus::New,
            "Hospital Exit (East)",
            1,
            "10 minutes ago",
            None,
        ),
        alert(
            "AL003",
            "Patient Left Geofence",
            "Patient P008 has left designated area",
            AlertType::Geofence,
            AlertStatus::Acknowledged,
            "Main Hallway",
            1,
            "15 minutes ago",
            Some("Nurse Siti"),
        ),
        alert(
            "AL004",
            "Equipment Maintenance Required",
            "ECG Machine A002 requires scheduled maintenance",
            AlertType::Maintenance,
            AlertStatus::Acknowledged,
            "Emergency Room",
            1,
            "1 hour ago",
            None,
        ),
        alert(
            "AL005",
            "System Connection Issue",
            "Beacon on Floor 2 is not responding",
            AlertType::System,
            AlertStatus::Resolved,
            "Floor 2, West Wing",
            2,
            "3 hours ago",
            None,
        ),
        alert(
            "AL006",
            "Emergency Button Pressed",
            "Patient P002 pressed emergency button in Emergency Room",
            AlertType::Emergency,
            AlertStatus::Resolved,
            "Emergency Room",
            1,
            "5 hours ago",
            Some("Dr. Rahman"),
        ),
    ]
}

struct Change<'a> {
    from_location: Option<&'a str>,
    to_location: Option<&'a str>,
    from_status: Option<&'a str>,
    to_status: Option<&'a str>,
}

const NO_CHANGE: Change<'static> = Change {
    from_location: None,
    to_location: None,
    from_status: None,
    to_status: None,
};

fn moved<'a>(from: &'a str, to: &'a str) -> Change<'a> {
    Change {
        from_location: Some(from),
        to_location: Some(to),
        ..NO_CHANGE
    }
}

fn status_changed<'a>(from: &'a str, to: &'a str) -> Change<'a> {
    Change {
        from_status: Some(from),
        to_status: Some(to),
        ..NO_CHANGE
    }
}

fn history_entry(
    id: &str,
    item: (&str, &str, ItemType),
    event_type: HistoryEventType,
    description: &str,
    change: Change<'_>,
    timestamp: &str,
    recorded_by: &str,
) -> HistoryEntry {
    HistoryEntry {
        id: id.into(),
        item_id: item.0.into(),
        item_name: item.1.into(),
        item_type: item.2,
        event_type,
        description: description.into(),
        from_location: change.from_location.map(Into::into),
        to_location: change.to_location.map(Into::into),
        from_status: change.from_status.map(Into::into),
        to_status: change.to_status.map(Into::into),
        timestamp: timestamp.into(),
        recorded_by: recorded_by.into(),
    }
}

#[rustfmt::skip]
pub fn history() -> Vec<HistoryEntry> {
    use HistoryEventType as E;
    use ItemType as I;
    vec![
        history_entry("H001", ("A001", "Wheelchair #1", I::Asset), E::Movement, "Asset moved between locations", moved("Room 101", "Room 104"), "2025-05-08T09:30:00", "System"),
        history_entry("H002", ("P002", "Budi Pratama", I::Patient), E::StatusChange, "Patient status changed", status_changed("stable", "critical"), "2025-05-08T10:15:00", "Dr. Rahman"),
        history_entry("H003", ("A002", "ECG Machine", I::Asset), E::Maintenance, "Scheduled maintenance performed", NO_CHANGE, "2025-05-08T11:00:00", "Technician Rudi"),
        history_entry("H004", ("P004", "Dewi Anggraeni", I::Patient), E::Alert, "Emergency button pressed", NO_CHANGE, "2025-05-08T11:45:00", "System"),
        history_entry("H005", ("A001", "Wheelchair #1", I::Asset), E::Alert, "Asset left hospital perimeter", NO_CHANGE, "2025-05-08T12:30:00", "System"),
        history_entry("H006", ("P003", "Citra Dewi", I::Patient), E::Movement, "Patient moved between locations", moved("Room 104", "X-Ray Room"), "2025-05-08T13:15:00", "Nurse Siti"),
        history_entry("H007", ("P001", "Andi Santoso", I::Patient), E::StatusChange, "Patient status changed", status_changed("critical", "stable"), "2025-05-08T14:00:00", "Dr. Ahmad"),
    ]
}

#[rustfmt::skip]
pub fn time_logs() -> Vec<TimeLogEntry> {
    let entry = |id: &str,
                 employee: (&str, &str, &str),
                 activity: Activity,
                 location: &str,
                 timestamp: &str,
                 notes: Option<&str>| TimeLogEntry {
        id: id.into(),
        employee_id: employee.0.into(),
        employee_name: employee.1.into(),
        department: employee.2.into(),
        activity,
        location: location.into(),
        timestamp: timestamp.into(),
        notes: notes.map(Into::into),
    };

    let ahmad = ("E001", "Dr. Ahmad Setiawan", "Medical");
    let siti = ("E002", "Nurse Siti Nuraini", "Nursing");
    let budi = ("E003", "Technician Budi", "Maintenance");

    vec![
        entry("TL001", ahmad, Activity::CheckIn, "Main Entrance", "2025-05-08T07:30:00", Some("Morning shift")),
        entry("TL002", siti, Activity::CheckIn, "Staff Entrance", "2025-05-08T07:45:00", None),
        entry("TL003", budi, Activity::CheckIn, "Basement Entrance", "2025-05-08T08:00:00", None),
        entry("TL004", ahmad, Activity::BreakStart, "Cafeteria", "2025-05-08T11:30:00", None),
        entry("TL005", ahmad, Activity::BreakEnd, "Cafeteria", "2025-05-08T12:00:00", None),
        entry("TL006", siti, Activity::ShiftChange, "Nurse Station", "2025-05-08T15:00:00", Some("Handover to evening shift")),
        entry("TL007", budi, Activity::CheckOut, "Basement Entrance", "2025-05-08T16:00:00", None),
        entry("TL008", ahmad, Activity::CheckOut, "Main Entrance", "2025-05-08T17:30:00", None),
    ]
}
