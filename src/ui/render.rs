//! Terminal views of records, markers and the dashboard summary.

use crate::core::dashboard::Located;
use crate::core::summary::Summary;
use crate::models::{Alert, Asset, HistoryEntry, Marker, Patient, TimeLogEntry};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date::time_of_day;
use crate::utils::formatting::{bold, truncate};
use crate::utils::table::Table;
use textwrap::Options;

const WRAP_WIDTH: usize = 76;

pub fn summary(s: &Summary) -> String {
    let mut t = Table::new(&[
        "Tracked assets",
        "Tracked patients",
        "Asset alerts",
        "Emergencies",
        "Open alerts",
    ]);
    t.add_row(vec![
        s.assets.to_string(),
        s.patients.to_string(),
        s.asset_alerts.to_string(),
        s.emergencies.to_string(),
        s.open_alerts.to_string(),
    ]);
    t.render()
}

pub fn assets(list: &[&Asset]) -> String {
    let mut t = Table::new(&[
        "ID",
        "Name",
        "Type",
        "Location",
        "Floor",
        "Status",
        "Updated",
        "PIC",
    ]);
    for a in list {
        t.add_row(vec![
            a.id.clone(),
            a.name.clone(),
            a.kind.clone(),
            a.location.clone(),
            a.floor.to_string(),
            colorize_status(a.status.as_str()),
            a.last_updated.clone(),
            a.pic.clone(),
        ]);
    }
    t.render()
}

pub fn patients(list: &[&Patient]) -> String {
    let mut t = Table::new(&[
        "ID",
        "Name",
        "Room",
        "Floor",
        "Status",
        "Type",
        "Updated",
        "Assigned to",
    ]);
    for p in list {
        t.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            p.room.clone(),
            p.floor.to_string(),
            colorize_status(p.status.as_str()),
            p.kind.to_string(),
            p.last_updated.clone(),
            p.assigned_to.clone(),
        ]);
    }
    t.render()
}

/// Alerts render as cards: the message is long free text.
pub fn alerts(list: &[&Alert]) -> String {
    let body = Options::new(WRAP_WIDTH)
        .initial_indent("    ")
        .subsequent_indent("    ");
    let mut out = String::new();

    for a in list {
        out.push_str(&format!(
            "{} {} [{}] {}\n",
            bold(&a.id),
            a.title,
            colorize_status(a.kind.as_str()),
            colorize_status(a.status.as_str()),
        ));
        out.push_str(&textwrap::fill(&a.message, &body));
        out.push('\n');
        out.push_str(&format!(
            "    📍 {} (Floor {}) · {} · {}\n\n",
            a.location,
            a.floor,
            a.timestamp,
            colorize_optional(a.assigned_to.as_deref()),
        ));
    }

    out
}

pub fn history(list: &[&HistoryEntry]) -> String {
    let mut t = Table::new(&[
        "Time",
        "ID",
        "Item",
        "Event",
        "Description",
        "Change",
        "Recorded by",
    ]);
    for h in list {
        let change = h.change_summary();
        t.add_row(vec![
            time_of_day(&h.timestamp),
            h.id.clone(),
            format!("{} ({}, {})", h.item_name, h.item_id, h.item_type),
            colorize_status(h.event_type.as_str()),
            truncate(&h.description, 40),
            colorize_optional(Some(change.as_str())),
            h.recorded_by.clone(),
        ]);
    }
    t.render()
}

pub fn time_logs(list: &[&TimeLogEntry]) -> String {
    let mut t = Table::new(&[
        "Time",
        "ID",
        "Employee",
        "Department",
        "Activity",
        "Location",
        "Notes",
    ]);
    for e in list {
        t.add_row(vec![
            time_of_day(&e.timestamp),
            e.id.clone(),
            format!("{} ({})", e.employee_name, e.employee_id),
            e.department.clone(),
            colorize_status(e.activity.as_str()),
            e.location.clone(),
            colorize_optional(e.notes.as_deref()),
        ]);
    }
    t.render()
}

pub fn markers(list: &[Marker]) -> String {
    let mut t = Table::new(&["ID", "Kind", "X %", "Y %", "Label", "Details"]);
    for m in list {
        t.add_row(vec![
            m.id.clone(),
            colorize_status(m.kind.as_str()),
            m.position.x.to_string(),
            m.position.y.to_string(),
            m.label.clone(),
            m.details.clone(),
        ]);
    }
    t.render()
}

pub fn located(l: &Located) -> String {
    format!(
        "{} {} ({}) is on floor {}, {}\nMarker: {} at x={}%, y={}% ({})\n",
        l.item_type,
        bold(&l.name),
        l.marker.id,
        l.floor,
        l.location,
        colorize_status(l.marker.kind.as_str()),
        l.marker.position.x,
        l.marker.position.y,
        l.marker.details,
    )
}

/// "Showing 3 of 9 assets".
pub fn showing(shown: usize, total: usize, kind: &str) -> String {
    format!("Showing {shown} of {total} {kind}")
}
