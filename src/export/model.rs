use crate::models::{HistoryEntry, TimeLogEntry};
use serde::Serialize;

/// Flat history row: every column present, empty when not applicable.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HistoryExport {
    pub id: String,
    pub timestamp: String,
    pub item_type: String,
    pub item_id: String,
    pub item_name: String,
    pub event_type: String,
    pub description: String,
    pub from_location: String,
    pub to_location: String,
    pub from_status: String,
    pub to_status: String,
    pub recorded_by: String,
}

impl From<&HistoryEntry> for HistoryExport {
    fn from(h: &HistoryEntry) -> Self {
        Self {
            id: h.id.clone(),
            timestamp: h.timestamp.clone(),
            item_type: h.item_type.to_string(),
            item_id: h.item_id.clone(),
            item_name: h.item_name.clone(),
            event_type: h.event_type.to_string(),
            description: h.description.clone(),
            from_location: h.from_location.clone().unwrap_or_default(),
            to_location: h.to_location.clone().unwrap_or_default(),
            from_status: h.from_status.clone().unwrap_or_default(),
            to_status: h.to_status.clone().unwrap_or_default(),
            recorded_by: h.recorded_by.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TimeLogExport {
    pub id: String,
    pub timestamp: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub activity: String,
    pub location: String,
    pub notes: String,
}

impl From<&TimeLogEntry> for TimeLogExport {
    fn from(e: &TimeLogEntry) -> Self {
        Self {
            id: e.id.clone(),
            timestamp: e.timestamp.clone(),
            employee_id: e.employee_id.clone(),
            employee_name: e.employee_name.clone(),
            department: e.department.clone(),
            activity: e.activity.to_string(),
            location: e.location.clone(),
            notes: e.notes.clone().unwrap_or_default(),
        }
    }
}
