use super::enums::{HistoryEventType, ItemType};
use serde::{Deserialize, Serialize};

/// One recorded event in the life of an asset or patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub item_id: String,
    pub item_name: String,
    pub item_type: ItemType,
    pub event_type: HistoryEventType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_status: Option<String>,
    /// ISO 8601, with or without offset.
    pub timestamp: String,
    pub recorded_by: String,
}

impl HistoryEntry {
    /// "from → to" for movements and status changes, empty otherwise.
    pub fn change_summary(&self) -> String {
        match (
            &self.from_location,
            &self.to_location,
            &self.from_status,
            &self.to_status,
        ) {
            (Some(from), Some(to), _, _) => format!("{from} → {to}"),
            (_, _, Some(from), Some(to)) => format!("{from} → {to}"),
            _ => String::new(),
        }
    }
}
