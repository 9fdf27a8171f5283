use super::enums::{AlertStatus, AlertType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub status: AlertStatus,
    pub location: String,
    pub floor: u32,
    /// Display string ("2 minutes ago"), not an ISO timestamp.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl Alert {
    /// Alerts still waiting for someone to act on them.
    pub fn is_open(&self) -> bool {
        self.status != AlertStatus::Resolved
    }
}
