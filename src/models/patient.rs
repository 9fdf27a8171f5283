use super::enums::{PatientStatus, PatientType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub room: String,
    pub floor: u32,
    pub status: PatientStatus,
    #[serde(rename = "type")]
    pub kind: PatientType,
    pub last_updated: String,
    pub assigned_to: String,
}

impl Patient {
    pub fn is_emergency(&self) -> bool {
        self.status == PatientStatus::Emergency
    }
}
