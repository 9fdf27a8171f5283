use super::enums::Activity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLogEntry {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub activity: Activity,
    pub location: String,
    /// ISO 8601, with or without offset.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
