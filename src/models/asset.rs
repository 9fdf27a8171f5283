use super::enums::AssetStatus;
use serde::{Deserialize, Serialize};

/// A piece of tracked equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    /// Free-text category, e.g. "Medical Equipment".
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub floor: u32,
    pub status: AssetStatus,
    /// Display string such as "10 minutes ago".
    pub last_updated: String,
    /// Person in charge.
    pub pic: String,
}

impl Asset {
    pub fn is_alerting(&self) -> bool {
        self.status == AssetStatus::Alert
    }
}
