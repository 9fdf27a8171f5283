pub mod alert;
pub mod asset;
pub mod enums;
pub mod history;
pub mod marker;
pub mod patient;
pub mod time_log;

pub use alert::Alert;
pub use asset::Asset;
pub use enums::{
    Activity, AlertStatus, AlertType, AssetStatus, HistoryEventType, ItemType, MarkerKind,
    PatientStatus, PatientType,
};
pub use history::HistoryEntry;
pub use marker::{Marker, Position};
pub use patient::Patient;
pub use time_log::TimeLogEntry;
