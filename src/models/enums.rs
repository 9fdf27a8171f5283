//! Closed value sets used by the tracking records.
//!
//! Every set is generated by `closed_set!`, which gives each enum the same
//! surface: `as_str`, case-insensitive `parse`, `all_values`, `Display`,
//! `FromStr` (reporting `AppError::InvalidFilter`) and serde support using the
//! exact spellings of the dashboard data (`statusChange`, `check-in`, ...).

use crate::errors::AppError;
use serde::{Deserialize, Serialize};

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($field:literal) {
            $( $variant:ident => $str_val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $vis enum $name {
            $( #[serde(rename = $str_val)] $variant ),+
        }

        impl $name {
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $str_val ),+
                }
            }

            /// Case-insensitive lookup of a wire value.
            pub fn parse(s: &str) -> Option<Self> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($str_val) {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            pub const fn all_values() -> &'static [&'static str] {
                &[ $( $str_val ),+ ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| AppError::InvalidFilter {
                    field: $field,
                    value: s.to_string(),
                    allowed: Self::all_values().join(", "),
                })
            }
        }
    };
}

closed_set! {
    /// Operational state of a tracked asset.
    pub enum AssetStatus ("asset status") {
        Active => "active",
        Inactive => "inactive",
        Maintenance => "maintenance",
        Alert => "alert",
    }
}

closed_set! {
    pub enum PatientStatus ("patient status") {
        Stable => "stable",
        Critical => "critical",
        Emergency => "emergency",
        Discharged => "discharged",
    }
}

closed_set! {
    /// Admission category of a patient.
    pub enum PatientType ("patient type") {
        Inpatient => "inpatient",
        Emergency => "emergency",
        Outpatient => "outpatient",
    }
}

closed_set! {
    pub enum AlertType ("alert type") {
        Geofence => "geofence",
        Emergency => "emergency",
        Maintenance => "maintenance",
        System => "system",
    }
}

closed_set! {
    pub enum AlertStatus ("alert status") {
        New => "new",
        Acknowledged => "acknowledged",
        Resolved => "resolved",
    }
}

closed_set! {
    /// Kind of item a history entry refers to.
    pub enum ItemType ("item type") {
        Asset => "asset",
        Patient => "patient",
    }
}

closed_set! {
    pub enum HistoryEventType ("event type") {
        Movement => "movement",
        StatusChange => "statusChange",
        Alert => "alert",
        Maintenance => "maintenance",
    }
}

closed_set! {
    /// Staff clock activity.
    pub enum Activity ("activity") {
        CheckIn => "check-in",
        CheckOut => "check-out",
        BreakStart => "break-start",
        BreakEnd => "break-end",
        ShiftChange => "shift-change",
    }
}

closed_set! {
    /// Visual class of a floor-plan marker.
    pub enum MarkerKind ("marker kind") {
        Asset => "asset",
        Patient => "patient",
        Emergency => "emergency",
    }
}
