use crate::models::{Alert, Asset, Patient};
use serde::Serialize;

/// Headline counters of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub assets: usize,
    pub patients: usize,
    /// Assets whose status is `alert`.
    pub asset_alerts: usize,
    /// Patients whose status is `emergency`.
    pub emergencies: usize,
    /// Alerts not yet resolved.
    pub open_alerts: usize,
}

impl Summary {
    pub fn build(assets: &[Asset], patients: &[Patient], alerts: &[Alert]) -> Self {
        Self {
            assets: assets.len(),
            patients: patients.len(),
            asset_alerts: assets.iter().filter(|a| a.is_alerting()).count(),
            emergencies: patients.iter().filter(|p| p.is_emergency()).count(),
            open_alerts: alerts.iter().filter(|a| a.is_open()).count(),
        }
    }
}
