//! Dataset invariants: non-empty ids unique per record kind, floors inside
//! the building.

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use std::collections::HashSet;

fn check_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(AppError::InvalidRecord(format!("{kind} with empty id")));
        }
        if !seen.insert(id) {
            return Err(AppError::InvalidRecord(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}

fn check_floor(kind: &str, id: &str, floor: u32, total_floors: u32) -> AppResult<()> {
    if floor == 0 || floor > total_floors {
        return Err(AppError::InvalidRecord(format!(
            "{kind} {id} is on floor {floor}, building has floors 1-{total_floors}"
        )));
    }
    Ok(())
}

pub fn validate(store: &RecordStore, total_floors: u32) -> AppResult<()> {
    check_ids("asset", store.assets.iter().map(|a| a.id.as_str()))?;
    check_ids("patient", store.patients.iter().map(|p| p.id.as_str()))?;
    check_ids("alert", store.alerts.iter().map(|a| a.id.as_str()))?;
    check_ids("history entry", store.history.iter().map(|h| h.id.as_str()))?;
    check_ids("time log", store.time_logs.iter().map(|t| t.id.as_str()))?;

    for a in &store.assets {
        check_floor("asset", &a.id, a.floor, total_floors)?;
    }
    for p in &store.patients {
        check_floor("patient", &p.id, p.floor, total_floors)?;
    }
    for a in &store.alerts {
        check_floor("alert", &a.id, a.floor, total_floors)?;
    }

    Ok(())
}
