//! Turn raw filter flags into validated [`FilterCriteria`].
//!
//! `all` (any case) and the empty string mean "no constraint". Closed sets
//! are checked here, so a typo is reported instead of silently matching
//! nothing.

use super::parser::{
    AlertFilterArgs, AssetFilterArgs, DateArgs, HistoryFilterArgs, PatientFilterArgs,
    TimeLogFilterArgs,
};
use crate::core::filter::FilterCriteria;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Activity, AlertStatus, AlertType, AssetStatus, HistoryEventType, ItemType, PatientStatus,
    PatientType,
};
use crate::utils::date::{DateBasis, parse_date_arg};
use std::str::FromStr;

fn is_unconstrained(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw.eq_ignore_ascii_case("all")
}

/// Free-text value, `None` for all/empty.
pub fn free_text(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .filter(|s| !is_unconstrained(s))
        .map(|s| s.trim().to_string())
}

/// Closed-set value, canonicalised to its wire spelling.
pub fn choice<T>(raw: &Option<String>) -> AppResult<Option<String>>
where
    T: FromStr<Err = AppError> + ToString,
{
    match raw.as_deref() {
        Some(s) if !is_unconstrained(s) => Ok(Some(T::from_str(s)?.to_string())),
        _ => Ok(None),
    }
}

/// Floor number compared as an integer, so `01` selects floor 1.
pub fn parse_floor(raw: &Option<String>) -> AppResult<Option<u32>> {
    match raw.as_deref() {
        Some(s) if !is_unconstrained(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| AppError::InvalidFloor(s.to_string())),
        _ => Ok(None),
    }
}

fn apply_date(
    mut criteria: FilterCriteria,
    args: &DateArgs,
    default_basis: DateBasis,
) -> AppResult<FilterCriteria> {
    criteria.date = match &args.date {
        Some(d) => parse_date_arg(d)?,
        None => None,
    };
    criteria.basis = args.basis.unwrap_or(default_basis);
    Ok(criteria)
}

impl AssetFilterArgs {
    pub fn to_criteria(&self) -> AppResult<FilterCriteria> {
        Ok(FilterCriteria {
            search: free_text(&self.search.search),
            status: choice::<AssetStatus>(&self.status)?,
            floor: parse_floor(&self.floor)?,
            kind: free_text(&self.kind),
            ..FilterCriteria::default()
        })
    }
}

impl PatientFilterArgs {
    pub fn to_criteria(&self) -> AppResult<FilterCriteria> {
        Ok(FilterCriteria {
            search: free_text(&self.search.search),
            status: choice::<PatientStatus>(&self.status)?,
            floor: parse_floor(&self.floor)?,
            kind: choice::<PatientType>(&self.kind)?,
            ..FilterCriteria::default()
        })
    }
}

impl AlertFilterArgs {
    pub fn to_criteria(&self) -> AppResult<FilterCriteria> {
        Ok(FilterCriteria {
            search: free_text(&self.search.search),
            status: choice::<AlertStatus>(&self.status)?,
            kind: choice::<AlertType>(&self.kind)?,
            floor: parse_floor(&self.floor)?,
            ..FilterCriteria::default()
        })
    }
}

impl HistoryFilterArgs {
    pub fn to_criteria(&self, default_basis: DateBasis) -> AppResult<FilterCriteria> {
        let criteria = FilterCriteria {
            search: free_text(&self.search.search),
            kind: choice::<ItemType>(&self.item_type)?,
            event_type: choice::<HistoryEventType>(&self.event)?,
            ..FilterCriteria::default()
        };
        apply_date(criteria, &self.date, default_basis)
    }
}

impl TimeLogFilterArgs {
    pub fn to_criteria(&self, default_basis: DateBasis) -> AppResult<FilterCriteria> {
        let criteria = FilterCriteria {
            search: free_text(&self.search.search),
            department: free_text(&self.department),
            activity: choice::<Activity>(&self.activity)?,
            ..FilterCriteria::default()
        };
        apply_date(criteria, &self.date, default_basis)
    }
}
