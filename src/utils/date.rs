//! Date utilities: CLI date arguments, ISO timestamp parsing and day truncation.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which calendar a timestamp is truncated in before comparing it with a
/// date filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateBasis {
    /// Wall-clock date written in the timestamp itself.
    #[default]
    Record,
    /// Machine local time zone. Naive timestamps are taken as already local.
    Local,
    /// UTC. Naive timestamps are read as local time, then converted.
    Utc,
}

impl DateBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateBasis::Record => "record",
            DateBasis::Local => "local",
            DateBasis::Utc => "utc",
        }
    }
}

/// A parsed record timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `--date` argument: `all` or empty → no constraint, `today`, or YYYY-MM-DD.
pub fn parse_date_arg(s: &str) -> AppResult<Option<NaiveDate>> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    if s.eq_ignore_ascii_case("today") {
        return Ok(Some(today()));
    }
    parse_date(s)
        .map(Some)
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Timestamp::Offset(dt));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(Timestamp::Naive)
}

/// Calendar day of a timestamp under `basis`, `None` if it does not parse.
pub fn day_of(timestamp: &str, basis: DateBasis) -> Option<NaiveDate> {
    let ts = parse_timestamp(timestamp)?;
    match (ts, basis) {
        (Timestamp::Naive(n), DateBasis::Record | DateBasis::Local) => Some(n.date()),
        (Timestamp::Naive(n), DateBasis::Utc) => n
            .and_local_timezone(Local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc).date_naive()),
        (Timestamp::Offset(dt), DateBasis::Record) => Some(dt.date_naive()),
        (Timestamp::Offset(dt), DateBasis::Local) => Some(dt.with_timezone(&Local).date_naive()),
        (Timestamp::Offset(dt), DateBasis::Utc) => Some(dt.with_timezone(&Utc).date_naive()),
    }
}

/// "HH:MM:SS" part of a timestamp for table output; the raw string if it
/// does not parse.
pub fn time_of_day(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(Timestamp::Naive(n)) => n.format("%H:%M:%S").to_string(),
        Some(Timestamp::Offset(dt)) => dt.format("%H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}
