//! Filter engine shared by every list view.
//!
//! A record matches a [`FilterCriteria`] when it satisfies every supplied
//! criterion that applies to its kind (logical AND). Unset criteria, the value
//! `all` and criteria naming a facet the record kind does not carry impose no
//! constraint. Filtering is stable and never touches its input.

use crate::models::{Alert, Asset, HistoryEntry, Patient, TimeLogEntry};
use crate::utils::date::{DateBasis, day_of};
use chrono::NaiveDate;

/// Exact-match fields a record kind may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Status,
    Type,
    Department,
    EventType,
    Activity,
}

pub trait Filterable {
    /// Text fields searched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    fn facet(&self, _facet: Facet) -> Option<&str> {
        None
    }

    fn floor(&self) -> Option<u32> {
        None
    }

    /// Raw timestamp used by the date criterion.
    fn timestamp(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub status: Option<String>,
    pub floor: Option<u32>,
    pub kind: Option<String>,
    pub department: Option<String>,
    pub event_type: Option<String>,
    pub activity: Option<String>,
    pub date: Option<NaiveDate>,
    pub basis: DateBasis,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn floor(mut self, floor: u32) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn basis(mut self, basis: DateBasis) -> Self {
        self.basis = basis;
        self
    }

    /// True when no criterion constrains anything, i.e. every record matches.
    pub fn is_empty(&self) -> bool {
        constraint(self.search.as_deref()).is_none()
            && constraint(self.status.as_deref()).is_none()
            && self.floor.is_none()
            && constraint(self.kind.as_deref()).is_none()
            && constraint(self.department.as_deref()).is_none()
            && constraint(self.event_type.as_deref()).is_none()
            && constraint(self.activity.as_deref()).is_none()
            && self.date.is_none()
    }

    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        self.matches_search(record)
            && matches_facet(record, Facet::Status, self.status.as_deref())
            && matches_facet(record, Facet::Type, self.kind.as_deref())
            && matches_facet(record, Facet::Department, self.department.as_deref())
            && matches_facet(record, Facet::EventType, self.event_type.as_deref())
            && matches_facet(record, Facet::Activity, self.activity.as_deref())
            && self.matches_floor(record)
            && self.matches_date(record)
    }

    fn matches_search<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        let Some(query) = constraint(self.search.as_deref()) else {
            return true;
        };
        let query = query.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_floor<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        match (self.floor, record.floor()) {
            (Some(wanted), Some(floor)) => wanted == floor,
            _ => true,
        }
    }

    fn matches_date<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        match (self.date, record.timestamp()) {
            (Some(wanted), Some(ts)) => day_of(ts, self.basis) == Some(wanted),
            _ => true,
        }
    }
}

/// `None`, empty and `all` (any case) leave a criterion unconstrained.
fn constraint(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

fn matches_facet<T: Filterable + ?Sized>(record: &T, facet: Facet, wanted: Option<&str>) -> bool {
    let (Some(wanted), Some(value)) = (constraint(wanted), record.facet(facet)) else {
        return true;
    };
    match facet {
        // department labels are free text; the dashboard lower-cases them
        Facet::Department => value.to_lowercase() == wanted.to_lowercase(),
        _ => value == wanted,
    }
}

/// Records matching `criteria`, cloned, in their original order.
pub fn filter<T: Filterable + Clone>(records: &[T], criteria: &FilterCriteria) -> Vec<T> {
    records
        .iter()
        .filter(|r| criteria.matches(*r))
        .cloned()
        .collect()
}

/// Borrowing variant of [`filter`].
pub fn filter_refs<'a, T: Filterable>(records: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    records.iter().filter(|r| criteria.matches(*r)).collect()
}

impl Filterable for Asset {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.id.as_str(),
            self.kind.as_str(),
            self.location.as_str(),
        ]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(self.status.as_str()),
            Facet::Type => Some(self.kind.as_str()),
            _ => None,
        }
    }

    fn floor(&self) -> Option<u32> {
        Some(self.floor)
    }
}

impl Filterable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str(), self.room.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(self.status.as_str()),
            Facet::Type => Some(self.kind.as_str()),
            _ => None,
        }
    }

    fn floor(&self) -> Option<u32> {
        Some(self.floor)
    }
}

impl Filterable for Alert {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.id.as_str(),
            self.message.as_str(),
            self.location.as_str(),
        ]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(self.status.as_str()),
            Facet::Type => Some(self.kind.as_str()),
            _ => None,
        }
    }

    fn floor(&self) -> Option<u32> {
        Some(self.floor)
    }

    fn timestamp(&self) -> Option<&str> {
        Some(self.timestamp.as_str())
    }
}

impl Filterable for HistoryEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.item_name.as_str(),
            self.item_id.as_str(),
            self.description.as_str(),
        ]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Type => Some(self.item_type.as_str()),
            Facet::EventType => Some(self.event_type.as_str()),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<&str> {
        Some(self.timestamp.as_str())
    }
}

impl Filterable for TimeLogEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.employee_name.as_str(),
            self.employee_id.as_str(),
            self.location.as_str(),
        ]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Department => Some(self.department.as_str()),
            Facet::Activity => Some(self.activity.as_str()),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<&str> {
        Some(self.timestamp.as_str())
    }
}
