//! Filter and sort support for the attendance table view.
//!
//! The table works on the same fetched snapshot as the summary; filtering and
//! sorting always produce a fresh `Vec` and leave the input untouched, so the
//! caller can re-render from the cached collection on every criteria change.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::utils::timeparse;

/// Status facet of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AttendanceStatus),
}

/// Filter bar state; all set criteria must match (AND).
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Case-insensitive substring match on the employee display name.
    pub employee_query: Option<String>,
    pub status: StatusFilter,
    /// Inclusive date bounds; either side may be open.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RecordFilter {
    /// Lowercased, trimmed name query, computed once per pass rather than
    /// per row; empty queries collapse to no filter.
    fn normalized_query(&self) -> Option<String> {
        self.employee_query
            .as_deref()
            .map(|query| query.trim().to_lowercase())
            .filter(|query| !query.is_empty())
    }

    fn matches(&self, record: &AttendanceRecord, query: Option<&str>) -> bool {
        if let Some(query) = query
            && !record.employee.display_name().to_lowercase().contains(query)
        {
            return false;
        }
        if let StatusFilter::Only(status) = self.status
            && record.status != status
        {
            return false;
        }
        if let Some(from) = self.from
            && record.date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && record.date > to
        {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Employee,
    Date,
    Status,
    CheckIn,
    CheckOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Current column/direction of the table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Header click: the same key again flips the direction, a new key
    /// starts over ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Apply the filter, then a stable sort by the selected column. Ties keep the
/// original collection order; the input is never mutated.
pub fn filter_and_sort(
    records: &[AttendanceRecord],
    filter: &RecordFilter,
    sort: &SortState,
) -> Vec<AttendanceRecord> {
    let query = filter.normalized_query();
    let mut rows: Vec<AttendanceRecord> = records
        .iter()
        .filter(|record| filter.matches(record, query.as_deref()))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ordering = compare(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    rows
}

fn compare(a: &AttendanceRecord, b: &AttendanceRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Employee => a.employee.display_name().cmp(b.employee.display_name()),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Status => a.status.label().cmp(b.status.label()),
        SortKey::CheckIn => sort_minute(a.check_in_text()).cmp(&sort_minute(b.check_in_text())),
        SortKey::CheckOut => sort_minute(a.check_out_text()).cmp(&sort_minute(b.check_out_text())),
    }
}

/// Unparseable or absent times sort before every real time.
fn sort_minute(text: Option<&str>) -> i32 {
    text.and_then(|raw| timeparse::parse_minutes(raw).ok())
        .map(i32::from)
        .unwrap_or(-1)
}
