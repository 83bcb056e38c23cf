use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::model::employee::EmployeeRef;

/// Closed set of attendance outcomes. The wire spellings below are the exact
/// literals the store keeps on its documents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
pub enum AttendanceStatus {
    #[serde(rename = "Present")]
    #[strum(serialize = "Present")]
    Present,
    #[serde(rename = "Absent")]
    #[strum(serialize = "Absent")]
    Absent,
    #[serde(rename = "Leave")]
    #[strum(serialize = "Leave")]
    Leave,
    #[serde(rename = "Half Day")]
    #[strum(serialize = "Half Day")]
    HalfDay,
    #[serde(rename = "Work From Home")]
    #[strum(serialize = "Work From Home")]
    WorkFromHome,
}

impl AttendanceStatus {
    /// Statuses that describe a worked day and therefore need both times.
    pub fn requires_times(&self) -> bool {
        matches!(self, Self::Present | Self::HalfDay | Self::WorkFromHome)
    }

    /// Statuses for which check-in/check-out must stay empty.
    pub fn forbids_times(&self) -> bool {
        !self.requires_times()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Leave => "Leave",
            Self::HalfDay => "Half Day",
            Self::WorkFromHome => "Work From Home",
        }
    }
}

/// Persisted attendance document as read from the store. The engine only
/// reads these; creation, updates and the one-record-per-employee-per-day
/// constraint live in the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub employee: EmployeeRef,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    /// Check-in text with empty strings folded into absence. Hand-edited
    /// rows sometimes carry `""` where the form would leave the field out.
    pub fn check_in_text(&self) -> Option<&str> {
        non_empty(self.check_in.as_deref())
    }

    pub fn check_out_text(&self) -> Option<&str> {
        non_empty(self.check_out.as_deref())
    }
}

/// Candidate record as submitted by the admin form, before validation.
/// Everything is optional and `status` stays the raw wire string so that
/// "missing" and "not one of the known statuses" both surface as field
/// errors instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceDraft {
    pub employee: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub notes: Option<String>,
}

impl AttendanceDraft {
    pub fn employee_text(&self) -> Option<&str> {
        non_empty(self.employee.as_deref())
    }

    pub fn status_text(&self) -> Option<&str> {
        non_empty(self.status.as_deref())
    }

    pub fn check_in_text(&self) -> Option<&str> {
        non_empty(self.check_in.as_deref())
    }

    pub fn check_out_text(&self) -> Option<&str> {
        non_empty(self.check_out.as_deref())
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
