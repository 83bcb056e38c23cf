//! Attendance record validation and reporting engine.
//!
//! The admin console's one non-CRUD subsystem: validates candidate
//! attendance records before the storage layer persists them, and derives
//! the monthly dashboard statistics (punctuality, worked hours, status
//! distribution) plus table filter/sort from a fetched record collection.
//! Persistence, the employee directory and the HTTP surface live in the
//! consuming services; this crate only works on in-memory shapes.

pub mod config;
pub mod model;
pub mod report;
pub mod utils;
pub mod validate;

pub use config::ShiftConfig;
pub use model::attendance::{AttendanceDraft, AttendanceRecord, AttendanceStatus};
pub use model::employee::{Employee, EmployeeRef};
pub use report::table::{RecordFilter, SortDirection, SortKey, SortState, StatusFilter, filter_and_sort};
pub use report::{DailyAverage, Derived, Punctuality, ReportSummary, derive, summarize};
pub use validate::{FieldErrors, validate};
