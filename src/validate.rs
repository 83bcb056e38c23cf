//! Status-conditioned validation of a candidate attendance record.
//!
//! The admin form posts an [`AttendanceDraft`]; the caller runs it through
//! [`validate`] before handing anything to the store. Errors come back as a
//! field → message map keyed by the wire field names, so the form can attach
//! each message to its input. An empty map means ready to persist.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::model::attendance::{AttendanceDraft, AttendanceStatus};
use crate::utils::timeparse;

pub type FieldErrors = BTreeMap<&'static str, String>;

/// Apply every rule and collect all applicable errors; nothing short-circuits
/// and nothing panics. Whether the employee id actually exists in the
/// directory is the caller's concern, not checked here. Clearing the time
/// fields for Absent/Leave before persisting is also the caller's job; the
/// draft is never mutated.
pub fn validate(draft: &AttendanceDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.employee_text().is_none() {
        errors.insert("employee", "Employee is required".to_string());
    }
    if draft.date.is_none() {
        errors.insert("date", "Date is required".to_string());
    }

    let status = draft
        .status_text()
        .and_then(|raw| AttendanceStatus::from_str(raw).ok());
    let Some(status) = status else {
        errors.insert("status", "A valid status is required".to_string());
        return errors;
    };

    if status.requires_times() {
        let check_in = required_time(&mut errors, "checkIn", "Check-in", draft.check_in_text());
        let check_out = required_time(&mut errors, "checkOut", "Check-out", draft.check_out_text());
        if let (Some(start), Some(end)) = (check_in, check_out)
            && end < start
        {
            errors.insert("checkOut", "Check-out cannot be earlier than check-in".to_string());
        }
    } else {
        if draft.check_in_text().is_some() {
            errors.insert("checkIn", format!("Check-in must be empty when status is {status}"));
        }
        if draft.check_out_text().is_some() {
            errors.insert("checkOut", format!("Check-out must be empty when status is {status}"));
        }
    }

    errors
}

fn required_time(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    text: Option<&str>,
) -> Option<u16> {
    match text {
        None => {
            errors.insert(field, format!("{label} is required for this status"));
            None
        }
        Some(raw) => match timeparse::parse_minutes(raw) {
            Ok(minutes) => Some(minutes),
            Err(_) => {
                errors.insert(field, format!("{label} is not a valid time"));
                None
            }
        },
    }
}
