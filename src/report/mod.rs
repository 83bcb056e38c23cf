//! Monthly attendance reporting: per-record punctuality and worked-duration
//! derivation, and the fold of a fetched record collection into the summary
//! shape the dashboard cards and charts render from.
//!
//! Everything here is a pure function over the snapshot the caller fetched;
//! a record the store delivered half-migrated or hand-edited degrades to
//! `Missing`/`None` and is excluded from the averages instead of aborting
//! the whole report.

pub mod table;

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::config::ShiftConfig;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::utils::timeparse;

/// Classification of a check-in against the configured shift window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "camelCase")]
pub enum Punctuality {
    Early,
    OnTime,
    Late,
    /// Check-in absent or unparseable; also the only classification for
    /// statuses that carry no times at all.
    Missing,
}

/// Per-record derivation result. `worked_minutes` is defined only when both
/// times parse and check-out is not before check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Derived {
    pub punctuality: Punctuality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worked_minutes: Option<u16>,
}

/// Average worked minutes for one calendar day, over the records of that day
/// that have a defined duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub avg_minutes: f64,
}

/// Dashboard summary over one fetched record collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_records: usize,
    pub unique_employees: usize,
    /// Zero-filled: every status appears even when no record carries it.
    pub status_counts: BTreeMap<AttendanceStatus, usize>,
    pub early: usize,
    pub on_time: usize,
    pub late: usize,
    /// Records with no parseable check-in, counted across all statuses.
    pub missing_check_in: usize,
    /// Records with no parseable check-out, independent of the check-in side.
    pub missing_check_out: usize,
    /// Mean over records with a defined duration; `None` when no record
    /// qualifies, which is not the same thing as an average of zero.
    pub avg_worked_minutes: Option<f64>,
    /// Ascending by date; days without a single defined duration are omitted.
    pub daily_averages: Vec<DailyAverage>,
}

/// Classify one record against the shift window and compute its worked
/// duration if both times are usable.
pub fn derive(record: &AttendanceRecord, shift: &ShiftConfig) -> Derived {
    let check_in = parsed_minute(record.check_in_text());
    let check_out = parsed_minute(record.check_out_text());

    let punctuality = match check_in {
        None => Punctuality::Missing,
        Some(minute) if minute < shift.shift_start => Punctuality::Early,
        Some(minute) if u32::from(minute) <= shift.cutoff() => Punctuality::OnTime,
        Some(_) => Punctuality::Late,
    };

    let worked_minutes = match (check_in, check_out) {
        (Some(start), Some(end)) if end >= start => Some(end - start),
        _ => None,
    };

    Derived {
        punctuality,
        worked_minutes,
    }
}

/// Fold a record collection into the [`ReportSummary`]. An empty collection
/// is a valid degenerate case: all counts zero, averages `None`.
pub fn summarize(records: &[AttendanceRecord], shift: &ShiftConfig) -> ReportSummary {
    let mut status_counts: BTreeMap<AttendanceStatus, usize> =
        AttendanceStatus::iter().map(|status| (status, 0)).collect();
    let mut employees: HashSet<&str> = HashSet::new();
    let (mut early, mut on_time, mut late) = (0, 0, 0);
    let (mut missing_check_in, mut missing_check_out) = (0, 0);
    let mut worked_sum: u64 = 0;
    let mut worked_count: usize = 0;
    let mut per_day: BTreeMap<NaiveDate, (u64, usize)> = BTreeMap::new();

    for record in records {
        *status_counts.entry(record.status).or_insert(0) += 1;
        employees.insert(record.employee.id());

        let derived = derive(record, shift);
        match derived.punctuality {
            Punctuality::Early => early += 1,
            Punctuality::OnTime => on_time += 1,
            Punctuality::Late => late += 1,
            Punctuality::Missing => missing_check_in += 1,
        }
        if parsed_minute(record.check_out_text()).is_none() {
            missing_check_out += 1;
        }

        match derived.worked_minutes {
            Some(minutes) => {
                worked_sum += u64::from(minutes);
                worked_count += 1;
                let day = per_day.entry(record.date).or_insert((0, 0));
                day.0 += u64::from(minutes);
                day.1 += 1;
            }
            None => {
                tracing::debug!(id = ?record.id, date = %record.date, "record has no worked duration, excluded from averages");
            }
        }
    }

    let avg_worked_minutes =
        (worked_count > 0).then(|| worked_sum as f64 / worked_count as f64);
    let daily_averages = per_day
        .into_iter()
        .map(|(date, (sum, count))| DailyAverage {
            date,
            avg_minutes: sum as f64 / count as f64,
        })
        .collect();

    ReportSummary {
        total_records: records.len(),
        unique_employees: employees.len(),
        status_counts,
        early,
        on_time,
        late,
        missing_check_in,
        missing_check_out,
        avg_worked_minutes,
        daily_averages,
    }
}

fn parsed_minute(text: Option<&str>) -> Option<u16> {
    text.and_then(|raw| timeparse::parse_minutes(raw).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::EmployeeRef;
    use pretty_assertions::assert_eq;

    fn record(
        employee: &str,
        date: &str,
        status: AttendanceStatus,
        check_in: &str,
        check_out: &str,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: None,
            employee: EmployeeRef::Id(employee.to_string()),
            date: date.parse().unwrap(),
            status,
            check_in: (!check_in.is_empty()).then(|| check_in.to_string()),
            check_out: (!check_out.is_empty()).then(|| check_out.to_string()),
            notes: None,
        }
    }

    #[test]
    fn on_time_inside_grace_window() {
        let rec = record("emp-1", "2024-05-13", AttendanceStatus::Present, "9:05 AM", "5:10 PM");
        let derived = derive(&rec, &ShiftConfig::default());
        assert_eq!(derived.punctuality, Punctuality::OnTime);
        assert_eq!(derived.worked_minutes, Some(485));
    }

    #[test]
    fn late_past_the_grace_cutoff() {
        let rec = record("emp-1", "2024-05-13", AttendanceStatus::Present, "09:25", "");
        let derived = derive(&rec, &ShiftConfig::default());
        assert_eq!(derived.punctuality, Punctuality::Late);
        assert_eq!(derived.worked_minutes, None);
    }

    #[test]
    fn early_before_shift_start() {
        let rec = record("emp-1", "2024-05-13", AttendanceStatus::Present, "08:45", "17:00");
        assert_eq!(derive(&rec, &ShiftConfig::default()).punctuality, Punctuality::Early);
    }

    #[test]
    fn boundary_minutes_of_the_grace_window() {
        let shift = ShiftConfig::default();
        let at = |check_in: &str| {
            derive(
                &record("emp-1", "2024-05-13", AttendanceStatus::Present, check_in, ""),
                &shift,
            )
            .punctuality
        };
        assert_eq!(at("08:59"), Punctuality::Early);
        assert_eq!(at("09:00"), Punctuality::OnTime);
        assert_eq!(at("09:10"), Punctuality::OnTime);
        assert_eq!(at("09:11"), Punctuality::Late);
    }

    #[test]
    fn absent_record_derives_missing_with_no_duration() {
        let rec = record("emp-1", "2024-05-13", AttendanceStatus::Absent, "", "");
        let derived = derive(&rec, &ShiftConfig::default());
        assert_eq!(derived.punctuality, Punctuality::Missing);
        assert_eq!(derived.worked_minutes, None);
    }

    #[test]
    fn negative_span_yields_no_duration() {
        let rec = record("emp-1", "2024-05-13", AttendanceStatus::Present, "09:00", "08:00");
        assert_eq!(derive(&rec, &ShiftConfig::default()).worked_minutes, None);
    }

    #[test]
    fn summary_of_empty_collection_is_the_degenerate_case() {
        let summary = summarize(&[], &ShiftConfig::default());
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.unique_employees, 0);
        assert_eq!(summary.avg_worked_minutes, None);
        assert_eq!(summary.daily_averages, vec![]);
        assert_eq!(summary.status_counts.len(), 5);
        assert!(summary.status_counts.values().all(|&count| count == 0));
    }

    #[test]
    fn unparseable_check_out_still_counts_in_status_histogram() {
        // makes the exclusion debug line visible under --nocapture
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let records = vec![
            record("emp-1", "2024-05-13", AttendanceStatus::Present, "09:00", "10:00"),
            record("emp-2", "2024-05-13", AttendanceStatus::Present, "09:00", "11:00"),
            record("emp-3", "2024-05-13", AttendanceStatus::Present, "09:00", "bogus"),
        ];
        let summary = summarize(&records, &ShiftConfig::default());

        assert_eq!(summary.status_counts[&AttendanceStatus::Present], 3);
        assert_eq!(summary.missing_check_out, 1);
        // 60 and 120, the bogus row excluded rather than averaged in as zero
        assert_eq!(summary.avg_worked_minutes, Some(90.0));
    }

    #[test]
    fn missing_counters_span_all_statuses() {
        let records = vec![
            record("emp-1", "2024-05-13", AttendanceStatus::Absent, "", ""),
            record("emp-2", "2024-05-13", AttendanceStatus::Leave, "", ""),
            record("emp-3", "2024-05-13", AttendanceStatus::Present, "09:00", ""),
        ];
        let summary = summarize(&records, &ShiftConfig::default());

        assert_eq!(summary.missing_check_in, 2);
        assert_eq!(summary.missing_check_out, 3);
        assert_eq!(summary.on_time, 1);
    }

    #[test]
    fn daily_averages_are_grouped_sorted_and_sparse() {
        let records = vec![
            record("emp-1", "2024-05-14", AttendanceStatus::Present, "09:00", "17:00"),
            record("emp-2", "2024-05-13", AttendanceStatus::Present, "09:00", "13:00"),
            record("emp-3", "2024-05-13", AttendanceStatus::Present, "09:00", "15:00"),
            record("emp-4", "2024-05-15", AttendanceStatus::Absent, "", ""),
        ];
        let summary = summarize(&records, &ShiftConfig::default());

        assert_eq!(
            summary.daily_averages,
            vec![
                DailyAverage { date: "2024-05-13".parse().unwrap(), avg_minutes: 300.0 },
                DailyAverage { date: "2024-05-14".parse().unwrap(), avg_minutes: 480.0 },
            ]
        );
    }

    #[test]
    fn unique_employees_deduplicates_references() {
        let records = vec![
            record("emp-1", "2024-05-13", AttendanceStatus::Present, "09:00", "17:00"),
            record("emp-1", "2024-05-14", AttendanceStatus::Present, "09:00", "17:00"),
            record("emp-2", "2024-05-14", AttendanceStatus::Leave, "", ""),
        ];
        assert_eq!(summarize(&records, &ShiftConfig::default()).unique_employees, 2);
    }

    #[test]
    fn summarize_is_deterministic() {
        let records = vec![
            record("emp-1", "2024-05-13", AttendanceStatus::Present, "9:05 AM", "5:10 PM"),
            record("emp-2", "2024-05-13", AttendanceStatus::HalfDay, "09:00", "13:00"),
            record("emp-3", "2024-05-14", AttendanceStatus::Absent, "", ""),
        ];
        let shift = ShiftConfig::default();
        assert_eq!(summarize(&records, &shift), summarize(&records, &shift));
    }
}
