//! Tolerant time-of-day parsing for the textual check-in/check-out fields.
//!
//! Store documents carry times as free text in either 12-hour ("9:05 AM") or
//! 24-hour ("09:05") form, so everything downstream works on a minute-of-day
//! integer in `0..=1439` produced here.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// The field was empty or whitespace. Callers treat this as "absent",
    /// which is distinct from a value that is present but malformed.
    #[error("time is empty")]
    Empty,
    #[error("not a recognizable time of day")]
    Malformed,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse a time-of-day string into minutes since midnight.
///
/// Accepted shapes: `H:MM`/`HH:MM` with an optional, case-insensitive
/// ` AM`/` PM` suffix (hour 1-12), or the same clock with no suffix read as
/// 24-hour (hour 0-23). Anything else is `Malformed`. Never panics.
pub fn parse_minutes(text: &str) -> Result<u16, TimeParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let lower = trimmed.to_ascii_lowercase();
    let (clock, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), Some(Meridiem::Am))
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), Some(Meridiem::Pm))
    } else {
        (lower.as_str(), None)
    };

    let (hour_text, minute_text) = clock.split_once(':').ok_or(TimeParseError::Malformed)?;

    let hour = parse_component(hour_text, 1)?;
    // Minutes are always two digits ("9:5" is not a time).
    let minute = parse_component(minute_text, 2)?;
    if minute > 59 {
        return Err(TimeParseError::Malformed);
    }

    let hour = match meridiem {
        Some(Meridiem::Am) if (1..=12).contains(&hour) => hour % 12,
        Some(Meridiem::Pm) if (1..=12).contains(&hour) => hour % 12 + 12,
        Some(_) => return Err(TimeParseError::Malformed),
        None if hour <= 23 => hour,
        None => return Err(TimeParseError::Malformed),
    };

    Ok(hour * 60 + minute)
}

fn parse_component(text: &str, min_digits: usize) -> Result<u16, TimeParseError> {
    if !(min_digits..=2).contains(&text.len()) || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeParseError::Malformed);
    }
    text.parse().map_err(|_| TimeParseError::Malformed)
}

/// Render a minute-of-day as a zero-padded 24-hour `HH:MM` string.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Display helper for optional times; absent values render as a placeholder.
pub fn format_opt(minutes: Option<u16>) -> String {
    match minutes {
        Some(m) => format_minutes(m),
        None => "--:--".to_string(),
    }
}
