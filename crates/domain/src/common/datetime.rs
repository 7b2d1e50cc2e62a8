//! DateTime parsing and formatting for annotation form fields.
//!
//! Forms edit a date-time annotation through two inputs: a date field
//! (`YYYY-MM-DD`) and a time picker that reports a full timestamp
//! (`YYYY-MM-DD h:mm:ss a`). Only the time-of-day of the latter is used.
//! The server stores UTC timestamps.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike,
};

use crate::error::DomainError;

/// `YYYY-MM-DD`
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD h:mm:ss a`
pub const TIME_INPUT_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// `YYYY-MM-DD h:mm A`
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %-I:%M %p";

/// UTC timestamp sent in `stringValue`.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Years a date-time annotation may carry (four-digit years only)
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Rejects dates whose year is outside [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn check_date_range(date: NaiveDate) -> Result<NaiveDate, DomainError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        Ok(date)
    } else {
        Err(DomainError::parse(format!(
            "date '{}' is outside years {}..={}",
            date, MIN_YEAR, MAX_YEAR
        )))
    }
}

/// Parses the value of a date input field.
pub fn parse_date_input(s: &str) -> Result<NaiveDate, DomainError> {
    let date = NaiveDate::parse_from_str(s.trim(), DATE_INPUT_FORMAT)
        .map_err(|e| DomainError::parse(format!("invalid date '{}': {}", s, e)))?;
    check_date_range(date)
}

/// Parses the value of a time input field (`YYYY-MM-DD h:mm:ss a`).
pub fn parse_time_input(s: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(s.trim(), TIME_INPUT_FORMAT)
        .map_err(|e| DomainError::parse(format!("invalid time '{}': {}", s, e)))
}

/// Parses a stored date-time annotation into wall-clock time at `offset`.
///
/// Accepts the form pattern `YYYY-MM-DD h:mm:ss a` (already wall-clock) and
/// the RFC 3339 timestamps produced by [`to_wire_timestamp`], which are
/// shifted into `offset`.
pub fn parse_annotation_timestamp(
    s: &str,
    offset: FixedOffset,
) -> Result<NaiveDateTime, DomainError> {
    let trimmed = s.trim();
    let parsed = match NaiveDateTime::parse_from_str(trimmed, TIME_INPUT_FORMAT) {
        Ok(dt) => dt,
        Err(_) => DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| dt.with_timezone(&offset).naive_local())
            .map_err(|_| {
                DomainError::parse(format!(
                    "date-time annotation '{}' does not match 'YYYY-MM-DD h:mm:ss a'",
                    s
                ))
            })?,
    };
    check_date_range(parsed.date())?;
    Ok(parsed)
}

/// Formats a wall-clock date-time for display (`YYYY-MM-DD h:mm A`).
pub fn format_display(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

/// Combines a date with the hour and minute of `time`, seconds zeroed,
/// and renders the result as a UTC timestamp.
///
/// `None` when the UTC instant is not representable.
pub fn to_wire_timestamp(
    date: NaiveDate,
    time: NaiveTime,
    offset: FixedOffset,
) -> Option<String> {
    let minute = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)?;
    let utc = date
        .and_time(minute)
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
    Some(utc.format(WIRE_FORMAT).to_string())
}
