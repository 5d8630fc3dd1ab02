// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::weekday::weekday_from_index;
use chrono::{NaiveDate, NaiveTime, Weekday};

/// Date format used for holiday ranges and applicability windows.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the trimmed value of a required attribute.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the value is absent or blank.
pub fn require<'a>(
    value: Option<&'a str>,
    record: &'static str,
    field: &'static str,
) -> Result<&'a str, DomainError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::MissingField { record, field }),
    }
}

/// Parses a weekday index (0 = Monday).
///
/// # Errors
///
/// Returns an error if the value is not an integer between 0 and 6.
pub fn parse_weekday(value: &str) -> Result<Weekday, DomainError> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(weekday_from_index)
        .ok_or_else(|| DomainError::InvalidWeekday(value.to_string()))
}

/// Parses a time of day in `HH:MM` or `HH:MM:SS` form.
///
/// # Errors
///
/// Returns an error if neither format matches.
pub fn parse_time(value: &str) -> Result<NaiveTime, DomainError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|e| DomainError::InvalidTime {
            value: value.to_string(),
            error: e.to_string(),
        })
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns an error if the value is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| DomainError::InvalidDate {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses an optional date; blank values count as absent.
///
/// # Errors
///
/// Returns an error if a non-blank value is not a valid date.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => parse_date(v).map(Some),
        _ => Ok(None),
    }
}
