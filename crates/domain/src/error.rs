// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveTime};

/// Errors raised while validating raw schedule configuration.
///
/// Every variant describes a single malformed period, holiday, or
/// applicability criterion. Loaders skip the offending record and keep
/// going; nothing here is fatal to a schedule as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required attribute is absent or blank.
    MissingField {
        /// The kind of record being validated (e.g. "period").
        record: &'static str,
        /// The missing attribute name.
        field: &'static str,
    },
    /// Weekday is not an integer between 0 (Monday) and 6 (Sunday).
    InvalidWeekday(String),
    /// A time-of-day value could not be parsed.
    InvalidTime {
        /// The raw value.
        value: String,
        /// The parser's error message.
        error: String,
    },
    /// A calendar date could not be parsed.
    InvalidDate {
        /// The raw value.
        value: String,
        /// The parser's error message.
        error: String,
    },
    /// A period ends before it starts.
    InvertedTimeRange {
        /// The start time.
        start: NaiveTime,
        /// The end time.
        end: NaiveTime,
    },
    /// A holiday ends before it starts.
    InvertedDateRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
    /// Week scheme is not one of `all`, `even` or `odd`.
    InvalidWeekScheme(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { record, field } => {
                write!(f, "Missing required {record} field '{field}'")
            }
            Self::InvalidWeekday(value) => {
                write!(f, "Invalid weekday '{value}': must be between 0 and 6")
            }
            Self::InvalidTime { value, error } => {
                write!(f, "Failed to parse time '{value}': {error}")
            }
            Self::InvalidDate { value, error } => {
                write!(f, "Failed to parse date '{value}': {error}")
            }
            Self::InvertedTimeRange { start, end } => {
                write!(f, "Period ends at {end} before it starts at {start}")
            }
            Self::InvertedDateRange { start, end } => {
                write!(f, "Holiday ends on {end} before it starts on {start}")
            }
            Self::InvalidWeekScheme(value) => {
                write!(
                    f,
                    "Invalid week scheme '{value}': expected 'all', 'even' or 'odd'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
