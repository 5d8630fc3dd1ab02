// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ophours_domain::{DomainError, RecordId};

/// Errors reported by a `ConfigStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store has no record with this identifier.
    NotFound(RecordId),
    /// The store could not be read.
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Record {id} not found"),
            Self::Unavailable(msg) => write!(f, "Config store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Errors that can occur while loading or querying a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Raw configuration failed validation.
    Validation(DomainError),
    /// The store cannot resolve a record identifier.
    RecordNotFound(RecordId),
    /// A next-opening search ran on a schedule without opening periods.
    NoPeriodsDefined {
        /// The active record of the schedule.
        record: RecordId,
    },
    /// Every remaining occurrence of a schedule's periods falls on a holiday.
    NoOpeningOutsideHolidays {
        /// The active record of the schedule.
        record: RecordId,
    },
    /// The configured time zone name is not a known IANA zone.
    InvalidTimezone(String),
    /// Any other store failure, surfaced as-is.
    Store(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation error: {err}"),
            Self::RecordNotFound(id) => write!(f, "Record {id} not found"),
            Self::NoPeriodsDefined { record } => {
                write!(f, "No opening periods defined for record {record}")
            }
            Self::NoOpeningOutsideHolidays { record } => {
                write!(f, "No opening outside holidays for record {record}")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::Store(msg) => write!(f, "Config store error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::RecordNotFound(id),
            StoreError::Unavailable(msg) => Self::Store(msg),
        }
    }
}
