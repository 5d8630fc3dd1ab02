// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Identifier of a configuration record in the host store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wraps a raw store identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw store identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A period exactly as it is stored: untyped, every attribute optional.
///
/// Raw records are validated into [`crate::Period`] when a schedule loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPeriod {
    /// Weekday index, `"0"` (Monday) through `"6"` (Sunday).
    pub weekday: Option<String>,
    /// Opening time, `HH:MM` or `HH:MM:SS`.
    pub time_start: Option<String>,
    /// Closing time, `HH:MM` or `HH:MM:SS`.
    pub time_end: Option<String>,
}

impl RawPeriod {
    /// Creates a raw period from string slices.
    #[must_use]
    pub fn new(weekday: &str, time_start: &str, time_end: &str) -> Self {
        Self {
            weekday: Some(weekday.to_string()),
            time_start: Some(time_start.to_string()),
            time_end: Some(time_end.to_string()),
        }
    }
}

/// A holiday exactly as it is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHoliday {
    /// Display label.
    pub name: Option<String>,
    /// First closed day, `YYYY-MM-DD`.
    pub date_start: Option<String>,
    /// Last closed day, `YYYY-MM-DD`.
    pub date_end: Option<String>,
}

impl RawHoliday {
    /// Creates a raw holiday from string slices.
    #[must_use]
    pub fn new(name: &str, date_start: &str, date_end: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            date_start: Some(date_start.to_string()),
            date_end: Some(date_end.to_string()),
        }
    }
}
