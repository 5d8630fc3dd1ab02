// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The source of "now".
//!
//! All wall-clock values handled by the engine are local to one configured
//! time zone, so the clock hands out naive local date-times.

use crate::error::CoreError;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use ophours_domain::{WEEKDAYS, WeekdayName, iso_week_number};

/// Supplies the current instant and calendar conventions.
pub trait Clock {
    /// Returns the current wall-clock instant in the configured zone.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current calendar date in the configured zone.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Returns the ISO-8601 week number of `date`.
    fn iso_week_number(&self, date: NaiveDate) -> u32 {
        iso_week_number(date)
    }

    /// Returns the weekday table in week order, Monday first.
    fn weekdays(&self) -> &'static [WeekdayName; 7] {
        &WEEKDAYS
    }
}

/// Reads the system clock and converts it into a configured zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    /// Creates a clock for `timezone`.
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Creates a clock from an IANA zone name such as `Europe/Berlin`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTimezone` if the name is unknown.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        let timezone: Tz = name
            .parse()
            .map_err(|_| CoreError::InvalidTimezone(name.to_string()))?;
        Ok(Self::new(timezone))
    }

    /// Returns the configured zone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock that always reports `now`.
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
