// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurring weekly opening periods.
//!
//! A period is one time range on one weekday that repeats every week.
//!
//! ## Invariants
//!
//! - `time_start <= time_end` (ranges never cross midnight)
//! - Periods are immutable once constructed
//! - Concrete instants are derived on demand and never stored

use crate::error::DomainError;
use crate::types::RawPeriod;
use crate::validation::{parse_time, parse_weekday, require};
use crate::weekday::weekday_index;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;
use std::cmp::Ordering;

/// A single recurring weekly time range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    /// Day of week this range recurs on.
    weekday: Weekday,
    /// Opening time.
    time_start: NaiveTime,
    /// Closing time (inclusive).
    time_end: NaiveTime,
    /// Zero-length placeholder inserted to fill an empty weekday.
    dummy: bool,
}

impl Period {
    /// Creates a new `Period`.
    ///
    /// # Arguments
    ///
    /// * `weekday` - The weekday the period recurs on
    /// * `time_start` - The opening time
    /// * `time_end` - The closing time
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvertedTimeRange` if `time_end` is before
    /// `time_start`.
    pub fn new(
        weekday: Weekday,
        time_start: NaiveTime,
        time_end: NaiveTime,
    ) -> Result<Self, DomainError> {
        if time_end < time_start {
            return Err(DomainError::InvertedTimeRange {
                start: time_start,
                end: time_end,
            });
        }

        Ok(Self {
            weekday,
            time_start,
            time_end,
            dummy: false,
        })
    }

    /// Creates a zero-length placeholder at midnight for `weekday`.
    #[must_use]
    pub const fn dummy(weekday: Weekday) -> Self {
        Self {
            weekday,
            time_start: NaiveTime::MIN,
            time_end: NaiveTime::MIN,
            dummy: true,
        }
    }

    /// Validates a raw stored period.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any attribute is missing or blank
    /// - The weekday is not between 0 and 6
    /// - Either time cannot be parsed
    /// - The period ends before it starts
    pub fn from_raw(raw: &RawPeriod) -> Result<Self, DomainError> {
        let weekday = require(raw.weekday.as_deref(), "period", "weekday")?;
        let time_start = require(raw.time_start.as_deref(), "period", "timeStart")?;
        let time_end = require(raw.time_end.as_deref(), "period", "timeEnd")?;

        let weekday: Weekday = parse_weekday(weekday)?;
        let time_start: NaiveTime = parse_time(time_start)?;
        let time_end: NaiveTime = parse_time(time_end)?;

        Self::new(weekday, time_start, time_end)
    }

    /// Returns the weekday.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the opening time.
    #[must_use]
    pub const fn time_start(&self) -> NaiveTime {
        self.time_start
    }

    /// Returns the closing time.
    #[must_use]
    pub const fn time_end(&self) -> NaiveTime {
        self.time_end
    }

    /// Returns whether this is a placeholder period.
    #[must_use]
    pub const fn is_dummy(&self) -> bool {
        self.dummy
    }

    /// Returns whether the resource is open at `instant` according to this
    /// period alone.
    ///
    /// Both bounds are inclusive. Placeholder periods are never open.
    #[must_use]
    pub fn is_open_at(&self, instant: NaiveDateTime) -> bool {
        if self.dummy || instant.weekday() != self.weekday {
            return false;
        }

        let time = instant.time();
        self.time_start <= time && time <= self.time_end
    }

    /// Computes this period's concrete start in a given week.
    ///
    /// # Arguments
    ///
    /// * `week_start` - The Monday that opens the reference week
    /// * `week_offset` - Number of whole weeks after the reference week
    ///
    /// Returns `None` if the date falls outside chrono's supported range.
    #[must_use]
    pub fn occurrence_in_week(
        &self,
        week_start: NaiveDate,
        week_offset: u32,
    ) -> Option<NaiveDateTime> {
        let days = u64::from(week_offset) * 7 + u64::from(weekday_index(self.weekday));
        week_start
            .checked_add_days(Days::new(days))
            .map(|date| date.and_time(self.time_start))
    }

    /// Orders periods by weekday, then by opening time.
    #[must_use]
    pub fn sort_strategy(a: &Self, b: &Self) -> Ordering {
        weekday_index(a.weekday)
            .cmp(&weekday_index(b.weekday))
            .then_with(|| a.time_start.cmp(&b.time_start))
    }
}

impl TryFrom<&RawPeriod> for Period {
    type Error = DomainError;

    fn try_from(raw: &RawPeriod) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.weekday,
            self.time_start.format("%H:%M"),
            self.time_end.format("%H:%M")
        )
    }
}

/// Returns the Monday of the week containing `date`.
#[must_use]
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Returns the ISO-8601 week number of `date`.
#[must_use]
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}
