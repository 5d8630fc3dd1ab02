// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::RawHoliday;
use crate::validation::{parse_date, require};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// A named, inclusive range of calendar dates on which the resource is closed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Holiday {
    /// Display label.
    name: String,
    /// First closed day.
    date_start: NaiveDate,
    /// Last closed day.
    date_end: NaiveDate,
}

impl Holiday {
    /// Creates a new `Holiday`.
    ///
    /// # Arguments
    ///
    /// * `name` - The display label
    /// * `date_start` - The first closed day
    /// * `date_end` - The last closed day
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvertedDateRange` if `date_end` is before
    /// `date_start`.
    pub fn new(
        name: String,
        date_start: NaiveDate,
        date_end: NaiveDate,
    ) -> Result<Self, DomainError> {
        if date_end < date_start {
            return Err(DomainError::InvertedDateRange {
                start: date_start,
                end: date_end,
            });
        }

        Ok(Self {
            name,
            date_start,
            date_end,
        })
    }

    /// Validates a raw stored holiday.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name or either date is missing or blank
    /// - Either date cannot be parsed
    /// - The range ends before it starts
    pub fn from_raw(raw: &RawHoliday) -> Result<Self, DomainError> {
        let name = require(raw.name.as_deref(), "holiday", "name")?;
        let date_start = require(raw.date_start.as_deref(), "holiday", "dateStart")?;
        let date_end = require(raw.date_end.as_deref(), "holiday", "dateEnd")?;

        Self::new(name.to_string(), parse_date(date_start)?, parse_date(date_end)?)
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first closed day.
    #[must_use]
    pub const fn date_start(&self) -> NaiveDate {
        self.date_start
    }

    /// Returns the last closed day.
    #[must_use]
    pub const fn date_end(&self) -> NaiveDate {
        self.date_end
    }

    /// Returns whether `date` lies within this holiday (both ends inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.date_start <= date && date <= self.date_end
    }

    /// Returns whether this holiday is in effect on `date`.
    ///
    /// Same as [`Holiday::contains`]; reads better when highlighting the
    /// current holiday in a listing.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.contains(date)
    }

    /// Orders holidays by their first day.
    #[must_use]
    pub fn sort_strategy(a: &Self, b: &Self) -> Ordering {
        a.date_start.cmp(&b.date_start)
    }
}

impl TryFrom<&RawHoliday> for Holiday {
    type Error = DomainError;

    fn try_from(raw: &RawHoliday) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}
