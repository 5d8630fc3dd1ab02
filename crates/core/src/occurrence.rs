// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Concrete occurrences of weekly periods.
//!
//! Weeks are counted from the Monday of the week containing the reference
//! instant. Within one week, periods sorted by weekday and start time are
//! already in chronological order, so the first occurrence after the
//! reference instant is the soonest one.
//!
//! ## Invariants
//!
//! - Periods are borrowed, never modified; the search state (week offset,
//!   position within the week) lives in the iterator
//! - Placeholder periods never produce occurrences
//! - With at least one period, an occurrence is found by week offset 1

use chrono::{NaiveDate, NaiveDateTime};
use ophours_domain::{Period, week_start_of};
use serde::Serialize;

/// Largest week offset the next-opening search needs to inspect.
///
/// Every period recurs weekly, so its occurrence one week after the
/// reference week always lies in the future.
pub const MAX_WEEK_OFFSET: u32 = 1;

/// A period paired with one concrete start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextOpening<'a> {
    /// The recurring period.
    pub period: &'a Period,
    /// When this occurrence opens.
    pub start: NaiveDateTime,
}

impl NextOpening<'_> {
    /// Returns when this occurrence closes.
    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.start.date().and_time(self.period.time_end())
    }
}

/// Chronological iterator over future occurrences of a period set.
///
/// Yields every occurrence starting strictly after the reference instant.
/// The iterator is unbounded when periods exist and empty otherwise.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    periods: Vec<&'a Period>,
    after: NaiveDateTime,
    week_start: NaiveDate,
    week_offset: u32,
    index: usize,
}

impl<'a> Occurrences<'a> {
    /// Creates an iterator over occurrences of `periods` after `after`.
    pub fn new<I>(periods: I, after: NaiveDateTime) -> Self
    where
        I: IntoIterator<Item = &'a Period>,
    {
        let mut periods: Vec<&'a Period> = periods
            .into_iter()
            .filter(|period| !period.is_dummy())
            .collect();
        periods.sort_by(|a, b| Period::sort_strategy(a, b));

        Self {
            periods,
            after,
            week_start: week_start_of(after.date()),
            week_offset: 0,
            index: 0,
        }
    }

    /// Returns the week offset of the most recently yielded occurrence.
    #[must_use]
    pub const fn week_offset(&self) -> u32 {
        self.week_offset
    }
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = NextOpening<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index >= self.periods.len() {
                if self.periods.is_empty() {
                    return None;
                }
                self.index = 0;
                self.week_offset = self.week_offset.checked_add(1)?;
            }

            let period: &'a Period = self.periods.get(self.index).copied()?;
            self.index += 1;

            let start: NaiveDateTime =
                period.occurrence_in_week(self.week_start, self.week_offset)?;
            if start > self.after {
                return Some(NextOpening { period, start });
            }
        }
    }
}
