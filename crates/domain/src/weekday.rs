// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical weekday table.
//!
//! Weekdays are numbered from 0 (Monday) to 6 (Sunday), matching
//! `chrono::Weekday::num_days_from_monday`.

use chrono::Weekday;
use serde::Serialize;

/// One entry of the weekday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayName {
    /// Numeric index, 0 = Monday.
    pub index: u8,
    /// The chrono weekday.
    #[serde(skip)]
    pub weekday: Weekday,
    /// Full English name.
    pub name: &'static str,
    /// Three-letter abbreviation.
    pub short: &'static str,
}

/// The seven weekdays in week order.
pub const WEEKDAYS: [WeekdayName; 7] = [
    WeekdayName {
        index: 0,
        weekday: Weekday::Mon,
        name: "Monday",
        short: "Mon",
    },
    WeekdayName {
        index: 1,
        weekday: Weekday::Tue,
        name: "Tuesday",
        short: "Tue",
    },
    WeekdayName {
        index: 2,
        weekday: Weekday::Wed,
        name: "Wednesday",
        short: "Wed",
    },
    WeekdayName {
        index: 3,
        weekday: Weekday::Thu,
        name: "Thursday",
        short: "Thu",
    },
    WeekdayName {
        index: 4,
        weekday: Weekday::Fri,
        name: "Friday",
        short: "Fri",
    },
    WeekdayName {
        index: 5,
        weekday: Weekday::Sat,
        name: "Saturday",
        short: "Sat",
    },
    WeekdayName {
        index: 6,
        weekday: Weekday::Sun,
        name: "Sunday",
        short: "Sun",
    },
];

/// Maps a numeric index (0 = Monday) to a weekday.
#[must_use]
pub const fn weekday_from_index(index: u8) -> Option<Weekday> {
    if index < 7 {
        Some(WEEKDAYS[index as usize].weekday)
    } else {
        None
    }
}

/// Returns the numeric index (0 = Monday) of a weekday.
#[must_use]
pub const fn weekday_index(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    }
}

/// Returns the table entry for a weekday.
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static WeekdayName {
    &WEEKDAYS[weekday_index(weekday) as usize]
}

/// A set of weekdays used to filter periods.
///
/// Built from a single weekday, a slice, an array or a vector, so callers
/// can ask for one day or several with the same query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// All seven weekdays.
    pub const ALL: Self = Self(0b111_1111);

    /// Adds a weekday to the set.
    #[must_use]
    pub const fn with(self, weekday: Weekday) -> Self {
        Self(self.0 | (1 << weekday_index(weekday)))
    }

    /// Returns whether the set contains `weekday`.
    #[must_use]
    pub const fn contains(&self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday_index(weekday)) != 0
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<Weekday> for WeekdaySet {
    fn from(weekday: Weekday) -> Self {
        Self::EMPTY.with(weekday)
    }
}

impl From<&[Weekday]> for WeekdaySet {
    fn from(days: &[Weekday]) -> Self {
        days.iter().fold(Self::EMPTY, |set, day| set.with(*day))
    }
}

impl<const N: usize> From<[Weekday; N]> for WeekdaySet {
    fn from(days: [Weekday; N]) -> Self {
        Self::from(days.as_slice())
    }
}

impl From<Vec<Weekday>> for WeekdaySet {
    fn from(days: Vec<Weekday>) -> Self {
        Self::from(days.as_slice())
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}
