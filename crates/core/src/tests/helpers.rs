// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FixedClock, InMemoryConfigStore, Schedule};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use ophours_domain::{Holiday, Period, RawHoliday, RawPeriod, RecordId};

pub const PARENT: RecordId = RecordId::new(1);

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("Valid test date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_time(NaiveTime::from_hms_opt(h, min, 0).expect("Valid test time"))
}

pub fn clock_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> FixedClock {
    FixedClock::new(at(y, m, d, h, min))
}

pub fn period(weekday: Weekday, start: (u32, u32), end: (u32, u32)) -> Period {
    Period::new(
        weekday,
        NaiveTime::from_hms_opt(start.0, start.1, 0).expect("Valid start"),
        NaiveTime::from_hms_opt(end.0, end.1, 0).expect("Valid end"),
    )
    .expect("Valid period")
}

pub fn holiday(name: &str, start: NaiveDate, end: NaiveDate) -> Holiday {
    Holiday::new(name.to_string(), start, end).expect("Valid holiday")
}

/// A schedule open Monday 09:00-17:00 only.
pub fn monday_schedule() -> Schedule {
    Schedule::from_parts(
        PARENT,
        vec![period(Weekday::Mon, (9, 0), (17, 0))],
        Vec::new(),
    )
}

/// A store with a parent record open on weekdays 09:00-17:00.
pub fn create_test_store() -> InMemoryConfigStore {
    let mut store: InMemoryConfigStore = InMemoryConfigStore::new();
    store.insert_root(PARENT);
    store
        .set_periods(
            PARENT,
            (0..5)
                .map(|day: u8| RawPeriod::new(&day.to_string(), "09:00", "17:00"))
                .collect(),
        )
        .expect("Parent exists");
    store
        .set_holidays(
            PARENT,
            vec![RawHoliday::new("Christmas", "2024-12-24", "2024-12-26")],
        )
        .expect("Parent exists");
    store
}

/// Adds a child of `PARENT` open Saturday 10:00-12:00 with the given details.
pub fn add_child(store: &mut InMemoryConfigStore, id: i64, details: &[(&str, &str)]) -> RecordId {
    let child: RecordId = RecordId::new(id);
    store.insert_child(child, PARENT);
    for (key, value) in details {
        store.set_detail(child, key, value).expect("Child exists");
    }
    store
        .set_periods(child, vec![RawPeriod::new("5", "10:00", "12:00")])
        .expect("Child exists");
    child
}
