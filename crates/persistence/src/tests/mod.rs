// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod config_store_tests;
mod initialization_tests;
mod record_tests;
mod seed_tests;

use crate::SqliteConfigStore;
use ophours_domain::{RawHoliday, RawPeriod, RecordId};

pub const PARENT: RecordId = RecordId::new(1);

/// Creates an in-memory store holding one top-level record open on weekdays.
pub fn create_test_store() -> SqliteConfigStore {
    let mut store: SqliteConfigStore =
        SqliteConfigStore::new_in_memory().expect("In-memory store should initialize");
    store
        .insert_record(PARENT, None, 0, "Library")
        .expect("Parent should insert");
    store
        .set_periods_config(PARENT, &weekday_periods())
        .expect("Periods should store");
    store
        .set_holidays_config(
            PARENT,
            &[RawHoliday::new("Christmas", "2024-12-24", "2024-12-26")],
        )
        .expect("Holidays should store");
    store
}

pub fn weekday_periods() -> Vec<RawPeriod> {
    (0..5_u8)
        .map(|day| RawPeriod::new(&day.to_string(), "09:00", "17:00"))
        .collect()
}
