// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{PARENT, create_test_store};
use crate::{PersistenceError, SqliteConfigStore};
use ophours::ConfigStore;
use ophours_domain::{RawHoliday, RawPeriod, RecordId};

#[test]
fn test_insert_duplicate_record_fails() {
    let mut store: SqliteConfigStore = create_test_store();

    let result = store.insert_record(PARENT, None, 0, "Again");
    assert_eq!(result, Err(PersistenceError::DuplicateRecord(PARENT)));
}

#[test]
fn test_insert_with_missing_parent_fails() {
    let mut store: SqliteConfigStore = create_test_store();

    let result = store.insert_record(RecordId::new(2), Some(RecordId::new(99)), 0, "Orphan");
    assert_eq!(
        result,
        Err(PersistenceError::RecordNotFound(RecordId::new(99)))
    );
    assert_eq!(store.count_records().unwrap(), 1);
}

#[test]
fn test_set_detail_replaces_value() {
    let mut store: SqliteConfigStore = create_test_store();

    store.set_detail(PARENT, "description", "Old").unwrap();
    store.set_detail(PARENT, "description", "New").unwrap();

    assert_eq!(
        store.record_detail("description", PARENT).unwrap(),
        Some(String::from("New"))
    );
    assert_eq!(store.record_detail("week-scheme", PARENT).unwrap(), None);
}

#[test]
fn test_set_detail_on_missing_record_fails() {
    let mut store: SqliteConfigStore = create_test_store();

    assert_eq!(
        store.set_detail(RecordId::new(5), "description", "Nope"),
        Err(PersistenceError::RecordNotFound(RecordId::new(5)))
    );
}

#[test]
fn test_periods_keep_entry_order_and_raw_text() {
    let mut store: SqliteConfigStore = create_test_store();
    let periods: Vec<RawPeriod> = vec![
        RawPeriod::new("4", "13:00", "17:00"),
        RawPeriod::new("not a day", "09:00", "12:00"),
        RawPeriod {
            weekday: Some(String::from("0")),
            time_start: None,
            time_end: Some(String::from("12:00")),
        },
    ];

    store.set_periods_config(PARENT, &periods).unwrap();

    assert_eq!(store.periods_config(PARENT).unwrap(), periods);
}

#[test]
fn test_set_periods_replaces_previous_entries() {
    let mut store: SqliteConfigStore = create_test_store();
    assert_eq!(store.periods_config(PARENT).unwrap().len(), 5);

    store.set_periods_config(PARENT, &[]).unwrap();
    assert!(store.periods_config(PARENT).unwrap().is_empty());
}

#[test]
fn test_holidays_round_trip() {
    let mut store: SqliteConfigStore = create_test_store();
    let holidays: Vec<RawHoliday> = vec![
        RawHoliday::new("Summer", "2024-07-01", "2024-07-31"),
        RawHoliday::new("New Year", "2024-01-01", "2024-01-01"),
    ];

    store.set_holidays_config(PARENT, &holidays).unwrap();
    assert_eq!(store.holidays_config(PARENT).unwrap(), holidays);
}

#[test]
fn test_set_periods_on_missing_record_fails() {
    let mut store: SqliteConfigStore = create_test_store();

    assert_eq!(
        store.set_periods_config(RecordId::new(3), &[RawPeriod::new("0", "09:00", "10:00")]),
        Err(PersistenceError::RecordNotFound(RecordId::new(3)))
    );
}
