// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `ConfigStore` behavior and schedule loading over `SQLite`.

use super::{PARENT, create_test_store};
use crate::SqliteConfigStore;
use chrono::NaiveDate;
use ophours::{
    ConfigStore, CoreError, DETAIL_DESCRIPTION, DETAIL_WEEK_SCHEME, FixedClock, Schedule,
    StoreError,
};
use ophours_domain::{RawPeriod, RecordId};

fn clock_on(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

fn add_child(store: &mut SqliteConfigStore, id: i64, menu_order: i32, scheme: &str) -> RecordId {
    let child: RecordId = RecordId::new(id);
    store
        .insert_record(child, Some(PARENT), menu_order, "Override")
        .unwrap();
    store.set_detail(child, DETAIL_WEEK_SCHEME, scheme).unwrap();
    store
        .set_periods_config(child, &[RawPeriod::new("5", "10:00", "12:00")])
        .unwrap();
    child
}

#[test]
fn test_children_ordered_by_menu_order_then_id() {
    let mut store: SqliteConfigStore = create_test_store();
    add_child(&mut store, 30, 2, "even");
    add_child(&mut store, 20, 1, "even");
    add_child(&mut store, 10, 2, "even");

    assert_eq!(
        store.child_record_ids(PARENT).unwrap(),
        vec![RecordId::new(20), RecordId::new(10), RecordId::new(30)]
    );
}

#[test]
fn test_parent_record_id() {
    let mut store: SqliteConfigStore = create_test_store();
    let child: RecordId = add_child(&mut store, 10, 0, "odd");

    assert_eq!(store.parent_record_id(PARENT).unwrap(), None);
    assert_eq!(store.parent_record_id(child).unwrap(), Some(PARENT));
}

#[test]
fn test_unknown_record_is_not_found() {
    let mut store: SqliteConfigStore = create_test_store();
    let missing: RecordId = RecordId::new(404);

    assert_eq!(
        store.parent_record_id(missing),
        Err(StoreError::NotFound(missing))
    );
    assert_eq!(
        store.child_record_ids(missing),
        Err(StoreError::NotFound(missing))
    );
    assert_eq!(
        store.record_detail(DETAIL_DESCRIPTION, missing),
        Err(StoreError::NotFound(missing))
    );
    assert_eq!(store.periods_config(missing), Err(StoreError::NotFound(missing)));
    assert_eq!(store.holidays_config(missing), Err(StoreError::NotFound(missing)));
}

#[test]
fn test_schedule_loads_from_sqlite() {
    let mut store: SqliteConfigStore = create_test_store();
    store
        .set_detail(PARENT, DETAIL_DESCRIPTION, "Main hall")
        .unwrap();

    let schedule: Schedule = Schedule::load(&mut store, PARENT, &clock_on(2024, 1, 10)).unwrap();

    assert!(schedule.is_parent());
    assert_eq!(schedule.periods().len(), 5);
    assert_eq!(schedule.holidays().len(), 1);
    assert_eq!(schedule.description(), "Main hall");
}

#[test]
fn test_schedule_resolves_parity_child_from_sqlite() {
    let mut store: SqliteConfigStore = create_test_store();
    let even: RecordId = add_child(&mut store, 10, 0, "even");
    let odd: RecordId = add_child(&mut store, 11, 1, "odd");

    // 2024-01-10 is in ISO week 2, 2024-01-17 in ISO week 3.
    let schedule: Schedule = Schedule::load(&mut store, PARENT, &clock_on(2024, 1, 10)).unwrap();
    assert_eq!(schedule.id(), even);

    let schedule: Schedule = Schedule::load(&mut store, PARENT, &clock_on(2024, 1, 17)).unwrap();
    assert_eq!(schedule.id(), odd);
    assert_eq!(schedule.periods().len(), 1);
}

#[test]
fn test_highest_menu_order_wins() {
    let mut store: SqliteConfigStore = create_test_store();
    let high: RecordId = add_child(&mut store, 10, 5, "even");
    add_child(&mut store, 11, 1, "even");

    let schedule: Schedule = Schedule::load(&mut store, PARENT, &clock_on(2024, 1, 10)).unwrap();
    assert_eq!(schedule.id(), high);
}

#[test]
fn test_schedule_for_unknown_record_fails() {
    let mut store: SqliteConfigStore = create_test_store();

    let result = Schedule::load(&mut store, RecordId::new(404), &clock_on(2024, 1, 10));
    assert_eq!(result, Err(CoreError::RecordNotFound(RecordId::new(404))));
}

#[test]
fn test_malformed_stored_period_is_skipped_on_load() {
    let mut store: SqliteConfigStore = create_test_store();
    store
        .set_periods_config(
            PARENT,
            &[
                RawPeriod::new("0", "09:00", "17:00"),
                RawPeriod::new("9", "09:00", "17:00"),
            ],
        )
        .unwrap();

    let schedule: Schedule = Schedule::load(&mut store, PARENT, &clock_on(2024, 1, 10)).unwrap();
    assert_eq!(schedule.periods().len(), 1);
    assert_eq!(schedule.skipped().len(), 1);
}
