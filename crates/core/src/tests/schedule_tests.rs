// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    PARENT, at, clock_at, create_test_store, date, holiday, monday_schedule, period,
};
use crate::{InMemoryConfigStore, Schedule};
use chrono::{NaiveTime, Timelike, Weekday};
use ophours_domain::{DomainError, Holiday, Period, RawHoliday, RawPeriod, WeekdaySet};

fn weekday_schedule() -> Schedule {
    let mut store: InMemoryConfigStore = create_test_store();
    Schedule::load(&mut store, PARENT, &clock_at(2024, 1, 10, 12, 0)).unwrap()
}

#[test]
fn test_is_open_within_period() {
    let schedule: Schedule = monday_schedule();

    assert!(schedule.is_open(at(2024, 1, 8, 9, 0)));
    assert!(schedule.is_open(at(2024, 1, 8, 12, 30)));
    assert!(schedule.is_open(at(2024, 1, 8, 17, 0)));
}

#[test]
fn test_is_closed_outside_periods() {
    let schedule: Schedule = monday_schedule();

    assert!(!schedule.is_open(at(2024, 1, 8, 8, 59)));
    assert!(!schedule.is_open(at(2024, 1, 8, 17, 1)));
    assert!(!schedule.is_open(at(2024, 1, 9, 12, 0)));
}

#[test]
fn test_is_open_now_uses_clock() {
    let schedule: Schedule = monday_schedule();

    assert!(schedule.is_open_now(&clock_at(2024, 1, 15, 10, 0)));
    assert!(!schedule.is_open_now(&clock_at(2024, 1, 14, 10, 0)));
}

#[test]
fn test_holiday_closes_schedule() {
    let schedule: Schedule = weekday_schedule();
    let christmas = at(2024, 12, 25, 10, 0);

    assert!(schedule.is_open_opening_hours(christmas));
    assert!(!schedule.is_open(christmas));
    assert_eq!(
        schedule.current_holiday(christmas.date()).map(Holiday::name),
        Some("Christmas")
    );

    assert!(schedule.is_open(at(2024, 12, 27, 10, 0)));
    assert_eq!(schedule.current_holiday(date(2024, 12, 27)), None);
}

#[test]
fn test_periods_by_single_day() {
    let schedule: Schedule = Schedule::from_parts(
        PARENT,
        vec![
            period(Weekday::Tue, (14, 0), (18, 0)),
            period(Weekday::Mon, (9, 0), (12, 0)),
            period(Weekday::Tue, (8, 0), (12, 0)),
        ],
        Vec::new(),
    );

    let tuesday: Vec<&Period> = schedule.periods_by_day(Weekday::Tue);
    assert_eq!(tuesday.len(), 2);
    assert_eq!(tuesday[0].time_start(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    assert_eq!(tuesday[1].time_start(), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
}

#[test]
fn test_periods_by_multiple_days() {
    let schedule: Schedule = weekday_schedule();

    let days: Vec<&Period> = schedule.periods_by_day([Weekday::Fri, Weekday::Mon]);
    let weekdays: Vec<Weekday> = days.iter().map(|p| p.weekday()).collect();
    assert_eq!(weekdays, vec![Weekday::Mon, Weekday::Fri]);

    assert_eq!(schedule.periods_by_day(vec![Weekday::Sat, Weekday::Sun]).len(), 0);
    assert_eq!(schedule.periods_by_day(WeekdaySet::ALL).len(), 5);
}

#[test]
fn test_periods_by_empty_selection() {
    let schedule: Schedule = weekday_schedule();
    assert!(schedule.periods_by_day(WeekdaySet::EMPTY).is_empty());
    assert!(schedule.periods_by_day(Vec::<Weekday>::new()).is_empty());
}

#[test]
fn test_grouped_by_day_has_every_weekday() {
    let schedule: Schedule = weekday_schedule();
    let grouped = schedule.periods_grouped_by_day();

    let keys: Vec<Weekday> = grouped.iter().map(|(day, _)| *day).collect();
    assert_eq!(
        keys,
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
    );
    assert_eq!(grouped[0].1.len(), 1);
    assert!(grouped[5].1.is_empty());
    assert!(grouped[6].1.is_empty());
}

#[test]
fn test_add_dummy_periods_fills_empty_days() {
    let mut schedule: Schedule = weekday_schedule();
    schedule.add_dummy_periods();

    for (_, periods) in schedule.periods_grouped_by_day() {
        assert!(!periods.is_empty());
    }

    let weekend: Vec<&Period> = schedule.periods_by_day([Weekday::Sat, Weekday::Sun]);
    assert_eq!(weekend.len(), 2);
    assert!(weekend.iter().all(|p| p.is_dummy()));
    assert!(!schedule.is_open(at(2024, 1, 13, 0, 0)));

    // Days with real periods get no placeholder.
    assert_eq!(schedule.periods_by_day(Weekday::Mon).len(), 1);
}

#[test]
fn test_add_dummy_periods_is_idempotent() {
    let mut schedule: Schedule = monday_schedule();
    schedule.add_dummy_periods();
    let once: Vec<Period> = schedule.periods().to_vec();

    schedule.add_dummy_periods();
    assert_eq!(schedule.periods(), once.as_slice());
}

#[test]
fn test_from_parts_sorts_entries() {
    let schedule: Schedule = Schedule::from_parts(
        PARENT,
        vec![
            period(Weekday::Sun, (9, 0), (10, 0)),
            period(Weekday::Mon, (13, 0), (14, 0)),
            period(Weekday::Mon, (9, 0), (10, 0)),
        ],
        vec![
            holiday("Later", date(2024, 5, 1), date(2024, 5, 1)),
            holiday("Sooner", date(2024, 1, 1), date(2024, 1, 2)),
        ],
    );

    let starts: Vec<(Weekday, u32)> = schedule
        .periods()
        .iter()
        .map(|p| (p.weekday(), p.time_start().hour()))
        .collect();
    assert_eq!(
        starts,
        vec![(Weekday::Mon, 9), (Weekday::Mon, 13), (Weekday::Sun, 9)]
    );
    assert_eq!(schedule.holidays()[0].name(), "Sooner");
}

#[test]
fn test_with_description() {
    let schedule: Schedule = monday_schedule().with_description("Front desk");
    assert_eq!(schedule.description(), "Front desk");
}

#[test]
fn test_invalid_entries_are_skipped() {
    let mut store: InMemoryConfigStore = create_test_store();
    store
        .set_periods(
            PARENT,
            vec![
                RawPeriod::new("0", "09:00", "17:00"),
                RawPeriod::new("7", "09:00", "17:00"),
                RawPeriod::new("1", "17:00", "09:00"),
                RawPeriod::new("2", "nine", "17:00"),
                RawPeriod {
                    weekday: Some(String::from("3")),
                    time_start: None,
                    time_end: Some(String::from("17:00")),
                },
            ],
        )
        .unwrap();
    store
        .set_holidays(
            PARENT,
            vec![
                RawHoliday::new("Christmas", "2024-12-24", "2024-12-26"),
                RawHoliday::new("Backwards", "2024-05-02", "2024-05-01"),
            ],
        )
        .unwrap();

    let schedule: Schedule =
        Schedule::load(&mut store, PARENT, &clock_at(2024, 1, 10, 12, 0)).unwrap();

    assert_eq!(schedule.periods().len(), 1);
    assert_eq!(schedule.holidays().len(), 1);
    assert_eq!(schedule.skipped().len(), 5);
    assert!(matches!(schedule.skipped()[0], DomainError::InvalidWeekday(_)));
    assert!(matches!(
        schedule.skipped()[1],
        DomainError::InvertedTimeRange { .. }
    ));
    assert!(matches!(schedule.skipped()[2], DomainError::InvalidTime { .. }));
    assert!(matches!(
        schedule.skipped()[3],
        DomainError::MissingField {
            record: "period",
            field: "timeStart"
        }
    ));
    assert!(matches!(
        schedule.skipped()[4],
        DomainError::InvertedDateRange { .. }
    ));
}
