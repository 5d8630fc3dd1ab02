// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule loading and queries.
//!
//! A `Schedule` is built for one record. Loading:
//!
//! 1. Reads the record's children and their applicability criteria
//! 2. Resolves the active record (the last applicable child, else the record)
//! 3. Loads and validates the active record's periods and holidays
//! 4. Resolves the description, falling back to the requested record's
//!
//! Malformed raw periods, holidays and criteria are skipped with a warning.
//! Store failures, including unknown records, abort loading.

use crate::clock::Clock;
use crate::error::CoreError;
use crate::occurrence::{MAX_WEEK_OFFSET, NextOpening, Occurrences};
use crate::store::{
    ConfigStore, DETAIL_DATE_END, DETAIL_DATE_START, DETAIL_DESCRIPTION, DETAIL_WEEK_SCHEME,
};
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use ophours_domain::{
    ApplicabilityCriteria, CandidateRecord, DomainError, Holiday, Period, RecordId, WEEKDAYS,
    WeekdaySet, resolve_active_record,
};
use tracing::{debug, warn};

/// Opening periods and holidays of one resource, after override resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// The active record.
    id: RecordId,
    /// The record this schedule was requested for.
    parent_id: RecordId,
    /// Periods, sorted by weekday and start time.
    periods: Vec<Period>,
    /// Holidays, sorted by start date.
    holidays: Vec<Holiday>,
    /// Description of the active record, else of the requested record.
    description: String,
    /// Whether the requested record is itself a child record.
    has_parent: bool,
    /// Validation errors of raw entries skipped while loading.
    skipped: Vec<DomainError>,
}

impl Schedule {
    /// Loads the schedule for `record`.
    ///
    /// # Arguments
    ///
    /// * `store` - The configuration store
    /// * `record` - The record the schedule is requested for
    /// * `clock` - Supplies today's date and week number for override
    ///   resolution
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record, or one of its children, does not exist
    /// - The store fails
    pub fn load<S, C>(store: &mut S, record: RecordId, clock: &C) -> Result<Self, CoreError>
    where
        S: ConfigStore + ?Sized,
        C: Clock + ?Sized,
    {
        let has_parent: bool = store.parent_record_id(record)?.is_some();
        let candidates: Vec<CandidateRecord> = load_candidates(store, record)?;

        let today: NaiveDate = clock.today();
        let week: u32 = clock.iso_week_number(today);
        let active: RecordId = resolve_active_record(record, &candidates, today, week);
        debug!(
            "Resolved active record {} for record {} on {} (week {})",
            active, record, today, week
        );

        let mut schedule: Self = Self {
            id: active,
            parent_id: record,
            periods: Vec::new(),
            holidays: Vec::new(),
            description: String::new(),
            has_parent,
            skipped: Vec::new(),
        };

        schedule.load_periods(store)?;
        schedule.load_holidays(store)?;
        schedule.description = resolve_description(store, active, record)?;

        Ok(schedule)
    }

    /// Loads one independent schedule per record.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn load_many<S, C>(
        store: &mut S,
        records: &[RecordId],
        clock: &C,
    ) -> Result<Vec<Self>, CoreError>
    where
        S: ConfigStore + ?Sized,
        C: Clock + ?Sized,
    {
        records
            .iter()
            .map(|record| Self::load(store, *record, clock))
            .collect()
    }

    /// Builds a schedule directly from validated entries, without a store.
    ///
    /// The schedule is its own parent and has no description.
    #[must_use]
    pub fn from_parts(record: RecordId, periods: Vec<Period>, holidays: Vec<Holiday>) -> Self {
        let mut schedule: Self = Self {
            id: record,
            parent_id: record,
            periods,
            holidays,
            description: String::new(),
            has_parent: false,
            skipped: Vec::new(),
        };
        schedule.sort_periods();
        schedule.sort_holidays();
        schedule
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn load_periods<S: ConfigStore + ?Sized>(&mut self, store: &mut S) -> Result<(), CoreError> {
        for raw in store.periods_config(self.id)? {
            match Period::from_raw(&raw) {
                Ok(period) => self.periods.push(period),
                Err(err) => {
                    warn!("Skipping invalid period in record {}: {}", self.id, err);
                    self.skipped.push(err);
                }
            }
        }

        self.sort_periods();
        Ok(())
    }

    fn load_holidays<S: ConfigStore + ?Sized>(&mut self, store: &mut S) -> Result<(), CoreError> {
        for raw in store.holidays_config(self.id)? {
            match Holiday::from_raw(&raw) {
                Ok(holiday) => self.holidays.push(holiday),
                Err(err) => {
                    warn!("Skipping invalid holiday in record {}: {}", self.id, err);
                    self.skipped.push(err);
                }
            }
        }

        self.sort_holidays();
        Ok(())
    }

    /// Returns the active record.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the record this schedule was requested for.
    #[must_use]
    pub const fn parent_id(&self) -> RecordId {
        self.parent_id
    }

    /// Returns whether no override is active.
    #[must_use]
    pub fn is_parent(&self) -> bool {
        self.id == self.parent_id
    }

    /// Returns whether the requested record is itself a child record.
    #[must_use]
    pub const fn has_parent(&self) -> bool {
        self.has_parent
    }

    /// Returns the description, or an empty string.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns all periods in weekly agenda order.
    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Returns all holidays ordered by start date.
    #[must_use]
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the validation errors of entries skipped while loading.
    #[must_use]
    pub fn skipped(&self) -> &[DomainError] {
        &self.skipped
    }

    /// Sorts periods by weekday, then start time.
    pub fn sort_periods(&mut self) {
        self.periods.sort_by(Period::sort_strategy);
    }

    /// Sorts holidays by start date.
    pub fn sort_holidays(&mut self) {
        self.holidays.sort_by(Holiday::sort_strategy);
    }

    /// Returns whether any regular period is open at `now`, ignoring holidays.
    #[must_use]
    pub fn is_open_opening_hours(&self, now: NaiveDateTime) -> bool {
        self.periods.iter().any(|period| period.is_open_at(now))
    }

    /// Returns whether the resource is open at `now`.
    ///
    /// A holiday covering `now`'s date closes the resource regardless of
    /// its periods.
    #[must_use]
    pub fn is_open(&self, now: NaiveDateTime) -> bool {
        if self.current_holiday(now.date()).is_some() {
            return false;
        }

        self.is_open_opening_hours(now)
    }

    /// Returns whether the resource is open at the clock's current instant.
    #[must_use]
    pub fn is_open_now<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.is_open(clock.now())
    }

    /// Returns the first holiday containing `date`.
    #[must_use]
    pub fn current_holiday(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|holiday| holiday.contains(date))
    }

    /// Returns the periods falling on any of `days`, in agenda order.
    ///
    /// Accepts a single weekday or a collection of weekdays. An empty
    /// selection yields an empty result.
    #[must_use]
    pub fn periods_by_day(&self, days: impl Into<WeekdaySet>) -> Vec<&Period> {
        let days: WeekdaySet = days.into();
        self.periods
            .iter()
            .filter(|period| days.contains(period.weekday()))
            .collect()
    }

    /// Returns the periods of every weekday, Monday first.
    ///
    /// All seven weekdays are present; days without periods map to an empty
    /// list.
    #[must_use]
    pub fn periods_grouped_by_day(&self) -> [(Weekday, Vec<&Period>); 7] {
        std::array::from_fn(|i| {
            let weekday: Weekday = WEEKDAYS[i].weekday;
            (weekday, self.periods_by_day(weekday))
        })
    }

    /// Adds a placeholder period to every weekday without periods.
    ///
    /// Afterwards every weekday has at least one period. Placeholders are
    /// never open and never count as an opening.
    pub fn add_dummy_periods(&mut self) {
        for entry in &WEEKDAYS {
            if self.periods_by_day(entry.weekday).is_empty() {
                self.periods.push(Period::dummy(entry.weekday));
            }
        }

        self.sort_periods();
    }

    /// Returns the future occurrences of this schedule's periods after `now`.
    #[must_use]
    pub fn occurrences(&self, now: NaiveDateTime) -> Occurrences<'_> {
        Occurrences::new(&self.periods, now)
    }

    /// Returns the soonest period occurrence starting strictly after `now`.
    ///
    /// Holidays are not considered; see
    /// [`Schedule::next_opening_outside_holidays`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoPeriodsDefined` if the schedule has no
    /// opening periods.
    pub fn next_open_period(&self, now: NaiveDateTime) -> Result<NextOpening<'_>, CoreError> {
        let mut occurrences: Occurrences<'_> = self.occurrences(now);

        match occurrences.next() {
            Some(opening) if occurrences.week_offset() <= MAX_WEEK_OFFSET => Ok(opening),
            _ => Err(CoreError::NoPeriodsDefined { record: self.id }),
        }
    }

    /// Returns the next opening after the clock's current instant.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoPeriodsDefined` if the schedule has no
    /// opening periods.
    pub fn next_open_period_from<C: Clock + ?Sized>(
        &self,
        clock: &C,
    ) -> Result<NextOpening<'_>, CoreError> {
        self.next_open_period(clock.now())
    }

    /// Returns the soonest occurrence after `now` that is not on a holiday.
    ///
    /// When an occurrence falls on a holiday, the search resumes after the
    /// last day of that holiday.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The schedule has no opening periods (`CoreError::NoPeriodsDefined`)
    /// - Every occurrence up to the end of the supported date range falls
    ///   on a holiday (`CoreError::NoOpeningOutsideHolidays`)
    pub fn next_opening_outside_holidays(
        &self,
        now: NaiveDateTime,
    ) -> Result<NextOpening<'_>, CoreError> {
        if self.periods.iter().all(Period::is_dummy) {
            return Err(CoreError::NoPeriodsDefined { record: self.id });
        }

        let exhausted: CoreError = CoreError::NoOpeningOutsideHolidays { record: self.id };
        let mut after: NaiveDateTime = now;

        loop {
            let opening: NextOpening<'_> =
                self.occurrences(after).next().ok_or_else(|| exhausted.clone())?;
            let Some(holiday) = self.current_holiday(opening.start.date()) else {
                return Ok(opening);
            };

            debug!(
                "Opening at {} falls on holiday {}; resuming after {}",
                opening.start,
                holiday.name(),
                holiday.date_end()
            );
            after = holiday
                .date_end()
                .and_hms_opt(23, 59, 59)
                .ok_or_else(|| exhausted.clone())?;
        }
    }
}

/// Reads the children of `parent` and their applicability criteria.
///
/// Children whose criteria cannot be parsed are skipped.
fn load_candidates<S: ConfigStore + ?Sized>(
    store: &mut S,
    parent: RecordId,
) -> Result<Vec<CandidateRecord>, CoreError> {
    let mut candidates: Vec<CandidateRecord> = Vec::new();

    for child in store.child_record_ids(parent)? {
        let date_start: Option<String> = store.record_detail(DETAIL_DATE_START, child)?;
        let date_end: Option<String> = store.record_detail(DETAIL_DATE_END, child)?;
        let week_scheme: Option<String> = store.record_detail(DETAIL_WEEK_SCHEME, child)?;

        match ApplicabilityCriteria::from_details(
            date_start.as_deref(),
            date_end.as_deref(),
            week_scheme.as_deref(),
        ) {
            Ok(criteria) => {
                if !criteria.is_scoped() {
                    debug!("Child record {} declares no criteria; ignoring", child);
                }
                candidates.push(CandidateRecord::new(child, criteria));
            }
            Err(err) => {
                warn!("Ignoring child record {} with invalid criteria: {}", child, err);
            }
        }
    }

    Ok(candidates)
}

/// Returns the active record's description, else the parent's, else empty.
fn resolve_description<S: ConfigStore + ?Sized>(
    store: &mut S,
    active: RecordId,
    parent: RecordId,
) -> Result<String, CoreError> {
    if let Some(description) = store
        .record_detail(DETAIL_DESCRIPTION, active)?
        .filter(|d| !d.is_empty())
    {
        return Ok(description);
    }

    Ok(store
        .record_detail(DETAIL_DESCRIPTION, parent)?
        .filter(|d| !d.is_empty())
        .unwrap_or_default())
}
