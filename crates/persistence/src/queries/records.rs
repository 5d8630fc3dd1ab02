// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record, detail, period and holiday queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use ophours_domain::{RawHoliday, RawPeriod, RecordId};
use tracing::debug;

use crate::diesel_schema::{holiday_configs, period_configs, record_details, records};
use crate::error::PersistenceError;

/// Diesel Queryable struct for stored period rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = period_configs)]
struct PeriodConfigRow {
    weekday: Option<String>,
    time_start: Option<String>,
    time_end: Option<String>,
}

/// Diesel Queryable struct for stored holiday rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = holiday_configs)]
struct HolidayConfigRow {
    name: Option<String>,
    date_start: Option<String>,
    date_end: Option<String>,
}

/// Looks up the parent column of a record.
///
/// Returns `Ok(None)` if the record does not exist and `Ok(Some(None))` for
/// a top-level record.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_parent_id(
    conn: &mut SqliteConnection,
    record: RecordId,
) -> Result<Option<Option<RecordId>>, PersistenceError> {
    let parent: Option<Option<i64>> = records::table
        .filter(records::record_id.eq(record.value()))
        .select(records::parent_id)
        .first::<Option<i64>>(conn)
        .optional()?;

    Ok(parent.map(|p| p.map(RecordId::new)))
}

/// Fails with `RecordNotFound` unless `record` exists.
///
/// # Errors
///
/// Returns an error if the record does not exist or the query fails.
pub fn require_record(
    conn: &mut SqliteConnection,
    record: RecordId,
) -> Result<(), PersistenceError> {
    let count: i64 = records::table
        .filter(records::record_id.eq(record.value()))
        .count()
        .get_result(conn)?;

    if count == 0 {
        return Err(PersistenceError::RecordNotFound(record));
    }
    Ok(())
}

/// Lists the children of `parent` by menu order, then identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_child_ids(
    conn: &mut SqliteConnection,
    parent: RecordId,
) -> Result<Vec<RecordId>, PersistenceError> {
    debug!("Listing child records of {}", parent);

    let ids: Vec<i64> = records::table
        .filter(records::parent_id.eq(parent.value()))
        .order((records::menu_order.asc(), records::record_id.asc()))
        .select(records::record_id)
        .load(conn)?;

    Ok(ids.into_iter().map(RecordId::new).collect())
}

/// Reads one detail value of a record.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_detail(
    conn: &mut SqliteConnection,
    record: RecordId,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    Ok(record_details::table
        .filter(record_details::record_id.eq(record.value()))
        .filter(record_details::detail_key.eq(key))
        .select(record_details::detail_value)
        .first::<String>(conn)
        .optional()?)
}

/// Reads the raw periods of a record in entry order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_period_configs(
    conn: &mut SqliteConnection,
    record: RecordId,
) -> Result<Vec<RawPeriod>, PersistenceError> {
    let rows: Vec<PeriodConfigRow> = period_configs::table
        .filter(period_configs::record_id.eq(record.value()))
        .order(period_configs::position.asc())
        .select(PeriodConfigRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| RawPeriod {
            weekday: row.weekday,
            time_start: row.time_start,
            time_end: row.time_end,
        })
        .collect())
}

/// Reads the raw holidays of a record in entry order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_holiday_configs(
    conn: &mut SqliteConnection,
    record: RecordId,
) -> Result<Vec<RawHoliday>, PersistenceError> {
    let rows: Vec<HolidayConfigRow> = holiday_configs::table
        .filter(holiday_configs::record_id.eq(record.value()))
        .order(holiday_configs::position.asc())
        .select(HolidayConfigRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| RawHoliday {
            name: row.name,
            date_start: row.date_start,
            date_end: row.date_end,
        })
        .collect())
}

/// Counts all stored records.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_records(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(records::table.count().get_result(conn)?)
}
