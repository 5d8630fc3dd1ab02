// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record, detail, period and holiday mutations.
//!
//! Periods and holidays are written exactly as given, without validation,
//! so that malformed entries survive storage and are reported when a
//! schedule loads. Callers wrap multi-statement writes in a transaction.

use diesel::SqliteConnection;
use diesel::prelude::*;
use ophours_domain::{RawHoliday, RawPeriod, RecordId};
use tracing::{debug, info};

use crate::diesel_schema::{holiday_configs, period_configs, record_details, records};
use crate::error::PersistenceError;
use crate::queries::records::{find_parent_id, require_record};

/// Inserts a record with an explicit identifier.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `record` - The new record's identifier
/// * `parent` - The record it overrides, if any
/// * `menu_order` - Position among its siblings; higher values take precedence
/// * `title` - Display title
///
/// # Errors
///
/// Returns an error if:
/// - A record with this identifier already exists
/// - The parent does not exist
/// - The database insert fails
pub fn insert_record(
    conn: &mut SqliteConnection,
    record: RecordId,
    parent: Option<RecordId>,
    menu_order: i32,
    title: &str,
) -> Result<(), PersistenceError> {
    if find_parent_id(conn, record)?.is_some() {
        return Err(PersistenceError::DuplicateRecord(record));
    }
    if let Some(parent) = parent {
        require_record(conn, parent)?;
    }

    info!(
        "Creating record {} (parent: {:?}, menu_order: {})",
        record, parent, menu_order
    );

    diesel::insert_into(records::table)
        .values((
            records::record_id.eq(record.value()),
            records::parent_id.eq(parent.map(|p| p.value())),
            records::menu_order.eq(menu_order),
            records::title.eq(title),
        ))
        .execute(conn)?;

    Ok(())
}

/// Points an existing record at a new parent.
///
/// # Errors
///
/// Returns an error if either record does not exist or the update fails.
pub fn update_parent(
    conn: &mut SqliteConnection,
    record: RecordId,
    parent: Option<RecordId>,
) -> Result<(), PersistenceError> {
    require_record(conn, record)?;
    if let Some(parent) = parent {
        require_record(conn, parent)?;
    }

    diesel::update(records::table)
        .filter(records::record_id.eq(record.value()))
        .set(records::parent_id.eq(parent.map(|p| p.value())))
        .execute(conn)?;

    Ok(())
}

/// Inserts or replaces one detail value of a record.
///
/// # Errors
///
/// Returns an error if the record does not exist or the write fails.
pub fn upsert_detail(
    conn: &mut SqliteConnection,
    record: RecordId,
    key: &str,
    value: &str,
) -> Result<(), PersistenceError> {
    require_record(conn, record)?;
    debug!("Setting detail '{}' on record {}", key, record);

    diesel::replace_into(record_details::table)
        .values((
            record_details::record_id.eq(record.value()),
            record_details::detail_key.eq(key),
            record_details::detail_value.eq(value),
        ))
        .execute(conn)?;

    Ok(())
}

/// Replaces all raw periods of a record, keeping the given order.
///
/// # Errors
///
/// Returns an error if the record does not exist or a write fails.
pub fn replace_period_configs(
    conn: &mut SqliteConnection,
    record: RecordId,
    periods: &[RawPeriod],
) -> Result<(), PersistenceError> {
    require_record(conn, record)?;

    diesel::delete(period_configs::table.filter(period_configs::record_id.eq(record.value())))
        .execute(conn)?;

    for (index, raw) in periods.iter().enumerate() {
        diesel::insert_into(period_configs::table)
            .values((
                period_configs::record_id.eq(record.value()),
                period_configs::position.eq(position(index)?),
                period_configs::weekday.eq(raw.weekday.as_deref()),
                period_configs::time_start.eq(raw.time_start.as_deref()),
                period_configs::time_end.eq(raw.time_end.as_deref()),
            ))
            .execute(conn)?;
    }

    debug!("Stored {} period(s) for record {}", periods.len(), record);
    Ok(())
}

/// Replaces all raw holidays of a record, keeping the given order.
///
/// # Errors
///
/// Returns an error if the record does not exist or a write fails.
pub fn replace_holiday_configs(
    conn: &mut SqliteConnection,
    record: RecordId,
    holidays: &[RawHoliday],
) -> Result<(), PersistenceError> {
    require_record(conn, record)?;

    diesel::delete(holiday_configs::table.filter(holiday_configs::record_id.eq(record.value())))
        .execute(conn)?;

    for (index, raw) in holidays.iter().enumerate() {
        diesel::insert_into(holiday_configs::table)
            .values((
                holiday_configs::record_id.eq(record.value()),
                holiday_configs::position.eq(position(index)?),
                holiday_configs::name.eq(raw.name.as_deref()),
                holiday_configs::date_start.eq(raw.date_start.as_deref()),
                holiday_configs::date_end.eq(raw.date_end.as_deref()),
            ))
            .execute(conn)?;
    }

    debug!("Stored {} holiday(s) for record {}", holidays.len(), record);
    Ok(())
}

fn position(index: usize) -> Result<i32, PersistenceError> {
    i32::try_from(index)
        .map_err(|_| PersistenceError::QueryFailed(format!("Too many entries: {index}")))
}
