// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` configuration store for opening-hours schedules.
//!
//! This crate implements [`ConfigStore`] on top of a Diesel-managed `SQLite`
//! database. The schema is created by embedded migrations and holds:
//!
//! - `records`: configuration records, optionally overriding a parent
//! - `record_details`: key/value metadata such as applicability criteria
//! - `period_configs` and `holiday_configs`: raw, unvalidated entries
//!
//! Raw entries are stored as text exactly as entered. Validation happens
//! when a schedule loads, so a malformed entry is skipped there instead of
//! being rejected here.
//!
//! ## Testing
//!
//! [`SqliteConfigStore::new_in_memory`] hands out an isolated shared-cache
//! database per call, so tests never observe each other's records.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use diesel::prelude::*;
use ophours::{ConfigStore, StoreError};
use ophours_domain::{RawHoliday, RawPeriod, RecordId};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{SeedFile, SeedRecord};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A [`ConfigStore`] backed by an `SQLite` database.
pub struct SqliteConfigStore {
    conn: SqliteConnection,
}

impl SqliteConfigStore {
    /// Creates a store over a fresh in-memory database.
    ///
    /// Each call receives its own database via an atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Opens, or creates, a file-based store.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Inserts a record.
    ///
    /// Siblings are returned by ascending `menu_order`, then identifier, so
    /// the sibling with the highest `menu_order` wins when several apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is taken, the parent does not
    /// exist, or the insert fails.
    pub fn insert_record(
        &mut self,
        record: RecordId,
        parent: Option<RecordId>,
        menu_order: i32,
        title: &str,
    ) -> Result<(), PersistenceError> {
        mutations::insert_record(&mut self.conn, record, parent, menu_order, title)
    }

    /// Inserts or replaces a detail value.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the write fails.
    pub fn set_detail(
        &mut self,
        record: RecordId,
        key: &str,
        value: &str,
    ) -> Result<(), PersistenceError> {
        mutations::upsert_detail(&mut self.conn, record, key, value)
    }

    /// Replaces the raw periods of a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the write fails.
    pub fn set_periods_config(
        &mut self,
        record: RecordId,
        periods: &[RawPeriod],
    ) -> Result<(), PersistenceError> {
        self.conn.transaction(|conn| mutations::replace_period_configs(conn, record, periods))
    }

    /// Replaces the raw holidays of a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the write fails.
    pub fn set_holidays_config(
        &mut self,
        record: RecordId,
        holidays: &[RawHoliday],
    ) -> Result<(), PersistenceError> {
        self.conn.transaction(|conn| mutations::replace_holiday_configs(conn, record, holidays))
    }

    /// Writes every record of a seed file in one transaction.
    ///
    /// Records may reference parents listed later in the file. Nothing is
    /// written if any record fails.
    ///
    /// # Returns
    ///
    /// The number of records imported.
    ///
    /// # Errors
    ///
    /// Returns an error if a record already exists, a parent is missing, or
    /// a write fails.
    pub fn import_seed(&mut self, seed: &SeedFile) -> Result<usize, PersistenceError> {
        let imported: usize = self.conn.transaction(|conn| {
            for record in &seed.records {
                mutations::insert_record(conn, record.id, None, record.menu_order, &record.title)?;
            }

            for record in &seed.records {
                if record.parent.is_some() {
                    mutations::update_parent(conn, record.id, record.parent)?;
                }
                for (key, value) in &record.details {
                    mutations::upsert_detail(conn, record.id, key, value)?;
                }
                mutations::replace_period_configs(conn, record.id, &record.periods)?;
                mutations::replace_holiday_configs(conn, record.id, &record.holidays)?;
            }

            Ok::<usize, PersistenceError>(seed.records.len())
        })?;

        info!("Imported {} record(s) from seed", imported);
        Ok(imported)
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_records(&mut self) -> Result<i64, PersistenceError> {
        queries::count_records(&mut self.conn)
    }
}

impl ConfigStore for SqliteConfigStore {
    fn child_record_ids(&mut self, parent: RecordId) -> Result<Vec<RecordId>, StoreError> {
        queries::require_record(&mut self.conn, parent)?;
        Ok(queries::list_child_ids(&mut self.conn, parent)?)
    }

    fn parent_record_id(&mut self, record: RecordId) -> Result<Option<RecordId>, StoreError> {
        queries::find_parent_id(&mut self.conn, record)?.ok_or(StoreError::NotFound(record))
    }

    fn record_detail(
        &mut self,
        key: &str,
        record: RecordId,
    ) -> Result<Option<String>, StoreError> {
        queries::require_record(&mut self.conn, record)?;
        Ok(queries::get_detail(&mut self.conn, record, key)?)
    }

    fn periods_config(&mut self, record: RecordId) -> Result<Vec<RawPeriod>, StoreError> {
        queries::require_record(&mut self.conn, record)?;
        Ok(queries::list_period_configs(&mut self.conn, record)?)
    }

    fn holidays_config(&mut self, record: RecordId) -> Result<Vec<RawHoliday>, StoreError> {
        queries::require_record(&mut self.conn, record)?;
        Ok(queries::list_holiday_configs(&mut self.conn, record)?)
    }
}
