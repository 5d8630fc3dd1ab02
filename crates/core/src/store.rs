// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The configuration store interface consumed by schedule loading.

use crate::error::StoreError;
use ophours_domain::{RawHoliday, RawPeriod, RecordId};
use std::collections::HashMap;

/// Detail key holding the first day a child record applies.
pub const DETAIL_DATE_START: &str = "date-start";
/// Detail key holding the last day a child record applies.
pub const DETAIL_DATE_END: &str = "date-end";
/// Detail key holding the week parity of a child record.
pub const DETAIL_WEEK_SCHEME: &str = "week-scheme";
/// Detail key holding the human-readable description.
pub const DETAIL_DESCRIPTION: &str = "description";

/// Read access to raw schedule configuration.
///
/// Implementations are synchronous and perform no retries. Every method
/// returns `StoreError::NotFound` when `record` does not exist.
pub trait ConfigStore {
    /// Returns the direct children of `parent` in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent does not exist or the store fails.
    fn child_record_ids(&mut self, parent: RecordId) -> Result<Vec<RecordId>, StoreError>;

    /// Returns the parent of `record`, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the store fails.
    fn parent_record_id(&mut self, record: RecordId) -> Result<Option<RecordId>, StoreError>;

    /// Returns a detail value of `record`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the store fails.
    fn record_detail(&mut self, key: &str, record: RecordId)
    -> Result<Option<String>, StoreError>;

    /// Returns the raw periods of `record`; empty if none are configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the store fails.
    fn periods_config(&mut self, record: RecordId) -> Result<Vec<RawPeriod>, StoreError>;

    /// Returns the raw holidays of `record`; empty if none are configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the store fails.
    fn holidays_config(&mut self, record: RecordId) -> Result<Vec<RawHoliday>, StoreError>;
}

/// One record held by an [`InMemoryConfigStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredRecord {
    /// Parent record, if any.
    pub parent: Option<RecordId>,
    /// Key/value details.
    pub details: HashMap<String, String>,
    /// Raw periods.
    pub periods: Vec<RawPeriod>,
    /// Raw holidays.
    pub holidays: Vec<RawHoliday>,
}

/// A `ConfigStore` backed by plain maps.
///
/// Children are returned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    records: HashMap<RecordId, StoredRecord>,
    order: Vec<RecordId>,
}

impl InMemoryConfigStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record.
    pub fn insert(&mut self, id: RecordId, record: StoredRecord) {
        if self.records.insert(id, record).is_none() {
            self.order.push(id);
        }
    }

    /// Inserts a top-level record without details.
    pub fn insert_root(&mut self, id: RecordId) {
        self.insert(id, StoredRecord::default());
    }

    /// Inserts an empty child record under `parent`.
    pub fn insert_child(&mut self, id: RecordId, parent: RecordId) {
        self.insert(
            id,
            StoredRecord {
                parent: Some(parent),
                ..StoredRecord::default()
            },
        );
    }

    /// Sets a detail value on an existing record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the record does not exist.
    pub fn set_detail(&mut self, id: RecordId, key: &str, value: &str) -> Result<(), StoreError> {
        self.record_mut(id)?
            .details
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Replaces the raw periods of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the record does not exist.
    pub fn set_periods(&mut self, id: RecordId, periods: Vec<RawPeriod>) -> Result<(), StoreError> {
        self.record_mut(id)?.periods = periods;
        Ok(())
    }

    /// Replaces the raw holidays of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the record does not exist.
    pub fn set_holidays(
        &mut self,
        id: RecordId,
        holidays: Vec<RawHoliday>,
    ) -> Result<(), StoreError> {
        self.record_mut(id)?.holidays = holidays;
        Ok(())
    }

    fn record(&self, id: RecordId) -> Result<&StoredRecord, StoreError> {
        self.records.get(&id).ok_or(StoreError::NotFound(id))
    }

    fn record_mut(&mut self, id: RecordId) -> Result<&mut StoredRecord, StoreError> {
        self.records.get_mut(&id).ok_or(StoreError::NotFound(id))
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn child_record_ids(&mut self, parent: RecordId) -> Result<Vec<RecordId>, StoreError> {
        self.record(parent)?;
        Ok(self
            .order
            .iter()
            .copied()
            .filter(|id| {
                self.records
                    .get(id)
                    .is_some_and(|record| record.parent == Some(parent))
            })
            .collect())
    }

    fn parent_record_id(&mut self, record: RecordId) -> Result<Option<RecordId>, StoreError> {
        Ok(self.record(record)?.parent)
    }

    fn record_detail(
        &mut self,
        key: &str,
        record: RecordId,
    ) -> Result<Option<String>, StoreError> {
        Ok(self.record(record)?.details.get(key).cloned())
    }

    fn periods_config(&mut self, record: RecordId) -> Result<Vec<RawPeriod>, StoreError> {
        Ok(self.record(record)?.periods.clone())
    }

    fn holidays_config(&mut self, record: RecordId) -> Result<Vec<RawHoliday>, StoreError> {
        Ok(self.record(record)?.holidays.clone())
    }
}
