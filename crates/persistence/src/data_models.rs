// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ophours_domain::{RawHoliday, RawPeriod, RecordId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::PersistenceError;

/// Serializable representation of a seed file.
///
/// ```json
/// {
///   "records": [
///     { "id": 1, "title": "Library", "details": { "description": "Main hall" },
///       "periods": [{ "weekday": "0", "timeStart": "09:00", "timeEnd": "17:00" }] },
///     { "id": 2, "parent": 1, "details": { "week-scheme": "odd" } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    pub records: Vec<SeedRecord>,
}

/// Serializable representation of one record in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    pub id: RecordId,
    #[serde(default)]
    pub parent: Option<RecordId>,
    #[serde(default)]
    pub menu_order: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
    #[serde(default)]
    pub periods: Vec<RawPeriod>,
    #[serde(default)]
    pub holidays: Vec<RawHoliday>,
}

impl SeedFile {
    /// Parses a seed file from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the seed file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError` if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
