// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PersistenceError, SeedFile, SqliteConfigStore};
use ophours::ConfigStore;
use ophours_domain::{RawPeriod, RecordId};

const SEED: &str = r#"{
  "records": [
    {
      "id": 2,
      "parent": 1,
      "menuOrder": 1,
      "title": "Odd weeks",
      "details": { "week-scheme": "odd" },
      "periods": [{ "weekday": "5", "timeStart": "10:00", "timeEnd": "12:00" }]
    },
    {
      "id": 1,
      "title": "Library",
      "details": { "description": "Main hall" },
      "periods": [
        { "weekday": "0", "timeStart": "09:00", "timeEnd": "17:00" },
        { "weekday": "2", "timeStart": "09:00" }
      ],
      "holidays": [{ "name": "Christmas", "dateStart": "2024-12-24", "dateEnd": "2024-12-26" }]
    }
  ]
}"#;

#[test]
fn test_parse_seed_defaults() {
    let seed: SeedFile = SeedFile::from_json(SEED).unwrap();

    assert_eq!(seed.records.len(), 2);
    assert_eq!(seed.records[0].parent, Some(RecordId::new(1)));
    assert_eq!(seed.records[0].menu_order, 1);
    assert_eq!(seed.records[1].parent, None);
    assert_eq!(seed.records[1].menu_order, 0);
    assert_eq!(seed.records[1].periods[1].time_end, None);
}

#[test]
fn test_parse_malformed_seed_fails() {
    let result = SeedFile::from_json("{ \"records\": [ { \"title\": \"No id\" } ] }");
    assert!(matches!(result, Err(PersistenceError::SerializationError(_))));
}

#[test]
fn test_import_seed_with_child_listed_first() {
    let mut store: SqliteConfigStore = SqliteConfigStore::new_in_memory().unwrap();
    let seed: SeedFile = SeedFile::from_json(SEED).unwrap();

    assert_eq!(store.import_seed(&seed).unwrap(), 2);

    let parent: RecordId = RecordId::new(1);
    assert_eq!(store.child_record_ids(parent).unwrap(), vec![RecordId::new(2)]);
    assert_eq!(
        store.record_detail("description", parent).unwrap(),
        Some(String::from("Main hall"))
    );
    assert_eq!(store.periods_config(parent).unwrap().len(), 2);
    assert_eq!(
        store.periods_config(RecordId::new(2)).unwrap(),
        vec![RawPeriod::new("5", "10:00", "12:00")]
    );
    assert_eq!(store.holidays_config(parent).unwrap().len(), 1);
}

#[test]
fn test_failed_import_writes_nothing() {
    let mut store: SqliteConfigStore = SqliteConfigStore::new_in_memory().unwrap();
    let mut seed: SeedFile = SeedFile::from_json(SEED).unwrap();
    seed.records[0].parent = Some(RecordId::new(42));

    assert_eq!(
        store.import_seed(&seed),
        Err(PersistenceError::RecordNotFound(RecordId::new(42)))
    );
    assert_eq!(store.count_records().unwrap(), 0);
}

#[test]
fn test_seed_json_round_trip() {
    let seed: SeedFile = SeedFile::from_json(SEED).unwrap();
    let json: String = seed.to_json().unwrap();
    assert_eq!(SeedFile::from_json(&json).unwrap(), seed);
}
