// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.

use crate::{PersistenceError, SqliteConfigStore};
use ophours_domain::RecordId;

#[test]
fn test_store_initialization() {
    let result: Result<SqliteConfigStore, PersistenceError> = SqliteConfigStore::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_keys_are_enforced() {
    let mut store: SqliteConfigStore = SqliteConfigStore::new_in_memory().unwrap();
    assert!(store.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: SqliteConfigStore = SqliteConfigStore::new_in_memory().unwrap();
    let mut db2: SqliteConfigStore = SqliteConfigStore::new_in_memory().unwrap();

    db1.insert_record(RecordId::new(1), None, 0, "Library").unwrap();

    assert_eq!(db1.count_records().unwrap(), 1, "db1 should have 1 record");
    assert_eq!(db2.count_records().unwrap(), 0, "db2 should be isolated");
}

#[test]
fn test_file_store_persists_between_connections() {
    let path = std::env::temp_dir().join(format!(
        "ophours_persistence_test_{}.sqlite",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut store: SqliteConfigStore = SqliteConfigStore::new_with_file(&path).unwrap();
        store.insert_record(RecordId::new(7), None, 0, "Pool").unwrap();
    }

    let mut reopened: SqliteConfigStore = SqliteConfigStore::new_with_file(&path).unwrap();
    assert_eq!(reopened.count_records().unwrap(), 1);

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}
