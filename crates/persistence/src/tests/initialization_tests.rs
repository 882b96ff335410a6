// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.

use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_keys_are_enforced() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    super::save_test_squad(&mut db1, "Colts", "U16");

    assert_eq!(db1.list_squads().unwrap().len(), 1);
    assert!(db2.list_squads().unwrap().is_empty());
}

#[test]
fn test_file_database_persists_between_opens() {
    let dir = std::env::temp_dir().join(format!(
        "clubhouse_persistence_test_{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("club.db");
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        super::save_test_squad(&mut persistence, "Seniors", "Senior");
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    let squads = reopened.list_squads().unwrap();
    assert_eq!(squads.len(), 1);
    assert_eq!(squads[0].name, "Seniors");

    drop(reopened);
    let _ = std::fs::remove_dir_all(&dir);
}
