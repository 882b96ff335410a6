// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_coach;
use crate::{Persistence, PersistenceError, UserData};

#[test]
fn test_create_and_get_user() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id: i64 = persistence
        .create_user("secretary", "$2b$hash", "Secretary", None)
        .unwrap();

    let user: UserData = persistence.get_user_by_username("secretary").unwrap().unwrap();
    assert_eq!(user.user_id, user_id);
    assert_eq!(user.role, "Secretary");
    assert_eq!(user.password_hash, "$2b$hash");
    assert!(user.last_login_at.is_none());
    assert!(persistence.get_user_by_username("Secretary").unwrap().is_none());
}

#[test]
fn test_duplicate_username_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .create_user("coach1", "hash", "Coach", None)
        .unwrap();
    assert!(matches!(
        persistence.create_user("coach1", "hash", "Coach", None),
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_count_users_by_role() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .create_user("secretary", "hash", "Secretary", None)
        .unwrap();
    persistence.create_user("coach1", "hash", "Coach", None).unwrap();
    persistence.create_user("coach2", "hash", "Coach", None).unwrap();

    assert_eq!(persistence.count_users(None).unwrap(), 3);
    assert_eq!(persistence.count_users(Some("Coach")).unwrap(), 2);
    assert_eq!(persistence.list_users().unwrap().len(), 3);
}

#[test]
fn test_update_user_and_password() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let member_id: i64 = persistence
        .save_member(&create_test_coach("Amy", "Jones", &[]))
        .unwrap();
    let user_id: i64 = persistence.create_user("amy", "old", "Coach", None).unwrap();

    assert!(persistence.update_user(user_id, "Coach", Some(member_id)).unwrap());
    assert!(persistence.update_password(user_id, "new").unwrap());
    persistence.update_last_login(user_id).unwrap();

    let user: UserData = persistence.get_user_by_id(user_id).unwrap().unwrap();
    assert_eq!(user.member_id, Some(member_id));
    assert_eq!(user.password_hash, "new");
    assert!(user.last_login_at.is_some());
}

#[test]
fn test_deleting_member_unlinks_user() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let member_id: i64 = persistence
        .save_member(&create_test_coach("Amy", "Jones", &[]))
        .unwrap();
    let user_id: i64 = persistence
        .create_user("amy", "hash", "Coach", Some(member_id))
        .unwrap();

    persistence.delete_member(member_id).unwrap();

    let user: UserData = persistence.get_user_by_id(user_id).unwrap().unwrap();
    assert_eq!(user.member_id, None);
}

#[test]
fn test_invalid_role_rejected_by_schema() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(matches!(
        persistence.create_user("bob", "hash", "Admin", None),
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_delete_user() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let user_id: i64 = persistence.create_user("amy", "hash", "Coach", None).unwrap();
    assert!(persistence.delete_user(user_id).unwrap());
    assert!(persistence.get_user_by_id(user_id).unwrap().is_none());
}
