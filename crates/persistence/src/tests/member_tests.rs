// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{Member, MemberKind};
use time::macros::date;

use super::{create_test_coach, create_test_player, save_test_squad};
use crate::{Persistence, PersistenceError, member_types};

#[test]
fn test_save_and_get_player() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");

    let mut player: Member = create_test_player("John", "Smith", Some(squad_id));
    player.email = Some(String::from("john@club.org"));
    let member_id: i64 = persistence.save_member(&player).unwrap();

    let loaded: Member = persistence.get_member(member_id).unwrap().unwrap();
    assert_eq!(loaded.member_id, Some(member_id));
    assert_eq!(loaded.full_name(), "John Smith");
    assert_eq!(loaded.date_of_birth, Some(date!(2010 - 04 - 12)));
    assert_eq!(loaded.email.as_deref(), Some("john@club.org"));
    let profile = loaded.player().unwrap();
    assert_eq!(profile.position, "Hooker");
    assert_eq!(profile.squad_id, Some(squad_id));
}

#[test]
fn test_get_missing_member_returns_none() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.get_member(42).unwrap().is_none());
    assert!(!persistence.member_exists(42).unwrap());
}

#[test]
fn test_save_coach_with_squad_links() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let colts: i64 = save_test_squad(&mut persistence, "Colts", "U16");
    let seniors: i64 = save_test_squad(&mut persistence, "Seniors", "Senior");

    let coach_id: i64 = persistence
        .save_member(&create_test_coach("Amy", "Jones", &[colts, seniors]))
        .unwrap();

    let loaded: Member = persistence.get_member(coach_id).unwrap().unwrap();
    let profile = loaded.coach().unwrap();
    assert_eq!(profile.qualifications, "Level 2");
    assert_eq!(profile.squad_ids.len(), 2);
    assert!(persistence.coach_exists(coach_id).unwrap());
    assert!(!persistence.player_exists(coach_id).unwrap());
    assert_eq!(persistence.list_coaches_by_squad(colts).unwrap().len(), 1);
}

#[test]
fn test_save_member_with_unknown_squad_writes_nothing() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.save_member(&create_test_player("John", "Smith", Some(99)));

    assert!(matches!(result, Err(PersistenceError::ConstraintViolation(_))));
    assert!(persistence.list_members().unwrap().is_empty());
}

#[test]
fn test_member_without_birth_date_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let member: Member = Member::new(
        String::from("No"),
        String::from("Date"),
        None,
        MemberKind::General,
    );
    assert!(matches!(
        persistence.save_member(&member),
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_update_member_changes_kind() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let member_id: i64 = persistence
        .save_member(&create_test_player("John", "Smith", None))
        .unwrap();

    let mut member: Member = persistence.get_member(member_id).unwrap().unwrap();
    member.kind = create_test_coach("John", "Smith", &[]).kind;
    assert!(persistence.update_member(&member).unwrap());

    let loaded: Member = persistence.get_member(member_id).unwrap().unwrap();
    assert!(loaded.is_coach());
    assert!(!persistence.player_exists(member_id).unwrap());
    assert!(persistence.coach_exists(member_id).unwrap());
}

#[test]
fn test_update_player_profile() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let member_id: i64 = persistence
        .save_member(&create_test_player("John", "Smith", None))
        .unwrap();

    let mut member: Member = persistence.get_member(member_id).unwrap().unwrap();
    member.player_mut().unwrap().position = String::from("Full Back");
    member.phone = Some(String::from("07123456789"));
    assert!(persistence.update_member(&member).unwrap());

    let loaded: Member = persistence.get_member(member_id).unwrap().unwrap();
    assert_eq!(loaded.player().unwrap().position, "Full Back");
    assert_eq!(loaded.phone.as_deref(), Some("07123456789"));
    assert_eq!(persistence.list_players_by_position("Full Back").unwrap().len(), 1);
}

#[test]
fn test_update_unsaved_member_returns_false() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let member: Member = create_test_player("John", "Smith", None);
    assert!(!persistence.update_member(&member).unwrap());
}

#[test]
fn test_deleting_contact_clears_emergency_reference() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let parent_id: i64 = persistence
        .save_member(&Member::new(
            String::from("Mary"),
            String::from("Smith"),
            Some(date!(1978 - 01 - 30)),
            MemberKind::General,
        ))
        .unwrap();
    let mut player: Member = create_test_player("John", "Smith", None);
    player.player_mut().unwrap().emergency_contact_id = Some(parent_id);
    let player_id: i64 = persistence.save_member(&player).unwrap();

    assert!(persistence.delete_member(parent_id).unwrap());

    let loaded: Member = persistence.get_member(player_id).unwrap().unwrap();
    assert_eq!(loaded.player().unwrap().emergency_contact_id, None);
}

#[test]
fn test_list_members_by_type() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .save_member(&create_test_player("John", "Smith", None))
        .unwrap();
    persistence
        .save_member(&create_test_coach("Amy", "Jones", &[]))
        .unwrap();
    persistence
        .save_member(&Member::new(
            String::from("Sue"),
            String::from("Clerk"),
            Some(date!(1970 - 05 - 05)),
            MemberKind::Secretary,
        ))
        .unwrap();

    assert_eq!(persistence.list_members().unwrap().len(), 3);
    assert_eq!(persistence.list_players().unwrap().len(), 1);
    assert_eq!(persistence.list_coaches().unwrap().len(), 1);
    assert_eq!(
        persistence
            .list_members_of_type(member_types::SECRETARY)
            .unwrap()
            .len(),
        1
    );
    assert_eq!(persistence.list_unassigned_players().unwrap().len(), 1);
}

#[test]
fn test_delete_missing_member_returns_false() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(!persistence.delete_member(7).unwrap());
}
