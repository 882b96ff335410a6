// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{Training, TrainingAttendance};
use time::macros::date;

use super::{create_test_player, save_test_squad};
use crate::Persistence;

#[test]
fn test_save_and_update_training() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");

    let training_id: i64 = persistence
        .save_training(&Training::new(
            Some(date!(2026 - 09 - 10)),
            Some(squad_id),
            String::from("Lineouts"),
        ))
        .unwrap();

    let mut training: Training = persistence.get_training(training_id).unwrap().unwrap();
    assert_eq!(training.focus_areas, "Lineouts");
    training.coach_notes = Some(String::from("Work on throwing"));
    assert!(persistence.update_training(&training).unwrap());

    let loaded: Training = persistence.get_training(training_id).unwrap().unwrap();
    assert_eq!(loaded.coach_notes.as_deref(), Some("Work on throwing"));
    assert_eq!(persistence.list_trainings(Some(squad_id)).unwrap().len(), 1);
}

#[test]
fn test_record_attendance_replaces_existing_pair() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");
    let player_id: i64 = persistence
        .save_member(&create_test_player("John", "Smith", Some(squad_id)))
        .unwrap();
    let training_id: i64 = persistence
        .save_training(&Training::new(
            Some(date!(2026 - 09 - 10)),
            Some(squad_id),
            String::from("Scrums"),
        ))
        .unwrap();

    let first: i64 = persistence
        .record_attendance(&TrainingAttendance::new(player_id, training_id, false))
        .unwrap();
    let mut attendance = TrainingAttendance::new(player_id, training_id, true);
    attendance.notes = Some(String::from("Arrived late"));
    let second: i64 = persistence.record_attendance(&attendance).unwrap();

    assert_eq!(first, second);
    let stored: TrainingAttendance = persistence
        .find_attendance(player_id, training_id)
        .unwrap()
        .unwrap();
    assert!(stored.present);
    assert_eq!(stored.notes.as_deref(), Some("Arrived late"));
    assert_eq!(persistence.list_attendance_by_training(training_id).unwrap().len(), 1);
    assert_eq!(persistence.list_attendance_by_squad(squad_id).unwrap().len(), 1);
}

#[test]
fn test_delete_training_removes_attendance() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");
    let player_id: i64 = persistence
        .save_member(&create_test_player("John", "Smith", Some(squad_id)))
        .unwrap();
    let training_id: i64 = persistence
        .save_training(&Training::new(
            Some(date!(2026 - 09 - 10)),
            Some(squad_id),
            String::from("Scrums"),
        ))
        .unwrap();
    persistence
        .record_attendance(&TrainingAttendance::new(player_id, training_id, true))
        .unwrap();

    assert!(persistence.delete_training(training_id).unwrap());
    assert!(persistence.list_attendance_by_player(player_id).unwrap().is_empty());
}
