// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Squad;

fn squad_with_coaches(age_grade: &str, coaches: i64) -> Squad {
    let mut squad: Squad = Squad::new(String::from("Test Squad"), String::from(age_grade));
    for coach_id in 1..=coaches {
        squad.add_coach(coach_id);
    }
    squad
}

#[test]
fn test_junior_squad_needs_two_coaches() {
    assert!(!squad_with_coaches("U10", 1).has_minimum_coaches());
    assert!(squad_with_coaches("U10", 2).has_minimum_coaches());
}

#[test]
fn test_u18_squad_needs_three_coaches() {
    assert!(!squad_with_coaches("U18", 2).has_minimum_coaches());
    assert!(squad_with_coaches("U18", 3).has_minimum_coaches());
}

#[test]
fn test_senior_squad_needs_three_coaches() {
    assert!(!squad_with_coaches("Senior", 2).has_minimum_coaches());
    assert!(squad_with_coaches("Senior", 3).has_minimum_coaches());
}

#[test]
fn test_minimum_is_reevaluated_from_live_coaches() {
    let mut squad: Squad = squad_with_coaches("U12", 2);
    assert!(squad.has_minimum_coaches());

    assert!(squad.remove_coach(2));
    assert!(!squad.has_minimum_coaches());
    assert_eq!(squad.coaches_needed(), 1);

    assert!(squad.add_coach(7));
    assert!(squad.has_minimum_coaches());
    assert_eq!(squad.coaches_needed(), 0);
}

#[test]
fn test_duplicate_membership_is_ignored() {
    let mut squad: Squad = Squad::new(String::from("Colts"), String::from("U16"));
    assert!(squad.add_player(4));
    assert!(!squad.add_player(4));
    assert_eq!(squad.player_ids.len(), 1);
    assert!(!squad.remove_player(5));
}
