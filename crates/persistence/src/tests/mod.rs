// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod announcement_tests;
mod game_tests;
mod initialization_tests;
mod member_tests;
mod training_tests;
mod user_tests;

use clubhouse_domain::{CoachProfile, Member, MemberKind, PlayerProfile, Squad};
use std::collections::BTreeSet;
use time::macros::date;

use crate::Persistence;

pub fn create_test_player(first_name: &str, last_name: &str, squad_id: Option<i64>) -> Member {
    Member::new(
        first_name.to_string(),
        last_name.to_string(),
        Some(date!(2010 - 04 - 12)),
        MemberKind::Player(PlayerProfile {
            position: String::from("Hooker"),
            squad_id,
            emergency_contact_id: None,
            medical_conditions: None,
        }),
    )
}

pub fn create_test_coach(first_name: &str, last_name: &str, squad_ids: &[i64]) -> Member {
    Member::new(
        first_name.to_string(),
        last_name.to_string(),
        Some(date!(1980 - 11 - 02)),
        MemberKind::Coach(CoachProfile {
            qualifications: String::from("Level 2"),
            squad_ids: squad_ids.iter().copied().collect::<BTreeSet<i64>>(),
        }),
    )
}

/// Saves an empty squad and returns its ID.
pub fn save_test_squad(persistence: &mut Persistence, name: &str, age_grade: &str) -> i64 {
    persistence
        .save_squad(&Squad::new(name.to_string(), age_grade.to_string()))
        .expect("Failed to save squad")
}
