// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use clubhouse_domain::Role;
use clubhouse_persistence::Persistence;
use time::Date;
use time::macros::date;

use crate::handlers::{games, members, squads};
use crate::{
    AuthenticatedActor, BcryptVerifier, CreateMemberRequest, CreateSquadRequest, MemberDetails,
    NewMemberKind, ScheduleGameRequest,
};

/// The fixed "today" every test validates against.
pub const TODAY: Date = date!(2026 - 10 - 19);

pub fn create_test_secretary() -> AuthenticatedActor {
    AuthenticatedActor::new(1, String::from("secretary"), Role::Secretary)
}

pub fn create_test_coach() -> AuthenticatedActor {
    AuthenticatedActor::new(2, String::from("coach"), Role::Coach)
}

/// The cheapest bcrypt cost, to keep tests fast.
pub const fn test_verifier() -> BcryptVerifier {
    BcryptVerifier::new(4)
}

pub fn member_details(first_name: &str, last_name: &str) -> MemberDetails {
    MemberDetails {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth: Some(String::from("12/04/2010")),
        ..MemberDetails::default()
    }
}

pub fn player_request(first_name: &str, last_name: &str, squad_id: Option<i64>) -> CreateMemberRequest {
    CreateMemberRequest {
        details: member_details(first_name, last_name),
        kind: NewMemberKind::Player {
            position: String::from("Hooker"),
            squad_id,
            emergency_contact_id: None,
            medical_conditions: None,
        },
    }
}

pub fn coach_request(first_name: &str, last_name: &str, squad_ids: Vec<i64>) -> CreateMemberRequest {
    let mut details: MemberDetails = member_details(first_name, last_name);
    details.date_of_birth = Some(String::from("1980-11-02"));
    CreateMemberRequest {
        details,
        kind: NewMemberKind::Coach {
            qualifications: String::from("Level 2"),
            squad_ids,
        },
    }
}

pub fn add_squad(persistence: &mut Persistence, name: &str, age_grade: &str) -> i64 {
    squads::create_squad(
        persistence,
        CreateSquadRequest {
            name: name.to_string(),
            age_grade: age_grade.to_string(),
        },
        &create_test_secretary(),
    )
    .expect("Failed to create squad")
    .id
}

pub fn add_player(
    persistence: &mut Persistence,
    first_name: &str,
    last_name: &str,
    squad_id: Option<i64>,
) -> i64 {
    members::create_member(
        persistence,
        player_request(first_name, last_name, squad_id),
        &create_test_secretary(),
        TODAY,
    )
    .expect("Failed to create player")
    .id
}

pub fn add_coach(persistence: &mut Persistence, first_name: &str, last_name: &str) -> i64 {
    members::create_member(
        persistence,
        coach_request(first_name, last_name, Vec::new()),
        &create_test_secretary(),
        TODAY,
    )
    .expect("Failed to create coach")
    .id
}

pub fn add_game(
    persistence: &mut Persistence,
    squad_id: i64,
    date: &str,
    final_score: Option<&str>,
) -> i64 {
    games::schedule_game(
        persistence,
        ScheduleGameRequest {
            date: Some(date.to_string()),
            opponent: String::from("Rovers"),
            venue: String::from("Home"),
            squad_id: Some(squad_id),
            final_score: final_score.map(ToString::to_string),
        },
        &create_test_secretary(),
        TODAY,
    )
    .expect("Failed to schedule game")
    .id
}
