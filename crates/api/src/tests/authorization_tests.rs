// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_persistence::Persistence;

use super::helpers::{
    TODAY, add_game, add_player, add_squad, create_test_coach, create_test_secretary,
    player_request,
};
use crate::handlers::{announcements, games, members, squads, training};
use crate::{
    ApiError, AuthError, AuthorizationService, CreateSquadRequest, RecordGameStatsRequest,
    ScheduleTrainingRequest, SendAnnouncementRequest,
};

fn assert_unauthorized<T: std::fmt::Debug>(result: Result<T, ApiError>, expected_role: &str) {
    match result {
        Err(ApiError::Unauthorized { required_role, .. }) => assert_eq!(required_role, expected_role),
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn test_secretary_capabilities() {
    let secretary = create_test_secretary();
    assert!(AuthorizationService::authorize_manage_members(&secretary).is_ok());
    assert!(AuthorizationService::authorize_manage_squads(&secretary).is_ok());
    assert!(AuthorizationService::authorize_manage_games(&secretary).is_ok());
    assert!(AuthorizationService::authorize_manage_users(&secretary).is_ok());
    assert!(AuthorizationService::authorize_announcements(&secretary).is_ok());
    assert!(AuthorizationService::authorize_view(&secretary).is_ok());
    assert!(AuthorizationService::authorize_record_stats(&secretary).is_err());
    assert!(AuthorizationService::authorize_manage_training(&secretary).is_err());
}

#[test]
fn test_coach_capabilities() {
    let coach = create_test_coach();
    assert!(AuthorizationService::authorize_record_stats(&coach).is_ok());
    assert!(AuthorizationService::authorize_manage_training(&coach).is_ok());
    assert!(AuthorizationService::authorize_announcements(&coach).is_ok());
    assert!(AuthorizationService::authorize_view(&coach).is_ok());

    let denied = AuthorizationService::authorize_manage_members(&coach).unwrap_err();
    assert_eq!(
        denied,
        AuthError::Unauthorized {
            action: String::from("manage_members"),
            required_role: String::from("Secretary"),
        }
    );
}

#[test]
fn test_coach_cannot_create_member_or_squad() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let coach = create_test_coach();

    assert_unauthorized(
        members::create_member(&mut persistence, player_request("John", "Smith", None), &coach, TODAY),
        "Secretary",
    );
    assert_unauthorized(
        squads::create_squad(
            &mut persistence,
            CreateSquadRequest {
                name: String::from("Colts"),
                age_grade: String::from("U16"),
            },
            &coach,
        ),
        "Secretary",
    );
    assert!(persistence.list_members().unwrap().is_empty());
}

#[test]
fn test_secretary_cannot_record_stats_or_training() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let secretary = create_test_secretary();
    let squad_id: i64 = add_squad(&mut persistence, "Colts", "U16");
    let player_id: i64 = add_player(&mut persistence, "John", "Smith", Some(squad_id));
    let game_id: i64 = add_game(&mut persistence, squad_id, "12/09/2026", None);

    assert_unauthorized(
        games::record_game_stats(
            &mut persistence,
            RecordGameStatsRequest {
                player_id,
                game_id,
                attended: true,
                tackles: 5,
                passes: 5,
                tries: 1,
                kicks: 0,
                overall_rating: None,
            },
            &secretary,
        ),
        "Coach",
    );
    assert_unauthorized(
        training::schedule_training(
            &mut persistence,
            ScheduleTrainingRequest {
                date: Some(String::from("10/09/2026")),
                squad_id: Some(squad_id),
                focus_areas: String::from("Scrums"),
                coach_notes: None,
            },
            &secretary,
            TODAY,
        ),
        "Coach",
    );
}

#[test]
fn test_both_roles_send_announcements() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    for actor in [create_test_secretary(), create_test_coach()] {
        let response = announcements::send_announcement(
            &mut persistence,
            SendAnnouncementRequest {
                title: String::from("Kit day"),
                content: String::from("Bring boots"),
                recipient: None,
                important: false,
            },
            &actor,
            TODAY,
        );
        assert!(response.is_ok());
    }
    assert_eq!(persistence.list_announcements(None, false).unwrap().len(), 2);
}
