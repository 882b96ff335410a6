// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::Role;
use clubhouse_persistence::Persistence;

use super::helpers::{add_coach, create_test_coach, create_test_secretary, test_verifier};
use crate::handlers::users;
use crate::{
    ApiError, AuthError, AuthenticatedActor, AuthenticationService, BcryptVerifier,
    ChangePasswordRequest, CreateUserRequest, CredentialVerifier, INVALID_CREDENTIALS,
    UserSummary,
};

fn user_request(username: &str, password: &str, role: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: password.to_string(),
        role: role.to_string(),
        member_id: None,
    }
}

fn bootstrap(persistence: &mut Persistence) -> AuthenticatedActor {
    let verifier: BcryptVerifier = test_verifier();
    users::bootstrap_secretary(
        persistence,
        &verifier,
        String::from("secretary"),
        String::from("Password1"),
    )
    .unwrap();
    AuthenticationService::login(persistence, &verifier, "secretary", "Password1").unwrap()
}

#[test]
fn test_bcrypt_round_trip() {
    let verifier: BcryptVerifier = test_verifier();
    let hash: String = verifier.hash_password("Password1").unwrap();

    assert_ne!(hash, "Password1");
    assert!(verifier.verify_password("Password1", &hash).unwrap());
    assert!(!verifier.verify_password("Password2", &hash).unwrap());
}

#[test]
fn test_bootstrap_then_login() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let actor: AuthenticatedActor = bootstrap(&mut persistence);

    assert_eq!(actor.username, "secretary");
    assert_eq!(actor.role, Role::Secretary);
    let stored = persistence.get_user_by_username("secretary").unwrap().unwrap();
    assert!(stored.last_login_at.is_some());
}

#[test]
fn test_bootstrap_refused_once_users_exist() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    bootstrap(&mut persistence);

    let err = users::bootstrap_secretary(
        &mut persistence,
        &test_verifier(),
        String::from("intruder"),
        String::from("Password1"),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { ref action, .. } if action == "bootstrap"));
    assert_eq!(persistence.count_users(None).unwrap(), 1);
}

#[test]
fn test_login_failures_are_indistinguishable() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    bootstrap(&mut persistence);
    let verifier: BcryptVerifier = test_verifier();

    let expected = AuthError::AuthenticationFailed {
        reason: String::from(INVALID_CREDENTIALS),
    };
    assert_eq!(
        AuthenticationService::login(&mut persistence, &verifier, "secretary", "Wrong1234")
            .unwrap_err(),
        expected
    );
    assert_eq!(
        AuthenticationService::login(&mut persistence, &verifier, "nobody", "Password1")
            .unwrap_err(),
        expected
    );
}

#[test]
fn test_create_user_reports_every_password_failure() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let err = users::create_user(
        &mut persistence,
        &test_verifier(),
        user_request("coach", "short1", "Coach"),
        &create_test_secretary(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ApiError::ValidationFailed {
            violations: vec![
                String::from("Password must be at least 8 characters long"),
                String::from("Password must contain at least one uppercase letter"),
            ],
        }
    );
}

#[test]
fn test_create_user_rejects_bad_username_and_role() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let err = users::create_user(
        &mut persistence,
        &test_verifier(),
        user_request("jo", "Password1", "coach"),
        &create_test_secretary(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ApiError::ValidationFailed {
            violations: vec![
                String::from("Username must be 3-20 letters or digits"),
                String::from("Role must be 'Secretary' or 'Coach'"),
            ],
        }
    );
}

#[test]
fn test_create_user_linked_to_member() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let secretary = create_test_secretary();
    let coach_member: i64 = add_coach(&mut persistence, "Eddie", "Jones");
    let mut request: CreateUserRequest = user_request("eddie", "Password1", "Coach");
    request.member_id = Some(coach_member);

    users::create_user(&mut persistence, &test_verifier(), request, &secretary).unwrap();

    let actor: AuthenticatedActor =
        AuthenticationService::login(&mut persistence, &test_verifier(), "eddie", "Password1")
            .unwrap();
    assert_eq!(actor.role, Role::Coach);
    assert_eq!(actor.member_id, Some(coach_member));

    let mut unknown: CreateUserRequest = user_request("ghost", "Password1", "Coach");
    unknown.member_id = Some(404);
    assert_eq!(
        users::create_user(&mut persistence, &test_verifier(), unknown, &secretary).unwrap_err(),
        ApiError::not_found("Member", 404)
    );
}

#[test]
fn test_duplicate_username_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let secretary = create_test_secretary();
    users::create_user(
        &mut persistence,
        &test_verifier(),
        user_request("coach", "Password1", "Coach"),
        &secretary,
    )
    .unwrap();

    let err = users::create_user(
        &mut persistence,
        &test_verifier(),
        user_request("coach", "Password2", "Secretary"),
        &secretary,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "username"));
}

#[test]
fn test_coach_cannot_manage_users() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert!(matches!(
        users::list_users(&mut persistence, &create_test_coach()),
        Err(ApiError::Unauthorized { .. })
    ));
}

#[test]
fn test_last_secretary_cannot_be_demoted() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let secretary: AuthenticatedActor = bootstrap(&mut persistence);

    let err = users::update_user(&mut persistence, secretary.user_id, "Coach", None, &secretary)
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "role"));

    let second: i64 = users::create_user(
        &mut persistence,
        &test_verifier(),
        user_request("treasurer", "Password1", "Secretary"),
        &secretary,
    )
    .unwrap()
    .id;
    users::update_user(&mut persistence, second, "Coach", None, &secretary).unwrap();

    let listed: Vec<UserSummary> = users::list_users(&mut persistence, &secretary).unwrap();
    let demoted: &UserSummary = listed.iter().find(|u| u.user_id == second).unwrap();
    assert_eq!(demoted.role, "Coach");
}

#[test]
fn test_users_cannot_delete_themselves() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let secretary: AuthenticatedActor = bootstrap(&mut persistence);

    let err = users::delete_user(&mut persistence, secretary.user_id, &secretary).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "user_id"));
    assert_eq!(
        users::delete_user(&mut persistence, 999, &secretary).unwrap_err(),
        ApiError::not_found("User", 999)
    );
}

#[test]
fn test_change_password() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let secretary: AuthenticatedActor = bootstrap(&mut persistence);
    let verifier: BcryptVerifier = test_verifier();

    let wrong = users::change_password(
        &mut persistence,
        &verifier,
        ChangePasswordRequest {
            current_password: String::from("Nope12345"),
            new_password: String::from("NewPassword2"),
        },
        &secretary,
    )
    .unwrap_err();
    assert_eq!(
        wrong,
        ApiError::AuthenticationFailed {
            reason: String::from("Current password is incorrect"),
        }
    );

    let weak = users::change_password(
        &mut persistence,
        &verifier,
        ChangePasswordRequest {
            current_password: String::from("Password1"),
            new_password: String::from("weak"),
        },
        &secretary,
    )
    .unwrap_err();
    assert!(matches!(weak, ApiError::ValidationFailed { ref violations } if violations.len() == 3));

    users::change_password(
        &mut persistence,
        &verifier,
        ChangePasswordRequest {
            current_password: String::from("Password1"),
            new_password: String::from("NewPassword2"),
        },
        &secretary,
    )
    .unwrap();

    assert!(AuthenticationService::login(&mut persistence, &verifier, "secretary", "Password1").is_err());
    assert!(
        AuthenticationService::login(&mut persistence, &verifier, "secretary", "NewPassword2")
            .is_ok()
    );
}
