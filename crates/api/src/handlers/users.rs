// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login account management.

use clubhouse_domain::{Role, User, validate_password, validate_user};
use clubhouse_persistence::{Persistence, UserData};
use tracing::{info, warn};

use super::require_exists;
use crate::auth::{AuthenticatedActor, AuthorizationService, CredentialVerifier};
use crate::error::{ApiError, AuthError, persistence_failure};
use crate::request_response::{
    ChangePasswordRequest, CreateUserRequest, UserSummary, WriteResponse,
};

impl From<UserData> for UserSummary {
    fn from(user: UserData) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            role: user.role,
            member_id: user.member_id,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Validates, hashes, and stores a new account.
fn store_user(
    persistence: &mut Persistence,
    verifier: &dyn CredentialVerifier,
    request: CreateUserRequest,
) -> Result<(i64, User), ApiError> {
    let mut user: User = User::new(request.username, request.password, request.role);
    user.member_id = request.member_id;
    validate_user(&user)?;

    if let Some(member_id) = user.member_id {
        let exists: bool = persistence
            .member_exists(member_id)
            .map_err(persistence_failure("look up member"))?;
        require_exists(exists, "Member", member_id)?;
    }
    let taken: bool = persistence
        .get_user_by_username(&user.username)
        .map_err(persistence_failure("look up user"))?
        .is_some();
    if taken {
        return Err(ApiError::InvalidInput {
            field: String::from("username"),
            message: format!("Username '{}' is already taken", user.username),
        });
    }

    let password_hash: String = verifier.hash_password(&user.password)?;
    let user_id: i64 = persistence
        .create_user(&user.username, &password_hash, &user.role, user.member_id)
        .map_err(persistence_failure("create user"))?;
    Ok((user_id, user))
}

/// Creates a login account.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a Secretary
/// - The account breaks any validation rule, including the password rule
/// - The username is taken or the linked member does not exist
/// - The store fails
pub fn create_user(
    persistence: &mut Persistence,
    verifier: &dyn CredentialVerifier,
    request: CreateUserRequest,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_users(actor)?;

    let (user_id, user) = store_user(persistence, verifier, request)?;

    info!(user_id, username = %user.username, role = %user.role, actor = %actor.username, "User created");
    Ok(WriteResponse::new(
        user_id,
        format!("User '{}' created with role {}", user.username, user.role),
    ))
}

/// Creates the first Secretary account on an empty database.
///
/// No login is needed, and the call is refused once any account exists.
///
/// # Errors
///
/// Returns an error if accounts already exist, the account breaks any
/// validation rule, or the store fails.
pub fn bootstrap_secretary(
    persistence: &mut Persistence,
    verifier: &dyn CredentialVerifier,
    username: String,
    password: String,
) -> Result<WriteResponse, ApiError> {
    let existing: usize = persistence
        .count_users(None)
        .map_err(persistence_failure("count users"))?;
    if existing > 0 {
        warn!(existing, "Bootstrap refused: users already exist");
        return Err(ApiError::Unauthorized {
            action: String::from("bootstrap"),
            required_role: String::from(Role::Secretary.as_str()),
        });
    }

    let (user_id, user) = store_user(
        persistence,
        verifier,
        CreateUserRequest {
            username,
            password,
            role: Role::Secretary.as_str().to_string(),
            member_id: None,
        },
    )?;

    info!(user_id, username = %user.username, "Bootstrap Secretary created");
    Ok(WriteResponse::new(
        user_id,
        format!("Secretary '{}' created; log in to continue", user.username),
    ))
}

/// Lists every login account.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary or the store fails.
pub fn list_users(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<Vec<UserSummary>, ApiError> {
    AuthorizationService::authorize_manage_users(actor)?;
    let users: Vec<UserData> = persistence
        .list_users()
        .map_err(persistence_failure("list users"))?;
    Ok(users.into_iter().map(UserSummary::from).collect())
}

/// Changes a user's role and linked member.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a Secretary
/// - The role is not `Secretary` or `Coach`
/// - The user or member does not exist
/// - The change would leave no Secretary account
/// - The store fails
pub fn update_user(
    persistence: &mut Persistence,
    user_id: i64,
    role: &str,
    member_id: Option<i64>,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_users(actor)?;

    let new_role: Role = role.parse()?;
    let user: UserData = persistence
        .get_user_by_id(user_id)
        .map_err(persistence_failure("load user"))?
        .ok_or_else(|| ApiError::not_found("User", user_id))?;
    if let Some(member_id) = member_id {
        let exists: bool = persistence
            .member_exists(member_id)
            .map_err(persistence_failure("look up member"))?;
        require_exists(exists, "Member", member_id)?;
    }
    if user.role == Role::Secretary.as_str() && new_role != Role::Secretary {
        ensure_other_secretary(persistence)?;
    }

    persistence
        .update_user(user_id, new_role.as_str(), member_id)
        .map_err(persistence_failure("update user"))?;

    info!(user_id, role = new_role.as_str(), actor = %actor.username, "User updated");
    Ok(WriteResponse::new(
        user_id,
        format!("User '{}' now has role {new_role}", user.username),
    ))
}

fn ensure_other_secretary(persistence: &mut Persistence) -> Result<(), ApiError> {
    let secretaries: usize = persistence
        .count_users(Some(Role::Secretary.as_str()))
        .map_err(persistence_failure("count users"))?;
    if secretaries <= 1 {
        return Err(ApiError::InvalidInput {
            field: String::from("role"),
            message: String::from("The club must keep at least one Secretary account"),
        });
    }
    Ok(())
}

/// Deletes a login account. Users cannot delete themselves.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, targets their own
/// account, the user does not exist, or the store fails.
pub fn delete_user(
    persistence: &mut Persistence,
    user_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_users(actor)?;
    if user_id == actor.user_id {
        return Err(ApiError::InvalidInput {
            field: String::from("user_id"),
            message: String::from("You cannot delete your own account"),
        });
    }

    let deleted: bool = persistence
        .delete_user(user_id)
        .map_err(persistence_failure("delete user"))?;
    require_exists(deleted, "User", user_id)?;

    info!(user_id, actor = %actor.username, "User deleted");
    Ok(WriteResponse::new(user_id, format!("User {user_id} deleted")))
}

/// Changes the logged-in user's own password.
///
/// # Errors
///
/// Returns an error if the current password is wrong, the new password
/// breaks the password rule (all failures are reported), or the store fails.
pub fn change_password(
    persistence: &mut Persistence,
    verifier: &dyn CredentialVerifier,
    request: ChangePasswordRequest,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    let user: UserData = persistence
        .get_user_by_id(actor.user_id)
        .map_err(persistence_failure("load user"))?
        .ok_or_else(|| ApiError::not_found("User", actor.user_id))?;

    let matches: bool = verifier.verify_password(&request.current_password, &user.password_hash)?;
    if !matches {
        warn!(username = %actor.username, "Password change refused: wrong current password");
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Current password is incorrect"),
        }
        .into());
    }

    validate_password(&request.new_password)?;

    let password_hash: String = verifier.hash_password(&request.new_password)?;
    persistence
        .update_password(actor.user_id, &password_hash)
        .map_err(persistence_failure("update password"))?;

    info!(username = %actor.username, "Password changed");
    Ok(WriteResponse::new(
        actor.user_id,
        String::from("Password changed"),
    ))
}
