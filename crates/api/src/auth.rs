// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use clubhouse_domain::Role;
use clubhouse_persistence::{Persistence, UserData};
use tracing::{info, warn};

use crate::error::AuthError;

/// The message every failed login reports, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// A logged-in user with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The user account identifier.
    pub user_id: i64,
    /// The login name.
    pub username: String,
    /// The role this user acts with.
    pub role: Role,
    /// The club member this account belongs to, if linked.
    pub member_id: Option<i64>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user account identifier
    /// * `username` - The login name
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(user_id: i64, username: String, role: Role) -> Self {
        Self {
            user_id,
            username,
            role,
            member_id: None,
        }
    }
}

/// Checks a plain-text password against a stored credential.
///
/// Implementations decide how credentials are stored; the services only
/// ever see the opaque stored string.
pub trait CredentialVerifier {
    /// Produces the stored form of a password.
    ///
    /// # Errors
    ///
    /// Returns an error if the password cannot be hashed.
    fn hash_password(&self, password: &str) -> Result<String, AuthError>;

    /// Returns `true` if `password` matches `stored`.
    ///
    /// # Errors
    ///
    /// Returns an error if `stored` is not a credential this verifier understands.
    fn verify_password(&self, password: &str, stored: &str) -> Result<bool, AuthError>;
}

/// Stores credentials as bcrypt hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptVerifier {
    cost: u32,
}

impl BcryptVerifier {
    /// Creates a verifier hashing at the given bcrypt cost (4 to 31).
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptVerifier {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        bcrypt::hash(password, self.cost).map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to hash password: {e}"),
        })
    }

    fn verify_password(&self, password: &str, stored: &str) -> Result<bool, AuthError> {
        bcrypt::verify(password, stored).map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to verify password: {e}"),
        })
    }
}

/// Authorization service for enforcing role-based access control.
///
/// Each check names one capability of the command shell. Secretaries run
/// the club; coaches run training and record performance. Both may read
/// everything and send announcements.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require(actor: &AuthenticatedActor, required: Role, action: &str) -> Result<(), AuthError> {
        if actor.role == required {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: required.as_str().to_string(),
            })
        }
    }

    /// Checks if an actor may create, update, or delete members.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Secretary role.
    pub fn authorize_manage_members(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Secretary, "manage_members")
    }

    /// Checks if an actor may manage squads, rosters, and coach assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Secretary role.
    pub fn authorize_manage_squads(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Secretary, "manage_squads")
    }

    /// Checks if an actor may schedule games and record results.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Secretary role.
    pub fn authorize_manage_games(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Secretary, "manage_games")
    }

    /// Checks if an actor may manage login accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Secretary role.
    pub fn authorize_manage_users(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Secretary, "manage_users")
    }

    /// Checks if an actor may record player statistics for a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Coach role.
    pub fn authorize_record_stats(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Coach, "record_game_stats")
    }

    /// Checks if an actor may schedule training and record attendance.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Coach role.
    pub fn authorize_manage_training(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Coach, "manage_training")
    }

    /// Checks if an actor may send or delete announcements.
    ///
    /// Both roles may.
    ///
    /// # Errors
    ///
    /// Never fails; kept fallible so call sites read the same.
    pub const fn authorize_announcements(_actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Ok(())
    }

    /// Checks if an actor may view lists and reports.
    ///
    /// Both roles may.
    ///
    /// # Errors
    ///
    /// Never fails; kept fallible so call sites read the same.
    pub const fn authorize_view(_actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Authentication service for username/password logins.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates a user and returns the actor to run commands as.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `verifier` - Checks the supplied password against the stored one
    /// * `username` - The login name
    /// * `password` - The plain-text password
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails.
    pub fn login(
        persistence: &mut Persistence,
        verifier: &dyn CredentialVerifier,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedActor, AuthError> {
        let user: UserData = persistence
            .get_user_by_username(username)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| {
                warn!(username, "Login failed: unknown user");
                Self::invalid_credentials()
            })?;

        let matches: bool = verifier
            .verify_password(password, &user.password_hash)
            .unwrap_or_else(|e| {
                warn!(username, error = %e, "Stored credential could not be checked");
                false
            });
        if !matches {
            warn!(username, "Login failed: wrong password");
            return Err(Self::invalid_credentials());
        }

        let role: Role = user
            .role
            .parse()
            .map_err(|_| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", user.role),
            })?;

        persistence
            .update_last_login(user.user_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        info!(username, role = role.as_str(), "User logged in");

        let mut actor: AuthenticatedActor = AuthenticatedActor::new(user.user_id, user.username, role);
        actor.member_id = user.member_id;
        Ok(actor)
    }

    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from(INVALID_CREDENTIALS),
        }
    }
}
