// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login account queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::data_models::{UserData, UserRow};
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Retrieves a user by username. The match is exact.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user by username: {}", username);

    Ok(users::table
        .filter(users::username.eq(username))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .map(UserData::from))
}

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<UserData>, PersistenceError> {
    Ok(users::table
        .find(user_id)
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .map(UserData::from))
}

/// Lists every user, ordered by username.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<UserData>, PersistenceError> {
    Ok(users::table
        .select(UserRow::as_select())
        .order(users::username.asc())
        .load::<UserRow>(conn)?
        .into_iter()
        .map(UserData::from)
        .collect())
}

/// Counts users holding a role, or all users when `role` is `None`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_users(
    conn: &mut SqliteConnection,
    role: Option<&str>,
) -> Result<usize, PersistenceError> {
    let count_i64: i64 = match role {
        Some(role) => users::table
            .filter(users::role.eq(role))
            .count()
            .get_result(conn)?,
        None => users::table.count().get_result(conn)?,
    };
    count_i64
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}
