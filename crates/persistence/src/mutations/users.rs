// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login account mutations.
//!
//! Passwords arrive here already hashed; this layer never sees plain text.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Creates a user.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The unique username
/// * `password_hash` - The hashed password
/// * `role` - `"Secretary"` or `"Coach"`
/// * `member_id` - The member this account belongs to, if any
///
/// # Errors
///
/// Returns an error if the insert fails or the username is taken.
pub fn insert_user(
    conn: &mut SqliteConnection,
    username: &str,
    password_hash: &str,
    role: &str,
    member_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    info!("Creating user with username: {}, role: {}", username, role);

    diesel::insert_into(users::table)
        .values((
            users::username.eq(username),
            users::password_hash.eq(password_hash),
            users::role.eq(role),
            users::member_id.eq(member_id),
        ))
        .execute(conn)?;

    let user_id: i64 = conn.get_last_insert_rowid()?;
    info!(user_id, "User created successfully");
    Ok(user_id)
}

/// Replaces a user's role and member link.
///
/// # Returns
///
/// `false` if no such user exists.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_user(
    conn: &mut SqliteConnection,
    user_id: i64,
    role: &str,
    member_id: Option<i64>,
) -> Result<bool, PersistenceError> {
    let rows_affected: usize = diesel::update(users::table.find(user_id))
        .set((users::role.eq(role), users::member_id.eq(member_id)))
        .execute(conn)?;
    Ok(rows_affected > 0)
}

/// Replaces a user's password hash.
///
/// # Returns
///
/// `false` if no such user exists.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_password(
    conn: &mut SqliteConnection,
    user_id: i64,
    password_hash: &str,
) -> Result<bool, PersistenceError> {
    info!(user_id, "Updating password");
    let rows_affected: usize = diesel::update(users::table.find(user_id))
        .set(users::password_hash.eq(password_hash))
        .execute(conn)?;
    Ok(rows_affected > 0)
}

/// Stamps the user's last successful login with the current time.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_last_login(conn: &mut SqliteConnection, user_id: i64) -> Result<(), PersistenceError> {
    debug!("Updating last_login_at for user ID: {}", user_id);

    diesel::update(users::table.find(user_id))
        .set(users::last_login_at.eq(diesel::dsl::sql::<
            diesel::sql_types::Nullable<diesel::sql_types::Text>,
        >("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    Ok(())
}

/// Deletes a user.
///
/// # Returns
///
/// `false` if no such user exists.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_user(conn: &mut SqliteConnection, user_id: i64) -> Result<bool, PersistenceError> {
    let rows_affected: usize = diesel::delete(users::table.find(user_id)).execute(conn)?;
    if rows_affected > 0 {
        info!(user_id, "Deleted user");
    }
    Ok(rows_affected > 0)
}
