// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Squad mutations and roster/coaching links.

use clubhouse_domain::Squad;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{coach_squads, players, squads};
use crate::error::PersistenceError;

/// Inserts a squad, placing any listed players and coaches on it.
///
/// # Returns
///
/// The new squad ID.
///
/// # Errors
///
/// Returns an error if any write fails; nothing is written in that case.
pub fn insert_squad(conn: &mut SqliteConnection, squad: &Squad) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        diesel::insert_into(squads::table)
            .values((
                squads::name.eq(&squad.name),
                squads::age_grade.eq(&squad.age_grade),
            ))
            .execute(conn)?;
        let squad_id: i64 = conn.get_last_insert_rowid()?;

        for player_id in &squad.player_ids {
            if !assign_player_to_squad(conn, *player_id, squad_id)? {
                return Err(PersistenceError::NotFound(format!("Player {player_id}")));
            }
        }
        for coach_id in &squad.coach_ids {
            assign_coach_to_squad(conn, *coach_id, squad_id)?;
        }

        info!(squad_id, name = %squad.name, "Created squad");
        Ok(squad_id)
    })
}

/// Updates a squad's name and age grade.
///
/// Roster and coaching links are changed through the assign/remove
/// functions, not here.
///
/// # Returns
///
/// `false` if the squad has no ID or no such squad exists.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_squad(conn: &mut SqliteConnection, squad: &Squad) -> Result<bool, PersistenceError> {
    let Some(squad_id) = squad.squad_id else {
        return Ok(false);
    };
    let rows_affected: usize = diesel::update(squads::table.find(squad_id))
        .set((
            squads::name.eq(&squad.name),
            squads::age_grade.eq(&squad.age_grade),
        ))
        .execute(conn)?;
    Ok(rows_affected > 0)
}

/// Deletes a squad.
///
/// Its players are left without a squad. Its games and training sessions,
/// with their stats and attendance, are deleted, as are coach links.
///
/// # Returns
///
/// `false` if no such squad exists.
///
/// # Errors
///
/// Returns an error if the delete fails; nothing is changed in that case.
pub fn delete_squad(conn: &mut SqliteConnection, squad_id: i64) -> Result<bool, PersistenceError> {
    conn.transaction(|conn| {
        let rows_affected: usize = diesel::delete(squads::table.find(squad_id)).execute(conn)?;
        if rows_affected > 0 {
            info!(squad_id, "Deleted squad");
        }
        Ok(rows_affected > 0)
    })
}

/// Puts a player on a squad, moving them off any previous squad.
///
/// # Returns
///
/// `false` if no such player exists.
///
/// # Errors
///
/// Returns an error if the update fails (including an unknown squad).
pub fn assign_player_to_squad(
    conn: &mut SqliteConnection,
    player_id: i64,
    squad_id: i64,
) -> Result<bool, PersistenceError> {
    debug!(player_id, squad_id, "Assigning player to squad");
    let rows_affected: usize = diesel::update(players::table.find(player_id))
        .set(players::squad_id.eq(Some(squad_id)))
        .execute(conn)?;
    Ok(rows_affected > 0)
}

/// Takes a player off a squad.
///
/// # Returns
///
/// `false` if the player is not on that squad.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn remove_player_from_squad(
    conn: &mut SqliteConnection,
    player_id: i64,
    squad_id: i64,
) -> Result<bool, PersistenceError> {
    debug!(player_id, squad_id, "Removing player from squad");
    let rows_affected: usize = diesel::update(
        players::table
            .filter(players::member_id.eq(player_id))
            .filter(players::squad_id.eq(squad_id)),
    )
    .set(players::squad_id.eq(None::<i64>))
    .execute(conn)?;
    Ok(rows_affected > 0)
}

/// Links a coach to a squad.
///
/// # Returns
///
/// `false` if the link already existed.
///
/// # Errors
///
/// Returns an error if the insert fails (including an unknown coach or squad).
pub fn assign_coach_to_squad(
    conn: &mut SqliteConnection,
    coach_id: i64,
    squad_id: i64,
) -> Result<bool, PersistenceError> {
    debug!(coach_id, squad_id, "Assigning coach to squad");
    let rows_affected: usize = diesel::insert_or_ignore_into(coach_squads::table)
        .values((
            coach_squads::coach_id.eq(coach_id),
            coach_squads::squad_id.eq(squad_id),
        ))
        .execute(conn)?;
    Ok(rows_affected > 0)
}

/// Unlinks a coach from a squad.
///
/// # Returns
///
/// `false` if the coach was not assigned to that squad.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn remove_coach_from_squad(
    conn: &mut SqliteConnection,
    coach_id: i64,
    squad_id: i64,
) -> Result<bool, PersistenceError> {
    debug!(coach_id, squad_id, "Removing coach from squad");
    let rows_affected: usize = diesel::delete(
        coach_squads::table
            .filter(coach_squads::coach_id.eq(coach_id))
            .filter(coach_squads::squad_id.eq(squad_id)),
    )
    .execute(conn)?;
    Ok(rows_affected > 0)
}
