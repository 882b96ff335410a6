// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Squad queries.
//!
//! Roster and coach sets are rebuilt from `players.squad_id` and
//! `coach_squads` on every load.

use clubhouse_domain::Squad;
use diesel::SqliteConnection;
use diesel::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

use crate::data_models::SquadRow;
use crate::diesel_schema::{coach_squads, players, squads};
use crate::error::PersistenceError;

fn assemble_squad(conn: &mut SqliteConnection, row: SquadRow) -> Result<Squad, PersistenceError> {
    let player_ids: BTreeSet<i64> = players::table
        .filter(players::squad_id.eq(row.squad_id))
        .select(players::member_id)
        .load::<i64>(conn)?
        .into_iter()
        .collect();
    let coach_ids: BTreeSet<i64> = coach_squads::table
        .filter(coach_squads::squad_id.eq(row.squad_id))
        .select(coach_squads::coach_id)
        .load::<i64>(conn)?
        .into_iter()
        .collect();

    Ok(Squad {
        squad_id: Some(row.squad_id),
        name: row.name,
        age_grade: row.age_grade,
        player_ids,
        coach_ids,
    })
}

/// Retrieves a squad with its roster and coaches.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the squad is not found.
pub fn get_squad(
    conn: &mut SqliteConnection,
    squad_id: i64,
) -> Result<Option<Squad>, PersistenceError> {
    debug!(squad_id, "Looking up squad");

    let row: Option<SquadRow> = squads::table
        .find(squad_id)
        .select(SquadRow::as_select())
        .first(conn)
        .optional()?;

    row.map(|r| assemble_squad(conn, r)).transpose()
}

/// Retrieves a squad by its exact name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no squad has this name.
pub fn find_squad_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Squad>, PersistenceError> {
    let row: Option<SquadRow> = squads::table
        .filter(squads::name.eq(name))
        .select(SquadRow::as_select())
        .first(conn)
        .optional()?;

    row.map(|r| assemble_squad(conn, r)).transpose()
}

/// Lists every squad, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_squads(conn: &mut SqliteConnection) -> Result<Vec<Squad>, PersistenceError> {
    let rows: Vec<SquadRow> = squads::table
        .select(SquadRow::as_select())
        .order(squads::name.asc())
        .load(conn)?;

    rows.into_iter().map(|r| assemble_squad(conn, r)).collect()
}

/// Returns `true` if a squad with this ID exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn squad_exists(conn: &mut SqliteConnection, squad_id: i64) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(squads::table.find(squad_id))).get_result(conn)?)
}
