// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member queries.
//!
//! A member is stored as a `members` row plus at most one specialization
//! row (`players` or `coaches`), selected by `member_type`. These queries
//! reassemble the full `Member`.

use clubhouse_domain::{CoachProfile, Member, MemberKind, PlayerProfile};
use diesel::SqliteConnection;
use diesel::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

use crate::data_models::{CoachRow, MemberRow, PlayerRow, stored_date};
use crate::diesel_schema::{coach_squads, coaches, members, players};
use crate::error::PersistenceError;
use crate::member_types;

fn missing_specialization(member_id: i64, table: &str) -> PersistenceError {
    PersistenceError::InvalidRecord {
        table: "members",
        id: member_id,
        message: format!("no matching row in {table}"),
    }
}

/// Builds a full `Member` from its base row, loading the specialization.
fn assemble_member(
    conn: &mut SqliteConnection,
    row: MemberRow,
) -> Result<Member, PersistenceError> {
    let member_id: i64 = row.member_id;

    let kind: MemberKind = match row.member_type.as_str() {
        member_types::PLAYER => {
            let player: PlayerRow = players::table
                .find(member_id)
                .select(PlayerRow::as_select())
                .first(conn)
                .optional()?
                .ok_or_else(|| missing_specialization(member_id, "players"))?;
            MemberKind::Player(PlayerProfile {
                position: player.position,
                squad_id: player.squad_id,
                emergency_contact_id: player.emergency_contact_id,
                medical_conditions: player.medical_conditions,
            })
        }
        member_types::COACH => {
            let coach: CoachRow = coaches::table
                .find(member_id)
                .select(CoachRow::as_select())
                .first(conn)
                .optional()?
                .ok_or_else(|| missing_specialization(member_id, "coaches"))?;
            let squad_ids: BTreeSet<i64> = coach_squads::table
                .filter(coach_squads::coach_id.eq(coach.member_id))
                .select(coach_squads::squad_id)
                .load::<i64>(conn)?
                .into_iter()
                .collect();
            MemberKind::Coach(CoachProfile {
                qualifications: coach.qualifications,
                squad_ids,
            })
        }
        member_types::SECRETARY => MemberKind::Secretary,
        member_types::GENERAL => MemberKind::General,
        other => {
            return Err(PersistenceError::InvalidRecord {
                table: "members",
                id: member_id,
                message: format!("unknown member type '{other}'"),
            });
        }
    };

    Ok(Member {
        member_id: Some(member_id),
        date_of_birth: Some(stored_date("members", member_id, &row.date_of_birth)?),
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        phone: row.phone,
        address: row.address,
        kind,
    })
}

fn assemble_all(
    conn: &mut SqliteConnection,
    rows: Vec<MemberRow>,
) -> Result<Vec<Member>, PersistenceError> {
    rows.into_iter()
        .map(|row| assemble_member(conn, row))
        .collect()
}

/// Retrieves a member of any kind by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is
/// inconsistent. Returns `Ok(None)` if the member is not found.
pub fn get_member(
    conn: &mut SqliteConnection,
    member_id: i64,
) -> Result<Option<Member>, PersistenceError> {
    debug!(member_id, "Looking up member");

    let row: Option<MemberRow> = members::table
        .find(member_id)
        .select(MemberRow::as_select())
        .first(conn)
        .optional()?;

    row.map(|r| assemble_member(conn, r)).transpose()
}

/// Lists members, optionally restricted to one stored member type
/// (`"Player"`, `"Coach"`, `"Secretary"`, or `"Member"`).
///
/// Ordered by last name, then first name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_members(
    conn: &mut SqliteConnection,
    member_type: Option<&str>,
) -> Result<Vec<Member>, PersistenceError> {
    let mut query = members::table
        .select(MemberRow::as_select())
        .order((members::last_name.asc(), members::first_name.asc()))
        .into_boxed();
    if let Some(member_type) = member_type {
        query = query.filter(members::member_type.eq(member_type));
    }
    let rows: Vec<MemberRow> = query.load(conn)?;
    assemble_all(conn, rows)
}

/// Lists the players on a squad's roster.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_players_by_squad(
    conn: &mut SqliteConnection,
    squad_id: i64,
) -> Result<Vec<Member>, PersistenceError> {
    let rows: Vec<MemberRow> = members::table
        .inner_join(players::table)
        .filter(players::squad_id.eq(squad_id))
        .select(MemberRow::as_select())
        .order((members::last_name.asc(), members::first_name.asc()))
        .load(conn)?;
    assemble_all(conn, rows)
}

/// Lists players in a position. The match is exact on the stored name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_players_by_position(
    conn: &mut SqliteConnection,
    position: &str,
) -> Result<Vec<Member>, PersistenceError> {
    let rows: Vec<MemberRow> = members::table
        .inner_join(players::table)
        .filter(players::position.eq(position))
        .select(MemberRow::as_select())
        .order((members::last_name.asc(), members::first_name.asc()))
        .load(conn)?;
    assemble_all(conn, rows)
}

/// Lists players not on any squad.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_unassigned_players(
    conn: &mut SqliteConnection,
) -> Result<Vec<Member>, PersistenceError> {
    let rows: Vec<MemberRow> = members::table
        .inner_join(players::table)
        .filter(players::squad_id.is_null())
        .select(MemberRow::as_select())
        .order((members::last_name.asc(), members::first_name.asc()))
        .load(conn)?;
    assemble_all(conn, rows)
}

/// Lists the coaches assigned to a squad.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_coaches_by_squad(
    conn: &mut SqliteConnection,
    squad_id: i64,
) -> Result<Vec<Member>, PersistenceError> {
    let coach_ids: Vec<i64> = coach_squads::table
        .filter(coach_squads::squad_id.eq(squad_id))
        .select(coach_squads::coach_id)
        .load(conn)?;
    let rows: Vec<MemberRow> = members::table
        .filter(members::member_id.eq_any(coach_ids))
        .select(MemberRow::as_select())
        .order((members::last_name.asc(), members::first_name.asc()))
        .load(conn)?;
    assemble_all(conn, rows)
}

/// Returns the stored member type of a member, if it exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_member_type(
    conn: &mut SqliteConnection,
    member_id: i64,
) -> Result<Option<String>, PersistenceError> {
    Ok(members::table
        .find(member_id)
        .select(members::member_type)
        .first::<String>(conn)
        .optional()?)
}

/// Returns `true` if a member with this ID exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn member_exists(conn: &mut SqliteConnection, member_id: i64) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(members::table.find(member_id))).get_result(conn)?)
}

/// Returns `true` if a player with this member ID exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn player_exists(conn: &mut SqliteConnection, member_id: i64) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(players::table.find(member_id))).get_result(conn)?)
}

/// Returns `true` if a coach with this member ID exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn coach_exists(conn: &mut SqliteConnection, member_id: i64) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(coaches::table.find(member_id))).get_result(conn)?)
}
