// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member mutations.
//!
//! Saving a member touches the base row, the specialization row, and (for
//! coaches) the squad links. Each public function runs as one transaction.

use clubhouse_domain::{CoachProfile, Member, MemberKind, PlayerProfile, format_iso_date};
use diesel::SqliteConnection;
use diesel::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{coach_squads, coaches, members, players};
use crate::error::PersistenceError;
use crate::queries::members::get_member_type;

fn stored_birth_date(member: &Member) -> Result<String, PersistenceError> {
    member.date_of_birth.map(format_iso_date).ok_or_else(|| {
        PersistenceError::ConstraintViolation(String::from("members.date_of_birth is required"))
    })
}

fn insert_player_row(
    conn: &mut SqliteConnection,
    member_id: i64,
    player: &PlayerProfile,
) -> Result<(), PersistenceError> {
    diesel::insert_into(players::table)
        .values((
            players::member_id.eq(member_id),
            players::position.eq(&player.position),
            players::squad_id.eq(player.squad_id),
            players::emergency_contact_id.eq(player.emergency_contact_id),
            players::medical_conditions.eq(&player.medical_conditions),
        ))
        .execute(conn)?;
    Ok(())
}

/// Replaces a coach's squad links with `squad_ids`.
fn replace_coach_squads(
    conn: &mut SqliteConnection,
    coach_id: i64,
    squad_ids: &BTreeSet<i64>,
) -> Result<(), PersistenceError> {
    diesel::delete(coach_squads::table.filter(coach_squads::coach_id.eq(coach_id)))
        .execute(conn)?;
    for squad_id in squad_ids {
        diesel::insert_into(coach_squads::table)
            .values((
                coach_squads::coach_id.eq(coach_id),
                coach_squads::squad_id.eq(squad_id),
            ))
            .execute(conn)?;
    }
    Ok(())
}

fn insert_coach_row(
    conn: &mut SqliteConnection,
    member_id: i64,
    coach: &CoachProfile,
) -> Result<(), PersistenceError> {
    diesel::insert_into(coaches::table)
        .values((
            coaches::member_id.eq(member_id),
            coaches::qualifications.eq(&coach.qualifications),
        ))
        .execute(conn)?;
    replace_coach_squads(conn, member_id, &coach.squad_ids)
}

fn write_specialization(
    conn: &mut SqliteConnection,
    member_id: i64,
    kind: &MemberKind,
) -> Result<(), PersistenceError> {
    match kind {
        MemberKind::Player(player) => insert_player_row(conn, member_id, player),
        MemberKind::Coach(coach) => insert_coach_row(conn, member_id, coach),
        MemberKind::Secretary | MemberKind::General => Ok(()),
    }
}

/// Drops the player or coach row. Stats, attendance, and squad links
/// owned by it go with it.
fn remove_specialization(conn: &mut SqliteConnection, member_id: i64) -> Result<(), PersistenceError> {
    diesel::delete(players::table.find(member_id)).execute(conn)?;
    diesel::delete(coaches::table.find(member_id)).execute(conn)?;
    Ok(())
}

/// Inserts a member and its specialization.
///
/// The member's own `member_id` is ignored; the store assigns one.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `member` - The validated member to insert
///
/// # Returns
///
/// The new member ID.
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is written in that case.
pub fn insert_member(conn: &mut SqliteConnection, member: &Member) -> Result<i64, PersistenceError> {
    let date_of_birth: String = stored_birth_date(member)?;

    conn.transaction(|conn| {
        diesel::insert_into(members::table)
            .values((
                members::first_name.eq(&member.first_name),
                members::last_name.eq(&member.last_name),
                members::date_of_birth.eq(&date_of_birth),
                members::email.eq(&member.email),
                members::phone.eq(&member.phone),
                members::address.eq(&member.address),
                members::member_type.eq(member.kind.as_str()),
            ))
            .execute(conn)?;

        let member_id: i64 = conn.get_last_insert_rowid()?;
        write_specialization(conn, member_id, &member.kind)?;

        info!(member_id, member_type = member.kind.as_str(), "Created member");
        Ok(member_id)
    })
}

/// Updates a member in place, including its specialization.
///
/// If the member's kind changed, the old specialization row is dropped
/// and a new one written.
///
/// # Returns
///
/// `false` if the member has no ID or no such member exists.
///
/// # Errors
///
/// Returns an error if any write fails; nothing is changed in that case.
pub fn update_member(conn: &mut SqliteConnection, member: &Member) -> Result<bool, PersistenceError> {
    let Some(member_id) = member.member_id else {
        return Ok(false);
    };
    let date_of_birth: String = stored_birth_date(member)?;

    conn.transaction(|conn| {
        let Some(previous_type) = get_member_type(conn, member_id)? else {
            return Ok(false);
        };

        diesel::update(members::table.find(member_id))
            .set((
                members::first_name.eq(&member.first_name),
                members::last_name.eq(&member.last_name),
                members::date_of_birth.eq(&date_of_birth),
                members::email.eq(&member.email),
                members::phone.eq(&member.phone),
                members::address.eq(&member.address),
                members::member_type.eq(member.kind.as_str()),
            ))
            .execute(conn)?;

        if previous_type == member.kind.as_str() {
            match &member.kind {
                MemberKind::Player(player) => {
                    diesel::update(players::table.find(member_id))
                        .set((
                            players::position.eq(&player.position),
                            players::squad_id.eq(player.squad_id),
                            players::emergency_contact_id.eq(player.emergency_contact_id),
                            players::medical_conditions.eq(&player.medical_conditions),
                        ))
                        .execute(conn)?;
                }
                MemberKind::Coach(coach) => {
                    diesel::update(coaches::table.find(member_id))
                        .set(coaches::qualifications.eq(&coach.qualifications))
                        .execute(conn)?;
                    replace_coach_squads(conn, member_id, &coach.squad_ids)?;
                }
                MemberKind::Secretary | MemberKind::General => {}
            }
        } else {
            debug!(
                member_id,
                from = %previous_type,
                to = member.kind.as_str(),
                "Member kind changed"
            );
            remove_specialization(conn, member_id)?;
            write_specialization(conn, member_id, &member.kind)?;
        }

        info!(member_id, "Updated member");
        Ok(true)
    })
}

/// Deletes a member.
///
/// Emergency contact references to the member and user links are nulled;
/// the member's stats, attendance, and coaching links are removed.
///
/// # Returns
///
/// `false` if no such member exists.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_member(conn: &mut SqliteConnection, member_id: i64) -> Result<bool, PersistenceError> {
    let rows_affected: usize = diesel::delete(members::table.find(member_id)).execute(conn)?;
    if rows_affected > 0 {
        info!(member_id, "Deleted member");
    }
    Ok(rows_affected > 0)
}
