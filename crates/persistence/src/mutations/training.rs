// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Training session and attendance mutations.

use clubhouse_domain::{Training, TrainingAttendance, format_iso_date};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{training_attendance, trainings};
use crate::error::PersistenceError;

fn stored_columns(training: &Training) -> Result<(String, i64), PersistenceError> {
    let date: String = training.date.map(format_iso_date).ok_or_else(|| {
        PersistenceError::ConstraintViolation(String::from("trainings.training_date is required"))
    })?;
    let squad_id: i64 = training.squad_id.ok_or_else(|| {
        PersistenceError::ConstraintViolation(String::from("trainings.squad_id is required"))
    })?;
    Ok((date, squad_id))
}

/// Inserts a training session.
///
/// # Returns
///
/// The new training ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including an unknown squad).
pub fn insert_training(
    conn: &mut SqliteConnection,
    training: &Training,
) -> Result<i64, PersistenceError> {
    let (training_date, squad_id) = stored_columns(training)?;

    diesel::insert_into(trainings::table)
        .values((
            trainings::training_date.eq(&training_date),
            trainings::squad_id.eq(squad_id),
            trainings::focus_areas.eq(&training.focus_areas),
            trainings::coach_notes.eq(&training.coach_notes),
        ))
        .execute(conn)?;
    let training_id: i64 = conn.get_last_insert_rowid()?;

    info!(training_id, squad_id, "Scheduled training session");
    Ok(training_id)
}

/// Updates every column of a training session.
///
/// # Returns
///
/// `false` if the session has no ID or no such session exists.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_training(
    conn: &mut SqliteConnection,
    training: &Training,
) -> Result<bool, PersistenceError> {
    let Some(training_id) = training.training_id else {
        return Ok(false);
    };
    let (training_date, squad_id) = stored_columns(training)?;

    let rows_affected: usize = diesel::update(trainings::table.find(training_id))
        .set((
            trainings::training_date.eq(&training_date),
            trainings::squad_id.eq(squad_id),
            trainings::focus_areas.eq(&training.focus_areas),
            trainings::coach_notes.eq(&training.coach_notes),
        ))
        .execute(conn)?;
    Ok(rows_affected > 0)
}

/// Deletes a training session and its attendance records.
///
/// # Returns
///
/// `false` if no such session exists.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_training(
    conn: &mut SqliteConnection,
    training_id: i64,
) -> Result<bool, PersistenceError> {
    let rows_affected: usize =
        diesel::delete(trainings::table.find(training_id)).execute(conn)?;
    if rows_affected > 0 {
        info!(training_id, "Deleted training session");
    }
    Ok(rows_affected > 0)
}

/// Records whether a player attended a session, replacing any earlier
/// record for the same pair.
///
/// # Returns
///
/// The ID of the stored attendance row.
///
/// # Errors
///
/// Returns an error if the write fails (including an unknown player or
/// session); nothing is changed in that case.
pub fn record_attendance(
    conn: &mut SqliteConnection,
    attendance: &TrainingAttendance,
) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        let existing: Option<i64> = training_attendance::table
            .filter(training_attendance::player_id.eq(attendance.player_id))
            .filter(training_attendance::training_id.eq(attendance.training_id))
            .select(training_attendance::attendance_id)
            .first(conn)
            .optional()?;

        let attendance_id: i64 = if let Some(attendance_id) = existing {
            diesel::update(training_attendance::table.find(attendance_id))
                .set((
                    training_attendance::present.eq(i32::from(attendance.present)),
                    training_attendance::notes.eq(&attendance.notes),
                ))
                .execute(conn)?;
            attendance_id
        } else {
            diesel::insert_into(training_attendance::table)
                .values((
                    training_attendance::player_id.eq(attendance.player_id),
                    training_attendance::training_id.eq(attendance.training_id),
                    training_attendance::present.eq(i32::from(attendance.present)),
                    training_attendance::notes.eq(&attendance.notes),
                ))
                .execute(conn)?;
            conn.get_last_insert_rowid()?
        };

        debug!(
            attendance_id,
            player_id = attendance.player_id,
            training_id = attendance.training_id,
            present = attendance.present,
            "Recorded attendance"
        );
        Ok(attendance_id)
    })
}
