// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Training session and attendance queries.

use clubhouse_domain::{Training, TrainingAttendance};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{AttendanceRow, TrainingRow};
use crate::diesel_schema::{training_attendance, trainings};
use crate::error::PersistenceError;

/// Retrieves a training session by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_training(
    conn: &mut SqliteConnection,
    training_id: i64,
) -> Result<Option<Training>, PersistenceError> {
    debug!(training_id, "Looking up training session");

    trainings::table
        .find(training_id)
        .select(TrainingRow::as_select())
        .first(conn)
        .optional()?
        .map(TrainingRow::into_training)
        .transpose()
}

/// Lists training sessions, most recent first, optionally for one squad.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_trainings(
    conn: &mut SqliteConnection,
    squad_id: Option<i64>,
) -> Result<Vec<Training>, PersistenceError> {
    let mut query = trainings::table
        .select(TrainingRow::as_select())
        .order((trainings::training_date.desc(), trainings::training_id.desc()))
        .into_boxed();
    if let Some(squad_id) = squad_id {
        query = query.filter(trainings::squad_id.eq(squad_id));
    }

    query
        .load::<TrainingRow>(conn)?
        .into_iter()
        .map(TrainingRow::into_training)
        .collect()
}

/// Returns `true` if a training session with this ID exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn training_exists(
    conn: &mut SqliteConnection,
    training_id: i64,
) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(trainings::table.find(training_id))).get_result(conn)?)
}

/// Retrieves one player's attendance record for one session.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_attendance(
    conn: &mut SqliteConnection,
    player_id: i64,
    training_id: i64,
) -> Result<Option<TrainingAttendance>, PersistenceError> {
    Ok(training_attendance::table
        .filter(training_attendance::player_id.eq(player_id))
        .filter(training_attendance::training_id.eq(training_id))
        .select(AttendanceRow::as_select())
        .first(conn)
        .optional()?
        .map(TrainingAttendance::from))
}

/// Lists attendance for one training session.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_attendance_by_training(
    conn: &mut SqliteConnection,
    training_id: i64,
) -> Result<Vec<TrainingAttendance>, PersistenceError> {
    Ok(training_attendance::table
        .filter(training_attendance::training_id.eq(training_id))
        .select(AttendanceRow::as_select())
        .order(training_attendance::player_id.asc())
        .load::<AttendanceRow>(conn)?
        .into_iter()
        .map(TrainingAttendance::from)
        .collect())
}

/// Lists one player's attendance across all sessions.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_attendance_by_player(
    conn: &mut SqliteConnection,
    player_id: i64,
) -> Result<Vec<TrainingAttendance>, PersistenceError> {
    Ok(training_attendance::table
        .filter(training_attendance::player_id.eq(player_id))
        .select(AttendanceRow::as_select())
        .order(training_attendance::training_id.asc())
        .load::<AttendanceRow>(conn)?
        .into_iter()
        .map(TrainingAttendance::from)
        .collect())
}

/// Lists attendance for every session held by a squad.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_attendance_by_squad(
    conn: &mut SqliteConnection,
    squad_id: i64,
) -> Result<Vec<TrainingAttendance>, PersistenceError> {
    Ok(training_attendance::table
        .inner_join(trainings::table)
        .filter(trainings::squad_id.eq(squad_id))
        .select(AttendanceRow::as_select())
        .order((
            training_attendance::player_id.asc(),
            training_attendance::training_id.asc(),
        ))
        .load::<AttendanceRow>(conn)?
        .into_iter()
        .map(TrainingAttendance::from)
        .collect())
}
