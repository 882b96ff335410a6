// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Training sessions and attendance.

use clubhouse_domain::{
    Training, TrainingAttendance, validate_training, validate_training_attendance,
};
use clubhouse_persistence::Persistence;
use time::Date;
use tracing::info;

use super::{optional_text, parse_date, require_exists};
use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, persistence_failure};
use crate::request_response::{
    RecordAttendanceRequest, ScheduleTrainingRequest, UpdateTrainingRequest, WriteResponse,
};

fn load_training(persistence: &mut Persistence, training_id: i64) -> Result<Training, ApiError> {
    persistence
        .get_training(training_id)
        .map_err(persistence_failure("load training session"))?
        .ok_or_else(|| ApiError::not_found("Training session", training_id))
}

fn require_training(persistence: &mut Persistence, training_id: i64) -> Result<(), ApiError> {
    let exists: bool = persistence
        .training_exists(training_id)
        .map_err(persistence_failure("look up training session"))?;
    require_exists(exists, "Training session", training_id)
}

/// Schedules a training session for a squad.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a Coach
/// - The date cannot be parsed
/// - The session breaks any validation rule
/// - The squad does not exist
/// - The store fails
pub fn schedule_training(
    persistence: &mut Persistence,
    request: ScheduleTrainingRequest,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_training(actor)?;

    let mut training: Training = Training::new(
        parse_date("date", request.date.as_deref())?,
        request.squad_id,
        request.focus_areas,
    );
    training.coach_notes = optional_text(request.coach_notes);

    validate_training(&training, today)?;
    if let Some(squad_id) = training.squad_id {
        let exists: bool = persistence
            .squad_exists(squad_id)
            .map_err(persistence_failure("look up squad"))?;
        require_exists(exists, "Squad", squad_id)?;
    }

    let training_id: i64 = persistence
        .save_training(&training)
        .map_err(persistence_failure("save training session"))?;

    info!(training_id, actor = %actor.username, "Training session scheduled");
    Ok(WriteResponse::new(
        training_id,
        format!("Training session scheduled with ID {training_id}"),
    ))
}

/// Changes a training session.
///
/// # Errors
///
/// Returns an error if the actor is not a Coach, the session does not
/// exist, the changed session breaks a validation rule, or the store fails.
pub fn update_training(
    persistence: &mut Persistence,
    request: UpdateTrainingRequest,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_training(actor)?;

    let mut training: Training = load_training(persistence, request.training_id)?;
    if request.date.is_some() {
        training.date = parse_date("date", request.date.as_deref())?;
    }
    if let Some(focus_areas) = request.focus_areas {
        training.focus_areas = focus_areas;
    }
    if request.coach_notes.is_some() {
        training.coach_notes = optional_text(request.coach_notes);
    }

    validate_training(&training, today)?;

    persistence
        .update_training(&training)
        .map_err(persistence_failure("update training session"))?;

    info!(training_id = request.training_id, actor = %actor.username, "Training session updated");
    Ok(WriteResponse::new(
        request.training_id,
        format!("Training session {} updated", request.training_id),
    ))
}

/// Deletes a training session and its attendance.
///
/// # Errors
///
/// Returns an error if the actor is not a Coach, the session does not
/// exist, or the store fails.
pub fn delete_training(
    persistence: &mut Persistence,
    training_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_training(actor)?;

    let deleted: bool = persistence
        .delete_training(training_id)
        .map_err(persistence_failure("delete training session"))?;
    require_exists(deleted, "Training session", training_id)?;

    info!(training_id, actor = %actor.username, "Training session deleted");
    Ok(WriteResponse::new(
        training_id,
        format!("Training session {training_id} deleted"),
    ))
}

/// Retrieves one training session.
///
/// # Errors
///
/// Returns an error if the session does not exist or the store fails.
pub fn get_training(
    persistence: &mut Persistence,
    training_id: i64,
    actor: &AuthenticatedActor,
) -> Result<Training, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    load_training(persistence, training_id)
}

/// Lists training sessions, most recent first, optionally for one squad.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_trainings(
    persistence: &mut Persistence,
    squad_id: Option<i64>,
    actor: &AuthenticatedActor,
) -> Result<Vec<Training>, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    persistence
        .list_trainings(squad_id)
        .map_err(persistence_failure("list training sessions"))
}

/// Records whether a player attended a session, replacing any earlier
/// record for the same pair.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a Coach
/// - The record breaks any validation rule
/// - The player or session does not exist
/// - The store fails
pub fn record_attendance(
    persistence: &mut Persistence,
    request: RecordAttendanceRequest,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_training(actor)?;

    let mut attendance: TrainingAttendance =
        TrainingAttendance::new(request.player_id, request.training_id, request.present);
    attendance.notes = optional_text(request.notes);

    validate_training_attendance(&attendance)?;

    let player_exists: bool = persistence
        .player_exists(attendance.player_id)
        .map_err(persistence_failure("look up player"))?;
    require_exists(player_exists, "Player", attendance.player_id)?;
    require_training(persistence, attendance.training_id)?;

    let attendance_id: i64 = persistence
        .record_attendance(&attendance)
        .map_err(persistence_failure("record attendance"))?;

    info!(
        attendance_id,
        player_id = attendance.player_id,
        training_id = attendance.training_id,
        present = attendance.present,
        "Attendance recorded"
    );
    Ok(WriteResponse::new(
        attendance_id,
        format!(
            "Player {} marked {} for training session {}",
            attendance.player_id,
            if attendance.present { "present" } else { "absent" },
            attendance.training_id
        ),
    ))
}

/// Lists attendance for one session.
///
/// # Errors
///
/// Returns an error if the session does not exist or the store fails.
pub fn list_attendance(
    persistence: &mut Persistence,
    training_id: i64,
    actor: &AuthenticatedActor,
) -> Result<Vec<TrainingAttendance>, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    require_training(persistence, training_id)?;
    persistence
        .list_attendance_by_training(training_id)
        .map_err(persistence_failure("list attendance"))
}
