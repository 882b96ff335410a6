// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Squad operations, rosters, and coaching assignments.

use clubhouse_domain::{Squad, validate_squad};
use clubhouse_persistence::Persistence;
use tracing::{info, warn};

use super::require_exists;
use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, persistence_failure};
use crate::request_response::{
    CoachingCheckResponse, CreateSquadRequest, UpdateSquadRequest, WriteResponse,
};

fn load_squad(persistence: &mut Persistence, squad_id: i64) -> Result<Squad, ApiError> {
    persistence
        .get_squad(squad_id)
        .map_err(persistence_failure("load squad"))?
        .ok_or_else(|| ApiError::not_found("Squad", squad_id))
}

/// Rejects a name already used by a different squad.
fn check_unique_name(
    persistence: &mut Persistence,
    name: &str,
    own_id: Option<i64>,
) -> Result<(), ApiError> {
    let existing: Option<Squad> = persistence
        .find_squad_by_name(name)
        .map_err(persistence_failure("look up squad"))?;
    match existing {
        Some(squad) if squad.squad_id != own_id => Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: format!("A squad named '{name}' already exists"),
        }),
        _ => Ok(()),
    }
}

fn require_player(persistence: &mut Persistence, player_id: i64) -> Result<(), ApiError> {
    let exists: bool = persistence
        .player_exists(player_id)
        .map_err(persistence_failure("look up player"))?;
    require_exists(exists, "Player", player_id)
}

fn require_coach(persistence: &mut Persistence, coach_id: i64) -> Result<(), ApiError> {
    let exists: bool = persistence
        .coach_exists(coach_id)
        .map_err(persistence_failure("look up coach"))?;
    require_exists(exists, "Coach", coach_id)
}

fn require_squad(persistence: &mut Persistence, squad_id: i64) -> Result<(), ApiError> {
    let exists: bool = persistence
        .squad_exists(squad_id)
        .map_err(persistence_failure("look up squad"))?;
    require_exists(exists, "Squad", squad_id)
}

/// Creates a squad with no players or coaches.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the squad breaks a
/// validation rule, the name is taken, or the store fails.
pub fn create_squad(
    persistence: &mut Persistence,
    request: CreateSquadRequest,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_squads(actor)?;

    let squad: Squad = Squad::new(request.name, request.age_grade);
    validate_squad(&squad)?;
    check_unique_name(persistence, &squad.name, None)?;

    let squad_id: i64 = persistence
        .save_squad(&squad)
        .map_err(persistence_failure("save squad"))?;

    info!(squad_id, name = %squad.name, actor = %actor.username, "Squad created");
    Ok(WriteResponse::new(
        squad_id,
        format!("Squad '{}' ({}) created with ID {squad_id}", squad.name, squad.age_grade),
    ))
}

/// Renames or regrades a squad.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the squad does not
/// exist, the changed squad breaks a validation rule, the new name is
/// taken, or the store fails.
pub fn update_squad(
    persistence: &mut Persistence,
    request: UpdateSquadRequest,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_squads(actor)?;

    let mut squad: Squad = load_squad(persistence, request.squad_id)?;
    if let Some(name) = request.name {
        squad.name = name;
    }
    if let Some(age_grade) = request.age_grade {
        squad.age_grade = age_grade;
    }
    validate_squad(&squad)?;
    check_unique_name(persistence, &squad.name, squad.squad_id)?;

    persistence
        .update_squad(&squad)
        .map_err(persistence_failure("update squad"))?;

    info!(squad_id = request.squad_id, actor = %actor.username, "Squad updated");
    Ok(WriteResponse::new(
        request.squad_id,
        format!("Squad '{}' updated", squad.name),
    ))
}

/// Deletes a squad.
///
/// Its players become unassigned. Its games and training sessions, with
/// their stats and attendance, are deleted.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the squad does not
/// exist, or the store fails.
pub fn delete_squad(
    persistence: &mut Persistence,
    squad_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_squads(actor)?;

    let deleted: bool = persistence
        .delete_squad(squad_id)
        .map_err(persistence_failure("delete squad"))?;
    require_exists(deleted, "Squad", squad_id)?;

    warn!(squad_id, actor = %actor.username, "Squad deleted with its games and training");
    Ok(WriteResponse::new(squad_id, format!("Squad {squad_id} deleted")))
}

/// Retrieves one squad with its roster and coaches.
///
/// # Errors
///
/// Returns an error if the squad does not exist or the store fails.
pub fn get_squad(
    persistence: &mut Persistence,
    squad_id: i64,
    actor: &AuthenticatedActor,
) -> Result<Squad, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    load_squad(persistence, squad_id)
}

/// Lists every squad.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_squads(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<Vec<Squad>, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    persistence
        .list_squads()
        .map_err(persistence_failure("list squads"))
}

/// Puts a player on a squad, moving them off any previous squad.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the player or squad
/// does not exist, or the store fails.
pub fn assign_player_to_squad(
    persistence: &mut Persistence,
    player_id: i64,
    squad_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_squads(actor)?;
    require_player(persistence, player_id)?;
    require_squad(persistence, squad_id)?;

    persistence
        .assign_player_to_squad(player_id, squad_id)
        .map_err(persistence_failure("assign player"))?;

    info!(player_id, squad_id, "Player assigned to squad");
    Ok(WriteResponse::new(
        player_id,
        format!("Player {player_id} assigned to squad {squad_id}"),
    ))
}

/// Takes a player off a squad.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the player or squad
/// does not exist, the player is not on that squad, or the store fails.
pub fn remove_player_from_squad(
    persistence: &mut Persistence,
    player_id: i64,
    squad_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_squads(actor)?;
    require_player(persistence, player_id)?;
    require_squad(persistence, squad_id)?;

    let removed: bool = persistence
        .remove_player_from_squad(player_id, squad_id)
        .map_err(persistence_failure("remove player"))?;
    if !removed {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Squad membership"),
            message: format!("Player {player_id} is not in squad {squad_id}"),
        });
    }

    info!(player_id, squad_id, "Player removed from squad");
    Ok(WriteResponse::new(
        player_id,
        format!("Player {player_id} removed from squad {squad_id}"),
    ))
}

/// Assigns a coach to a squad. Assigning twice is not an error.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the coach or squad
/// does not exist, or the store fails.
pub fn assign_coach_to_squad(
    persistence: &mut Persistence,
    coach_id: i64,
    squad_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_squads(actor)?;
    require_coach(persistence, coach_id)?;
    require_squad(persistence, squad_id)?;

    let added: bool = persistence
        .assign_coach_to_squad(coach_id, squad_id)
        .map_err(persistence_failure("assign coach"))?;

    let message: String = if added {
        info!(coach_id, squad_id, "Coach assigned to squad");
        format!("Coach {coach_id} assigned to squad {squad_id}")
    } else {
        format!("Coach {coach_id} already coaches squad {squad_id}")
    };
    Ok(WriteResponse::new(coach_id, message))
}

/// Unassigns a coach from a squad.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the coach or squad
/// does not exist, the coach is not assigned to it, or the store fails.
pub fn remove_coach_from_squad(
    persistence: &mut Persistence,
    coach_id: i64,
    squad_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_squads(actor)?;
    require_coach(persistence, coach_id)?;
    require_squad(persistence, squad_id)?;

    let removed: bool = persistence
        .remove_coach_from_squad(coach_id, squad_id)
        .map_err(persistence_failure("remove coach"))?;
    if !removed {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Coaching assignment"),
            message: format!("Coach {coach_id} does not coach squad {squad_id}"),
        });
    }

    info!(coach_id, squad_id, "Coach removed from squad");
    Ok(WriteResponse::new(
        coach_id,
        format!("Coach {coach_id} removed from squad {squad_id}"),
    ))
}

fn coaching_check(squad: &Squad) -> CoachingCheckResponse {
    CoachingCheckResponse {
        squad_id: squad.squad_id.unwrap_or_default(),
        name: squad.name.clone(),
        age_grade: squad.age_grade.clone(),
        coach_count: squad.coach_ids.len(),
        minimum_required: squad.minimum_coaches(),
        has_minimum_coaches: squad.has_minimum_coaches(),
        coaches_needed: squad.coaches_needed(),
    }
}

/// Reports whether a squad has enough coaches for its age grade.
///
/// # Errors
///
/// Returns an error if the squad does not exist or the store fails.
pub fn check_coaching(
    persistence: &mut Persistence,
    squad_id: i64,
    actor: &AuthenticatedActor,
) -> Result<CoachingCheckResponse, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    let squad: Squad = load_squad(persistence, squad_id)?;
    Ok(coaching_check(&squad))
}

/// Reports coaching adequacy for every squad.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn check_all_coaching(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<Vec<CoachingCheckResponse>, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    let squads: Vec<Squad> = persistence
        .list_squads()
        .map_err(persistence_failure("list squads"))?;
    Ok(squads.iter().map(coaching_check).collect())
}
