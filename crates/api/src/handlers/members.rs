// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member operations: players, coaches, secretaries, and general members.

use clubhouse_domain::{
    CoachProfile, Member, MemberKind, PlayerProfile, Position, validate_member,
};
use clubhouse_persistence::{Persistence, member_types};
use std::collections::BTreeSet;
use time::Date;
use tracing::{debug, info};

use super::{optional_text, parse_date, require_exists};
use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, persistence_failure};
use crate::request_response::{
    CreateMemberRequest, MemberFilter, NewMemberKind, UpdateMemberRequest, WriteResponse,
};

/// Stores a recognised position under its canonical name. Anything else is
/// kept as entered so validation can report it.
fn canonical_position(position: &str) -> String {
    position
        .parse::<Position>()
        .map_or_else(|_| position.to_string(), |p| p.as_str().to_string())
}

fn build_kind(kind: NewMemberKind) -> MemberKind {
    match kind {
        NewMemberKind::Player {
            position,
            squad_id,
            emergency_contact_id,
            medical_conditions,
        } => MemberKind::Player(PlayerProfile {
            position: canonical_position(&position),
            squad_id,
            emergency_contact_id,
            medical_conditions: optional_text(medical_conditions),
        }),
        NewMemberKind::Coach {
            qualifications,
            squad_ids,
        } => MemberKind::Coach(CoachProfile {
            qualifications,
            squad_ids: squad_ids.into_iter().collect::<BTreeSet<i64>>(),
        }),
        NewMemberKind::Secretary => MemberKind::Secretary,
        NewMemberKind::General => MemberKind::General,
    }
}

/// Checks that every squad and member the member refers to exists.
fn check_references(persistence: &mut Persistence, member: &Member) -> Result<(), ApiError> {
    match &member.kind {
        MemberKind::Player(player) => {
            if let Some(squad_id) = player.squad_id {
                let exists: bool = persistence
                    .squad_exists(squad_id)
                    .map_err(persistence_failure("look up squad"))?;
                require_exists(exists, "Squad", squad_id)?;
            }
            if let Some(contact_id) = player.emergency_contact_id {
                let exists: bool = persistence
                    .member_exists(contact_id)
                    .map_err(persistence_failure("look up emergency contact"))?;
                require_exists(exists, "Member", contact_id)?;
            }
        }
        MemberKind::Coach(coach) => {
            for squad_id in &coach.squad_ids {
                let exists: bool = persistence
                    .squad_exists(*squad_id)
                    .map_err(persistence_failure("look up squad"))?;
                require_exists(exists, "Squad", *squad_id)?;
            }
        }
        MemberKind::Secretary | MemberKind::General => {}
    }
    Ok(())
}

fn load_member(persistence: &mut Persistence, member_id: i64) -> Result<Member, ApiError> {
    persistence
        .get_member(member_id)
        .map_err(persistence_failure("load member"))?
        .ok_or_else(|| ApiError::not_found("Member", member_id))
}

fn field_not_applicable(field: &str, member: &Member) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: format!(
            "{} is a {}, which has no {field}",
            member.full_name(),
            member.kind.as_str()
        ),
    }
}

/// Adds a member to the club.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The member's details and specialization
/// * `actor` - The logged-in user
/// * `today` - The date future-date checks are made against
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a Secretary
/// - A date cannot be parsed
/// - The member breaks any validation rule (all violations are reported)
/// - A referenced squad or emergency contact does not exist
/// - The store fails
pub fn create_member(
    persistence: &mut Persistence,
    request: CreateMemberRequest,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_members(actor)?;

    let details = request.details;
    let mut member: Member = Member::new(
        details.first_name,
        details.last_name,
        parse_date("date_of_birth", details.date_of_birth.as_deref())?,
        build_kind(request.kind),
    );
    member.email = optional_text(details.email);
    member.phone = optional_text(details.phone);
    member.address = optional_text(details.address);

    validate_member(&member, today)?;
    check_references(persistence, &member)?;

    let member_id: i64 = persistence
        .save_member(&member)
        .map_err(persistence_failure("save member"))?;

    info!(member_id, kind = member.kind.as_str(), actor = %actor.username, "Member added");
    Ok(WriteResponse::new(
        member_id,
        format!(
            "{} {} added with ID {member_id}",
            member.kind.as_str(),
            member.full_name()
        ),
    ))
}

/// Changes an existing member.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a Secretary
/// - The member does not exist
/// - A player-only or coach-only field is given for another kind of member
/// - The changed member breaks any validation rule
/// - A referenced record does not exist
/// - The store fails
pub fn update_member(
    persistence: &mut Persistence,
    request: UpdateMemberRequest,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_members(actor)?;

    let mut member: Member = load_member(persistence, request.member_id)?;

    if let Some(first_name) = request.first_name {
        member.first_name = first_name;
    }
    if let Some(last_name) = request.last_name {
        member.last_name = last_name;
    }
    if request.date_of_birth.is_some() {
        member.date_of_birth = parse_date("date_of_birth", request.date_of_birth.as_deref())?;
    }
    if request.email.is_some() {
        member.email = optional_text(request.email);
    }
    if request.phone.is_some() {
        member.phone = optional_text(request.phone);
    }
    if request.address.is_some() {
        member.address = optional_text(request.address);
    }

    let touches_player: bool = request.position.is_some()
        || request.emergency_contact_id.is_some()
        || request.medical_conditions.is_some();
    if touches_player {
        let Some(player) = member.player_mut() else {
            return Err(field_not_applicable("position", &member));
        };
        if let Some(position) = request.position {
            player.position = canonical_position(&position);
        }
        if let Some(contact_id) = request.emergency_contact_id {
            player.emergency_contact_id = (contact_id != 0).then_some(contact_id);
        }
        if request.medical_conditions.is_some() {
            player.medical_conditions = optional_text(request.medical_conditions);
        }
    }
    if let Some(qualifications) = request.qualifications {
        let Some(coach) = member.coach_mut() else {
            return Err(field_not_applicable("qualifications", &member));
        };
        coach.qualifications = qualifications;
    }

    validate_member(&member, today)?;
    check_references(persistence, &member)?;

    persistence
        .update_member(&member)
        .map_err(persistence_failure("update member"))?;

    info!(member_id = request.member_id, actor = %actor.username, "Member updated");
    Ok(WriteResponse::new(
        request.member_id,
        format!("{} updated", member.full_name()),
    ))
}

/// Removes a member from the club.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the member does not
/// exist, or the store fails.
pub fn delete_member(
    persistence: &mut Persistence,
    member_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_members(actor)?;

    let deleted: bool = persistence
        .delete_member(member_id)
        .map_err(persistence_failure("delete member"))?;
    require_exists(deleted, "Member", member_id)?;

    info!(member_id, actor = %actor.username, "Member deleted");
    Ok(WriteResponse::new(
        member_id,
        format!("Member {member_id} deleted"),
    ))
}

/// Retrieves one member.
///
/// # Errors
///
/// Returns an error if the member does not exist or the store fails.
pub fn get_member(
    persistence: &mut Persistence,
    member_id: i64,
    actor: &AuthenticatedActor,
) -> Result<Member, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    load_member(persistence, member_id)
}

/// Lists members matching a filter.
///
/// # Errors
///
/// Returns an error if a filtering squad does not exist, the position is
/// not a rugby position, or the store fails.
pub fn list_members(
    persistence: &mut Persistence,
    filter: MemberFilter,
    actor: &AuthenticatedActor,
) -> Result<Vec<Member>, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    debug!(?filter, "Listing members");

    let operation = persistence_failure("list members");
    let result = match filter {
        MemberFilter::All => persistence.list_members(),
        MemberFilter::Players => persistence.list_players(),
        MemberFilter::Coaches => persistence.list_coaches(),
        MemberFilter::Secretaries => persistence.list_members_of_type(member_types::SECRETARY),
        MemberFilter::General => persistence.list_members_of_type(member_types::GENERAL),
        MemberFilter::UnassignedPlayers => persistence.list_unassigned_players(),
        MemberFilter::PlayersAtPosition(position) => {
            let position: Position = position.parse()?;
            persistence.list_players_by_position(position.as_str())
        }
        MemberFilter::PlayersInSquad(squad_id) => {
            let exists: bool = persistence
                .squad_exists(squad_id)
                .map_err(persistence_failure("look up squad"))?;
            require_exists(exists, "Squad", squad_id)?;
            persistence.list_players_by_squad(squad_id)
        }
        MemberFilter::CoachesOfSquad(squad_id) => {
            let exists: bool = persistence
                .squad_exists(squad_id)
                .map_err(persistence_failure("look up squad"))?;
            require_exists(exists, "Squad", squad_id)?;
            persistence.list_coaches_by_squad(squad_id)
        }
    };
    result.map_err(operation)
}
