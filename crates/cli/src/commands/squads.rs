// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Subcommand;
use clubhouse_api::handlers::{members, squads};
use clubhouse_api::{
    ApiError, AuthenticatedActor, CoachingCheckResponse, CreateSquadRequest, MemberFilter,
    UpdateSquadRequest, WriteResponse,
};
use clubhouse_domain::{Member, Squad};
use serde::Serialize;

use super::Context;
use crate::render::{coaching_table, members_table, squads_table};
use crate::session::value_or_prompt;

#[derive(Debug, Subcommand)]
pub enum SquadCommand {
    /// Create a squad. A missing name or age grade is prompted for.
    Add {
        #[arg(long)]
        name: Option<String>,

        /// "U" followed by one or two digits, or "Senior"
        #[arg(long)]
        grade: Option<String>,
    },

    /// Rename or regrade a squad
    Update {
        /// The squad to change
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        grade: Option<String>,
    },

    /// Delete a squad with its games and training sessions
    Remove {
        /// The squad to delete
        id: i64,
    },

    /// Show a squad with its players and coaches
    Show {
        /// The squad to show
        id: i64,
    },

    /// List every squad
    List,

    /// Put a player on a squad
    AssignPlayer { player: i64, squad: i64 },

    /// Take a player off a squad
    RemovePlayer { player: i64, squad: i64 },

    /// Assign a coach to a squad
    AssignCoach { coach: i64, squad: i64 },

    /// Unassign a coach from a squad
    RemoveCoach { coach: i64, squad: i64 },

    /// Check whether squads have enough coaches for their age grade
    Coaching {
        /// Check only this squad
        squad: Option<i64>,
    },
}

/// A squad with its members resolved, for display.
#[derive(Debug, Serialize)]
struct SquadView {
    squad: Squad,
    players: Vec<Member>,
    coaches: Vec<Member>,
}

impl SquadView {
    fn render(&self) -> String {
        format!(
            "{} ({})\n\nPlayers\n{}\nCoaches ({} of {} required)\n{}",
            self.squad.name,
            self.squad.age_grade,
            members_table(&self.players),
            self.coaches.len(),
            self.squad.minimum_coaches(),
            members_table(&self.coaches)
        )
    }
}

impl SquadCommand {
    pub fn run(self, context: &mut Context) -> Result<(), ApiError> {
        let actor: AuthenticatedActor = context.login()?;
        let persistence = &mut context.persistence;
        let response: WriteResponse = match self {
            Self::Add { name, grade } => {
                let request: CreateSquadRequest = CreateSquadRequest {
                    name: value_or_prompt(name, "Squad name")?,
                    age_grade: value_or_prompt(grade, "Age grade")?,
                };
                squads::create_squad(persistence, request, &actor)?
            }
            Self::Update { id, name, grade } => squads::update_squad(
                persistence,
                UpdateSquadRequest {
                    squad_id: id,
                    name,
                    age_grade: grade,
                },
                &actor,
            )?,
            Self::Remove { id } => squads::delete_squad(persistence, id, &actor)?,
            Self::AssignPlayer { player, squad } => {
                squads::assign_player_to_squad(persistence, player, squad, &actor)?
            }
            Self::RemovePlayer { player, squad } => {
                squads::remove_player_from_squad(persistence, player, squad, &actor)?
            }
            Self::AssignCoach { coach, squad } => {
                squads::assign_coach_to_squad(persistence, coach, squad, &actor)?
            }
            Self::RemoveCoach { coach, squad } => {
                squads::remove_coach_from_squad(persistence, coach, squad, &actor)?
            }
            Self::Show { id } => {
                let view: SquadView = SquadView {
                    squad: squads::get_squad(persistence, id, &actor)?,
                    players: members::list_members(
                        persistence,
                        MemberFilter::PlayersInSquad(id),
                        &actor,
                    )?,
                    coaches: members::list_members(
                        persistence,
                        MemberFilter::CoachesOfSquad(id),
                        &actor,
                    )?,
                };
                return context.output.show(&view, || view.render());
            }
            Self::List => {
                let found: Vec<Squad> = squads::list_squads(persistence, &actor)?;
                return context
                    .output
                    .show(&found, || squads_table(&found).to_string());
            }
            Self::Coaching { squad } => {
                let checks: Vec<CoachingCheckResponse> = match squad {
                    Some(squad_id) => vec![squads::check_coaching(persistence, squad_id, &actor)?],
                    None => squads::check_all_coaching(persistence, &actor)?,
                };
                return context
                    .output
                    .show(&checks, || coaching_table(&checks).to_string());
            }
        };
        context.report_write(&response)
    }
}
