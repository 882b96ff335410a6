// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Args, Subcommand, ValueEnum};
use clubhouse_api::handlers::members;
use clubhouse_api::{
    ApiError, AuthenticatedActor, CreateMemberRequest, MemberDetails, MemberFilter,
    NewMemberKind, UpdateMemberRequest, WriteResponse,
};
use clubhouse_domain::Member;

use super::Context;
use crate::render::{member_detail, members_table};
use crate::session::value_or_prompt;

/// The kind of member to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Player,
    Coach,
    Secretary,
    Member,
}

/// The kind of member to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    All,
    Players,
    Coaches,
    Secretaries,
    General,
}

/// Details shared by every kind of member.
#[derive(Debug, Clone, Default, Args)]
pub struct DetailArgs {
    /// First name (letters and spaces)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name (letters and spaces)
    #[arg(long)]
    pub last_name: Option<String>,

    /// Date of birth, dd/MM/yyyy or yyyy-MM-dd
    #[arg(long)]
    pub dob: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Phone number (digits only)
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum MemberCommand {
    /// Add a member. Missing names, birth date, position, and
    /// qualifications are prompted for.
    Add {
        #[arg(long, value_enum, default_value_t = KindArg::Member)]
        kind: KindArg,

        #[command(flatten)]
        details: DetailArgs,

        /// Playing position, by name or shirt number (players)
        #[arg(long)]
        position: Option<String>,

        /// Squad to join (players)
        #[arg(long)]
        squad: Option<i64>,

        /// Member to contact in an emergency (players)
        #[arg(long)]
        emergency_contact: Option<i64>,

        /// Medical conditions (players)
        #[arg(long)]
        medical: Option<String>,

        /// Coaching qualifications (coaches)
        #[arg(long)]
        qualifications: Option<String>,

        /// Squads to coach, comma separated (coaches)
        #[arg(long, value_delimiter = ',')]
        coaches: Vec<i64>,
    },

    /// Change a member's details
    Update {
        /// The member to change
        id: i64,

        #[command(flatten)]
        details: DetailArgs,

        /// Playing position (players)
        #[arg(long)]
        position: Option<String>,

        /// Emergency contact member; 0 clears it (players)
        #[arg(long)]
        emergency_contact: Option<i64>,

        /// Medical conditions (players)
        #[arg(long)]
        medical: Option<String>,

        /// Coaching qualifications (coaches)
        #[arg(long)]
        qualifications: Option<String>,
    },

    /// Remove a member
    Remove {
        /// The member to remove
        id: i64,
    },

    /// Show one member in full
    Show {
        /// The member to show
        id: i64,
    },

    /// List members
    List {
        #[arg(long, value_enum, default_value_t = ListKind::All)]
        kind: ListKind,

        /// Only players in, or coaches of, this squad
        #[arg(long)]
        squad: Option<i64>,

        /// Only players at this position
        #[arg(long)]
        position: Option<String>,

        /// Only players without a squad
        #[arg(long)]
        unassigned: bool,
    },
}

/// Picks the narrowest filter the arguments ask for.
pub fn member_filter(
    kind: ListKind,
    squad: Option<i64>,
    position: Option<String>,
    unassigned: bool,
) -> MemberFilter {
    if let Some(squad_id) = squad {
        return if kind == ListKind::Coaches {
            MemberFilter::CoachesOfSquad(squad_id)
        } else {
            MemberFilter::PlayersInSquad(squad_id)
        };
    }
    if let Some(position) = position {
        return MemberFilter::PlayersAtPosition(position);
    }
    if unassigned {
        return MemberFilter::UnassignedPlayers;
    }
    match kind {
        ListKind::All => MemberFilter::All,
        ListKind::Players => MemberFilter::Players,
        ListKind::Coaches => MemberFilter::Coaches,
        ListKind::Secretaries => MemberFilter::Secretaries,
        ListKind::General => MemberFilter::General,
    }
}

fn prompted_details(details: DetailArgs) -> Result<MemberDetails, ApiError> {
    Ok(MemberDetails {
        first_name: value_or_prompt(details.first_name, "First name")?,
        last_name: value_or_prompt(details.last_name, "Last name")?,
        date_of_birth: Some(value_or_prompt(details.dob, "Date of birth (dd/MM/yyyy)")?),
        email: details.email,
        phone: details.phone,
        address: details.address,
    })
}

impl MemberCommand {
    pub fn run(self, context: &mut Context) -> Result<(), ApiError> {
        let actor: AuthenticatedActor = context.login()?;
        match self {
            Self::Add {
                kind,
                details,
                position,
                squad,
                emergency_contact,
                medical,
                qualifications,
                coaches,
            } => {
                let details: MemberDetails = prompted_details(details)?;
                let kind: NewMemberKind = match kind {
                    KindArg::Player => NewMemberKind::Player {
                        position: value_or_prompt(position, "Position")?,
                        squad_id: squad,
                        emergency_contact_id: emergency_contact,
                        medical_conditions: medical,
                    },
                    KindArg::Coach => NewMemberKind::Coach {
                        qualifications: value_or_prompt(qualifications, "Qualifications")?,
                        squad_ids: coaches,
                    },
                    KindArg::Secretary => NewMemberKind::Secretary,
                    KindArg::Member => NewMemberKind::General,
                };
                let response: WriteResponse = members::create_member(
                    &mut context.persistence,
                    CreateMemberRequest { details, kind },
                    &actor,
                    context.today,
                )?;
                context.report_write(&response)
            }
            Self::Update {
                id,
                details,
                position,
                emergency_contact,
                medical,
                qualifications,
            } => {
                let request: UpdateMemberRequest = UpdateMemberRequest {
                    member_id: id,
                    first_name: details.first_name,
                    last_name: details.last_name,
                    date_of_birth: details.dob,
                    email: details.email,
                    phone: details.phone,
                    address: details.address,
                    position,
                    emergency_contact_id: emergency_contact,
                    medical_conditions: medical,
                    qualifications,
                };
                let response: WriteResponse =
                    members::update_member(&mut context.persistence, request, &actor, context.today)?;
                context.report_write(&response)
            }
            Self::Remove { id } => {
                let response: WriteResponse =
                    members::delete_member(&mut context.persistence, id, &actor)?;
                context.report_write(&response)
            }
            Self::Show { id } => {
                let member: Member = members::get_member(&mut context.persistence, id, &actor)?;
                let today = context.today;
                context
                    .output
                    .show(&member, || member_detail(&member, today).to_string())
            }
            Self::List {
                kind,
                squad,
                position,
                unassigned,
            } => {
                let filter: MemberFilter = member_filter(kind, squad, position, unassigned);
                let found: Vec<Member> =
                    members::list_members(&mut context.persistence, filter, &actor)?;
                context
                    .output
                    .show(&found, || members_table(&found).to_string())
            }
        }
    }
}
