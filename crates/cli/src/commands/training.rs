// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Subcommand;
use clubhouse_api::handlers::{members, training};
use clubhouse_api::{
    ApiError, AuthenticatedActor, AuthorizationService, MemberFilter, RecordAttendanceRequest,
    ScheduleTrainingRequest, UpdateTrainingRequest, WriteResponse,
};
use clubhouse_domain::{Member, Training, TrainingAttendance};
use clubhouse_persistence::Persistence;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::info;

use super::Context;
use crate::render::{attendance_table, trainings_table};
use crate::session::{io_failure, prompt_from, value_or_prompt};

#[derive(Debug, Subcommand)]
pub enum TrainingCommand {
    /// Schedule a training session. A missing date or focus is prompted for.
    Add {
        /// Session date, dd/MM/yyyy or yyyy-MM-dd
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        squad: i64,

        /// What the session works on
        #[arg(long)]
        focus: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Change a training session
    Update {
        /// The session to change
        id: i64,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        focus: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a training session and its attendance
    Remove {
        /// The session to delete
        id: i64,
    },

    /// Show a session with its attendance
    Show {
        /// The session to show
        id: i64,
    },

    /// List training sessions, most recent first
    List {
        /// Only sessions for this squad
        #[arg(long)]
        squad: Option<i64>,
    },

    /// Record attendance for a session. Without `--player`, asks about
    /// every player in the session's squad in turn.
    Attend {
        #[arg(long)]
        player: Option<i64>,

        #[arg(long)]
        training: i64,

        /// The player did not attend
        #[arg(long)]
        absent: bool,

        #[arg(long)]
        notes: Option<String>,
    },
}

/// A session with its attendance, for display.
#[derive(Debug, Serialize)]
struct TrainingView {
    training: Training,
    attendance: Vec<TrainingAttendance>,
}

impl TrainingView {
    fn render(&self) -> String {
        format!(
            "{}\n{}",
            trainings_table(std::slice::from_ref(&self.training)),
            attendance_table(&self.attendance)
        )
    }
}

impl TrainingCommand {
    pub fn run(self, context: &mut Context) -> Result<(), ApiError> {
        let actor: AuthenticatedActor = context.login()?;
        let persistence = &mut context.persistence;
        let today = context.today;
        let response: WriteResponse = match self {
            Self::Add {
                date,
                squad,
                focus,
                notes,
            } => {
                let request: ScheduleTrainingRequest = ScheduleTrainingRequest {
                    date: Some(value_or_prompt(date, "Date (dd/MM/yyyy)")?),
                    squad_id: Some(squad),
                    focus_areas: value_or_prompt(focus, "Focus areas")?,
                    coach_notes: notes,
                };
                training::schedule_training(persistence, request, &actor, today)?
            }
            Self::Update {
                id,
                date,
                focus,
                notes,
            } => training::update_training(
                persistence,
                UpdateTrainingRequest {
                    training_id: id,
                    date,
                    focus_areas: focus,
                    coach_notes: notes,
                },
                &actor,
                today,
            )?,
            Self::Remove { id } => training::delete_training(persistence, id, &actor)?,
            Self::Attend {
                player: Some(player_id),
                training: training_id,
                absent,
                notes,
            } => training::record_attendance(
                persistence,
                RecordAttendanceRequest {
                    player_id,
                    training_id,
                    present: !absent,
                    notes,
                },
                &actor,
            )?,
            Self::Attend {
                player: None,
                training: training_id,
                ..
            } => {
                let recorded: Vec<WriteResponse> = record_roster_attendance(
                    persistence,
                    training_id,
                    &actor,
                    &mut std::io::stdin().lock(),
                    &mut std::io::stderr().lock(),
                )?;
                return context.output.show(&recorded, || {
                    if recorded.is_empty() {
                        format!("No players in the squad for training session {training_id}\n")
                    } else {
                        recorded.iter().map(|r| format!("{}\n", r.message)).collect()
                    }
                });
            }
            Self::Show { id } => {
                let view: TrainingView = TrainingView {
                    training: training::get_training(persistence, id, &actor)?,
                    attendance: training::list_attendance(persistence, id, &actor)?,
                };
                return context.output.show(&view, || view.render());
            }
            Self::List { squad } => {
                let found: Vec<Training> = training::list_trainings(persistence, squad, &actor)?;
                return context
                    .output
                    .show(&found, || trainings_table(&found).to_string());
            }
        };
        context.report_write(&response)
    }
}

/// Walks the roster of a session's squad, asking for each player whether
/// they were present and for optional notes, and records each answer.
///
/// An answer other than y/yes/n/no is asked again. Blank notes are stored
/// as none.
///
/// # Errors
///
/// Returns an error if the actor is not a Coach, the session does not exist
/// or has no squad, the input runs out, or a record cannot be stored.
/// Players answered before the failure stay recorded.
pub fn record_roster_attendance<R: BufRead, W: Write>(
    persistence: &mut Persistence,
    training_id: i64,
    actor: &AuthenticatedActor,
    input: &mut R,
    prompts: &mut W,
) -> Result<Vec<WriteResponse>, ApiError> {
    AuthorizationService::authorize_manage_training(actor)?;
    let session: Training = training::get_training(persistence, training_id, actor)?;
    let squad_id: i64 = session.squad_id.ok_or_else(|| ApiError::InvalidInput {
        field: String::from("player"),
        message: format!("Training session {training_id} has no squad; give --player"),
    })?;
    let players: Vec<Member> =
        members::list_members(persistence, MemberFilter::PlayersInSquad(squad_id), actor)?;

    let mut recorded: Vec<WriteResponse> = Vec::with_capacity(players.len());
    for player in &players {
        let Some(player_id) = player.member_id else {
            continue;
        };
        let present: bool = ask_present(input, prompts, &player.full_name())?;
        let notes: String = prompt_from(input, prompts, "Notes (optional)")?;
        recorded.push(training::record_attendance(
            persistence,
            RecordAttendanceRequest {
                player_id,
                training_id,
                present,
                notes: Some(notes).filter(|n| !n.trim().is_empty()),
            },
            actor,
        )?);
    }

    info!(training_id, squad_id, players = recorded.len(), "Roster attendance recorded");
    Ok(recorded)
}

fn ask_present<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    name: &str,
) -> Result<bool, ApiError> {
    loop {
        let answer: String = prompt_from(input, prompts, &format!("{name} present (y/n)"))?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(prompts, "Please answer y or n").map_err(io_failure)?,
        }
    }
}
