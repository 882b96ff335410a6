// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service request and response data transfer objects.
//!
//! Requests carry raw user input (dates as entered, optional text that may
//! be blank). The handlers turn them into domain entities and validate.

use serde::{Deserialize, Serialize};

/// Fields shared by every kind of member.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberDetails {
    pub first_name: String,
    pub last_name: String,
    /// `dd/MM/yyyy` or `yyyy-MM-dd`.
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// The specialization of a member being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewMemberKind {
    Player {
        /// Position name or shirt number.
        position: String,
        squad_id: Option<i64>,
        emergency_contact_id: Option<i64>,
        medical_conditions: Option<String>,
    },
    Coach {
        qualifications: String,
        squad_ids: Vec<i64>,
    },
    Secretary,
    General,
}

/// Request to add a member to the club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMemberRequest {
    pub details: MemberDetails,
    pub kind: NewMemberKind,
}

/// Request to change an existing member.
///
/// `None` leaves a field unchanged. For optional text fields, `Some("")`
/// clears the value. Player- and coach-only fields are rejected for other
/// kinds of member.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateMemberRequest {
    pub member_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub position: Option<String>,
    /// `Some(0)` clears the emergency contact.
    pub emergency_contact_id: Option<i64>,
    pub medical_conditions: Option<String>,
    pub qualifications: Option<String>,
}

/// Which members to list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MemberFilter {
    #[default]
    All,
    Players,
    Coaches,
    Secretaries,
    General,
    PlayersInSquad(i64),
    PlayersAtPosition(String),
    UnassignedPlayers,
    CoachesOfSquad(i64),
}

/// Response for a successful create, update, or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResponse {
    /// The identifier of the affected record.
    pub id: i64,
    /// A success message.
    pub message: String,
}

impl WriteResponse {
    #[must_use]
    pub const fn new(id: i64, message: String) -> Self {
        Self { id, message }
    }
}

/// Request to create a squad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSquadRequest {
    pub name: String,
    pub age_grade: String,
}

/// Request to rename or regrade a squad.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateSquadRequest {
    pub squad_id: i64,
    pub name: Option<String>,
    pub age_grade: Option<String>,
}

/// Whether a squad has enough coaches for its age grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingCheckResponse {
    pub squad_id: i64,
    pub name: String,
    pub age_grade: String,
    pub coach_count: usize,
    pub minimum_required: usize,
    pub has_minimum_coaches: bool,
    pub coaches_needed: usize,
}

/// Request to schedule a game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleGameRequest {
    pub date: Option<String>,
    pub opponent: String,
    pub venue: String,
    pub squad_id: Option<i64>,
    /// `"<ours> - <theirs>"`, if already played.
    pub final_score: Option<String>,
}

/// Request to change a game. `Some("")` clears the final score.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateGameRequest {
    pub game_id: i64,
    pub date: Option<String>,
    pub opponent: Option<String>,
    pub venue: Option<String>,
    pub final_score: Option<String>,
}

/// Request to record one player's performance in one game.
///
/// When `overall_rating` is absent it is calculated from the four skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordGameStatsRequest {
    pub player_id: i64,
    pub game_id: i64,
    pub attended: bool,
    pub tackles: i32,
    pub passes: i32,
    pub tries: i32,
    pub kicks: i32,
    pub overall_rating: Option<i32>,
}

/// Request to schedule a training session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleTrainingRequest {
    pub date: Option<String>,
    pub squad_id: Option<i64>,
    pub focus_areas: String,
    pub coach_notes: Option<String>,
}

/// Request to change a training session. `Some("")` clears coach notes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateTrainingRequest {
    pub training_id: i64,
    pub date: Option<String>,
    pub focus_areas: Option<String>,
    pub coach_notes: Option<String>,
}

/// Request to record whether a player attended a training session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordAttendanceRequest {
    pub player_id: i64,
    pub training_id: i64,
    pub present: bool,
    pub notes: Option<String>,
}

/// Request to send an announcement. The sender is the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendAnnouncementRequest {
    pub title: String,
    pub content: String,
    /// Defaults to everyone.
    pub recipient: Option<String>,
    pub important: bool,
}

/// Request to create a login account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub role: String,
    pub member_id: Option<i64>,
}

/// A login account as shown to users. Never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: i64,
    pub username: String,
    pub role: String,
    pub member_id: Option<i64>,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// Request to change the logged-in user's password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
