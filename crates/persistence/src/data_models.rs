// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row shapes read from the club tables, and their conversion back into
//! domain entities.

use clubhouse_domain::{
    Announcement, Game, GameStats, Training, TrainingAttendance, parse_iso_date,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::diesel_schema::{
    announcements, coaches, game_stats, games, members, players, squads, training_attendance,
    trainings, users,
};
use crate::error::PersistenceError;

/// A stored login account.
///
/// The password is only ever held as a hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub member_id: Option<i64>,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

pub(crate) fn stored_date(
    table: &'static str,
    id: i64,
    value: &str,
) -> Result<Date, PersistenceError> {
    parse_iso_date(value).map_err(|e| PersistenceError::InvalidRecord {
        table,
        id,
        message: e.to_string(),
    })
}

fn stored_flag(value: i32) -> bool {
    value != 0
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = members)]
pub(crate) struct MemberRow {
    pub member_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub member_type: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = players)]
pub(crate) struct PlayerRow {
    pub member_id: i64,
    pub position: String,
    pub squad_id: Option<i64>,
    pub emergency_contact_id: Option<i64>,
    pub medical_conditions: Option<String>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = coaches)]
pub(crate) struct CoachRow {
    pub member_id: i64,
    pub qualifications: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = squads)]
pub(crate) struct SquadRow {
    pub squad_id: i64,
    pub name: String,
    pub age_grade: String,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = games)]
pub(crate) struct GameRow {
    pub game_id: i64,
    pub game_date: String,
    pub opponent: String,
    pub final_score: Option<String>,
    pub venue: String,
    pub squad_id: i64,
}

impl GameRow {
    pub fn into_game(self) -> Result<Game, PersistenceError> {
        Ok(Game {
            game_id: Some(self.game_id),
            date: Some(stored_date("games", self.game_id, &self.game_date)?),
            opponent: self.opponent,
            final_score: self.final_score,
            venue: self.venue,
            squad_id: Some(self.squad_id),
        })
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = game_stats)]
pub(crate) struct GameStatsRow {
    pub stats_id: i64,
    pub player_id: i64,
    pub game_id: i64,
    pub tackles: i32,
    pub passes: i32,
    pub tries: i32,
    pub kicks: i32,
    pub overall_rating: i32,
    pub attended: i32,
}

impl GameStatsRow {
    pub fn into_stats(self) -> Result<GameStats, PersistenceError> {
        GameStats::with_values(
            Some(self.stats_id),
            self.player_id,
            self.game_id,
            self.tackles,
            self.passes,
            self.tries,
            self.kicks,
            self.overall_rating,
            stored_flag(self.attended),
        )
        .map_err(|e| PersistenceError::InvalidRecord {
            table: "game_stats",
            id: self.stats_id,
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = trainings)]
pub(crate) struct TrainingRow {
    pub training_id: i64,
    pub training_date: String,
    pub squad_id: i64,
    pub focus_areas: String,
    pub coach_notes: Option<String>,
}

impl TrainingRow {
    pub fn into_training(self) -> Result<Training, PersistenceError> {
        Ok(Training {
            training_id: Some(self.training_id),
            date: Some(stored_date(
                "trainings",
                self.training_id,
                &self.training_date,
            )?),
            squad_id: Some(self.squad_id),
            focus_areas: self.focus_areas,
            coach_notes: self.coach_notes,
        })
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = training_attendance)]
pub(crate) struct AttendanceRow {
    pub attendance_id: i64,
    pub player_id: i64,
    pub training_id: i64,
    pub present: i32,
    pub notes: Option<String>,
}

impl From<AttendanceRow> for TrainingAttendance {
    fn from(row: AttendanceRow) -> Self {
        Self {
            attendance_id: Some(row.attendance_id),
            player_id: row.player_id,
            training_id: row.training_id,
            present: stored_flag(row.present),
            notes: row.notes,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = announcements)]
pub(crate) struct AnnouncementRow {
    pub announcement_id: i64,
    pub title: String,
    pub content: String,
    pub sent_date: String,
    pub sender: String,
    pub recipient: String,
    pub is_important: i32,
}

impl AnnouncementRow {
    pub fn into_announcement(self) -> Result<Announcement, PersistenceError> {
        Ok(Announcement {
            announcement_id: Some(self.announcement_id),
            sent_date: Some(stored_date(
                "announcements",
                self.announcement_id,
                &self.sent_date,
            )?),
            title: self.title,
            content: self.content,
            sender: self.sender,
            recipient: self.recipient,
            important: stored_flag(self.is_important),
        })
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
pub(crate) struct UserRow {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub member_id: Option<i64>,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl From<UserRow> for UserData {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            username: row.username,
            password_hash: row.password_hash,
            role: row.role,
            member_id: row.member_id,
            created_at: row.created_at,
            last_login_at: row.last_login_at,
        }
    }
}
