// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Clubhouse rugby club manager.
//!
//! This crate stores members, squads, fixtures, training, announcements,
//! and login accounts in `SQLite` through Diesel. The schema is embedded
//! and migrated on open.
//!
//! ## Referential Integrity
//!
//! Relationships are enforced with foreign keys, and foreign key
//! enforcement is verified whenever a database is opened:
//!
//! - Deleting a squad leaves its players squadless and deletes its games
//!   and training sessions (with their stats and attendance).
//! - Deleting a member nulls emergency contact references to it and
//!   unlinks any user account.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives every caller its own isolated
//! database, so tests never share state.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use clubhouse_domain::{Announcement, Game, GameStats, Member, Squad, Training, TrainingAttendance};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use data_models::UserData;
pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stored member type labels, as written to `members.member_type`.
pub mod member_types {
    pub const PLAYER: &str = "Player";
    pub const COACH: &str = "Coach";
    pub const SECRETARY: &str = "Secretary";
    pub const GENERAL: &str = "Member";
}

/// The club datastore.
///
/// Owns one `SQLite` connection. Every service operation receives this
/// explicitly; there is no global handle.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter over a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:clubhouse_mem_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter over a database file, creating and
    /// migrating it if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Retrieves a member of any kind by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_member(&mut self, member_id: i64) -> Result<Option<Member>, PersistenceError> {
        queries::members::get_member(&mut self.conn, member_id)
    }

    /// Lists all members of every kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_members(&mut self) -> Result<Vec<Member>, PersistenceError> {
        queries::members::list_members(&mut self.conn, None)
    }

    /// Lists members of one stored type (see [`member_types`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_members_of_type(
        &mut self,
        member_type: &str,
    ) -> Result<Vec<Member>, PersistenceError> {
        queries::members::list_members(&mut self.conn, Some(member_type))
    }

    /// Lists every player.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_players(&mut self) -> Result<Vec<Member>, PersistenceError> {
        self.list_members_of_type(member_types::PLAYER)
    }

    /// Lists every coach.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_coaches(&mut self) -> Result<Vec<Member>, PersistenceError> {
        self.list_members_of_type(member_types::COACH)
    }

    /// Lists the players on a squad.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_players_by_squad(&mut self, squad_id: i64) -> Result<Vec<Member>, PersistenceError> {
        queries::members::list_players_by_squad(&mut self.conn, squad_id)
    }

    /// Lists players in a position.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_players_by_position(
        &mut self,
        position: &str,
    ) -> Result<Vec<Member>, PersistenceError> {
        queries::members::list_players_by_position(&mut self.conn, position)
    }

    /// Lists players not on any squad.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_unassigned_players(&mut self) -> Result<Vec<Member>, PersistenceError> {
        queries::members::list_unassigned_players(&mut self.conn)
    }

    /// Lists the coaches assigned to a squad.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_coaches_by_squad(&mut self, squad_id: i64) -> Result<Vec<Member>, PersistenceError> {
        queries::members::list_coaches_by_squad(&mut self.conn, squad_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn member_exists(&mut self, member_id: i64) -> Result<bool, PersistenceError> {
        queries::members::member_exists(&mut self.conn, member_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn player_exists(&mut self, member_id: i64) -> Result<bool, PersistenceError> {
        queries::members::player_exists(&mut self.conn, member_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn coach_exists(&mut self, member_id: i64) -> Result<bool, PersistenceError> {
        queries::members::coach_exists(&mut self.conn, member_id)
    }

    /// Saves a new member with its specialization, returning the new ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; nothing is written in that case.
    pub fn save_member(&mut self, member: &Member) -> Result<i64, PersistenceError> {
        mutations::members::insert_member(&mut self.conn, member)
    }

    /// Updates a saved member. Returns `false` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; nothing is changed in that case.
    pub fn update_member(&mut self, member: &Member) -> Result<bool, PersistenceError> {
        mutations::members::update_member(&mut self.conn, member)
    }

    /// Deletes a member. Returns `false` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_member(&mut self, member_id: i64) -> Result<bool, PersistenceError> {
        mutations::members::delete_member(&mut self.conn, member_id)
    }

    // ========================================================================
    // Squads
    // ========================================================================

    /// Retrieves a squad with its roster and coaches.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_squad(&mut self, squad_id: i64) -> Result<Option<Squad>, PersistenceError> {
        queries::squads::get_squad(&mut self.conn, squad_id)
    }

    /// Retrieves a squad by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_squad_by_name(&mut self, name: &str) -> Result<Option<Squad>, PersistenceError> {
        queries::squads::find_squad_by_name(&mut self.conn, name)
    }

    /// Lists all squads by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_squads(&mut self) -> Result<Vec<Squad>, PersistenceError> {
        queries::squads::list_squads(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn squad_exists(&mut self, squad_id: i64) -> Result<bool, PersistenceError> {
        queries::squads::squad_exists(&mut self.conn, squad_id)
    }

    /// Saves a new squad, returning the new ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; nothing is written in that case.
    pub fn save_squad(&mut self, squad: &Squad) -> Result<i64, PersistenceError> {
        mutations::squads::insert_squad(&mut self.conn, squad)
    }

    /// Updates a squad's name and age grade.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_squad(&mut self, squad: &Squad) -> Result<bool, PersistenceError> {
        mutations::squads::update_squad(&mut self.conn, squad)
    }

    /// Deletes a squad and everything scheduled for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_squad(&mut self, squad_id: i64) -> Result<bool, PersistenceError> {
        mutations::squads::delete_squad(&mut self.conn, squad_id)
    }

    /// Puts a player on a squad. Returns `false` if the player does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn assign_player_to_squad(
        &mut self,
        player_id: i64,
        squad_id: i64,
    ) -> Result<bool, PersistenceError> {
        mutations::squads::assign_player_to_squad(&mut self.conn, player_id, squad_id)
    }

    /// Takes a player off a squad. Returns `false` if they were not on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn remove_player_from_squad(
        &mut self,
        player_id: i64,
        squad_id: i64,
    ) -> Result<bool, PersistenceError> {
        mutations::squads::remove_player_from_squad(&mut self.conn, player_id, squad_id)
    }

    /// Links a coach to a squad. Returns `false` if already linked.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn assign_coach_to_squad(
        &mut self,
        coach_id: i64,
        squad_id: i64,
    ) -> Result<bool, PersistenceError> {
        mutations::squads::assign_coach_to_squad(&mut self.conn, coach_id, squad_id)
    }

    /// Unlinks a coach from a squad. Returns `false` if not linked.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove_coach_from_squad(
        &mut self,
        coach_id: i64,
        squad_id: i64,
    ) -> Result<bool, PersistenceError> {
        mutations::squads::remove_coach_from_squad(&mut self.conn, coach_id, squad_id)
    }

    // ========================================================================
    // Games & Stats
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_game(&mut self, game_id: i64) -> Result<Option<Game>, PersistenceError> {
        queries::games::get_game(&mut self.conn, game_id)
    }

    /// Lists games, most recent first, optionally for one squad.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_games(&mut self, squad_id: Option<i64>) -> Result<Vec<Game>, PersistenceError> {
        queries::games::list_games(&mut self.conn, squad_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn game_exists(&mut self, game_id: i64) -> Result<bool, PersistenceError> {
        queries::games::game_exists(&mut self.conn, game_id)
    }

    /// Saves a new game, returning the new ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn save_game(&mut self, game: &Game) -> Result<i64, PersistenceError> {
        mutations::games::insert_game(&mut self.conn, game)
    }

    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_game(&mut self, game: &Game) -> Result<bool, PersistenceError> {
        mutations::games::update_game(&mut self.conn, game)
    }

    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_game(&mut self, game_id: i64) -> Result<bool, PersistenceError> {
        mutations::games::delete_game(&mut self.conn, game_id)
    }

    /// Records (or replaces) a player's stats for a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn record_game_stats(&mut self, stats: &GameStats) -> Result<i64, PersistenceError> {
        mutations::games::record_game_stats(&mut self.conn, stats)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_game_stats(
        &mut self,
        player_id: i64,
        game_id: i64,
    ) -> Result<Option<GameStats>, PersistenceError> {
        queries::games::find_game_stats(&mut self.conn, player_id, game_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_stats_by_game(&mut self, game_id: i64) -> Result<Vec<GameStats>, PersistenceError> {
        queries::games::list_stats_by_game(&mut self.conn, game_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_stats_by_player(
        &mut self,
        player_id: i64,
    ) -> Result<Vec<GameStats>, PersistenceError> {
        queries::games::list_stats_by_player(&mut self.conn, player_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_stats_by_squad(&mut self, squad_id: i64) -> Result<Vec<GameStats>, PersistenceError> {
        queries::games::list_stats_by_squad(&mut self.conn, squad_id)
    }

    // ========================================================================
    // Training & Attendance
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_training(&mut self, training_id: i64) -> Result<Option<Training>, PersistenceError> {
        queries::training::get_training(&mut self.conn, training_id)
    }

    /// Lists training sessions, most recent first, optionally for one squad.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_trainings(
        &mut self,
        squad_id: Option<i64>,
    ) -> Result<Vec<Training>, PersistenceError> {
        queries::training::list_trainings(&mut self.conn, squad_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn training_exists(&mut self, training_id: i64) -> Result<bool, PersistenceError> {
        queries::training::training_exists(&mut self.conn, training_id)
    }

    /// Saves a new training session, returning the new ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn save_training(&mut self, training: &Training) -> Result<i64, PersistenceError> {
        mutations::training::insert_training(&mut self.conn, training)
    }

    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_training(&mut self, training: &Training) -> Result<bool, PersistenceError> {
        mutations::training::update_training(&mut self.conn, training)
    }

    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_training(&mut self, training_id: i64) -> Result<bool, PersistenceError> {
        mutations::training::delete_training(&mut self.conn, training_id)
    }

    /// Records (or replaces) a player's attendance at a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn record_attendance(
        &mut self,
        attendance: &TrainingAttendance,
    ) -> Result<i64, PersistenceError> {
        mutations::training::record_attendance(&mut self.conn, attendance)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_attendance(
        &mut self,
        player_id: i64,
        training_id: i64,
    ) -> Result<Option<TrainingAttendance>, PersistenceError> {
        queries::training::find_attendance(&mut self.conn, player_id, training_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_attendance_by_training(
        &mut self,
        training_id: i64,
    ) -> Result<Vec<TrainingAttendance>, PersistenceError> {
        queries::training::list_attendance_by_training(&mut self.conn, training_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_attendance_by_player(
        &mut self,
        player_id: i64,
    ) -> Result<Vec<TrainingAttendance>, PersistenceError> {
        queries::training::list_attendance_by_player(&mut self.conn, player_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_attendance_by_squad(
        &mut self,
        squad_id: i64,
    ) -> Result<Vec<TrainingAttendance>, PersistenceError> {
        queries::training::list_attendance_by_squad(&mut self.conn, squad_id)
    }

    // ========================================================================
    // Announcements
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_announcement(
        &mut self,
        announcement_id: i64,
    ) -> Result<Option<Announcement>, PersistenceError> {
        queries::announcements::get_announcement(&mut self.conn, announcement_id)
    }

    /// Lists announcements, newest first, optionally filtered by recipient
    /// category and importance.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_announcements(
        &mut self,
        recipient: Option<&str>,
        important_only: bool,
    ) -> Result<Vec<Announcement>, PersistenceError> {
        queries::announcements::list_announcements(&mut self.conn, recipient, important_only)
    }

    /// Saves a new announcement, returning the new ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn save_announcement(
        &mut self,
        announcement: &Announcement,
    ) -> Result<i64, PersistenceError> {
        mutations::announcements::insert_announcement(&mut self.conn, announcement)
    }

    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_announcement(&mut self, announcement_id: i64) -> Result<bool, PersistenceError> {
        mutations::announcements::delete_announcement(&mut self.conn, announcement_id)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_username(&mut self.conn, username)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_id(&mut self, user_id: i64) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_id(&mut self.conn, user_id)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users(&mut self) -> Result<Vec<UserData>, PersistenceError> {
        queries::users::list_users(&mut self.conn)
    }

    /// Counts users, optionally only those with `role`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_users(&mut self, role: Option<&str>) -> Result<usize, PersistenceError> {
        queries::users::count_users(&mut self.conn, role)
    }

    /// Creates a user from an already-hashed password, returning the new ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the username is taken.
    pub fn create_user(
        &mut self,
        username: &str,
        password_hash: &str,
        role: &str,
        member_id: Option<i64>,
    ) -> Result<i64, PersistenceError> {
        mutations::users::insert_user(&mut self.conn, username, password_hash, role, member_id)
    }

    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_user(
        &mut self,
        user_id: i64,
        role: &str,
        member_id: Option<i64>,
    ) -> Result<bool, PersistenceError> {
        mutations::users::update_user(&mut self.conn, user_id, role, member_id)
    }

    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_password(
        &mut self,
        user_id: i64,
        password_hash: &str,
    ) -> Result<bool, PersistenceError> {
        mutations::users::update_password(&mut self.conn, user_id, password_hash)
    }

    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_last_login(&mut self, user_id: i64) -> Result<(), PersistenceError> {
        mutations::users::update_last_login(&mut self.conn, user_id)
    }

    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_user(&mut self, user_id: i64) -> Result<bool, PersistenceError> {
        mutations::users::delete_user(&mut self.conn, user_id)
    }
}
