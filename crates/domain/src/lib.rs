// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod announcement;
mod dates;
mod error;
mod game;
mod member;
mod password;
mod position;
mod report;
mod squad;
mod stats;
mod training;
mod user;
mod validation;

#[cfg(test)]
mod tests;

pub use announcement::{ALL_MEMBERS, Announcement};
pub use dates::{age_on, format_display_date, format_iso_date, parse_input_date, parse_iso_date};
pub use error::{DomainError, ValidationErrors};
pub use game::{
    FinalScore, Game, GameOutcome, GameStats, MAX_SKILL_VALUE, SCORE_SEPARATOR, Skill,
    checked_skill,
};
pub use member::{CoachProfile, Member, MemberKind, PlayerProfile};
pub use password::{PasswordPolicy, PasswordPolicyError};
pub use position::Position;
pub use report::{Report, ReportKind};
pub use squad::{EXEMPT_JUNIOR_GRADE, JUNIOR_MINIMUM_COACHES, STANDARD_MINIMUM_COACHES, Squad};
pub use stats::{
    PlayerTotals, SquadRecord, attendance_rate, game_attendance_rate, overall_skill_rating,
    squad_skill_ratings, training_attendance_rate,
};
pub use training::{Training, TrainingAttendance};
pub use user::{Role, User};
pub use validation::{
    validate_announcement, validate_game, validate_game_stats, validate_member, validate_password,
    validate_squad, validate_training, validate_training_attendance, validate_user,
};
