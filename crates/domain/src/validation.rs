// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation for every entity.
//!
//! Each validator collects the complete list of violations and fails once
//! with `DomainError::Validation`. Validators that check dates against the
//! current day take `today` explicitly so results are deterministic.

use time::Date;

use crate::announcement::Announcement;
use crate::error::{DomainError, ValidationErrors};
use crate::game::{FinalScore, Game, GameStats, MAX_SKILL_VALUE, Skill};
use crate::member::{CoachProfile, Member, MemberKind, PlayerProfile};
use crate::password::PasswordPolicy;
use crate::position::Position;
use crate::squad::Squad;
use crate::training::{Training, TrainingAttendance};
use crate::user::{Role, User};

const MAX_NAME_LENGTH: usize = 20;
const MAX_EMAIL_LENGTH: usize = 50;
const PHONE_DIGITS: usize = 11;
const MAX_ADDRESS_LENGTH: usize = 60;
const MAX_QUALIFICATIONS_LENGTH: usize = 100;
const MAX_MEDICAL_CONDITIONS_LENGTH: usize = 100;
const MAX_SQUAD_NAME_LENGTH: usize = 20;
const MAX_OPPONENT_LENGTH: usize = 20;
const MAX_FOCUS_AREAS_LENGTH: usize = 75;
const MAX_NOTES_LENGTH: usize = 200;
const MAX_TITLE_LENGTH: usize = 100;
const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 20;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns the value of an optional text field, treating blank as absent.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !is_blank(v))
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// `^[A-Za-z ]{1,20}$`
fn is_valid_name(value: &str) -> bool {
    !value.is_empty()
        && char_len(value) <= MAX_NAME_LENGTH
        && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// `^U\d{1,2}$|^Senior$`
fn is_valid_age_grade(value: &str) -> bool {
    if value == "Senior" {
        return true;
    }
    value.strip_prefix('U').is_some_and(|digits| {
        (1..=2).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
    })
}

fn check_name(errors: &mut ValidationErrors, label: &str, value: &str) {
    // Rule: a blank name reports only the required violation
    if is_blank(value) {
        errors.push(format!("{label} is required"));
    } else if !is_valid_name(value) {
        errors.push(format!(
            "{label} must contain only letters and spaces (max {MAX_NAME_LENGTH} characters)"
        ));
    }
}

fn check_max_length(errors: &mut ValidationErrors, label: &str, value: &str, max: usize) {
    if char_len(value) > max {
        errors.push(format!("{label} must be {max} characters or fewer"));
    }
}

fn check_required_max_length(
    errors: &mut ValidationErrors,
    label: &str,
    value: &str,
    max: usize,
) {
    if is_blank(value) {
        errors.push(format!("{label} is required"));
    } else {
        check_max_length(errors, label, value, max);
    }
}

fn check_past_date(errors: &mut ValidationErrors, label: &str, date: Option<Date>, today: Date) {
    match date {
        None => errors.push(format!("{label} is required")),
        Some(d) if d > today => errors.push(format!("{label} cannot be in the future")),
        Some(_) => {}
    }
}

fn check_positive_id(errors: &mut ValidationErrors, label: &str, id: i64) {
    if id <= 0 {
        errors.push(format!("{label} ID must be positive"));
    }
}

fn check_required_id(errors: &mut ValidationErrors, label: &str, id: Option<i64>) {
    match id {
        None => errors.push(format!("{label} is required")),
        Some(id) => check_positive_id(errors, label, id),
    }
}

/// Collects violations of the rules shared by every kind of member.
fn member_violations(member: &Member, today: Date) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();

    check_name(&mut errors, "First name", &member.first_name);
    check_name(&mut errors, "Last name", &member.last_name);
    check_past_date(&mut errors, "Date of birth", member.date_of_birth, today);

    if let Some(email) = present(member.email.as_ref()) {
        // Rule: email needs both '@' and '.'
        if !email.contains('@') || !email.contains('.') {
            errors.push("Email must contain '@' and '.'");
        }
        check_max_length(&mut errors, "Email", email, MAX_EMAIL_LENGTH);
    }

    if present(member.phone.as_ref())
        .is_some_and(|p| p.len() != PHONE_DIGITS || !p.chars().all(|c| c.is_ascii_digit()))
    {
        errors.push(format!("Phone number must be exactly {PHONE_DIGITS} digits"));
    }

    if let Some(address) = present(member.address.as_ref()) {
        check_max_length(&mut errors, "Address", address, MAX_ADDRESS_LENGTH);
    }

    errors
}

fn player_violations(member_id: Option<i64>, player: &PlayerProfile) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();

    if is_blank(&player.position) {
        errors.push("Position is required");
    } else if !Position::is_valid(&player.position) {
        errors.push("Position must be one of the 15 rugby positions");
    }

    if let Some(contact_id) = player.emergency_contact_id {
        check_positive_id(&mut errors, "Emergency contact", contact_id);
        // Rule: a player cannot be their own emergency contact
        if member_id == Some(contact_id) {
            errors.push("Emergency contact cannot be the player themselves");
        }
    }

    if let Some(conditions) = present(player.medical_conditions.as_ref()) {
        check_max_length(
            &mut errors,
            "Medical conditions",
            conditions,
            MAX_MEDICAL_CONDITIONS_LENGTH,
        );
    }

    errors
}

fn coach_violations(coach: &CoachProfile) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_required_max_length(
        &mut errors,
        "Qualifications",
        &coach.qualifications,
        MAX_QUALIFICATIONS_LENGTH,
    );
    errors
}

/// Validates a member of any kind.
///
/// Applies the shared member rules plus the rules for the member's
/// specialization (player or coach).
///
/// # Arguments
///
/// * `member` - The member about to be saved or updated
/// * `today` - The current date, used to reject future birth dates
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying every violation found.
pub fn validate_member(member: &Member, today: Date) -> Result<(), DomainError> {
    let mut errors: ValidationErrors = member_violations(member, today);
    match &member.kind {
        MemberKind::Player(player) => errors.extend(player_violations(member.member_id, player)),
        MemberKind::Coach(coach) => errors.extend(coach_violations(coach)),
        MemberKind::Secretary | MemberKind::General => {}
    }
    errors.into_result()
}

/// Validates a squad's name and age grade.
///
/// Coaching levels are not checked here; an under-coached squad may be saved.
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying every violation found.
pub fn validate_squad(squad: &Squad) -> Result<(), DomainError> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    // Rule: ^[A-Za-z0-9 ]{1,20}$
    if is_blank(&squad.name) {
        errors.push("Squad name is required");
    } else if char_len(&squad.name) > MAX_SQUAD_NAME_LENGTH
        || !squad
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ')
    {
        errors.push(format!(
            "Squad name must contain only letters, digits and spaces (max {MAX_SQUAD_NAME_LENGTH} characters)"
        ));
    }

    if is_blank(&squad.age_grade) {
        errors.push("Age grade is required");
    } else if !is_valid_age_grade(&squad.age_grade) {
        errors.push("Age grade must be 'U' followed by 1 or 2 digits, or 'Senior'");
    }

    errors.into_result()
}

/// Validates a game.
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying every violation found.
pub fn validate_game(game: &Game, today: Date) -> Result<(), DomainError> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    check_past_date(&mut errors, "Game date", game.date, today);
    check_required_max_length(&mut errors, "Opponent", &game.opponent, MAX_OPPONENT_LENGTH);

    if present(game.final_score.as_ref()).is_some_and(|s| !FinalScore::is_well_formed(s)) {
        errors.push("Final score must be in the format '<ours> - <theirs>'");
    }

    if is_blank(&game.venue) {
        errors.push("Venue is required");
    }
    check_required_id(&mut errors, "Squad", game.squad_id);

    errors.into_result()
}

/// Validates one player's stats for one game.
///
/// Skill setters already reject out-of-range values; the range check is
/// repeated here so stats assembled by other means are still caught.
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying every violation found.
pub fn validate_game_stats(stats: &GameStats) -> Result<(), DomainError> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    check_positive_id(&mut errors, "Player", stats.player_id);
    check_positive_id(&mut errors, "Game", stats.game_id);

    for skill in Skill::ALL {
        if stats.skill(skill) > MAX_SKILL_VALUE {
            errors.push(format!("{skill} must be between 0 and {MAX_SKILL_VALUE}"));
        }
    }
    if stats.overall_rating() > MAX_SKILL_VALUE {
        errors.push(format!(
            "Overall rating must be between 0 and {MAX_SKILL_VALUE}"
        ));
    }

    errors.into_result()
}

/// Validates a training session.
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying every violation found.
pub fn validate_training(training: &Training, today: Date) -> Result<(), DomainError> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    check_past_date(&mut errors, "Training date", training.date, today);
    check_required_id(&mut errors, "Squad", training.squad_id);
    check_required_max_length(
        &mut errors,
        "Focus areas",
        &training.focus_areas,
        MAX_FOCUS_AREAS_LENGTH,
    );
    if let Some(notes) = present(training.coach_notes.as_ref()) {
        check_max_length(&mut errors, "Coach notes", notes, MAX_NOTES_LENGTH);
    }

    errors.into_result()
}

/// Validates one attendance record.
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying every violation found.
pub fn validate_training_attendance(attendance: &TrainingAttendance) -> Result<(), DomainError> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    check_positive_id(&mut errors, "Player", attendance.player_id);
    check_positive_id(&mut errors, "Training", attendance.training_id);
    if let Some(notes) = present(attendance.notes.as_ref()) {
        check_max_length(&mut errors, "Notes", notes, MAX_NOTES_LENGTH);
    }

    errors.into_result()
}

/// Validates an announcement.
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying every violation found.
pub fn validate_announcement(announcement: &Announcement) -> Result<(), DomainError> {
    let mut errors: ValidationErrors = ValidationErrors::new();

    check_required_max_length(&mut errors, "Title", &announcement.title, MAX_TITLE_LENGTH);
    if is_blank(&announcement.content) {
        errors.push("Content is required");
    }
    if is_blank(&announcement.sender) {
        errors.push("Sender is required");
    }
    if is_blank(&announcement.recipient) {
        errors.push("Recipient is required");
    }
    if announcement.sent_date.is_none() {
        errors.push("Sent date is required");
    }

    errors.into_result()
}

/// Checks a username against `^[A-Za-z0-9]{3,20}$`.
fn username_violations(username: &str) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    if is_blank(username) {
        errors.push("Username is required");
    } else if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&char_len(username))
        || !username.chars().all(|c| c.is_ascii_alphanumeric())
    {
        errors.push(format!(
            "Username must be {MIN_USERNAME_LENGTH}-{MAX_USERNAME_LENGTH} letters or digits"
        ));
    }
    errors
}

/// Collects every password-rule violation as a message list.
fn password_violations(password: &str) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    if password.is_empty() {
        errors.push("Password is required");
        return errors;
    }
    for violation in PasswordPolicy::default().violations(password) {
        errors.push(violation.to_string());
    }
    errors
}

/// Validates a user account, including the password rule.
///
/// Every failing password condition is listed separately.
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying every violation found.
pub fn validate_user(user: &User) -> Result<(), DomainError> {
    let mut errors: ValidationErrors = username_violations(&user.username);
    errors.extend(password_violations(&user.password));

    // Rule: role is matched exactly
    if user.role.parse::<Role>().is_err() {
        errors.push("Role must be 'Secretary' or 'Coach'");
    }
    if let Some(member_id) = user.member_id {
        check_positive_id(&mut errors, "Member", member_id);
    }

    errors.into_result()
}

/// Validates a replacement password on its own.
///
/// # Errors
///
/// Returns `DomainError::Validation` carrying every violated password rule.
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    password_violations(password).into_result()
}
