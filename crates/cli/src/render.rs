// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-width tables and the choice between table and JSON output.

use clubhouse_api::{ApiError, CoachingCheckResponse, UserSummary, WriteResponse};
use clubhouse_domain::{
    Announcement, Game, GameStats, Member, MemberKind, Report, Squad, Training,
    TrainingAttendance, format_display_date,
};
use serde::Serialize;
use std::fmt;
use time::Date;

const COLUMN_GAP: &str = "  ";
const NONE_FOUND: &str = "No records found.";

/// A table of text cells, padded to the widest cell in each column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len: usize = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let mut line: String = String::new();
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let cell: &str = cells.get(i).map_or("", String::as_str);
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.chars().count())));
    }
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{NONE_FOUND}");
        }
        let widths: Vec<usize> = self.widths();
        write_row(f, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(f, &rule, &widths)?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

/// Where command results go: fixed-width text, or JSON when `--json` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Prints the outcome of a write.
    pub fn message(self, response: &WriteResponse) -> Result<(), ApiError> {
        if self.json {
            print_json(response)
        } else {
            println!("{}", response.message);
            Ok(())
        }
    }

    /// Prints `value` as JSON, or the text produced by `render`.
    pub fn show<T, F>(self, value: &T, render: F) -> Result<(), ApiError>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        if self.json {
            print_json(value)
        } else {
            print!("{}", render());
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), ApiError> {
    let text: String = serde_json::to_string_pretty(value).map_err(|e| ApiError::Internal {
        message: format!("Failed to serialise output: {e}"),
    })?;
    println!("{text}");
    Ok(())
}

fn date_cell(date: Option<Date>) -> String {
    date.map(format_display_date).unwrap_or_default()
}

fn id_cell(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn text_cell(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn yes_no(flag: bool) -> String {
    String::from(if flag { "Yes" } else { "No" })
}

fn joined_ids<'a>(ids: impl IntoIterator<Item = &'a i64>) -> String {
    ids.into_iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

/// The kind-specific column of the member table.
fn member_role_detail(member: &Member) -> String {
    match &member.kind {
        MemberKind::Player(player) => match player.squad_id {
            Some(squad_id) => format!("{} (squad {squad_id})", player.position),
            None => format!("{} (unassigned)", player.position),
        },
        MemberKind::Coach(coach) if coach.squad_ids.is_empty() => coach.qualifications.clone(),
        MemberKind::Coach(coach) => format!(
            "{} (squads {})",
            coach.qualifications,
            joined_ids(&coach.squad_ids)
        ),
        MemberKind::Secretary | MemberKind::General => String::new(),
    }
}

pub fn members_table(members: &[Member]) -> Table {
    let mut table: Table = Table::new(&["ID", "Name", "Type", "Date of Birth", "Email", "Phone", "Details"]);
    for member in members {
        table.push(vec![
            id_cell(member.member_id),
            member.full_name(),
            member.kind.as_str().to_string(),
            date_cell(member.date_of_birth),
            text_cell(member.email.as_ref()),
            text_cell(member.phone.as_ref()),
            member_role_detail(member),
        ]);
    }
    table
}

/// A two-column field listing for one member.
pub fn member_detail(member: &Member, today: Date) -> Table {
    let mut table: Table = Table::new(&["Field", "Value"]);
    let mut field = |name: &str, value: String| table.push(vec![name.to_string(), value]);
    field("ID", id_cell(member.member_id));
    field("Name", member.full_name());
    field("Type", member.kind.as_str().to_string());
    field("Date of Birth", date_cell(member.date_of_birth));
    field(
        "Age",
        member.age_on(today).map(|a| a.to_string()).unwrap_or_default(),
    );
    field("Email", text_cell(member.email.as_ref()));
    field("Phone", text_cell(member.phone.as_ref()));
    field("Address", text_cell(member.address.as_ref()));
    if let Some(player) = member.player() {
        field("Position", player.position.clone());
        field("Squad", id_cell(player.squad_id));
        field("Emergency Contact", id_cell(player.emergency_contact_id));
        field("Medical Conditions", text_cell(player.medical_conditions.as_ref()));
    }
    if let Some(coach) = member.coach() {
        field("Qualifications", coach.qualifications.clone());
        field("Squads", joined_ids(&coach.squad_ids));
    }
    table
}

pub fn squads_table(squads: &[Squad]) -> Table {
    let mut table: Table = Table::new(&["ID", "Name", "Age Grade", "Players", "Coaches", "Coaching"]);
    for squad in squads {
        table.push(vec![
            id_cell(squad.squad_id),
            squad.name.clone(),
            squad.age_grade.clone(),
            squad.player_ids.len().to_string(),
            squad.coach_ids.len().to_string(),
            if squad.has_minimum_coaches() {
                String::from("OK")
            } else {
                format!("{} more needed", squad.coaches_needed())
            },
        ]);
    }
    table
}

pub fn coaching_table(checks: &[CoachingCheckResponse]) -> Table {
    let mut table: Table =
        Table::new(&["ID", "Squad", "Age Grade", "Coaches", "Required", "Adequate", "Needed"]);
    for check in checks {
        table.push(vec![
            check.squad_id.to_string(),
            check.name.clone(),
            check.age_grade.clone(),
            check.coach_count.to_string(),
            check.minimum_required.to_string(),
            yes_no(check.has_minimum_coaches),
            check.coaches_needed.to_string(),
        ]);
    }
    table
}

pub fn games_table(games: &[Game]) -> Table {
    let mut table: Table = Table::new(&["ID", "Date", "Opponent", "Venue", "Squad", "Score", "Result"]);
    for game in games {
        table.push(vec![
            id_cell(game.game_id),
            date_cell(game.date),
            game.opponent.clone(),
            game.venue.clone(),
            id_cell(game.squad_id),
            text_cell(game.final_score.as_ref()),
            game.outcome()
                .map(|o| o.as_str().to_string())
                .unwrap_or_default(),
        ]);
    }
    table
}

pub fn stats_table(stats: &[GameStats]) -> Table {
    let mut table: Table = Table::new(&[
        "Player", "Game", "Attended", "Tackles", "Passes", "Tries", "Kicks", "Overall",
    ]);
    for entry in stats {
        table.push(vec![
            entry.player_id.to_string(),
            entry.game_id.to_string(),
            yes_no(entry.attended),
            entry.tackles().to_string(),
            entry.passes().to_string(),
            entry.tries().to_string(),
            entry.kicks().to_string(),
            entry.overall_rating().to_string(),
        ]);
    }
    table
}

pub fn trainings_table(sessions: &[Training]) -> Table {
    let mut table: Table = Table::new(&["ID", "Date", "Squad", "Focus Areas", "Coach Notes"]);
    for session in sessions {
        table.push(vec![
            id_cell(session.training_id),
            date_cell(session.date),
            id_cell(session.squad_id),
            session.focus_areas.clone(),
            text_cell(session.coach_notes.as_ref()),
        ]);
    }
    table
}

pub fn attendance_table(records: &[TrainingAttendance]) -> Table {
    let mut table: Table = Table::new(&["Player", "Session", "Present", "Notes"]);
    for record in records {
        table.push(vec![
            record.player_id.to_string(),
            record.training_id.to_string(),
            yes_no(record.present),
            text_cell(record.notes.as_ref()),
        ]);
    }
    table
}

pub fn announcements_table(announcements: &[Announcement]) -> Table {
    let mut table: Table = Table::new(&["ID", "Sent", "Title", "From", "To", "Important"]);
    for announcement in announcements {
        table.push(vec![
            id_cell(announcement.announcement_id),
            date_cell(announcement.sent_date),
            announcement.title.clone(),
            announcement.sender.clone(),
            announcement.recipient.clone(),
            yes_no(announcement.important),
        ]);
    }
    table
}

/// Announcements in full, newest first, separated by blank lines.
pub fn announcements_text(announcements: &[Announcement]) -> String {
    if announcements.is_empty() {
        return format!("{NONE_FOUND}\n");
    }
    announcements
        .iter()
        .map(|a| {
            format!(
                "[{}] {}{}\nFrom: {}  To: {}  Sent: {}\n{}\n",
                id_cell(a.announcement_id),
                if a.important { "IMPORTANT: " } else { "" },
                a.title,
                a.sender,
                a.recipient,
                date_cell(a.sent_date),
                a.content
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn users_table(users: &[UserSummary]) -> Table {
    let mut table: Table = Table::new(&["ID", "Username", "Role", "Member", "Created", "Last Login"]);
    for user in users {
        table.push(vec![
            user.user_id.to_string(),
            user.username.clone(),
            user.role.clone(),
            id_cell(user.member_id),
            user.created_at.clone(),
            text_cell(user.last_login_at.as_ref()),
        ]);
    }
    table
}

/// A report as text: title, generation date, table, then summary lines.
pub fn report_text(report: &Report) -> String {
    let mut table: Table = Table {
        headers: report.headers.clone(),
        rows: Vec::new(),
    };
    for row in &report.rows {
        table.push(row.clone());
    }
    let mut text: String = format!(
        "{}\nGenerated {}\n\n{table}",
        report.title,
        format_display_date(report.generated_on)
    );
    if !report.summary.is_empty() {
        text.push('\n');
        for line in &report.summary {
            text.push_str(line);
            text.push('\n');
        }
    }
    text
}
