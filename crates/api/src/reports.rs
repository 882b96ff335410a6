// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived-statistics reports and CSV export.
//!
//! Reports read stored records and compute everything on request. Nothing
//! is written back.

use clubhouse_domain::{
    Game, GameStats, Member, PlayerTotals, Report, ReportKind, Squad, SquadRecord,
    TrainingAttendance, format_display_date, game_attendance_rate, overall_skill_rating,
    squad_skill_ratings, training_attendance_rate,
};
use clubhouse_persistence::Persistence;
use std::collections::BTreeMap;
use std::io::Write;
use time::Date;
use tracing::debug;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, persistence_failure};

const PLAYER_PERFORMANCE_HEADERS: [&str; 8] = [
    "Date", "Opponent", "Attended", "Tackles", "Passes", "Tries", "Kicks", "Overall",
];
const SQUAD_SUMMARY_HEADERS: [&str; 7] = [
    "Player",
    "Position",
    "Games",
    "Tries",
    "Tackles",
    "Skill Rating",
    "Training %",
];
const TRAINING_ATTENDANCE_HEADERS: [&str; 4] = ["Player", "Sessions", "Present", "Attendance %"];

fn load_squad(persistence: &mut Persistence, squad_id: i64) -> Result<Squad, ApiError> {
    persistence
        .get_squad(squad_id)
        .map_err(persistence_failure("load squad"))?
        .ok_or_else(|| ApiError::not_found("Squad", squad_id))
}

fn yes_no(flag: bool) -> String {
    String::from(if flag { "Yes" } else { "No" })
}

fn position_of(member: &Member) -> String {
    member
        .player()
        .map(|p| p.position.clone())
        .unwrap_or_default()
}

/// Builds a game-by-game report for one player.
///
/// # Errors
///
/// Returns an error if the member is not a player or the store fails.
pub fn player_performance_report(
    persistence: &mut Persistence,
    player_id: i64,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<Report, ApiError> {
    AuthorizationService::authorize_view(actor)?;

    let player: Member = persistence
        .get_member(player_id)
        .map_err(persistence_failure("load player"))?
        .filter(Member::is_player)
        .ok_or_else(|| ApiError::not_found("Player", player_id))?;
    let stats: Vec<GameStats> = persistence
        .list_stats_by_player(player_id)
        .map_err(persistence_failure("load player stats"))?;
    let attendance: Vec<TrainingAttendance> = persistence
        .list_attendance_by_player(player_id)
        .map_err(persistence_failure("load player attendance"))?;

    let mut report: Report = Report::new(
        ReportKind::PlayerPerformance,
        format!("{}: {}", ReportKind::PlayerPerformance.as_str(), player.full_name()),
        today,
        &PLAYER_PERFORMANCE_HEADERS,
    );

    for entry in &stats {
        let game: Option<Game> = persistence
            .get_game(entry.game_id)
            .map_err(persistence_failure("load game"))?;
        let (date, opponent) = game.map_or_else(
            || (String::new(), String::new()),
            |g| (g.date.map(format_display_date).unwrap_or_default(), g.opponent),
        );
        report.push_row(vec![
            date,
            opponent,
            yes_no(entry.attended),
            entry.tackles().to_string(),
            entry.passes().to_string(),
            entry.tries().to_string(),
            entry.kicks().to_string(),
            entry.overall_rating().to_string(),
        ]);
    }

    let totals: PlayerTotals = PlayerTotals::from_stats(&stats);
    report.summary.push(format!(
        "Overall skill rating: {:.2}",
        overall_skill_rating(&stats)
    ));
    report.summary.push(format!(
        "Game attendance: {:.1}%",
        game_attendance_rate(&stats)
    ));
    report.summary.push(format!(
        "Training attendance: {:.1}%",
        training_attendance_rate(&attendance)
    ));
    report.summary.push(format!(
        "Totals over {} games: {} tries, {} tackles, {} passes, {} kicks",
        totals.games_attended, totals.tries, totals.tackles, totals.passes, totals.kicks
    ));

    debug!(player_id, rows = report.rows.len(), "Built player performance report");
    Ok(report)
}

/// Builds a per-player summary of a squad, with its results and coaching.
///
/// # Errors
///
/// Returns an error if the squad does not exist or the store fails.
pub fn squad_summary_report(
    persistence: &mut Persistence,
    squad_id: i64,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<Report, ApiError> {
    AuthorizationService::authorize_view(actor)?;

    let squad: Squad = load_squad(persistence, squad_id)?;
    let players: Vec<Member> = persistence
        .list_players_by_squad(squad_id)
        .map_err(persistence_failure("load squad players"))?;
    let squad_stats: Vec<GameStats> = persistence
        .list_stats_by_squad(squad_id)
        .map_err(persistence_failure("load squad stats"))?;
    let games: Vec<Game> = persistence
        .list_games(Some(squad_id))
        .map_err(persistence_failure("load squad games"))?;
    let attendance: Vec<TrainingAttendance> = persistence
        .list_attendance_by_squad(squad_id)
        .map_err(persistence_failure("load squad attendance"))?;

    let ratings: BTreeMap<i64, f64> = squad_skill_ratings(&squad.player_ids, &squad_stats);

    let mut report: Report = Report::new(
        ReportKind::SquadSummary,
        format!("{}: {} ({})", ReportKind::SquadSummary.as_str(), squad.name, squad.age_grade),
        today,
        &SQUAD_SUMMARY_HEADERS,
    );

    for player in &players {
        let player_id: i64 = player.member_id.unwrap_or_default();
        let own_stats: Vec<GameStats> = squad_stats
            .iter()
            .filter(|s| s.player_id == player_id)
            .cloned()
            .collect();
        let own_attendance: Vec<TrainingAttendance> = attendance
            .iter()
            .filter(|a| a.player_id == player_id)
            .cloned()
            .collect();
        let totals: PlayerTotals = PlayerTotals::from_stats(&own_stats);
        report.push_row(vec![
            player.full_name(),
            position_of(player),
            totals.games_attended.to_string(),
            totals.tries.to_string(),
            totals.tackles.to_string(),
            format!("{:.2}", ratings.get(&player_id).copied().unwrap_or_default()),
            format!("{:.1}", training_attendance_rate(&own_attendance)),
        ]);
    }

    let record: SquadRecord = SquadRecord::from_games(&games);
    report.summary.push(format!(
        "Record: {record} from {} results ({} games scheduled)",
        record.played(),
        games.len()
    ));
    report.summary.push(format!(
        "Coaches: {} of {} required ({})",
        squad.coach_ids.len(),
        squad.minimum_coaches(),
        if squad.has_minimum_coaches() {
            "adequately staffed"
        } else {
            "understaffed"
        }
    ));
    report.summary.push(format!(
        "Squad training attendance: {:.1}%",
        training_attendance_rate(&attendance)
    ));

    debug!(squad_id, rows = report.rows.len(), "Built squad summary report");
    Ok(report)
}

/// Builds a per-player training attendance report for a squad.
///
/// # Errors
///
/// Returns an error if the squad does not exist or the store fails.
pub fn training_attendance_report(
    persistence: &mut Persistence,
    squad_id: i64,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<Report, ApiError> {
    AuthorizationService::authorize_view(actor)?;

    let squad: Squad = load_squad(persistence, squad_id)?;
    let players: Vec<Member> = persistence
        .list_players_by_squad(squad_id)
        .map_err(persistence_failure("load squad players"))?;
    let sessions: usize = persistence
        .list_trainings(Some(squad_id))
        .map_err(persistence_failure("load training sessions"))?
        .len();
    let attendance: Vec<TrainingAttendance> = persistence
        .list_attendance_by_squad(squad_id)
        .map_err(persistence_failure("load squad attendance"))?;

    let mut report: Report = Report::new(
        ReportKind::TrainingAttendance,
        format!("{}: {}", ReportKind::TrainingAttendance.as_str(), squad.name),
        today,
        &TRAINING_ATTENDANCE_HEADERS,
    );

    for player in &players {
        let player_id: i64 = player.member_id.unwrap_or_default();
        let own: Vec<TrainingAttendance> = attendance
            .iter()
            .filter(|a| a.player_id == player_id)
            .cloned()
            .collect();
        let present: usize = own.iter().filter(|a| a.present).count();
        report.push_row(vec![
            player.full_name(),
            own.len().to_string(),
            present.to_string(),
            format!("{:.1}", training_attendance_rate(&own)),
        ]);
    }

    report.summary.push(format!("Sessions held: {sessions}"));
    report.summary.push(format!(
        "Squad attendance rate: {:.1}%",
        training_attendance_rate(&attendance)
    ));

    debug!(squad_id, rows = report.rows.len(), "Built training attendance report");
    Ok(report)
}

/// Writes a report's table as CSV: a header record, then one record per row.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report_csv<W: Write>(report: &Report, writer: W) -> Result<(), ApiError> {
    let csv_error = |e: csv::Error| ApiError::Internal {
        message: format!("Failed to write CSV: {e}"),
    };

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&report.headers).map_err(csv_error)?;
    for row in &report.rows {
        csv_writer.write_record(row).map_err(csv_error)?;
    }
    csv_writer.flush().map_err(|e| ApiError::Internal {
        message: format!("Failed to write CSV: {e}"),
    })?;
    Ok(())
}

/// Renders a report's table as a CSV string.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn report_to_csv(report: &Report) -> Result<String, ApiError> {
    let mut buffer: Vec<u8> = Vec::new();
    write_report_csv(report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ApiError::Internal {
        message: format!("CSV output was not UTF-8: {e}"),
    })
}
