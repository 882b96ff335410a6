// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Game, GameStats, PlayerTotals, SquadRecord, TrainingAttendance, game_attendance_rate,
    overall_skill_rating, squad_skill_ratings, training_attendance_rate,
};
use std::collections::BTreeMap;
use time::macros::date;

fn rated(player_id: i64, rating: i32, attended: bool) -> GameStats {
    GameStats::with_values(None, player_id, 1, 0, 0, 0, 0, rating, attended).unwrap()
}

fn scored(score: Option<&str>) -> Game {
    let mut game: Game = Game::new(
        Some(date!(2026 - 01 - 10)),
        String::from("Saracens"),
        String::from("Away"),
        Some(1),
    );
    game.final_score = score.map(String::from);
    game
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_overall_skill_rating_empty_is_zero() {
    assert_eq!(overall_skill_rating(&[]).to_bits(), 0.0_f64.to_bits());
}

#[test]
fn test_overall_skill_rating_all_unattended_is_zero() {
    let stats: Vec<GameStats> = vec![rated(1, 9, false), rated(1, 7, false)];
    assert_eq!(overall_skill_rating(&stats).to_bits(), 0.0_f64.to_bits());
}

#[test]
fn test_overall_skill_rating_ignores_unattended_games() {
    let stats: Vec<GameStats> = vec![rated(1, 8, true), rated(1, 5, true), rated(1, 10, false)];
    assert_close(overall_skill_rating(&stats), 6.5);
}

#[test]
fn test_attendance_rates_empty_are_zero() {
    assert_eq!(training_attendance_rate(&[]).to_bits(), 0.0_f64.to_bits());
    assert_eq!(game_attendance_rate(&[]).to_bits(), 0.0_f64.to_bits());
}

#[test]
fn test_training_attendance_rate() {
    let records: Vec<TrainingAttendance> = (1..=8)
        .map(|training_id| TrainingAttendance::new(3, training_id, training_id % 4 != 0))
        .collect();
    // 6 of 8 present
    assert_close(training_attendance_rate(&records), 75.0);

    let one_of_three: Vec<TrainingAttendance> = vec![
        TrainingAttendance::new(3, 1, true),
        TrainingAttendance::new(3, 2, false),
        TrainingAttendance::new(3, 3, false),
    ];
    assert_close(training_attendance_rate(&one_of_three), 100.0 / 3.0);
}

#[test]
fn test_game_attendance_rate() {
    let stats: Vec<GameStats> = vec![rated(1, 5, true), rated(1, 5, false)];
    assert_close(game_attendance_rate(&stats), 50.0);
}

#[test]
fn test_squad_record_skips_unparsable_scores() {
    let games: Vec<Game> = vec![
        scored(Some("21 - 15")),
        scored(Some("30 - 3")),
        scored(Some("10 - 10")),
        scored(Some("0 - 6")),
        scored(None),
        scored(Some("postponed")),
    ];
    let record: SquadRecord = SquadRecord::from_games(&games);
    assert_eq!(
        record,
        SquadRecord {
            wins: 2,
            losses: 1,
            draws: 1
        }
    );
    assert_eq!(record.played(), 4);
    assert_eq!(record.to_string(), "W2 L1 D1");
}

#[test]
fn test_squad_skill_ratings_per_player() {
    let stats: Vec<GameStats> = vec![rated(1, 6, true), rated(1, 8, true), rated(2, 4, false)];
    let ratings: BTreeMap<i64, f64> = squad_skill_ratings(&[1, 2, 3], &stats);
    assert_eq!(ratings.len(), 3);
    assert_close(ratings[&1], 7.0);
    assert_close(ratings[&2], 0.0);
    assert_close(ratings[&3], 0.0);
}

#[test]
fn test_player_totals_count_attended_games_only() {
    let stats: Vec<GameStats> = vec![
        GameStats::with_values(None, 1, 1, 5, 3, 2, 0, 3, true).unwrap(),
        GameStats::with_values(None, 1, 2, 7, 4, 1, 2, 4, true).unwrap(),
        GameStats::with_values(None, 1, 3, 9, 9, 9, 9, 9, false).unwrap(),
    ];
    let totals: PlayerTotals = PlayerTotals::from_stats(&stats);
    assert_eq!(totals.games_attended, 2);
    assert_eq!(totals.tackles, 12);
    assert_eq!(totals.tries, 3);
    assert_eq!(totals.passes, 7);
    assert_eq!(totals.kicks, 2);
}
