// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{Game, GameStats};
use time::macros::date;

use super::{create_test_player, save_test_squad};
use crate::{Persistence, PersistenceError};

fn save_game_on(persistence: &mut Persistence, squad_id: i64, day: time::Date) -> i64 {
    persistence
        .save_game(&Game::new(
            Some(day),
            String::from("Rovers"),
            String::from("Home"),
            Some(squad_id),
        ))
        .unwrap()
}

#[test]
fn test_save_and_get_game() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");

    let mut game: Game = Game::new(
        Some(date!(2026 - 09 - 12)),
        String::from("Rovers"),
        String::from("Away"),
        Some(squad_id),
    );
    game.final_score = Some(String::from("24 - 17"));
    let game_id: i64 = persistence.save_game(&game).unwrap();

    let loaded: Game = persistence.get_game(game_id).unwrap().unwrap();
    assert_eq!(loaded.game_id, Some(game_id));
    assert_eq!(loaded.date, Some(date!(2026 - 09 - 12)));
    assert!(loaded.is_win());
}

#[test]
fn test_game_requires_squad() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let game: Game = Game::new(
        Some(date!(2026 - 09 - 12)),
        String::from("Rovers"),
        String::from("Home"),
        None,
    );
    assert!(matches!(
        persistence.save_game(&game),
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_list_games_newest_first_and_by_squad() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let colts: i64 = save_test_squad(&mut persistence, "Colts", "U16");
    let seniors: i64 = save_test_squad(&mut persistence, "Seniors", "Senior");
    let early: i64 = save_game_on(&mut persistence, colts, date!(2026 - 09 - 01));
    let late: i64 = save_game_on(&mut persistence, colts, date!(2026 - 10 - 01));
    save_game_on(&mut persistence, seniors, date!(2026 - 09 - 15));

    assert_eq!(persistence.list_games(None).unwrap().len(), 3);
    let colts_games: Vec<Game> = persistence.list_games(Some(colts)).unwrap();
    let ids: Vec<Option<i64>> = colts_games.iter().map(|g| g.game_id).collect();
    assert_eq!(ids, vec![Some(late), Some(early)]);
}

#[test]
fn test_update_game_records_score() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");
    let game_id: i64 = save_game_on(&mut persistence, squad_id, date!(2026 - 09 - 12));

    let mut game: Game = persistence.get_game(game_id).unwrap().unwrap();
    game.final_score = Some(String::from("10 - 10"));
    assert!(persistence.update_game(&game).unwrap());
    assert!(persistence.get_game(game_id).unwrap().unwrap().is_draw());
}

#[test]
fn test_record_game_stats_replaces_existing_pair() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");
    let player_id: i64 = persistence
        .save_member(&create_test_player("John", "Smith", Some(squad_id)))
        .unwrap();
    let game_id: i64 = save_game_on(&mut persistence, squad_id, date!(2026 - 09 - 12));

    let mut stats: GameStats = GameStats::new(player_id, game_id, true);
    stats.set_tackles(8).unwrap();
    stats.set_passes(6).unwrap();
    stats.set_tries(1).unwrap();
    stats.set_kicks(0).unwrap();
    stats.calculate_overall_rating();
    let first_id: i64 = persistence.record_game_stats(&stats).unwrap();

    stats.set_tries(5).unwrap();
    stats.calculate_overall_rating();
    let second_id: i64 = persistence.record_game_stats(&stats).unwrap();

    assert_eq!(first_id, second_id);
    let stored: Vec<GameStats> = persistence.list_stats_by_game(game_id).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].tries(), 5);
    assert_eq!(stored[0].overall_rating(), 5);

    let found: GameStats = persistence
        .find_game_stats(player_id, game_id)
        .unwrap()
        .unwrap();
    assert_eq!(found.stats_id, Some(first_id));
}

#[test]
fn test_stats_for_unknown_player_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");
    let game_id: i64 = save_game_on(&mut persistence, squad_id, date!(2026 - 09 - 12));

    assert!(matches!(
        persistence.record_game_stats(&GameStats::new(99, game_id, true)),
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_stats_by_player_and_squad() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");
    let player_id: i64 = persistence
        .save_member(&create_test_player("John", "Smith", Some(squad_id)))
        .unwrap();
    let first: i64 = save_game_on(&mut persistence, squad_id, date!(2026 - 09 - 05));
    let second: i64 = save_game_on(&mut persistence, squad_id, date!(2026 - 09 - 12));
    persistence
        .record_game_stats(&GameStats::new(player_id, second, false))
        .unwrap();
    persistence
        .record_game_stats(&GameStats::new(player_id, first, true))
        .unwrap();

    let by_player: Vec<GameStats> = persistence.list_stats_by_player(player_id).unwrap();
    assert_eq!(by_player.len(), 2);
    assert_eq!(by_player[0].game_id, first);
    assert!(!by_player[1].attended);
    assert_eq!(persistence.list_stats_by_squad(squad_id).unwrap().len(), 2);
}

#[test]
fn test_delete_game_removes_stats() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let squad_id: i64 = save_test_squad(&mut persistence, "Colts", "U16");
    let player_id: i64 = persistence
        .save_member(&create_test_player("John", "Smith", Some(squad_id)))
        .unwrap();
    let game_id: i64 = save_game_on(&mut persistence, squad_id, date!(2026 - 09 - 12));
    persistence
        .record_game_stats(&GameStats::new(player_id, game_id, true))
        .unwrap();

    assert!(persistence.delete_game(game_id).unwrap());
    assert!(persistence.find_game_stats(player_id, game_id).unwrap().is_none());
}
