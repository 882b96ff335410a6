// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FinalScore, Game, GameOutcome, GameStats, Skill};
use time::macros::date;

fn game_with_score(score: Option<&str>) -> Game {
    let mut game: Game = Game::new(
        Some(date!(2026 - 09 - 12)),
        String::from("Harlequins"),
        String::from("Home Ground"),
        Some(1),
    );
    game.final_score = score.map(String::from);
    game
}

#[test]
fn test_win_outcome() {
    let game: Game = game_with_score(Some("21 - 15"));
    assert!(game.is_win());
    assert!(!game.is_loss());
    assert!(!game.is_draw());
}

#[test]
fn test_draw_outcome() {
    let game: Game = game_with_score(Some("10 - 10"));
    assert!(game.is_draw());
    assert!(!game.is_win());
    assert!(!game.is_loss());
}

#[test]
fn test_loss_outcome() {
    let game: Game = game_with_score(Some("3 - 27"));
    assert!(game.is_loss());
    assert_eq!(game.outcome(), Some(GameOutcome::Loss));
}

#[test]
fn test_missing_score_has_no_outcome() {
    let game: Game = game_with_score(None);
    assert!(!game.is_win());
    assert!(!game.is_loss());
    assert!(!game.is_draw());
    assert_eq!(game.outcome(), None);
}

#[test]
fn test_unparsable_scores_have_no_outcome() {
    for score in ["21-15", "21 - ", " - 15", "a - b", "-1 - 3", "21 - 15 - 3", ""] {
        let game: Game = game_with_score(Some(score));
        assert_eq!(game.outcome(), None, "score {score:?}");
    }
}

#[test]
fn test_well_formed_score_accepts_any_digit_run() {
    assert!(FinalScore::is_well_formed("21 - 15"));
    assert!(FinalScore::is_well_formed("99999999999 - 0"));
    assert!(FinalScore::parse("99999999999 - 0").is_none());

    assert!(!FinalScore::is_well_formed("21-15"));
    assert!(!FinalScore::is_well_formed("-1 - 3"));
    assert!(!FinalScore::is_well_formed("1 - 2 - 3"));
    assert!(!FinalScore::is_well_formed(" - 3"));
}

#[test]
fn test_final_score_display() {
    let score: FinalScore = FinalScore::parse("7 - 12").unwrap();
    assert_eq!(score.ours, 7);
    assert_eq!(score.theirs, 12);
    assert_eq!(score.to_string(), "7 - 12");
}

#[test]
fn test_overall_rating_formula_for_all_values() {
    for t in 0..=10 {
        for p in 0..=10 {
            for r in 0..=10 {
                for k in 0..=10 {
                    let mut stats: GameStats = GameStats::new(1, 1, true);
                    stats.set_tackles(t).unwrap();
                    stats.set_passes(p).unwrap();
                    stats.set_tries(r).unwrap();
                    stats.set_kicks(k).unwrap();
                    let rating: u8 = stats.calculate_overall_rating();

                    let expected: f64 = (f64::from(t + p + r + k) / 4.0).round();
                    assert!((f64::from(rating) - expected).abs() < f64::EPSILON);
                    assert!(rating <= 10);
                }
            }
        }
    }
}

#[test]
fn test_overall_rating_rounds_half_up() {
    let mut stats: GameStats = GameStats::with_values(None, 1, 1, 1, 1, 0, 0, 0, true).unwrap();
    // 2 / 4 = 0.5
    assert_eq!(stats.calculate_overall_rating(), 1);

    stats.set_tries(4).unwrap();
    // 6 / 4 = 1.5
    assert_eq!(stats.calculate_overall_rating(), 2);
}

#[test]
fn test_overall_rating_is_not_recomputed_automatically() {
    let mut stats: GameStats = GameStats::with_values(None, 1, 1, 8, 8, 8, 8, 0, true).unwrap();
    assert_eq!(stats.calculate_overall_rating(), 8);

    stats.set_tackles(0).unwrap();
    assert_eq!(stats.overall_rating(), 8);
    assert_eq!(stats.calculate_overall_rating(), 6);
}

#[test]
fn test_out_of_range_setters_fail() {
    let mut stats: GameStats = GameStats::new(1, 1, true);
    for value in [-1, 11, 100, i32::MIN, i32::MAX] {
        assert!(stats.set_tackles(value).is_err());
        assert!(stats.set_passes(value).is_err());
        assert!(stats.set_tries(value).is_err());
        assert!(stats.set_kicks(value).is_err());
        assert!(stats.set_overall_rating(value).is_err());
    }
    assert_eq!(stats.tackles(), 0);
}

#[test]
fn test_setter_error_names_field() {
    let mut stats: GameStats = GameStats::new(1, 1, true);
    let err: DomainError = stats.set_kicks(12).unwrap_err();
    assert_eq!(
        err,
        DomainError::SkillOutOfRange {
            field: "Kicks",
            value: 12
        }
    );
    assert_eq!(err.to_string(), "Kicks must be between 0 and 10, got 12");
}

#[test]
fn test_with_values_rejects_out_of_range() {
    let result: Result<GameStats, DomainError> =
        GameStats::with_values(None, 1, 1, 5, 5, 5, 5, 11, true);
    assert!(matches!(
        result,
        Err(DomainError::SkillOutOfRange {
            field: "Overall rating",
            ..
        })
    ));
}

#[test]
fn test_strongest_and_weakest_skill() {
    let stats: GameStats = GameStats::with_values(None, 1, 1, 3, 9, 1, 5, 0, true).unwrap();
    assert_eq!(stats.strongest_skill(), Skill::Passes);
    assert_eq!(stats.weakest_skill(), Skill::Tries);
}

#[test]
fn test_skill_ties_go_to_first_in_order() {
    let even: GameStats = GameStats::with_values(None, 1, 1, 4, 4, 4, 4, 0, true).unwrap();
    assert_eq!(even.strongest_skill(), Skill::Tackles);
    assert_eq!(even.weakest_skill(), Skill::Tackles);

    let tied_top: GameStats = GameStats::with_values(None, 1, 1, 2, 7, 1, 7, 0, true).unwrap();
    assert_eq!(tied_top.strongest_skill(), Skill::Passes);

    let tied_bottom: GameStats = GameStats::with_values(None, 1, 1, 6, 6, 0, 0, 0, true).unwrap();
    assert_eq!(tied_bottom.weakest_skill(), Skill::Tries);
}
