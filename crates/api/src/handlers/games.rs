// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixture operations and per-player game statistics.

use clubhouse_domain::{Game, GameStats, validate_game, validate_game_stats};
use clubhouse_persistence::Persistence;
use time::Date;
use tracing::info;

use super::{optional_text, parse_date, require_exists};
use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, persistence_failure};
use crate::request_response::{
    RecordGameStatsRequest, ScheduleGameRequest, UpdateGameRequest, WriteResponse,
};

fn load_game(persistence: &mut Persistence, game_id: i64) -> Result<Game, ApiError> {
    persistence
        .get_game(game_id)
        .map_err(persistence_failure("load game"))?
        .ok_or_else(|| ApiError::not_found("Game", game_id))
}

fn require_squad(persistence: &mut Persistence, squad_id: Option<i64>) -> Result<(), ApiError> {
    if let Some(squad_id) = squad_id {
        let exists: bool = persistence
            .squad_exists(squad_id)
            .map_err(persistence_failure("look up squad"))?;
        require_exists(exists, "Squad", squad_id)?;
    }
    Ok(())
}

/// Schedules a game for a squad.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a Secretary
/// - The date cannot be parsed
/// - The game breaks any validation rule
/// - The squad does not exist
/// - The store fails
pub fn schedule_game(
    persistence: &mut Persistence,
    request: ScheduleGameRequest,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_games(actor)?;

    let mut game: Game = Game::new(
        parse_date("date", request.date.as_deref())?,
        request.opponent,
        request.venue,
        request.squad_id,
    );
    game.final_score = optional_text(request.final_score);

    validate_game(&game, today)?;
    require_squad(persistence, game.squad_id)?;

    let game_id: i64 = persistence
        .save_game(&game)
        .map_err(persistence_failure("save game"))?;

    info!(game_id, opponent = %game.opponent, actor = %actor.username, "Game scheduled");
    Ok(WriteResponse::new(
        game_id,
        format!("Game against {} scheduled with ID {game_id}", game.opponent),
    ))
}

/// Changes a game, including recording its final score.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the game does not
/// exist, the changed game breaks a validation rule, or the store fails.
pub fn update_game(
    persistence: &mut Persistence,
    request: UpdateGameRequest,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_games(actor)?;

    let mut game: Game = load_game(persistence, request.game_id)?;
    if request.date.is_some() {
        game.date = parse_date("date", request.date.as_deref())?;
    }
    if let Some(opponent) = request.opponent {
        game.opponent = opponent;
    }
    if let Some(venue) = request.venue {
        game.venue = venue;
    }
    if request.final_score.is_some() {
        game.final_score = optional_text(request.final_score);
    }

    validate_game(&game, today)?;

    persistence
        .update_game(&game)
        .map_err(persistence_failure("update game"))?;

    info!(game_id = request.game_id, actor = %actor.username, "Game updated");
    let message: String = match game.outcome() {
        Some(outcome) => format!(
            "Game {} updated: {} ({})",
            request.game_id,
            game.final_score.as_deref().unwrap_or_default(),
            outcome.as_str()
        ),
        None => format!("Game {} updated", request.game_id),
    };
    Ok(WriteResponse::new(request.game_id, message))
}

/// Deletes a game and its statistics.
///
/// # Errors
///
/// Returns an error if the actor is not a Secretary, the game does not
/// exist, or the store fails.
pub fn delete_game(
    persistence: &mut Persistence,
    game_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_games(actor)?;

    let deleted: bool = persistence
        .delete_game(game_id)
        .map_err(persistence_failure("delete game"))?;
    require_exists(deleted, "Game", game_id)?;

    info!(game_id, actor = %actor.username, "Game deleted");
    Ok(WriteResponse::new(game_id, format!("Game {game_id} deleted")))
}

/// Retrieves one game.
///
/// # Errors
///
/// Returns an error if the game does not exist or the store fails.
pub fn get_game(
    persistence: &mut Persistence,
    game_id: i64,
    actor: &AuthenticatedActor,
) -> Result<Game, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    load_game(persistence, game_id)
}

/// Lists games, most recent first, optionally for one squad.
///
/// # Errors
///
/// Returns an error if the squad does not exist or the store fails.
pub fn list_games(
    persistence: &mut Persistence,
    squad_id: Option<i64>,
    actor: &AuthenticatedActor,
) -> Result<Vec<Game>, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    require_squad(persistence, squad_id)?;
    persistence
        .list_games(squad_id)
        .map_err(persistence_failure("list games"))
}

/// Records one player's performance in one game, replacing any earlier
/// record for the same pair.
///
/// Skill values outside 0 to 10 are rejected as soon as they are set. The
/// overall rating is calculated from the four skills unless given. When the
/// player did not attend, the given skills are ignored and stored as zero.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a Coach
/// - A skill or rating is out of range
/// - The stats break any validation rule
/// - The player or game does not exist
/// - The store fails
pub fn record_game_stats(
    persistence: &mut Persistence,
    request: RecordGameStatsRequest,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_record_stats(actor)?;

    let mut stats: GameStats = GameStats::new(request.player_id, request.game_id, request.attended);
    // Skills and rating stay at zero for a player who did not attend.
    if request.attended {
        stats.set_tackles(request.tackles)?;
        stats.set_passes(request.passes)?;
        stats.set_tries(request.tries)?;
        stats.set_kicks(request.kicks)?;
        match request.overall_rating {
            Some(rating) => stats.set_overall_rating(rating)?,
            None => {
                stats.calculate_overall_rating();
            }
        }
    }

    validate_game_stats(&stats)?;

    let player_exists: bool = persistence
        .player_exists(stats.player_id)
        .map_err(persistence_failure("look up player"))?;
    require_exists(player_exists, "Player", stats.player_id)?;
    let game_exists: bool = persistence
        .game_exists(stats.game_id)
        .map_err(persistence_failure("look up game"))?;
    require_exists(game_exists, "Game", stats.game_id)?;

    let stats_id: i64 = persistence
        .record_game_stats(&stats)
        .map_err(persistence_failure("record game stats"))?;

    info!(
        stats_id,
        player_id = stats.player_id,
        game_id = stats.game_id,
        actor = %actor.username,
        "Game stats recorded"
    );
    Ok(WriteResponse::new(
        stats_id,
        format!(
            "Stats recorded for player {} in game {} (overall rating {})",
            stats.player_id,
            stats.game_id,
            stats.overall_rating()
        ),
    ))
}

/// Lists every player's stats for one game.
///
/// # Errors
///
/// Returns an error if the game does not exist or the store fails.
pub fn list_game_stats(
    persistence: &mut Persistence,
    game_id: i64,
    actor: &AuthenticatedActor,
) -> Result<Vec<GameStats>, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    let exists: bool = persistence
        .game_exists(game_id)
        .map_err(persistence_failure("look up game"))?;
    require_exists(exists, "Game", game_id)?;
    persistence
        .list_stats_by_game(game_id)
        .map_err(persistence_failure("list game stats"))
}

/// Lists one player's stats across games, oldest first.
///
/// # Errors
///
/// Returns an error if the player does not exist or the store fails.
pub fn list_player_stats(
    persistence: &mut Persistence,
    player_id: i64,
    actor: &AuthenticatedActor,
) -> Result<Vec<GameStats>, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    let exists: bool = persistence
        .player_exists(player_id)
        .map_err(persistence_failure("look up player"))?;
    require_exists(exists, "Player", player_id)?;
    persistence
        .list_stats_by_player(player_id)
        .map_err(persistence_failure("list player stats"))
}
