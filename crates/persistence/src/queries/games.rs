// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game and game statistics queries.

use clubhouse_domain::{Game, GameStats};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{GameRow, GameStatsRow};
use crate::diesel_schema::{game_stats, games};
use crate::error::PersistenceError;

/// Retrieves a game by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the game is not found.
pub fn get_game(conn: &mut SqliteConnection, game_id: i64) -> Result<Option<Game>, PersistenceError> {
    debug!(game_id, "Looking up game");

    games::table
        .find(game_id)
        .select(GameRow::as_select())
        .first(conn)
        .optional()?
        .map(GameRow::into_game)
        .transpose()
}

/// Lists games, most recent first, optionally for one squad only.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_games(
    conn: &mut SqliteConnection,
    squad_id: Option<i64>,
) -> Result<Vec<Game>, PersistenceError> {
    let mut query = games::table
        .select(GameRow::as_select())
        .order((games::game_date.desc(), games::game_id.desc()))
        .into_boxed();
    if let Some(squad_id) = squad_id {
        query = query.filter(games::squad_id.eq(squad_id));
    }

    query
        .load::<GameRow>(conn)?
        .into_iter()
        .map(GameRow::into_game)
        .collect()
}

/// Returns `true` if a game with this ID exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn game_exists(conn: &mut SqliteConnection, game_id: i64) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(games::table.find(game_id))).get_result(conn)?)
}

/// Retrieves the stats recorded for one player in one game.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if nothing has been recorded.
pub fn find_game_stats(
    conn: &mut SqliteConnection,
    player_id: i64,
    game_id: i64,
) -> Result<Option<GameStats>, PersistenceError> {
    game_stats::table
        .filter(game_stats::player_id.eq(player_id))
        .filter(game_stats::game_id.eq(game_id))
        .select(GameStatsRow::as_select())
        .first(conn)
        .optional()?
        .map(GameStatsRow::into_stats)
        .transpose()
}

/// Lists every player's stats for one game.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_stats_by_game(
    conn: &mut SqliteConnection,
    game_id: i64,
) -> Result<Vec<GameStats>, PersistenceError> {
    game_stats::table
        .filter(game_stats::game_id.eq(game_id))
        .select(GameStatsRow::as_select())
        .order(game_stats::player_id.asc())
        .load::<GameStatsRow>(conn)?
        .into_iter()
        .map(GameStatsRow::into_stats)
        .collect()
}

/// Lists one player's stats across all games, oldest game first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_stats_by_player(
    conn: &mut SqliteConnection,
    player_id: i64,
) -> Result<Vec<GameStats>, PersistenceError> {
    game_stats::table
        .inner_join(games::table)
        .filter(game_stats::player_id.eq(player_id))
        .select(GameStatsRow::as_select())
        .order((games::game_date.asc(), games::game_id.asc()))
        .load::<GameStatsRow>(conn)?
        .into_iter()
        .map(GameStatsRow::into_stats)
        .collect()
}

/// Lists stats for every game played by a squad.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_stats_by_squad(
    conn: &mut SqliteConnection,
    squad_id: i64,
) -> Result<Vec<GameStats>, PersistenceError> {
    game_stats::table
        .inner_join(games::table)
        .filter(games::squad_id.eq(squad_id))
        .select(GameStatsRow::as_select())
        .order((game_stats::player_id.asc(), games::game_date.asc()))
        .load::<GameStatsRow>(conn)?
        .into_iter()
        .map(GameStatsRow::into_stats)
        .collect()
}
