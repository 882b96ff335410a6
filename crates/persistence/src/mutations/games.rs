// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game and game statistics mutations.

use clubhouse_domain::{Game, GameStats, format_iso_date};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{game_stats, games};
use crate::error::PersistenceError;

fn required<T>(value: Option<T>, column: &str) -> Result<T, PersistenceError> {
    value.ok_or_else(|| PersistenceError::ConstraintViolation(format!("{column} is required")))
}

fn stored_game_date(game: &Game) -> Result<String, PersistenceError> {
    required(game.date, "games.game_date").map(format_iso_date)
}

/// Inserts a game.
///
/// # Returns
///
/// The new game ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including an unknown squad).
pub fn insert_game(conn: &mut SqliteConnection, game: &Game) -> Result<i64, PersistenceError> {
    let game_date: String = stored_game_date(game)?;
    let squad_id: i64 = required(game.squad_id, "games.squad_id")?;

    diesel::insert_into(games::table)
        .values((
            games::game_date.eq(&game_date),
            games::opponent.eq(&game.opponent),
            games::final_score.eq(&game.final_score),
            games::venue.eq(&game.venue),
            games::squad_id.eq(squad_id),
        ))
        .execute(conn)?;
    let game_id: i64 = conn.get_last_insert_rowid()?;

    info!(game_id, squad_id, opponent = %game.opponent, "Scheduled game");
    Ok(game_id)
}

/// Updates every column of a game.
///
/// # Returns
///
/// `false` if the game has no ID or no such game exists.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_game(conn: &mut SqliteConnection, game: &Game) -> Result<bool, PersistenceError> {
    let Some(game_id) = game.game_id else {
        return Ok(false);
    };
    let game_date: String = stored_game_date(game)?;
    let squad_id: i64 = required(game.squad_id, "games.squad_id")?;

    let rows_affected: usize = diesel::update(games::table.find(game_id))
        .set((
            games::game_date.eq(&game_date),
            games::opponent.eq(&game.opponent),
            games::final_score.eq(&game.final_score),
            games::venue.eq(&game.venue),
            games::squad_id.eq(squad_id),
        ))
        .execute(conn)?;
    Ok(rows_affected > 0)
}

/// Deletes a game and every stat recorded for it.
///
/// # Returns
///
/// `false` if no such game exists.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_game(conn: &mut SqliteConnection, game_id: i64) -> Result<bool, PersistenceError> {
    let rows_affected: usize = diesel::delete(games::table.find(game_id)).execute(conn)?;
    if rows_affected > 0 {
        info!(game_id, "Deleted game");
    }
    Ok(rows_affected > 0)
}

/// Records one player's stats for one game, replacing any earlier record
/// for the same pair.
///
/// # Returns
///
/// The ID of the stored stats row.
///
/// # Errors
///
/// Returns an error if the write fails (including an unknown player or
/// game); nothing is changed in that case.
pub fn record_game_stats(
    conn: &mut SqliteConnection,
    stats: &GameStats,
) -> Result<i64, PersistenceError> {
    let values = (
        game_stats::tackles.eq(i32::from(stats.tackles())),
        game_stats::passes.eq(i32::from(stats.passes())),
        game_stats::tries.eq(i32::from(stats.tries())),
        game_stats::kicks.eq(i32::from(stats.kicks())),
        game_stats::overall_rating.eq(i32::from(stats.overall_rating())),
        game_stats::attended.eq(i32::from(stats.attended)),
    );

    conn.transaction(|conn| {
        let existing: Option<i64> = game_stats::table
            .filter(game_stats::player_id.eq(stats.player_id))
            .filter(game_stats::game_id.eq(stats.game_id))
            .select(game_stats::stats_id)
            .first(conn)
            .optional()?;

        let stats_id: i64 = if let Some(stats_id) = existing {
            diesel::update(game_stats::table.find(stats_id))
                .set(values)
                .execute(conn)?;
            debug!(stats_id, "Replaced game stats");
            stats_id
        } else {
            diesel::insert_into(game_stats::table)
                .values((
                    game_stats::player_id.eq(stats.player_id),
                    game_stats::game_id.eq(stats.game_id),
                    values,
                ))
                .execute(conn)?;
            conn.get_last_insert_rowid()?
        };

        info!(
            stats_id,
            player_id = stats.player_id,
            game_id = stats.game_id,
            "Recorded game stats"
        );
        Ok(stats_id)
    })
}
