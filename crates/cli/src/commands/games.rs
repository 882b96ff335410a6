// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Subcommand;
use clubhouse_api::handlers::games;
use clubhouse_api::{
    ApiError, AuthenticatedActor, RecordGameStatsRequest, ScheduleGameRequest, UpdateGameRequest,
    WriteResponse,
};
use clubhouse_domain::{Game, GameStats};
use serde::Serialize;

use super::Context;
use crate::render::{games_table, stats_table};
use crate::session::value_or_prompt;

#[derive(Debug, Subcommand)]
pub enum GameCommand {
    /// Schedule a game. A missing date, opponent, or venue is prompted for.
    Add {
        /// Date played, dd/MM/yyyy or yyyy-MM-dd
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        opponent: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        /// The squad that played
        #[arg(long)]
        squad: i64,

        /// Final score, "<ours> - <theirs>"
        #[arg(long)]
        score: Option<String>,
    },

    /// Change a game or record its final score
    Update {
        /// The game to change
        id: i64,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        opponent: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        /// Final score, "<ours> - <theirs>"
        #[arg(long)]
        score: Option<String>,
    },

    /// Delete a game and its statistics
    Remove {
        /// The game to delete
        id: i64,
    },

    /// Show a game with every player's statistics
    Show {
        /// The game to show
        id: i64,
    },

    /// List games, most recent first
    List {
        /// Only games for this squad
        #[arg(long)]
        squad: Option<i64>,
    },

    /// Record one player's statistics for a game
    Stats {
        #[arg(long)]
        player: i64,

        #[arg(long)]
        game: i64,

        /// The player did not play
        #[arg(long)]
        absent: bool,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        tackles: i32,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        passes: i32,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        tries: i32,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        kicks: i32,

        /// Overall rating; calculated from the four skills when absent
        #[arg(long, allow_negative_numbers = true)]
        rating: Option<i32>,
    },

    /// List one player's statistics across games
    PlayerStats {
        /// The player
        player: i64,
    },
}

/// A game with its statistics, for display.
#[derive(Debug, Serialize)]
struct GameView {
    game: Game,
    stats: Vec<GameStats>,
}

impl GameView {
    fn render(&self) -> String {
        format!(
            "{}\n{}",
            games_table(std::slice::from_ref(&self.game)),
            stats_table(&self.stats)
        )
    }
}

impl GameCommand {
    pub fn run(self, context: &mut Context) -> Result<(), ApiError> {
        let actor: AuthenticatedActor = context.login()?;
        let persistence = &mut context.persistence;
        let today = context.today;
        let response: WriteResponse = match self {
            Self::Add {
                date,
                opponent,
                venue,
                squad,
                score,
            } => {
                let request: ScheduleGameRequest = ScheduleGameRequest {
                    date: Some(value_or_prompt(date, "Date (dd/MM/yyyy)")?),
                    opponent: value_or_prompt(opponent, "Opponent")?,
                    venue: value_or_prompt(venue, "Venue")?,
                    squad_id: Some(squad),
                    final_score: score,
                };
                games::schedule_game(persistence, request, &actor, today)?
            }
            Self::Update {
                id,
                date,
                opponent,
                venue,
                score,
            } => games::update_game(
                persistence,
                UpdateGameRequest {
                    game_id: id,
                    date,
                    opponent,
                    venue,
                    final_score: score,
                },
                &actor,
                today,
            )?,
            Self::Remove { id } => games::delete_game(persistence, id, &actor)?,
            Self::Stats {
                player,
                game,
                absent,
                tackles,
                passes,
                tries,
                kicks,
                rating,
            } => games::record_game_stats(
                persistence,
                RecordGameStatsRequest {
                    player_id: player,
                    game_id: game,
                    attended: !absent,
                    tackles,
                    passes,
                    tries,
                    kicks,
                    overall_rating: rating,
                },
                &actor,
            )?,
            Self::Show { id } => {
                let view: GameView = GameView {
                    game: games::get_game(persistence, id, &actor)?,
                    stats: games::list_game_stats(persistence, id, &actor)?,
                };
                return context.output.show(&view, || view.render());
            }
            Self::List { squad } => {
                let found: Vec<Game> = games::list_games(persistence, squad, &actor)?;
                return context
                    .output
                    .show(&found, || games_table(&found).to_string());
            }
            Self::PlayerStats { player } => {
                let found: Vec<GameStats> = games::list_player_stats(persistence, player, &actor)?;
                return context
                    .output
                    .show(&found, || stats_table(&found).to_string());
            }
        };
        context.report_write(&response)
    }
}
