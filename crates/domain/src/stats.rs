// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived statistics computed from already-loaded records.
//!
//! Nothing here mutates the records it reads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::game::{Game, GameOutcome, GameStats};
use crate::training::TrainingAttendance;

/// Returns `present / total * 100`, or 0.0 when there are no records.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn attendance_rate<I>(flags: I) -> f64
where
    I: IntoIterator<Item = bool>,
{
    let mut total: usize = 0;
    let mut present: usize = 0;
    for flag in flags {
        total += 1;
        if flag {
            present += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    present as f64 / total as f64 * 100.0
}

/// Percentage of training sessions marked present.
#[must_use]
pub fn training_attendance_rate(records: &[TrainingAttendance]) -> f64 {
    attendance_rate(records.iter().map(|r| r.present))
}

/// Percentage of games attended.
#[must_use]
pub fn game_attendance_rate(stats: &[GameStats]) -> f64 {
    attendance_rate(stats.iter().map(|s| s.attended))
}

/// Mean overall rating across attended games only.
///
/// Returns 0.0 when the list is empty or no game was attended.
#[must_use]
pub fn overall_skill_rating(stats: &[GameStats]) -> f64 {
    mean_attended_rating(stats.iter())
}

#[allow(clippy::cast_precision_loss)]
fn mean_attended_rating<'a>(stats: impl Iterator<Item = &'a GameStats>) -> f64 {
    let (sum, count): (u64, u64) = stats
        .filter(|s| s.attended)
        .fold((0, 0), |(sum, count), s| {
            (sum + u64::from(s.overall_rating()), count + 1)
        });
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}

/// Overall skill rating for each of `player_ids`, from a pool of stats.
///
/// Players with no attended games rate 0.0.
#[must_use]
pub fn squad_skill_ratings<'a, I>(player_ids: I, stats: &[GameStats]) -> BTreeMap<i64, f64>
where
    I: IntoIterator<Item = &'a i64>,
{
    player_ids
        .into_iter()
        .map(|player_id| {
            let rating: f64 =
                mean_attended_rating(stats.iter().filter(|s| s.player_id == *player_id));
            (*player_id, rating)
        })
        .collect()
}

/// A squad's results.
///
/// Games without a well-formed final score are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SquadRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SquadRecord {
    #[must_use]
    pub fn from_games(games: &[Game]) -> Self {
        let mut record: Self = Self::default();
        for outcome in games.iter().filter_map(Game::outcome) {
            match outcome {
                GameOutcome::Win => record.wins += 1,
                GameOutcome::Loss => record.losses += 1,
                GameOutcome::Draw => record.draws += 1,
            }
        }
        record
    }

    /// Number of games with a counted result.
    #[must_use]
    pub const fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl std::fmt::Display for SquadRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "W{} L{} D{}", self.wins, self.losses, self.draws)
    }
}

/// Running totals for one player across attended games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerTotals {
    pub games_attended: u32,
    pub tackles: u32,
    pub passes: u32,
    pub tries: u32,
    pub kicks: u32,
}

impl PlayerTotals {
    #[must_use]
    pub fn from_stats(stats: &[GameStats]) -> Self {
        stats
            .iter()
            .filter(|s| s.attended)
            .fold(Self::default(), |mut totals, s| {
                totals.games_attended += 1;
                totals.tackles += u32::from(s.tackles());
                totals.passes += u32::from(s.passes());
                totals.tries += u32::from(s.tries());
                totals.kicks += u32::from(s.kicks());
                totals
            })
    }
}
