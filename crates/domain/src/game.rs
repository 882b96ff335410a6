// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::DomainError;

/// Separator between the two numbers of a final score.
pub const SCORE_SEPARATOR: &str = " - ";

/// Highest value a skill or rating may take.
pub const MAX_SKILL_VALUE: u8 = 10;

/// A parsed `"<ours> - <theirs>"` final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub ours: u32,
    pub theirs: u32,
}

impl FinalScore {
    /// Returns `true` if `value` has the form `"<digits> - <digits>"`.
    ///
    /// Any run of digits is accepted, however long.
    #[must_use]
    pub fn is_well_formed(value: &str) -> bool {
        value
            .split_once(SCORE_SEPARATOR)
            .is_some_and(|(ours, theirs)| is_digits(ours) && is_digits(theirs))
    }

    /// Parses a score of the form `"<int> - <int>"`.
    ///
    /// Returns `None` for anything else, including signs, extra whitespace,
    /// and numbers that do not fit in a `u32`. Such a game simply has no
    /// outcome.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let (ours, theirs) = value.split_once(SCORE_SEPARATOR)?;
        Some(Self {
            ours: parse_digits(ours)?,
            theirs: parse_digits(theirs)?,
        })
    }

    /// Returns the outcome from the club's point of view.
    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        if self.ours > self.theirs {
            GameOutcome::Win
        } else if self.ours < self.theirs {
            GameOutcome::Loss
        } else {
            GameOutcome::Draw
        }
    }
}

impl std::fmt::Display for FinalScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SCORE_SEPARATOR}{}", self.ours, self.theirs)
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn parse_digits(value: &str) -> Option<u32> {
    if !is_digits(value) {
        return None;
    }
    value.parse::<u32>().ok()
}

/// The result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

impl GameOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Draw => "Draw",
        }
    }
}

/// A fixture played (or to be played) by a squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: Option<i64>,
    pub date: Option<Date>,
    pub opponent: String,
    /// `"<ours> - <theirs>"`, absent until the game has been played.
    pub final_score: Option<String>,
    pub venue: String,
    pub squad_id: Option<i64>,
}

impl Game {
    /// Creates a new unsaved game with no result.
    #[must_use]
    pub const fn new(
        date: Option<Date>,
        opponent: String,
        venue: String,
        squad_id: Option<i64>,
    ) -> Self {
        Self {
            game_id: None,
            date,
            opponent,
            final_score: None,
            venue,
            squad_id,
        }
    }

    /// Returns the parsed final score, if present and well-formed.
    #[must_use]
    pub fn score(&self) -> Option<FinalScore> {
        self.final_score.as_deref().and_then(FinalScore::parse)
    }

    /// Returns the outcome, or `None` when the score is missing or unparsable.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.score().map(|s| s.outcome())
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome() == Some(GameOutcome::Win)
    }

    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.outcome() == Some(GameOutcome::Loss)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.outcome() == Some(GameOutcome::Draw)
    }
}

/// One of the four recorded skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    Tackles,
    Passes,
    Tries,
    Kicks,
}

impl Skill {
    /// Skills in tie-break order.
    pub const ALL: [Self; 4] = [Self::Tackles, Self::Passes, Self::Tries, Self::Kicks];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tackles => "Tackles",
            Self::Passes => "Passes",
            Self::Tries => "Tries",
            Self::Kicks => "Kicks",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Checks a skill or rating value and narrows it to `u8`.
///
/// # Errors
///
/// Returns `DomainError::SkillOutOfRange` if `value` is not in 0..=10.
pub fn checked_skill(field: &'static str, value: i32) -> Result<u8, DomainError> {
    match u8::try_from(value) {
        Ok(v) if v <= MAX_SKILL_VALUE => Ok(v),
        _ => Err(DomainError::SkillOutOfRange { field, value }),
    }
}

/// One player's performance in one game.
///
/// Skill setters reject values outside 0..=10 immediately. When `attended`
/// is false the skill values carry no meaning and are left at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub stats_id: Option<i64>,
    pub player_id: i64,
    pub game_id: i64,
    tackles: u8,
    passes: u8,
    tries: u8,
    kicks: u8,
    overall_rating: u8,
    pub attended: bool,
}

impl GameStats {
    /// Creates a zeroed stats record for a (player, game) pair.
    #[must_use]
    pub const fn new(player_id: i64, game_id: i64, attended: bool) -> Self {
        Self {
            stats_id: None,
            player_id,
            game_id,
            tackles: 0,
            passes: 0,
            tries: 0,
            kicks: 0,
            overall_rating: 0,
            attended,
        }
    }

    /// Builds a stats record from stored values, range-checking every skill.
    ///
    /// The overall rating is taken as stored, not recomputed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SkillOutOfRange` for the first value outside 0..=10.
    #[allow(clippy::too_many_arguments)]
    pub fn with_values(
        stats_id: Option<i64>,
        player_id: i64,
        game_id: i64,
        tackles: i32,
        passes: i32,
        tries: i32,
        kicks: i32,
        overall_rating: i32,
        attended: bool,
    ) -> Result<Self, DomainError> {
        let mut stats: Self = Self::new(player_id, game_id, attended);
        stats.stats_id = stats_id;
        stats.set_tackles(tackles)?;
        stats.set_passes(passes)?;
        stats.set_tries(tries)?;
        stats.set_kicks(kicks)?;
        stats.set_overall_rating(overall_rating)?;
        Ok(stats)
    }

    #[must_use]
    pub const fn tackles(&self) -> u8 {
        self.tackles
    }

    #[must_use]
    pub const fn passes(&self) -> u8 {
        self.passes
    }

    #[must_use]
    pub const fn tries(&self) -> u8 {
        self.tries
    }

    #[must_use]
    pub const fn kicks(&self) -> u8 {
        self.kicks
    }

    #[must_use]
    pub const fn overall_rating(&self) -> u8 {
        self.overall_rating
    }

    /// Returns the value recorded for one skill.
    #[must_use]
    pub const fn skill(&self, skill: Skill) -> u8 {
        match skill {
            Skill::Tackles => self.tackles,
            Skill::Passes => self.passes,
            Skill::Tries => self.tries,
            Skill::Kicks => self.kicks,
        }
    }

    /// # Errors
    ///
    /// Returns `DomainError::SkillOutOfRange` if `value` is not in 0..=10.
    pub fn set_tackles(&mut self, value: i32) -> Result<(), DomainError> {
        self.tackles = checked_skill("Tackles", value)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DomainError::SkillOutOfRange` if `value` is not in 0..=10.
    pub fn set_passes(&mut self, value: i32) -> Result<(), DomainError> {
        self.passes = checked_skill("Passes", value)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DomainError::SkillOutOfRange` if `value` is not in 0..=10.
    pub fn set_tries(&mut self, value: i32) -> Result<(), DomainError> {
        self.tries = checked_skill("Tries", value)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DomainError::SkillOutOfRange` if `value` is not in 0..=10.
    pub fn set_kicks(&mut self, value: i32) -> Result<(), DomainError> {
        self.kicks = checked_skill("Kicks", value)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DomainError::SkillOutOfRange` if `value` is not in 0..=10.
    pub fn set_overall_rating(&mut self, value: i32) -> Result<(), DomainError> {
        self.overall_rating = checked_skill("Overall rating", value)?;
        Ok(())
    }

    /// Sets the overall rating to the rounded mean of the four skills and
    /// returns it.
    ///
    /// The rating is not kept in sync with later skill changes; call this
    /// again after changing a skill.
    pub fn calculate_overall_rating(&mut self) -> u8 {
        let sum: u16 = u16::from(self.tackles)
            + u16::from(self.passes)
            + u16::from(self.tries)
            + u16::from(self.kicks);
        // round(sum / 4.0) with halves rounded up
        self.overall_rating = u8::try_from((sum + 2) / 4).unwrap_or(u8::MAX);
        self.overall_rating
    }

    /// Returns the highest-valued skill; ties go to the earlier skill in
    /// Tackles, Passes, Tries, Kicks order.
    #[must_use]
    pub fn strongest_skill(&self) -> Skill {
        let mut best: Skill = Skill::Tackles;
        for skill in Skill::ALL {
            if self.skill(skill) > self.skill(best) {
                best = skill;
            }
        }
        best
    }

    /// Returns the lowest-valued skill; ties go to the earlier skill in
    /// Tackles, Passes, Tries, Kicks order.
    #[must_use]
    pub fn weakest_skill(&self) -> Skill {
        let mut worst: Skill = Skill::Tackles;
        for skill in Skill::ALL {
            if self.skill(skill) < self.skill(worst) {
                worst = skill;
            }
        }
        worst
    }
}
