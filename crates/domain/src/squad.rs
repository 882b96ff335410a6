// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The age grade that is exempt from the junior coaching minimum.
pub const EXEMPT_JUNIOR_GRADE: &str = "U18";

/// Coaches required for junior squads other than U18.
pub const JUNIOR_MINIMUM_COACHES: usize = 2;

/// Coaches required for U18 and senior squads.
pub const STANDARD_MINIMUM_COACHES: usize = 3;

/// A squad of players and the coaches assigned to it.
///
/// Roster and coaching links are held as member identifiers; the members
/// themselves live in the store and are resolved on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squad {
    pub squad_id: Option<i64>,
    pub name: String,
    /// `"U<n>"` for junior grades, or `"Senior"`.
    pub age_grade: String,
    pub player_ids: BTreeSet<i64>,
    pub coach_ids: BTreeSet<i64>,
}

impl Squad {
    /// Creates a new unsaved squad with no players or coaches.
    #[must_use]
    pub const fn new(name: String, age_grade: String) -> Self {
        Self {
            squad_id: None,
            name,
            age_grade,
            player_ids: BTreeSet::new(),
            coach_ids: BTreeSet::new(),
        }
    }

    /// Returns `true` if the age grade is a junior (`U...`) grade.
    #[must_use]
    pub fn is_junior(&self) -> bool {
        self.age_grade.starts_with('U')
    }

    /// Returns the number of coaches this squad needs to be adequately staffed.
    ///
    /// Junior squads need two, except U18 which, like senior squads, needs three.
    #[must_use]
    pub fn minimum_coaches(&self) -> usize {
        if self.is_junior() && self.age_grade != EXEMPT_JUNIOR_GRADE {
            JUNIOR_MINIMUM_COACHES
        } else {
            STANDARD_MINIMUM_COACHES
        }
    }

    /// Returns `true` if the squad currently has enough coaches.
    ///
    /// Evaluated from the live coach set on every call. Under-staffed squads
    /// are allowed to exist; this only flags them.
    #[must_use]
    pub fn has_minimum_coaches(&self) -> bool {
        self.coach_ids.len() >= self.minimum_coaches()
    }

    /// Returns how many more coaches are needed (0 when adequately staffed).
    #[must_use]
    pub fn coaches_needed(&self) -> usize {
        self.minimum_coaches().saturating_sub(self.coach_ids.len())
    }

    /// Adds a player to the roster. Returns `false` if already present.
    pub fn add_player(&mut self, player_id: i64) -> bool {
        self.player_ids.insert(player_id)
    }

    /// Removes a player from the roster. Returns `false` if absent.
    pub fn remove_player(&mut self, player_id: i64) -> bool {
        self.player_ids.remove(&player_id)
    }

    /// Assigns a coach. Returns `false` if already assigned.
    pub fn add_coach(&mut self, coach_id: i64) -> bool {
        self.coach_ids.insert(coach_id)
    }

    /// Unassigns a coach. Returns `false` if not assigned.
    pub fn remove_coach(&mut self, coach_id: i64) -> bool {
        self.coach_ids.remove(&coach_id)
    }
}
