// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;

use crate::dates::age_on;

/// Player-specific data attached to a member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// The playing position (one of the fifteen named positions).
    pub position: String,
    /// The squad this player belongs to, if any.
    pub squad_id: Option<i64>,
    /// Another member to contact in an emergency. Never the player.
    pub emergency_contact_id: Option<i64>,
    /// Free-text medical conditions.
    pub medical_conditions: Option<String>,
}

/// Coach-specific data attached to a member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoachProfile {
    /// Free-text coaching qualifications.
    pub qualifications: String,
    /// The squads this coach is assigned to.
    pub squad_ids: BTreeSet<i64>,
}

/// The specialization of a member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemberKind {
    Player(PlayerProfile),
    Coach(CoachProfile),
    Secretary,
    /// A member with no playing, coaching, or administrative role.
    #[default]
    General,
}

impl MemberKind {
    /// Returns the stored label for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Player(_) => "Player",
            Self::Coach(_) => "Coach",
            Self::Secretary => "Secretary",
            Self::General => "Member",
        }
    }
}

/// A club member.
///
/// `member_id` is `None` until the member is first saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub kind: MemberKind,
}

impl Member {
    /// Creates a new unsaved member with no contact details.
    #[must_use]
    pub const fn new(
        first_name: String,
        last_name: String,
        date_of_birth: Option<Date>,
        kind: MemberKind,
    ) -> Self {
        Self {
            member_id: None,
            first_name,
            last_name,
            date_of_birth,
            email: None,
            phone: None,
            address: None,
            kind,
        }
    }

    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the member's age on the given date, if a birth date is known.
    #[must_use]
    pub fn age_on(&self, today: Date) -> Option<i32> {
        self.date_of_birth.map(|dob| age_on(dob, today))
    }

    /// Returns the player profile if this member is a player.
    #[must_use]
    pub const fn player(&self) -> Option<&PlayerProfile> {
        match &self.kind {
            MemberKind::Player(profile) => Some(profile),
            _ => None,
        }
    }

    /// Returns a mutable player profile if this member is a player.
    pub fn player_mut(&mut self) -> Option<&mut PlayerProfile> {
        match &mut self.kind {
            MemberKind::Player(profile) => Some(profile),
            _ => None,
        }
    }

    /// Returns the coach profile if this member is a coach.
    #[must_use]
    pub const fn coach(&self) -> Option<&CoachProfile> {
        match &self.kind {
            MemberKind::Coach(profile) => Some(profile),
            _ => None,
        }
    }

    /// Returns a mutable coach profile if this member is a coach.
    pub fn coach_mut(&mut self) -> Option<&mut CoachProfile> {
        match &mut self.kind {
            MemberKind::Coach(profile) => Some(profile),
            _ => None,
        }
    }

    /// Returns `true` if this member is a player.
    #[must_use]
    pub const fn is_player(&self) -> bool {
        matches!(self.kind, MemberKind::Player(_))
    }

    /// Returns `true` if this member is a coach.
    #[must_use]
    pub const fn is_coach(&self) -> bool {
        matches!(self.kind, MemberKind::Coach(_))
    }
}
