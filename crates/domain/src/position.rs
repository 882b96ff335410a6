// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// One of the fifteen named rugby union positions.
///
/// The discriminant is the traditional shirt number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    LooseheadProp = 1,
    Hooker = 2,
    TightheadProp = 3,
    LeftLock = 4,
    RightLock = 5,
    BlindsideFlanker = 6,
    OpensideFlanker = 7,
    NumberEight = 8,
    ScrumHalf = 9,
    FlyHalf = 10,
    LeftWing = 11,
    InsideCentre = 12,
    OutsideCentre = 13,
    RightWing = 14,
    FullBack = 15,
}

impl Position {
    /// All positions in shirt-number order.
    pub const ALL: [Self; 15] = [
        Self::LooseheadProp,
        Self::Hooker,
        Self::TightheadProp,
        Self::LeftLock,
        Self::RightLock,
        Self::BlindsideFlanker,
        Self::OpensideFlanker,
        Self::NumberEight,
        Self::ScrumHalf,
        Self::FlyHalf,
        Self::LeftWing,
        Self::InsideCentre,
        Self::OutsideCentre,
        Self::RightWing,
        Self::FullBack,
    ];

    /// Returns the display name of this position.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LooseheadProp => "Loosehead Prop",
            Self::Hooker => "Hooker",
            Self::TightheadProp => "Tighthead Prop",
            Self::LeftLock => "Left Lock",
            Self::RightLock => "Right Lock",
            Self::BlindsideFlanker => "Blindside Flanker",
            Self::OpensideFlanker => "Openside Flanker",
            Self::NumberEight => "Number Eight",
            Self::ScrumHalf => "Scrum Half",
            Self::FlyHalf => "Fly Half",
            Self::LeftWing => "Left Wing",
            Self::InsideCentre => "Inside Centre",
            Self::OutsideCentre => "Outside Centre",
            Self::RightWing => "Right Wing",
            Self::FullBack => "Full Back",
        }
    }

    /// Returns the shirt number (1-15).
    #[must_use]
    pub const fn number(&self) -> u8 {
        *self as u8
    }

    /// Returns `true` for positions 1-8.
    #[must_use]
    pub const fn is_forward(&self) -> bool {
        self.number() <= 8
    }

    /// Returns `true` if `value` names one of the fifteen positions.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        value.parse::<Self>().is_ok()
    }
}

impl FromStr for Position {
    type Err = DomainError;

    /// Parses a position from its name (case-insensitive) or shirt number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::ALL
                .iter()
                .copied()
                .find(|p| p.number() == number)
                .ok_or_else(|| {
                    DomainError::InvalidPosition(format!(
                        "Shirt number must be between 1 and 15, got {number}"
                    ))
                });
        }
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidPosition(format!("Unknown position: {trimmed}")))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
