// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// The role a user logs in with.
///
/// Roles gate which commands a user may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Club administration: members, squads, fixtures, users.
    Secretary,
    /// Coaching: training sessions, attendance, game statistics.
    Coach,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Secretary => "Secretary",
            Self::Coach => "Coach",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    /// Parses a role. Matching is exact: `"secretary"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Secretary" => Ok(Self::Secretary),
            "Coach" => Ok(Self::Coach),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate login account, before its password is hashed and stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: Option<i64>,
    pub username: String,
    /// The plain-text password. Only held long enough to validate and hash.
    pub password: String,
    /// `"Secretary"` or `"Coach"`.
    pub role: String,
    /// The member this account belongs to, if any.
    pub member_id: Option<i64>,
}

impl User {
    #[must_use]
    pub const fn new(username: String, password: String, role: String) -> Self {
        Self {
            user_id: None,
            username,
            password,
            role,
            member_id: None,
        }
    }
}
