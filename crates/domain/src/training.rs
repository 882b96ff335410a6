// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// A training session held by a squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    pub training_id: Option<i64>,
    pub date: Option<Date>,
    pub squad_id: Option<i64>,
    pub focus_areas: String,
    pub coach_notes: Option<String>,
}

impl Training {
    /// Creates a new unsaved training session without notes.
    #[must_use]
    pub const fn new(date: Option<Date>, squad_id: Option<i64>, focus_areas: String) -> Self {
        Self {
            training_id: None,
            date,
            squad_id,
            focus_areas,
            coach_notes: None,
        }
    }
}

/// Whether one player attended one training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingAttendance {
    pub attendance_id: Option<i64>,
    pub player_id: i64,
    pub training_id: i64,
    pub present: bool,
    pub notes: Option<String>,
}

impl TrainingAttendance {
    #[must_use]
    pub const fn new(player_id: i64, training_id: i64, present: bool) -> Self {
        Self {
            attendance_id: None,
            player_id,
            training_id,
            present,
            notes: None,
        }
    }
}
