// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// The kinds of report the club can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    /// One row per game for a single player.
    PlayerPerformance,
    /// One row per player in a squad, plus the squad's record.
    SquadSummary,
    /// One row per player with their training attendance rate.
    TrainingAttendance,
}

impl ReportKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerPerformance => "Player Performance",
            Self::SquadSummary => "Squad Summary",
            Self::TrainingAttendance => "Training Attendance",
        }
    }
}

/// A point-in-time table of derived statistics.
///
/// Reports are computed on request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub kind: ReportKind,
    pub title: String,
    pub generated_on: Date,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Free-form summary lines shown under the table.
    pub summary: Vec<String>,
}

impl Report {
    #[must_use]
    pub fn new(kind: ReportKind, title: String, generated_on: Date, headers: &[&str]) -> Self {
        Self {
            kind,
            title,
            generated_on,
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
            summary: Vec::new(),
        }
    }

    /// Appends a row. Rows shorter than the header are padded with blanks.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        if row.len() < self.headers.len() {
            row.resize(self.headers.len(), String::new());
        }
        self.rows.push(row);
    }
}
