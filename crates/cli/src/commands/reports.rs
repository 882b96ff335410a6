// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Subcommand;
use clubhouse_api::{
    ApiError, AuthenticatedActor, player_performance_report, squad_summary_report,
    training_attendance_report, write_report_csv,
};
use clubhouse_domain::Report;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

use super::Context;
use crate::render::report_text;

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// One player's games, ratings, and attendance
    Player {
        /// The player
        id: i64,

        /// Write the table to this CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Every player in a squad, with the squad's record and coaching
    Squad {
        /// The squad
        id: i64,

        /// Write the table to this CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Training attendance for every player in a squad
    Training {
        /// The squad
        id: i64,

        /// Write the table to this CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn export_csv(report: &Report, path: &Path) -> Result<(), ApiError> {
    let file: File = File::create(path).map_err(|e| ApiError::Internal {
        message: format!("Failed to create {}: {e}", path.display()),
    })?;
    write_report_csv(report, file)?;
    info!(path = %path.display(), rows = report.rows.len(), "Report exported");
    println!("{} written to {}", report.title, path.display());
    Ok(())
}

impl ReportCommand {
    pub fn run(self, context: &mut Context) -> Result<(), ApiError> {
        let actor: AuthenticatedActor = context.login()?;
        let persistence = &mut context.persistence;
        let today = context.today;
        let (report, csv) = match self {
            Self::Player { id, csv } => (
                player_performance_report(persistence, id, &actor, today)?,
                csv,
            ),
            Self::Squad { id, csv } => (squad_summary_report(persistence, id, &actor, today)?, csv),
            Self::Training { id, csv } => (
                training_attendance_report(persistence, id, &actor, today)?,
                csv,
            ),
        };
        match csv {
            Some(path) => export_csv(&report, &path),
            None => context.output.show(&report, || report_text(&report)),
        }
    }
}
