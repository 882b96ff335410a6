// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod render;
mod session;

#[cfg(test)]
mod tests;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use clubhouse_api::{ApiError, BcryptVerifier, persistence_failure};
use clubhouse_persistence::Persistence;
use std::path::PathBuf;
use time::OffsetDateTime;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::commands::{Command, Context};
use crate::render::Output;
use crate::session::Session;

/// Clubhouse - manage a rugby club's members, squads, fixtures, and training
#[derive(Parser, Debug)]
#[command(name = "clubhouse", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file
    #[arg(short, long, global = true, default_value = "clubhouse.db")]
    database: PathBuf,

    /// Login name. Prompted for when a command needs it.
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// Login password. Prompted for when a command needs it.
    #[arg(short, long, global = true)]
    password: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(self) -> Result<(), ApiError> {
        info!(database = %self.database.display(), "Opening database");
        let persistence: Persistence = Persistence::new_with_file(&self.database)
            .map_err(persistence_failure("open database"))?;

        let mut context: Context = Context {
            persistence,
            session: Session::new(self.username, self.password),
            verifier: BcryptVerifier::default(),
            output: Output::new(self.json),
            today: OffsetDateTime::now_utc().date(),
        };
        self.command.run(&mut context)
    }
}

/// Logs go to stderr so tables on stdout stay clean. `RUST_LOG` overrides
/// the verbosity flags.
fn init_tracing(level: LevelFilter) {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    if let Err(err) = args.run() {
        debug!(error = ?err, "Command failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
