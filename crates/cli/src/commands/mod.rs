// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and their dispatch.
//!
//! Every command except `bootstrap` logs in first. Roles are checked by the
//! service layer, not here.

mod announcements;
mod games;
mod members;
mod reports;
mod squads;
mod training;
mod users;

use clap::Subcommand;
use clubhouse_api::handlers::users as user_handlers;
use clubhouse_api::{
    ApiError, AuthenticatedActor, AuthenticationService, BcryptVerifier, ChangePasswordRequest,
    WriteResponse,
};
use clubhouse_persistence::Persistence;
use time::Date;

use crate::render::Output;
use crate::session::{Session, secret_or_prompt};

pub use announcements::AnnouncementCommand;
pub use games::GameCommand;
pub use members::MemberCommand;
pub use reports::ReportCommand;
pub use squads::SquadCommand;
pub use training::{TrainingCommand, record_roster_attendance};
pub use users::UserCommand;

/// Everything a command needs: the store, the login, and where to print.
pub struct Context {
    pub persistence: Persistence,
    pub session: Session,
    pub verifier: BcryptVerifier,
    pub output: Output,
    pub today: Date,
}

impl Context {
    /// Logs in with the session's credentials.
    pub fn login(&mut self) -> Result<AuthenticatedActor, ApiError> {
        let (username, password) = self.session.credentials()?;
        AuthenticationService::login(&mut self.persistence, &self.verifier, &username, &password)
            .map_err(ApiError::from)
    }

    /// Prints the outcome of a write.
    pub fn report_write(&self, response: &WriteResponse) -> Result<(), ApiError> {
        self.output.message(response)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the first Secretary account on a new database
    Bootstrap,

    /// Change your own password
    Passwd {
        /// The new password. Prompted for when absent.
        #[arg(long)]
        new_password: Option<String>,
    },

    /// Add, change, and list club members
    #[command(subcommand)]
    Member(MemberCommand),

    /// Manage squads, their players, and their coaches
    #[command(subcommand)]
    Squad(SquadCommand),

    /// Schedule games, record results, and record player statistics
    #[command(subcommand)]
    Game(GameCommand),

    /// Schedule training sessions and record attendance
    #[command(subcommand)]
    Training(TrainingCommand),

    /// Send and read club announcements
    #[command(subcommand)]
    Announcement(AnnouncementCommand),

    /// Manage login accounts
    #[command(subcommand)]
    User(UserCommand),

    /// Produce performance and attendance reports
    #[command(subcommand)]
    Report(ReportCommand),
}

impl Command {
    pub fn run(self, context: &mut Context) -> Result<(), ApiError> {
        match self {
            Self::Bootstrap => {
                let (username, password) = context.session.credentials()?;
                let response: WriteResponse = user_handlers::bootstrap_secretary(
                    &mut context.persistence,
                    &context.verifier,
                    username,
                    password,
                )?;
                context.report_write(&response)
            }
            Self::Passwd { new_password } => {
                let actor: AuthenticatedActor = context.login()?;
                let (_, current_password) = context.session.credentials()?;
                let new_password: String = secret_or_prompt(new_password, "New password")?;
                let response: WriteResponse = user_handlers::change_password(
                    &mut context.persistence,
                    &context.verifier,
                    ChangePasswordRequest {
                        current_password,
                        new_password,
                    },
                    &actor,
                )?;
                context.report_write(&response)
            }
            Self::Member(command) => command.run(context),
            Self::Squad(command) => command.run(context),
            Self::Game(command) => command.run(context),
            Self::Training(command) => command.run(context),
            Self::Announcement(command) => command.run(context),
            Self::User(command) => command.run(context),
            Self::Report(command) => command.run(context),
        }
    }
}
