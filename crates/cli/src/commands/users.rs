// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Subcommand;
use clubhouse_api::handlers::users;
use clubhouse_api::{ApiError, AuthenticatedActor, CreateUserRequest, UserSummary, WriteResponse};

use super::Context;
use crate::render::users_table;
use crate::session::secret_or_prompt;

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a login account. A missing password is prompted for.
    Add {
        /// Login name for the new account (3-20 letters or digits)
        name: String,

        /// "Secretary" or "Coach"
        #[arg(long)]
        role: String,

        /// The club member this account belongs to
        #[arg(long)]
        member: Option<i64>,

        /// Initial password for the new account
        #[arg(long)]
        initial_password: Option<String>,
    },

    /// List login accounts
    List,

    /// Change an account's role or linked member
    Update {
        /// The account to change
        id: i64,

        /// "Secretary" or "Coach"
        #[arg(long)]
        role: String,

        #[arg(long)]
        member: Option<i64>,
    },

    /// Delete a login account
    Remove {
        /// The account to delete
        id: i64,
    },
}

impl UserCommand {
    pub fn run(self, context: &mut Context) -> Result<(), ApiError> {
        let actor: AuthenticatedActor = context.login()?;
        let response: WriteResponse = match self {
            Self::Add {
                name,
                role,
                member,
                initial_password,
            } => {
                let password: String =
                    secret_or_prompt(initial_password, &format!("Password for {name}"))?;
                users::create_user(
                    &mut context.persistence,
                    &context.verifier,
                    CreateUserRequest {
                        username: name,
                        password,
                        role,
                        member_id: member,
                    },
                    &actor,
                )?
            }
            Self::Update { id, role, member } => {
                users::update_user(&mut context.persistence, id, &role, member, &actor)?
            }
            Self::Remove { id } => users::delete_user(&mut context.persistence, id, &actor)?,
            Self::List => {
                let found: Vec<UserSummary> = users::list_users(&mut context.persistence, &actor)?;
                return context
                    .output
                    .show(&found, || users_table(&found).to_string());
            }
        };
        context.report_write(&response)
    }
}
