// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Subcommand;
use clubhouse_api::handlers::announcements;
use clubhouse_api::{ApiError, AuthenticatedActor, SendAnnouncementRequest, WriteResponse};
use clubhouse_domain::Announcement;

use super::Context;
use crate::render::{announcements_table, announcements_text};
use crate::session::value_or_prompt;

#[derive(Debug, Subcommand)]
pub enum AnnouncementCommand {
    /// Send an announcement. A missing title or content is prompted for.
    Send {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Who it is for; everyone when absent
        #[arg(long)]
        to: Option<String>,

        #[arg(long)]
        important: bool,
    },

    /// List announcements, newest first
    List {
        /// Only announcements for this recipient
        #[arg(long)]
        to: Option<String>,

        /// Only important announcements
        #[arg(long)]
        important: bool,

        /// Print each announcement in full
        #[arg(long)]
        full: bool,
    },

    /// Delete an announcement
    Remove {
        /// The announcement to delete
        id: i64,
    },
}

impl AnnouncementCommand {
    pub fn run(self, context: &mut Context) -> Result<(), ApiError> {
        let actor: AuthenticatedActor = context.login()?;
        let response: WriteResponse = match self {
            Self::Send {
                title,
                content,
                to,
                important,
            } => {
                let request: SendAnnouncementRequest = SendAnnouncementRequest {
                    title: value_or_prompt(title, "Title")?,
                    content: value_or_prompt(content, "Content")?,
                    recipient: to,
                    important,
                };
                announcements::send_announcement(
                    &mut context.persistence,
                    request,
                    &actor,
                    context.today,
                )?
            }
            Self::Remove { id } => {
                announcements::delete_announcement(&mut context.persistence, id, &actor)?
            }
            Self::List {
                to,
                important,
                full,
            } => {
                let found: Vec<Announcement> = announcements::list_announcements(
                    &mut context.persistence,
                    to.as_deref(),
                    important,
                    &actor,
                )?;
                return context.output.show(&found, || {
                    if full {
                        announcements_text(&found)
                    } else {
                        announcements_table(&found).to_string()
                    }
                });
            }
        };
        context.report_write(&response)
    }
}
