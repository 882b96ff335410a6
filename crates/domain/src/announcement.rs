// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// Recipient category meaning every member of the club.
pub const ALL_MEMBERS: &str = "All Members";

/// A message sent to a category of members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub announcement_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub sent_date: Option<Date>,
    /// Who sent it (a username or member name).
    pub sender: String,
    /// The recipient category, e.g. `"All Members"`, `"Players"`, or a squad name.
    pub recipient: String,
    pub important: bool,
}

impl Announcement {
    /// Creates a new unsaved announcement sent on `sent_date`.
    ///
    /// Callers pass today's date; the sent date is never left unset by
    /// this constructor.
    #[must_use]
    pub const fn new(
        title: String,
        content: String,
        sender: String,
        recipient: String,
        sent_date: Date,
    ) -> Self {
        Self {
            announcement_id: None,
            title,
            content,
            sent_date: Some(sent_date),
            sender,
            recipient,
            important: false,
        }
    }
}
