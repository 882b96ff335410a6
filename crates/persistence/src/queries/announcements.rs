// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::Announcement;
use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::AnnouncementRow;
use crate::diesel_schema::announcements;
use crate::error::PersistenceError;

/// Retrieves an announcement by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the announcement is not found.
pub fn get_announcement(
    conn: &mut SqliteConnection,
    announcement_id: i64,
) -> Result<Option<Announcement>, PersistenceError> {
    announcements::table
        .find(announcement_id)
        .select(AnnouncementRow::as_select())
        .first(conn)
        .optional()?
        .map(AnnouncementRow::into_announcement)
        .transpose()
}

/// Lists announcements, newest first.
///
/// When `recipient` is given only announcements addressed to that
/// category are returned. `important_only` keeps only flagged ones.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_announcements(
    conn: &mut SqliteConnection,
    recipient: Option<&str>,
    important_only: bool,
) -> Result<Vec<Announcement>, PersistenceError> {
    let mut query = announcements::table
        .select(AnnouncementRow::as_select())
        .order((
            announcements::sent_date.desc(),
            announcements::announcement_id.desc(),
        ))
        .into_boxed();
    if let Some(recipient) = recipient {
        query = query.filter(announcements::recipient.eq(recipient));
    }
    if important_only {
        query = query.filter(announcements::is_important.eq(1));
    }

    query
        .load::<AnnouncementRow>(conn)?
        .into_iter()
        .map(AnnouncementRow::into_announcement)
        .collect()
}
