// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{Announcement, format_iso_date};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::announcements;
use crate::error::PersistenceError;

/// Inserts an announcement.
///
/// # Returns
///
/// The new announcement ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_announcement(
    conn: &mut SqliteConnection,
    announcement: &Announcement,
) -> Result<i64, PersistenceError> {
    let sent_date: String = announcement.sent_date.map(format_iso_date).ok_or_else(|| {
        PersistenceError::ConstraintViolation(String::from("announcements.sent_date is required"))
    })?;

    diesel::insert_into(announcements::table)
        .values((
            announcements::title.eq(&announcement.title),
            announcements::content.eq(&announcement.content),
            announcements::sent_date.eq(&sent_date),
            announcements::sender.eq(&announcement.sender),
            announcements::recipient.eq(&announcement.recipient),
            announcements::is_important.eq(i32::from(announcement.important)),
        ))
        .execute(conn)?;
    let announcement_id: i64 = conn.get_last_insert_rowid()?;

    info!(
        announcement_id,
        recipient = %announcement.recipient,
        "Sent announcement"
    );
    Ok(announcement_id)
}

/// Deletes an announcement.
///
/// # Returns
///
/// `false` if no such announcement exists.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_announcement(
    conn: &mut SqliteConnection,
    announcement_id: i64,
) -> Result<bool, PersistenceError> {
    let rows_affected: usize =
        diesel::delete(announcements::table.find(announcement_id)).execute(conn)?;
    Ok(rows_affected > 0)
}
