// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{ALL_MEMBERS, Announcement, validate_announcement};
use clubhouse_persistence::Persistence;
use time::Date;
use tracing::info;

use super::{optional_text, require_exists};
use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, persistence_failure};
use crate::request_response::{SendAnnouncementRequest, WriteResponse};

/// Sends an announcement dated `today`, signed by the logged-in user.
///
/// # Errors
///
/// Returns an error if the announcement breaks any validation rule or the
/// store fails.
pub fn send_announcement(
    persistence: &mut Persistence,
    request: SendAnnouncementRequest,
    actor: &AuthenticatedActor,
    today: Date,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_announcements(actor)?;

    let recipient: String =
        optional_text(request.recipient).unwrap_or_else(|| ALL_MEMBERS.to_string());
    let mut announcement: Announcement = Announcement::new(
        request.title,
        request.content,
        format!("{} ({})", actor.username, actor.role),
        recipient,
        today,
    );
    announcement.important = request.important;

    validate_announcement(&announcement)?;

    let announcement_id: i64 = persistence
        .save_announcement(&announcement)
        .map_err(persistence_failure("save announcement"))?;

    info!(announcement_id, recipient = %announcement.recipient, "Announcement sent");
    Ok(WriteResponse::new(
        announcement_id,
        format!(
            "Announcement '{}' sent to {}",
            announcement.title, announcement.recipient
        ),
    ))
}

/// Lists announcements, newest first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_announcements(
    persistence: &mut Persistence,
    recipient: Option<&str>,
    important_only: bool,
    actor: &AuthenticatedActor,
) -> Result<Vec<Announcement>, ApiError> {
    AuthorizationService::authorize_view(actor)?;
    persistence
        .list_announcements(recipient, important_only)
        .map_err(persistence_failure("list announcements"))
}

/// Deletes an announcement.
///
/// # Errors
///
/// Returns an error if the announcement does not exist or the store fails.
pub fn delete_announcement(
    persistence: &mut Persistence,
    announcement_id: i64,
    actor: &AuthenticatedActor,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_announcements(actor)?;

    let deleted: bool = persistence
        .delete_announcement(announcement_id)
        .map_err(persistence_failure("delete announcement"))?;
    require_exists(deleted, "Announcement", announcement_id)?;

    info!(announcement_id, actor = %actor.username, "Announcement deleted");
    Ok(WriteResponse::new(
        announcement_id,
        format!("Announcement {announcement_id} deleted"),
    ))
}
