// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service operations.
//!
//! Every operation takes the store explicitly, checks the actor's role,
//! validates the entity, checks that referenced records exist, and only
//! then writes.

pub mod announcements;
pub mod games;
pub mod members;
pub mod squads;
pub mod training;
pub mod users;

use clubhouse_domain::parse_input_date;
use time::Date;

use crate::error::{ApiError, translate_domain_error};

/// Parses an optional user-entered date.
///
/// Absent or blank input yields `None`, leaving validation to report the
/// missing value.
pub(crate) fn parse_date(field: &str, value: Option<&str>) -> Result<Option<Date>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_input_date(text).map(Some).map_err(|e| match translate_domain_error(e) {
            ApiError::InvalidInput { message, .. } => ApiError::InvalidInput {
                field: field.to_string(),
                message,
            },
            other => other,
        }),
    }
}

/// Drops blank optional text.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fails with `ResourceNotFound` unless `exists`.
pub(crate) fn require_exists(exists: bool, resource_type: &str, id: i64) -> Result<(), ApiError> {
    if exists {
        Ok(())
    } else {
        Err(ApiError::not_found(resource_type, id))
    }
}
