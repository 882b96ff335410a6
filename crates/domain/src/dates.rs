// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date storage and display formats.
//!
//! Dates are stored as ISO `yyyy-MM-dd` and displayed as `dd/MM/yyyy`.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::DomainError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Parses a stored ISO `yyyy-MM-dd` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid ISO date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses a date entered by a user.
///
/// Accepts the display format `dd/MM/yyyy` and the ISO format `yyyy-MM-dd`.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if neither format matches.
pub fn parse_input_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    if let Ok(date) = Date::parse(trimmed, DISPLAY_DATE) {
        return Ok(date);
    }
    Date::parse(trimmed, ISO_DATE).map_err(|_| DomainError::DateParseError {
        date_string: value.to_string(),
        error: String::from("expected dd/MM/yyyy or yyyy-MM-dd"),
    })
}

/// Formats a date for storage (`yyyy-MM-dd`).
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Formats a date for display (`dd/MM/yyyy`).
#[must_use]
pub fn format_display_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Computes whole years elapsed between `date_of_birth` and `today`.
///
/// Returns 0 when `today` precedes the birth date.
#[must_use]
pub fn age_on(date_of_birth: Date, today: Date) -> i32 {
    let mut years: i32 = today.year() - date_of_birth.year();
    let birthday_passed: bool = (u8::from(today.month()), today.day())
        >= (u8::from(date_of_birth.month()), date_of_birth.day());
    if !birthday_passed {
        years -= 1;
    }
    years.max(0)
}
