// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::password::PasswordPolicyError;

/// The complete list of violations found while validating one entity.
///
/// Validation never stops at the first problem. Callers must render the
/// whole list; a single violation is not guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// Human-readable violation messages, in the order they were found.
    violations: Vec<String>,
}

impl ValidationErrors {
    /// Creates an empty violation list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Records a violation.
    pub fn push(&mut self, message: impl Into<String>) {
        self.violations.push(message.into());
    }

    /// Appends every violation from another list.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
    }

    /// Returns `true` if no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns the recorded violations.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// Returns `true` if any violation contains the given text.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.violations.iter().any(|v| v.contains(text))
    }

    /// Converts the list into a result: `Ok(())` when empty, otherwise a
    /// single `DomainError::Validation` carrying every violation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if at least one violation was recorded.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.violations.join("; "))
    }
}

/// Errors that can occur in the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more field-level validation rules failed.
    Validation(ValidationErrors),
    /// A skill or rating value was set outside the range 0 to 10.
    SkillOutOfRange {
        /// The field being set.
        field: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// The position name or number is not one of the 15 rugby positions.
    InvalidPosition(String),
    /// The role is not `Secretary` or `Coach`.
    InvalidRole(String),
    /// The password does not satisfy the password rule.
    PasswordPolicy(Vec<PasswordPolicyError>),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "Validation failed: {errors}"),
            Self::SkillOutOfRange { field, value } => {
                write!(f, "{field} must be between 0 and 10, got {value}")
            }
            Self::InvalidPosition(msg) => write!(f, "Invalid position: {msg}"),
            Self::InvalidRole(role) => {
                write!(f, "Invalid role: {role}. Must be 'Secretary' or 'Coach'")
            }
            Self::PasswordPolicy(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "Password policy violation: {}", messages.join("; "))
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
