// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the service layer.

use clubhouse_domain::DomainError;
use clubhouse_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Service-level errors.
///
/// These are distinct from domain and persistence errors and are what the
/// command shell reports to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor's role does not allow the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The entity broke one or more validation rules. Nothing was written.
    ValidationFailed {
        /// Every violation found, in order.
        violations: Vec<String>,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A referenced resource does not exist.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The store failed. Any in-flight transaction was rolled back.
    Persistence {
        /// The operation that was being performed.
        operation: String,
        /// The underlying failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Builds a `ResourceNotFound` error for an identifier.
    #[must_use]
    pub fn not_found(resource_type: &str, id: i64) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message: format!("{resource_type} with ID {id} does not exist"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::ValidationFailed { violations } => {
                write!(f, "Validation failed: {}", violations.join("; "))
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Persistence { operation, message } => {
                write!(f, "Failed to {operation}: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::Validation(errors) => ApiError::ValidationFailed {
            violations: errors.violations().to_vec(),
        },
        DomainError::SkillOutOfRange { field, value } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} must be between 0 and 10, got {value}"),
        },
        DomainError::InvalidPosition(msg) => ApiError::InvalidInput {
            field: String::from("position"),
            message: msg,
        },
        DomainError::InvalidRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Invalid role: {role}. Must be 'Secretary' or 'Coach'"),
        },
        DomainError::PasswordPolicy(errors) => ApiError::ValidationFailed {
            violations: errors.iter().map(ToString::to_string).collect(),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a persistence error into an API error, naming the operation
/// that failed.
#[must_use]
pub fn translate_persistence_error(operation: &str, err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        other => ApiError::Persistence {
            operation: operation.to_string(),
            message: other.to_string(),
        },
    }
}

/// Returns a closure for `map_err` that translates persistence errors for
/// `operation`.
pub fn persistence_failure(operation: &str) -> impl FnOnce(PersistenceError) -> ApiError + '_ {
    move |err| translate_persistence_error(operation, err)
}
