// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! This module enforces password requirements for user credentials. Every
//! failing condition is reported; the checks never short-circuit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Password has no uppercase letter.
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    /// Password has no lowercase letter.
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    /// Password has no digit.
    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Password policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum password length, in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Checks a password against the policy.
    ///
    /// # Arguments
    ///
    /// * `password` - The candidate password
    ///
    /// # Returns
    ///
    /// Every violated rule, in a fixed order (length, uppercase, lowercase,
    /// digit). An empty list means the password is acceptable.
    #[must_use]
    pub fn violations(&self, password: &str) -> Vec<PasswordPolicyError> {
        let mut errors: Vec<PasswordPolicyError> = Vec::new();

        if password.chars().count() < self.min_length {
            errors.push(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push(PasswordPolicyError::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            errors.push(PasswordPolicyError::MissingLowercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(PasswordPolicyError::MissingDigit);
        }

        errors
    }

    /// Validates a password against the policy.
    ///
    /// # Errors
    ///
    /// Returns every violated rule if the password does not meet the policy.
    pub fn validate(&self, password: &str) -> Result<(), Vec<PasswordPolicyError>> {
        let errors: Vec<PasswordPolicyError> = self.violations(password);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        assert!(policy.validate("Password1").is_ok());
        assert!(policy.validate("abcDEF12").is_ok());
        assert!(policy.validate("MyP@ssw0rd123").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result: Result<(), Vec<PasswordPolicyError>> = policy.validate("Short1a");

        assert_eq!(
            result,
            Err(vec![PasswordPolicyError::TooShort { min_length: 8 }])
        );
    }

    #[test]
    fn test_all_failures_are_collected() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        // Too short and no uppercase
        let result: Result<(), Vec<PasswordPolicyError>> = policy.validate("short1");
        assert_eq!(
            result,
            Err(vec![
                PasswordPolicyError::TooShort { min_length: 8 },
                PasswordPolicyError::MissingUppercase,
            ])
        );

        // Empty password fails every rule
        let errors: Vec<PasswordPolicyError> = policy.violations("");
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_missing_character_classes() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        assert_eq!(
            policy.validate("alllowercase1"),
            Err(vec![PasswordPolicyError::MissingUppercase])
        );
        assert_eq!(
            policy.validate("ALLUPPERCASE1"),
            Err(vec![PasswordPolicyError::MissingLowercase])
        );
        assert_eq!(
            policy.validate("NoDigitsHere"),
            Err(vec![PasswordPolicyError::MissingDigit])
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PasswordPolicyError::TooShort { min_length: 8 }.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            PasswordPolicyError::MissingDigit.to_string(),
            "Password must contain at least one digit"
        );
    }
}
