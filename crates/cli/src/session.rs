// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credentials and interactive prompts.
//!
//! Values missing from the command line are read from stdin, one line each.
//! Prompts are written to stderr. Passwords are read from the terminal with
//! echo turned off.

use clubhouse_api::ApiError;
use std::io::{BufRead, Write};
use tracing::debug;

/// The credentials given on the command line, completed by prompting.
#[derive(Debug, Clone, Default)]
pub struct Session {
    username: Option<String>,
    password: Option<String>,
}

impl Session {
    pub const fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    /// Returns the login name and password, prompting for whichever is
    /// missing. Prompted values are kept for later calls.
    pub fn credentials(&mut self) -> Result<(String, String), ApiError> {
        self.credentials_with(&mut MaskedTerminal)
    }

    /// Like [`Session::credentials`], reading a missing password from
    /// `secrets`.
    pub fn credentials_with<S: SecretReader>(
        &mut self,
        secrets: &mut S,
    ) -> Result<(String, String), ApiError> {
        let username: String = match self.username.take() {
            Some(username) => username,
            None => prompt("Username")?,
        };
        let password: String = match self.password.take() {
            Some(password) => password,
            None => secrets.read_secret("Password")?,
        };
        self.username = Some(username.clone());
        self.password = Some(password.clone());
        Ok((username, password))
    }
}

/// Reads a value that must not be echoed.
pub trait SecretReader {
    /// Prompts with `label` and returns what was typed.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn read_secret(&mut self, label: &str) -> Result<String, ApiError>;
}

/// Reads secrets from the controlling terminal without echo.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskedTerminal;

impl SecretReader for MaskedTerminal {
    fn read_secret(&mut self, label: &str) -> Result<String, ApiError> {
        let value: String = rpassword::prompt_password(format!("{label}: ")).map_err(io_failure)?;
        debug!(label, "Read masked value");
        Ok(value)
    }
}

/// Returns `value`, or reads it from the terminal without echo when absent.
pub fn secret_or_prompt(value: Option<String>, label: &str) -> Result<String, ApiError> {
    match value {
        Some(value) => Ok(value),
        None => MaskedTerminal.read_secret(label),
    }
}

/// Returns `value`, or prompts for it when absent.
pub fn value_or_prompt(value: Option<String>, label: &str) -> Result<String, ApiError> {
    match value {
        Some(value) => Ok(value),
        None => prompt(label),
    }
}

/// Prompts on stderr and reads one line from stdin.
pub fn prompt(label: &str) -> Result<String, ApiError> {
    prompt_from(
        &mut std::io::stdin().lock(),
        &mut std::io::stderr().lock(),
        label,
    )
}

/// Writes `label` to `prompts` and reads one line from `input`.
///
/// # Errors
///
/// Returns `InvalidInput` when the input is exhausted, or `Internal` if
/// either stream fails.
pub fn prompt_from<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    label: &str,
) -> Result<String, ApiError> {
    write!(prompts, "{label}: ").map_err(io_failure)?;
    prompts.flush().map_err(io_failure)?;
    read_value(input, label)
}

/// Reads one line, without its line ending.
///
/// # Errors
///
/// Returns `InvalidInput` when the input is already exhausted.
pub fn read_value<R: BufRead>(reader: &mut R, label: &str) -> Result<String, ApiError> {
    let mut line: String = String::new();
    let read: usize = reader.read_line(&mut line).map_err(io_failure)?;
    if read == 0 {
        return Err(ApiError::InvalidInput {
            field: label.to_string(),
            message: format!("No value entered for {label}"),
        });
    }
    debug!(label, "Read prompted value");
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn io_failure(err: std::io::Error) -> ApiError {
    ApiError::Internal {
        message: format!("Terminal I/O failed: {err}"),
    }
}
