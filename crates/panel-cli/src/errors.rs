//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use panel_core::PanelError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, store, user)
    NotFound { message: String, hint: String },

    /// Login failed
    AuthFailed(String),

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::AuthFailed(message) => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn auth_failed(message: impl Into<String>) -> Self {
        CliError::AuthFailed(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed(_) => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Pick the exit code for an error bubbled up to `main`.
///
/// Domain rejections from the core count as invalid input; anything
/// unrecognised is a general failure.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<PanelError>() {
        Some(
            PanelError::DuplicateUsername(_)
            | PanelError::DuplicateId(_)
            | PanelError::ProtectedAccount(_)
            | PanelError::InvalidInput(_),
        ) => exit_codes::INVALID_INPUT,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_invalid_input() {
        let err = anyhow::Error::new(PanelError::ProtectedAccount("admin-001".to_string()));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_storage_errors_are_general_failures() {
        let err = anyhow::Error::new(PanelError::Storage("disk".to_string()));
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_cli_errors_keep_their_codes() {
        let err = anyhow::Error::new(CliError::auth_failed("bad"));
        assert_eq!(exit_code_for(&err), exit_codes::AUTH_FAILED);
        let err = anyhow::Error::new(CliError::not_found("gone", "hint"));
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);
    }
}
