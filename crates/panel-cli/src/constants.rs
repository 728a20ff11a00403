//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, store, user).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, including rejected user-list changes.
    pub const INVALID_INPUT: i32 = 4;

    /// Login failed.
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PANEL_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "PANEL_LOG";
