//! Output formatting helpers for the CLI.
//!
//! Passwords are stored in plaintext, so every renderer here leaves them out.

mod json;
mod text;

// Re-export public API
pub use json::{config_json, logs_json, user_json, users_json};
pub use text::{print_config, print_logs, print_user, print_users};
