//! Prompt helpers.

use std::io::{self, IsTerminal};

use dialoguer::Password;

use crate::errors::CliError;

/// Use `provided` if given, otherwise prompt on the terminal.
pub fn password_or_prompt(
    provided: Option<String>,
    no_input: bool,
    confirm: bool,
) -> anyhow::Result<String> {
    if let Some(value) = provided {
        return Ok(value);
    }
    if no_input || !io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "No password provided and no TTY available. Pass --password.",
        )
        .into());
    }
    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    prompt
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}
