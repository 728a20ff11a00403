//! Path resolution for config and store files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, StoreBackend};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Where the store lives and how to open it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    pub path: PathBuf,
    pub backend: StoreBackend,
}

/// Resolve the config file path, checking PANEL_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store from CLI args or config.
///
/// `--store` wins over the config file. Without `--backend`, a `--store`
/// path ending in `.db` or `.sqlite` opens as SQLite.
pub fn resolve_store_location(cli: &Cli) -> anyhow::Result<StoreLocation> {
    if let Some(path) = cli.store.as_deref() {
        let path = PathBuf::from(path);
        let backend = cli.backend.unwrap_or_else(|| StoreBackend::from_path(&path));
        return Ok(StoreLocation { path, backend });
    }

    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Err(CliError::not_found(
            format!("No panel config found at {}", config_path.display()),
            missing_config_hint(),
        )
        .into());
    }

    let config = read_config(&config_path)?;
    Ok(StoreLocation {
        path: PathBuf::from(config.store.path),
        backend: cli.backend.unwrap_or(config.store.backend),
    })
}

fn missing_config_hint() -> String {
    "Run:\n  panel init\n\nOr point at a store directly:\n  PANEL_STORE=/path/to/panel.json panel <command>".to_string()
}
