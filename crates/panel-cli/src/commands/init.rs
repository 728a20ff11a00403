use std::path::PathBuf;

use crate::app::{open_at, resolve_config_path, StoreLocation};
use crate::cli::{Cli, InitArgs};
use crate::config::{default_store_path, write_config, PanelConfig, StoreBackend};
use crate::errors::CliError;

pub fn handle_init(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = match args.config_path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => resolve_config_path()?,
    };
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        ))
        .into());
    }

    // Same backend rule as `--store`.
    let (store_path, backend) = match args.path.as_deref().or(cli.store.as_deref()) {
        Some(path) => {
            let path = PathBuf::from(path);
            let backend = cli.backend.unwrap_or_else(|| StoreBackend::from_path(&path));
            (path, backend)
        }
        None => {
            let backend = cli.backend.unwrap_or_default();
            (default_store_path(backend)?, backend)
        }
    };

    let location = StoreLocation {
        path: store_path,
        backend,
    };
    let mut panel = open_at(&location)?;
    let users = panel.get_users()?;
    tracing::info!(users = users.len(), "store initialized");

    write_config(&config_path, &PanelConfig::new(location.path.clone(), backend))?;

    if !cli.quiet {
        println!("Initialized panel store at {}", location.path.display());
        println!("Config written to {}", config_path.display());
    }
    Ok(())
}
