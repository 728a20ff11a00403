//! Application context for the Panel CLI.
//!
//! Bundles the parsed arguments with a lazily-resolved store location.

use once_cell::unsync::OnceCell;

use panel_core::storage::{FileStore, KeyValueStore, SqliteStore};
use panel_core::PanelStore;

use crate::cli::Cli;
use crate::config::StoreBackend;

use super::resolver::{resolve_store_location, StoreLocation};

/// The façade over whichever backend the user configured.
pub type Panel = PanelStore<Box<dyn KeyValueStore>>;

/// Application context that bundles CLI args with the store location.
pub struct AppContext<'a> {
    cli: &'a Cli,
    location: OnceCell<StoreLocation>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            location: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the store location, resolving it on first use.
    pub fn location(&self) -> anyhow::Result<&StoreLocation> {
        self.location
            .get_or_try_init(|| resolve_store_location(self.cli))
    }

    /// Open the configured store behind the panel façade.
    pub fn open_panel(&self) -> anyhow::Result<Panel> {
        let location = self.location()?;
        open_at(location)
    }
}

/// Open `location` with the matching backend.
pub fn open_at(location: &StoreLocation) -> anyhow::Result<Panel> {
    tracing::debug!(
        path = %location.path.display(),
        backend = ?location.backend,
        "opening store"
    );
    let store: Box<dyn KeyValueStore> = match location.backend {
        StoreBackend::File => Box::new(FileStore::open(&location.path)?),
        StoreBackend::Sqlite => Box::new(SqliteStore::open(&location.path)?),
    };
    Ok(PanelStore::new(store))
}
