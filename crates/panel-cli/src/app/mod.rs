//! Application-level utilities for the Panel CLI.
//!
//! This module provides:
//! - Path resolution for config and store files
//! - An application context that opens the configured store

mod context;
mod resolver;

// Re-export public API
pub use context::{open_at, AppContext, Panel};
pub use resolver::{resolve_config_path, resolve_store_location, StoreLocation};
