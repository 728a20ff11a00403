//! # Panel Core
//!
//! Persistence layer for a small admin panel: the active session, the admin
//! user list, the system configuration, and a rolling activity log, all kept
//! in a key-value store.
//!
//! ## Architecture
//!
//! - **storage**: the `KeyValueStore` port plus memory, JSON-file and SQLite backends
//! - **types**: the persisted records (`AdminUser`, `SystemConfig`, `ActivityLog`)
//! - **panel**: `PanelStore`, the façade the rest of the panel calls
//!
//! ```
//! use panel_core::storage::MemoryStore;
//! use panel_core::PanelStore;
//!
//! let mut panel = PanelStore::new(MemoryStore::new());
//! let users = panel.get_users().unwrap();
//! assert_eq!(users[0].username, "Admin");
//! ```

pub mod error;
pub mod fs;
pub mod panel;
pub mod storage;
pub mod types;

pub use error::{PanelError, Result};
pub use panel::{validate_local_fallback, PanelStore, MAX_LOG_ENTRIES};
pub use storage::KeyValueStore;
pub use types::{ActivityLog, AdminRole, AdminUser, SystemConfig};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
