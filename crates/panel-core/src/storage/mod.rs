//! Storage port and backends.

mod file;
mod memory;
mod sqlite;
mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::KeyValueStore;

/// Keys the panel writes under. They match the browser panel's
/// `localStorage` keys so stores are interchangeable.
pub mod keys {
    pub const CONFIG: &str = "APP_SYSTEM_CONFIG";
    pub const LOGS: &str = "APP_ACTIVITY_LOGS";
    pub const SESSION: &str = "APP_ACTIVE_SESSION";
    pub const USERS: &str = "APP_ADMIN_USERS";
}
