//! Persistence façade for the admin panel.
//!
//! `PanelStore` turns a raw [`KeyValueStore`] into the panel's operations:
//! session caching, the admin user list, system config, and the rolling
//! activity log. Every value is a JSON document under one of the
//! [`keys`](crate::storage::keys).

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PanelError, Result};
use crate::storage::{keys, KeyValueStore};
use crate::types::{ActivityLog, AdminUser, StoredConfig, SystemConfig};

/// Most recent activity entries kept; older ones are dropped on write.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Match against the built-in bootstrap credentials only, without reading
/// storage. Used when the stored user list cannot be read.
pub fn validate_local_fallback(username: &str, password: &str) -> Option<AdminUser> {
    let admin = AdminUser::bootstrap_admin();
    (admin.username == username && admin.password == password).then_some(admin)
}

/// Admin panel persistence over a storage port.
pub struct PanelStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PanelStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying storage port.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw).map_err(|e| {
                    PanelError::Serialization(format!("Malformed value under {}: {}", key, e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        tracing::debug!(key, bytes = raw.len(), "writing panel value");
        self.store.set(key, &raw)
    }

    // --- Session ---

    /// Cache `user` as the active session.
    pub fn save_session(&mut self, user: &AdminUser) -> Result<()> {
        self.write_json(keys::SESSION, user)
    }

    /// The active session user, if any.
    pub fn get_session(&self) -> Result<Option<AdminUser>> {
        self.read_json(keys::SESSION)
    }

    pub fn clear_session(&mut self) -> Result<()> {
        tracing::debug!("clearing session");
        self.store.remove(keys::SESSION)
    }

    // --- Users ---

    /// All admin users.
    ///
    /// On first access the list is seeded with the bootstrap admin and
    /// written back.
    pub fn get_users(&mut self) -> Result<Vec<AdminUser>> {
        if let Some(users) = self.read_json(keys::USERS)? {
            return Ok(users);
        }
        let users = vec![AdminUser::bootstrap_admin()];
        self.write_json(keys::USERS, &users)?;
        tracing::info!("seeded user list with bootstrap admin");
        Ok(users)
    }

    /// Append a new user.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::DuplicateUsername` if the username is taken, or
    /// `PanelError::DuplicateId` if the id is. The stored list is untouched
    /// in both cases.
    pub fn add_user(&mut self, user: AdminUser) -> Result<()> {
        let mut users = self.get_users()?;
        if users.iter().any(|u| u.username == user.username) {
            tracing::warn!(username = %user.username, "rejected duplicate username");
            return Err(PanelError::DuplicateUsername(user.username));
        }
        if users.iter().any(|u| u.id == user.id) {
            tracing::warn!(id = %user.id, "rejected duplicate user id");
            return Err(PanelError::DuplicateId(user.id));
        }
        users.push(user);
        self.write_json(keys::USERS, &users)
    }

    /// Replace the user with the same id. Returns `false` (and writes
    /// nothing) when no such user exists.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::DuplicateUsername` if the new username belongs
    /// to a different user.
    pub fn update_user(&mut self, user: AdminUser) -> Result<bool> {
        let mut users = self.get_users()?;
        let Some(index) = users.iter().position(|u| u.id == user.id) else {
            tracing::debug!(id = %user.id, "update skipped, no such user");
            return Ok(false);
        };
        if users
            .iter()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            tracing::warn!(username = %user.username, "rejected rename onto existing username");
            return Err(PanelError::DuplicateUsername(user.username));
        }
        users[index] = user;
        self.write_json(keys::USERS, &users)?;
        Ok(true)
    }

    /// Remove the user with `id`. Returns `false` when no such user exists.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::ProtectedAccount` for the bootstrap admin.
    pub fn delete_user(&mut self, id: &str) -> Result<bool> {
        let mut users = self.get_users()?;
        let protected = id == crate::types::BOOTSTRAP_ADMIN_ID
            || users.iter().any(|u| u.id == id && u.is_protected());
        if protected {
            tracing::warn!(id, "refused to delete protected account");
            return Err(PanelError::ProtectedAccount(id.to_string()));
        }
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }
        self.write_json(keys::USERS, &users)?;
        Ok(true)
    }

    /// First stored user whose username and password both match.
    ///
    /// Passwords are compared as plaintext.
    pub fn validate_user(&mut self, username: &str, password: &str) -> Result<Option<AdminUser>> {
        let users = self.get_users()?;
        Ok(users
            .into_iter()
            .find(|u| u.username == username && u.password == password))
    }

    // --- System config ---

    /// Stored config overlaid on the defaults.
    ///
    /// Missing fields take their default; an empty `scriptUrl` is also
    /// replaced by the default. Nothing is written back.
    pub fn get_config(&self) -> Result<SystemConfig> {
        let stored: Option<StoredConfig> = self.read_json(keys::CONFIG)?;
        Ok(stored.unwrap_or_default().merge_with_defaults())
    }

    /// Persist `config` as given.
    pub fn save_config(&mut self, config: &SystemConfig) -> Result<()> {
        self.write_json(keys::CONFIG, config)
    }

    // --- Activity log ---

    /// Logged actions, newest first.
    pub fn get_logs(&self) -> Result<Vec<ActivityLog>> {
        Ok(self.read_json(keys::LOGS)?.unwrap_or_default())
    }

    /// Record `action` by `user` at the front of the log, keeping at most
    /// [`MAX_LOG_ENTRIES`].
    ///
    /// With no acting user nothing is recorded and `None` is returned.
    pub fn add_log(
        &mut self,
        user: Option<&AdminUser>,
        action: &str,
        details: &str,
    ) -> Result<Option<ActivityLog>> {
        let Some(user) = user else {
            tracing::debug!(action, "skipping log entry without acting user");
            return Ok(None);
        };

        let entry = ActivityLog::new(user, action, details);
        let mut logs = self.get_logs()?;
        logs.insert(0, entry.clone());
        if logs.len() > MAX_LOG_ENTRIES {
            tracing::debug!(dropped = logs.len() - MAX_LOG_ENTRIES, "truncating activity log");
            logs.truncate(MAX_LOG_ENTRIES);
        }
        self.write_json(keys::LOGS, &logs)?;
        Ok(Some(entry))
    }
}
