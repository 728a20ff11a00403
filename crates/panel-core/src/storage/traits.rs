//! Storage port trait definition.
//!
//! The `KeyValueStore` trait is the seam between the panel façade and
//! wherever the data actually lives. Values are opaque strings; the façade
//! owns the JSON encoding.

use crate::error::Result;

/// Key-value storage interface used by [`crate::PanelStore`].
///
/// All implementations must ensure:
/// - `get` on an absent key returns `Ok(None)`
/// - `set` overwrites any previous value
/// - `remove` on an absent key succeeds
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::Storage` if the backend cannot persist the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` and its value.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
pub(crate) mod contract {
    //! Shared checks every backend runs against itself.

    use super::KeyValueStore;

    pub fn absent_key_is_none<S: KeyValueStore>(store: &S) {
        assert_eq!(store.get("missing").unwrap(), None);
    }

    pub fn set_overwrites<S: KeyValueStore>(store: &mut S) {
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    pub fn remove_is_idempotent<S: KeyValueStore>(store: &mut S) {
        store.set("gone", "x").unwrap();
        store.remove("gone").unwrap();
        store.remove("gone").unwrap();
        assert_eq!(store.get("gone").unwrap(), None);
    }
}
