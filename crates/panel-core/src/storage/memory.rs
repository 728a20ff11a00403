//! In-memory storage backend.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::storage::traits::KeyValueStore;

/// Volatile store backed by a `BTreeMap`. Contents vanish on drop.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::contract;

    #[test]
    fn test_memory_store_contract() {
        let mut store = MemoryStore::new();
        contract::absent_key_is_none(&store);
        contract::set_overwrites(&mut store);
        contract::remove_is_idempotent(&mut store);
        assert_eq!(store.len(), 1);
    }
}
