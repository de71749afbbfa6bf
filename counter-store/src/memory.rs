use crate::{CounterStore, Result, StoreError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Process-local counters behind one lock, so multi-key reads and writes
/// observe and apply all entries together.
#[derive(Default)]
pub struct MemoryStore {
    counters: RwLock<HashMap<String, u64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.counters.read().get(key).copied())
    }

    async fn get_many(&self, keys: &[&str]) -> Result<Vec<Option<u64>>> {
        let counters = self.counters.read();
        Ok(keys.iter().map(|key| counters.get(*key).copied()).collect())
    }

    async fn set(&self, key: &str, value: u64) -> Result<()> {
        self.counters.write().insert(key.to_owned(), value);
        Ok(())
    }

    async fn set_many(&self, entries: &[(&str, u64)]) -> Result<()> {
        let mut counters = self.counters.write();
        for (key, value) in entries {
            counters.insert((*key).to_owned(), *value);
        }

        Ok(())
    }

    async fn init(&self, key: &str) -> Result<bool> {
        let mut counters = self.counters.write();
        if counters.contains_key(key) {
            return Ok(false);
        }

        counters.insert(key.to_owned(), 0);
        Ok(true)
    }

    async fn increment(&self, key: &str) -> Result<u64> {
        let mut counters = self.counters.write();
        let counter = counters.entry(key.to_owned()).or_insert(0);
        *counter = counter
            .checked_add(1)
            .ok_or_else(|| StoreError::Overflow(key.to_owned()))?;

        Ok(*counter)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
