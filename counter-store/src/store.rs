use crate::Result;

use async_trait::async_trait;

/// A key-value backend holding named, non-negative counters.
///
/// Implementations must make [`CounterStore::increment`] atomic on the store
/// side: concurrent callers incrementing the same key never lose an update.
#[async_trait]
pub trait CounterStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<u64>>;

    /// Returns one value per key, in the order the keys were given.
    async fn get_many(&self, keys: &[&str]) -> Result<Vec<Option<u64>>>;

    async fn set(&self, key: &str, value: u64) -> Result<()>;

    /// Writes every entry in a single atomic operation.
    async fn set_many(&self, entries: &[(&str, u64)]) -> Result<()>;

    /// Sets the counter to 0 if it does not exist yet. Returns whether the counter was created.
    async fn init(&self, key: &str) -> Result<bool>;

    /// Adds 1 to the counter, treating an absent counter as 0, and returns the new value.
    async fn increment(&self, key: &str) -> Result<u64>;

    async fn ping(&self) -> Result<()>;
}
