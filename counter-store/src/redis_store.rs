use crate::{CounterStore, Result, StoreError};
use async_trait::async_trait;
use deadpool_redis::{
    redis::{cmd, AsyncCommands, Pipeline},
    Config, Pool, PoolConfig, Runtime,
};
use std::sync::Arc;
use tracing::debug;

pub struct RedisStore {
    client: Arc<Pool>,
}

impl RedisStore {
    pub fn new(client: Arc<Pool>) -> Self {
        Self { client }
    }

    /// Builds a pool for the given `redis://` URI. No connection is made until the first command.
    pub fn connect(uri: &str, max_connections: usize) -> Result<Self> {
        let mut config = Config::from_url(uri);
        config.pool = Some(PoolConfig::new(max_connections));

        let pool = config.create_pool(Some(Runtime::Tokio1))?;
        debug!(max_connections, "Built Redis connection pool");

        Ok(Self::new(Arc::new(pool)))
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<u64>> {
        let mut conn = self.client.get().await?;
        let value: Option<u64> = conn.get(key).await?;

        Ok(value)
    }

    async fn get_many(&self, keys: &[&str]) -> Result<Vec<Option<u64>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.client.get().await?;

        // MGET keeps the reply order of the keys and reads them as one snapshot
        let values: Vec<Option<u64>> = cmd("MGET").arg(keys).query_async(&mut conn).await?;
        if values.len() != keys.len() {
            return StoreError::WrongResultLength {
                expected: keys.len(),
                actual: values.len(),
            }
            .into();
        }

        Ok(values)
    }

    async fn set(&self, key: &str, value: u64) -> Result<()> {
        let mut conn = self.client.get().await?;
        let _: () = conn.set(key, value).await?;

        Ok(())
    }

    async fn set_many(&self, entries: &[(&str, u64)]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut pipeline = Pipeline::new();
        pipeline.atomic().set_multiple(entries);

        let mut conn = self.client.get().await?;
        let _: () = pipeline.query_async(&mut conn).await?;

        Ok(())
    }

    async fn init(&self, key: &str) -> Result<bool> {
        let mut conn = self.client.get().await?;
        let created: bool = conn.set_nx(key, 0u64).await?;

        Ok(created)
    }

    async fn increment(&self, key: &str) -> Result<u64> {
        let mut conn = self.client.get().await?;
        let value: u64 = conn.incr(key, 1u64).await?;

        Ok(value)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.client.get().await?;
        let _: String = cmd("PING").query_async(&mut conn).await?;

        Ok(())
    }
}
