pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[cfg(feature = "redis")]
    #[error("Error occurred while operating on Redis: {0}")]
    RedisError(#[from] deadpool_redis::redis::RedisError),

    #[cfg(feature = "redis")]
    #[error("Error occurred while getting Redis connection: {0}")]
    PoolError(#[from] deadpool_redis::PoolError),

    #[cfg(feature = "redis")]
    #[error("Error occurred while building connection pool: {0}")]
    CreatePoolError(#[from] deadpool_redis::CreatePoolError),

    #[error("Got wrong number of values: expected {expected}, got {actual}")]
    WrongResultLength { expected: usize, actual: usize },

    #[error("Counter {0} overflowed")]
    Overflow(String),

    #[error("Disconnected from store")]
    Disconnected,
}

impl<T> From<StoreError> for Result<T> {
    fn from(e: StoreError) -> Self {
        Err(e)
    }
}
