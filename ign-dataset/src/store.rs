use std::collections::HashMap;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tokio::sync::Mutex;
use tracing::info;

use crate::error::CacheError;

/// Append-only list storage keyed by name, shaped after the redis list commands.
#[async_trait]
pub trait ListStore: Send + Sync {
    async fn exists(&self, key: &str) -> Result<bool, CacheError>;

    /// Every entry of the list, in insertion order
    async fn range_all(&self, key: &str) -> Result<Vec<Vec<u8>>, CacheError>;

    async fn push(&self, key: &str, value: Vec<u8>) -> Result<(), CacheError>;

    /// Appends every value in one step, either all of them land or none do
    async fn push_all(&self, key: &str, values: Vec<Vec<u8>>) -> Result<(), CacheError>;
}

#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)?;
        let connection = client.get_connection_manager().await?;
        info!("Connected to redis");
        Ok(Self { connection })
    }
}

#[async_trait]
impl ListStore for RedisStore {
    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let mut connection = self.connection.clone();
        Ok(connection.exists(key).await?)
    }

    async fn range_all(&self, key: &str) -> Result<Vec<Vec<u8>>, CacheError> {
        let mut connection = self.connection.clone();
        Ok(connection.lrange(key, 0, -1).await?)
    }

    async fn push(&self, key: &str, value: Vec<u8>) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();
        let _length: i64 = connection.rpush(key, value).await?;
        Ok(())
    }

    async fn push_all(&self, key: &str, values: Vec<Vec<u8>>) -> Result<(), CacheError> {
        // RPUSH needs at least one value
        if values.is_empty() {
            return Ok(());
        }
        let mut connection = self.connection.clone();
        // a single RPUSH with every value is applied atomically by the server
        let _length: i64 = connection.rpush(key, values).await?;
        Ok(())
    }
}

/// Process local store, used when no redis server is configured
#[derive(Default)]
pub struct MemoryStore {
    lists: Mutex<HashMap<String, Vec<Vec<u8>>>>,
}

impl MemoryStore {
    pub async fn entry_count(&self, key: &str) -> usize {
        self.lists.lock().await.get(key).map(Vec::len).unwrap_or_default()
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.lists.lock().await.contains_key(key))
    }

    async fn range_all(&self, key: &str) -> Result<Vec<Vec<u8>>, CacheError> {
        Ok(self
            .lists
            .lock()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default())
    }

    async fn push(&self, key: &str, value: Vec<u8>) -> Result<(), CacheError> {
        self.lists
            .lock()
            .await
            .entry(key.to_string())
            .or_default()
            .push(value);
        Ok(())
    }

    async fn push_all(&self, key: &str, values: Vec<Vec<u8>>) -> Result<(), CacheError> {
        if values.is_empty() {
            return Ok(());
        }
        self.lists
            .lock()
            .await
            .entry(key.to_string())
            .or_default()
            .extend(values);
        Ok(())
    }
}
