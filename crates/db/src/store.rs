//! Key-value persistence behind the booking repository.
//!
//! Values are JSON documents addressed by opaque string keys. `PgStore` keeps
//! them in Postgres, `MemoryStore` keeps them for the life of the process.

use std::collections::HashMap;

use async_trait::async_trait;
use eyre::Result;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{repositories::storage_entry, DbPool};

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores all entries or none of them.
    async fn put_all(&self, entries: Vec<(String, Value)>) -> Result<()>;
}

pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for PgStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let entry = storage_entry::get_entry(&self.pool, key).await?;
        Ok(entry.map(|entry| entry.value))
    }

    async fn put_all(&self, entries: Vec<(String, Value)>) -> Result<()> {
        storage_entry::upsert_entries(&self.pool, &entries).await
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put_all(&self, entries: Vec<(String, Value)>) -> Result<()> {
        self.entries.write().await.extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("bookedSlots").await.unwrap().is_none());

        store
            .put_all(vec![
                ("a".to_string(), json!([1, 2])),
                ("b".to_string(), json!({ "x": true })),
            ])
            .await
            .unwrap();
        store.put_all(vec![("a".to_string(), json!([3]))]).await.unwrap();

        assert_eq!(store.get("a").await.unwrap(), Some(json!([3])));
        assert_eq!(store.get("b").await.unwrap(), Some(json!({ "x": true })));
    }
}
