use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::store::KeyValueStore;

// Mock store for testing repositories without a database
mock! {
    pub Store {}

    #[async_trait]
    impl KeyValueStore for Store {
        async fn get(&self, key: &str) -> eyre::Result<Option<Value>>;

        async fn put_all(&self, entries: Vec<(String, Value)>) -> eyre::Result<()>;
    }
}
