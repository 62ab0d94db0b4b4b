//! In-memory session storage - the per-process counterpart of a browser tab's session storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::ClientError;
use quill_core::ports::SessionStore;

/// Session values held in a HashMap behind an async RwLock.
///
/// Note: Data is lost when the process exits.
pub struct InMemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Option<String> {
        let values = self.values.read().await;
        values.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        tracing::debug!(key, "Session value stored");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ClientError> {
        let mut values = self.values.write().await;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::ports::USER_EMAIL_KEY;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemorySessionStore::new();
        store.set("key1", "value1").await.unwrap();
        assert_eq!(store.get("key1").await, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemorySessionStore::new();
        store.set("key1", "value1").await.unwrap();
        store.remove("key1").await.unwrap();
        assert_eq!(store.get("key1").await, None);
    }

    #[tokio::test]
    async fn test_user_email_reads_marker() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.user_email().await, None);
        store.set(USER_EMAIL_KEY, "ann@example.com").await.unwrap();
        assert_eq!(store.user_email().await.as_deref(), Some("ann@example.com"));
    }
}
