//! In-memory [`SchemaStore`] backed by a `DashMap`.
//!
//! Used when no database is configured and throughout the test suites.
//! State does not survive a restart.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::schema::{SchemaId, SchemaRecord};
use crate::store::{SchemaStore, StoreError};

/// Process-local schema store. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<DashMap<SchemaId, SchemaRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored schemas.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl SchemaStore for MemoryStore {
    async fn create(&self, schema_id: &SchemaId, schema: &str) -> Result<(), StoreError> {
        // The entry guard holds the shard lock, so check-and-insert is atomic.
        match self.inner.entry(schema_id.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(schema_id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(SchemaRecord::new(schema_id.clone(), schema));
                tracing::debug!(schema_id = %schema_id, "schema stored in memory");
                Ok(())
            }
        }
    }

    async fn get(&self, schema_id: &SchemaId) -> Result<String, StoreError> {
        self.inner
            .get(schema_id)
            .map(|r| r.schema.clone())
            .ok_or_else(|| StoreError::NotFound(schema_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_get_round_trips_verbatim() {
        let store = MemoryStore::new();
        let id = SchemaId::from("config-schema");
        let text = "{ \"type\" :\n  \"object\" }";

        store.create(&id, text).await.unwrap();
        assert_eq!(store.get(&id).await.unwrap(), text);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_create_reports_already_exists() {
        let store = MemoryStore::new();
        let id = SchemaId::from("config-schema");

        store.create(&id, "{}").await.unwrap();
        let err = store.create(&id, "{\"type\":\"string\"}").await.unwrap_err();
        assert_eq!(err, StoreError::AlreadyExists(id.clone()));

        // The first write wins and is left untouched.
        assert_eq!(store.get(&id).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn get_unknown_reports_not_found() {
        let store = MemoryStore::new();
        let id = SchemaId::from("missing");
        assert_eq!(store.get(&id).await, Err(StoreError::NotFound(id)));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        let id = SchemaId::from("shared");

        store.create(&id, "true").await.unwrap();
        assert_eq!(other.get(&id).await.unwrap(), "true");
        assert_eq!(other.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_of_same_id_have_one_winner() {
        let store = MemoryStore::new();
        let id = SchemaId::from("raced");

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                store.create(&id, &format!("{{\"n\":{i}}}")).await
            }));
        }

        let mut ok = 0;
        let mut exists = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => ok += 1,
                Err(StoreError::AlreadyExists(_)) => exists += 1,
                Err(other) => panic!("unexpected store error: {other}"),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(exists, 15);
        assert_eq!(store.len(), 1);
    }
}
