//! Storage gateway with startup-time degradation
//!
//! The gateway holds one store handle for the process lifetime, decided once
//! at startup. When connection establishment failed, the gateway is degraded:
//! every operation returns `StorageUnavailable` immediately instead of
//! attempting reconnection per call.

use async_trait::async_trait;
use bson::Document;
use std::sync::Arc;

use crate::error::ApiError;

/// Default result cap for list queries
pub const DEFAULT_QUERY_LIMIT: i64 = 50;

/// Generic document store operations
///
/// The trait isolates entity handling from the storage technology and lets
/// tests substitute an in-memory double. The implementation is expected to be
/// internally safe for concurrent callers; this layer adds no locking.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a document; returns the store-assigned identifier as a string
    async fn insert(&self, collection: &str, document: Document) -> Result<String, ApiError>;

    /// Fetch at most `limit` documents matching `filter`, in natural order
    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, ApiError>;

    /// Names of the collections visible in the database
    async fn collection_names(&self) -> Result<Vec<String>, ApiError>;
}

/// Process-wide storage gateway
#[derive(Clone)]
pub struct Gateway {
    store: Option<Arc<dyn DocumentStore>>,
}

impl Gateway {
    /// Gateway backed by a connected store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Degraded gateway; every operation reports `StorageUnavailable`
    pub fn degraded() -> Self {
        Self { store: None }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> Result<&Arc<dyn DocumentStore>, ApiError> {
        self.store.as_ref().ok_or(ApiError::StorageUnavailable)
    }

    /// Insert a validated document into the named collection
    pub async fn insert(&self, collection: &str, document: Document) -> Result<String, ApiError> {
        self.store()?.insert(collection, document).await
    }

    /// Query a collection, rendering each document's `_id` as a string field
    pub async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, ApiError> {
        let mut docs = self.store()?.query(collection, filter, limit).await?;
        for doc in &mut docs {
            if let Ok(oid) = doc.get_object_id("_id") {
                let hex = oid.to_hex();
                doc.insert("_id", hex);
            }
        }
        Ok(docs)
    }

    /// Visible collection names, for diagnostics
    pub async fn collection_names(&self) -> Result<Vec<String>, ApiError> {
        self.store()?.collection_names().await
    }
}

/// In-memory store double for tests
#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use bson::oid::ObjectId;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryStore {
        collections: Mutex<HashMap<String, Vec<Document>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl DocumentStore for MemoryStore {
        async fn insert(&self, collection: &str, mut document: Document) -> Result<String, ApiError> {
            let oid = ObjectId::new();
            document.insert("_id", oid);
            self.collections
                .lock()
                .await
                .entry(collection.to_string())
                .or_default()
                .push(document);
            Ok(oid.to_hex())
        }

        async fn query(
            &self,
            collection: &str,
            _filter: Document,
            limit: i64,
        ) -> Result<Vec<Document>, ApiError> {
            let collections = self.collections.lock().await;
            let docs = collections.get(collection).cloned().unwrap_or_default();
            Ok(docs.into_iter().take(limit.max(0) as usize).collect())
        }

        async fn collection_names(&self) -> Result<Vec<String>, ApiError> {
            let collections = self.collections.lock().await;
            Ok(collections.keys().cloned().collect())
        }
    }
}
