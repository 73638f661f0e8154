//! MongoDB document store implementation

use async_trait::async_trait;
use bson::{doc, Document};
use futures_util::StreamExt;
use mongodb::{Client, Database};
use tracing::info;

use crate::db::gateway::DocumentStore;
use crate::error::ApiError;

/// MongoDB-backed document store
///
/// Wraps one driver client; the driver's internal connection pool makes the
/// handle safe to share across concurrent requests.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db_name: String,
}

impl MongoStore {
    /// Connect and verify the connection with a ping
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, ApiError> {
        info!("Connecting to MongoDB at {}", uri);

        // Use serverSelectionTimeoutMS to avoid hanging on unreachable MongoDB
        let timeout_uri = if uri.contains('?') {
            format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        } else {
            format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(|e| ApiError::Storage(format!("Failed to connect to MongoDB: {}", e)))?;

        client
            .database(db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ApiError::Storage(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            client,
            db_name: db_name.to_string(),
        })
    }

    fn database(&self) -> Database {
        self.client.database(&self.db_name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, document: Document) -> Result<String, ApiError> {
        let result = self
            .database()
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| ApiError::Storage(format!("Insert failed: {}", e)))?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| ApiError::Storage("Failed to get inserted ID".into()))
    }

    async fn query(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, ApiError> {
        let mut cursor = self
            .database()
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| ApiError::Storage(format!("Find failed: {}", e)))?;

        // A mid-stream read failure fails the whole query rather than
        // returning a silently truncated list
        let mut results = Vec::new();
        while let Some(doc) = cursor.next().await {
            results.push(doc.map_err(|e| ApiError::Storage(format!("Cursor read failed: {}", e)))?);
        }

        Ok(results)
    }

    async fn collection_names(&self) -> Result<Vec<String>, ApiError> {
        self.database()
            .list_collection_names()
            .await
            .map_err(|e| ApiError::Storage(format!("Listing collections failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would require a running MongoDB instance;
    // gateway behavior is covered against the in-memory store double.
}
