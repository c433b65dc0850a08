//! In-process document store.

use crate::batch::WriteBatch;
use crate::store::{DocumentStore, StoreError};
use async_trait::async_trait;
use seed_core::Document;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::debug;

type Collections = BTreeMap<String, BTreeMap<String, Document>>;

/// A [`DocumentStore`] that keeps committed documents in memory.
///
/// Used for dry runs and tests. A failing instance rejects every commit,
/// which exercises the loader's failure path without a real backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose commits always fail with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            collections: Mutex::default(),
            failure: Some(reason.into()),
        }
    }

    /// Number of documents in a collection.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    pub async fn get(&self, collection: &str, key: &str) -> Option<Document> {
        self.collections
            .lock()
            .await
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned()
    }

    /// All documents of a collection, ordered by key.
    pub async fn documents(&self, collection: &str) -> Vec<(String, Document)> {
        self.collections
            .lock()
            .await
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, doc)| (key.clone(), doc.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Committed contents as `{collection: {key: document}}`.
    pub async fn snapshot_json(&self) -> serde_json::Value {
        let collections = self.collections.lock().await;
        serde_json::Value::Object(
            collections
                .iter()
                .map(|(name, docs)| {
                    let docs = docs
                        .iter()
                        .map(|(key, doc)| (key.clone(), doc.clone().into()))
                        .collect();
                    (name.clone(), serde_json::Value::Object(docs))
                })
                .collect(),
        )
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        if let Some(reason) = &self.failure {
            return Err(StoreError::Unavailable(reason.clone()));
        }
        if let Some(target) = batch.first_duplicate() {
            return Err(StoreError::Conflict(target.clone()));
        }

        let count = batch.len();
        let mut collections = self.collections.lock().await;
        for write in batch.into_writes() {
            collections
                .entry(write.target.collection)
                .or_default()
                .insert(write.target.key, write.document);
        }

        debug!("Committed {} documents to memory store", count);
        Ok(())
    }
}
