//! Document store capability.

use crate::batch::{default_key, CollectionRef, DocumentRef, KeyGenerator, WriteBatch};
use async_trait::async_trait;

/// Errors reported by a document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or refused the request
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The same document was written twice in one batch
    #[error("Conflicting writes to {0} in one batch")]
    Conflict(DocumentRef),

    /// The backend rejected the commit; nothing was applied
    #[error("{store} commit failed: {source}")]
    Commit {
        store: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// A key/value document database organised into named collections.
///
/// Implementations must apply a committed [`WriteBatch`] atomically: either
/// every write becomes visible or none does.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Key generator used for documents without a natural key.
    fn key_generator(&self) -> KeyGenerator {
        default_key
    }

    /// Handle to a collection by name.
    fn collection(&self, name: &str) -> CollectionRef {
        CollectionRef::new(name, self.key_generator())
    }

    /// Atomically apply every write in the batch.
    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError>;
}
