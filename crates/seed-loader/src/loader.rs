//! Turns a [`Dataset`] into one atomic write batch.

use crate::error::LoaderError;
use seed_core::{
    Dataset, ToDocument, RESTAURANTS_COLLECTION, REVIEWS_COLLECTION, USERS_COLLECTION,
    YUMS_COLLECTION,
};
use seed_fabricator::{Fabricator, FabricatorConfig};
use seed_store::{DocumentStore, WriteBatch};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, Instrument};

/// Metrics from a load operation.
#[derive(Debug, Clone, Default)]
pub struct LoadMetrics {
    /// Documents written, per collection.
    pub documents_by_collection: BTreeMap<String, usize>,
    /// Total documents written.
    pub documents_written: usize,
    /// Time spent in the commit.
    pub commit_duration: Duration,
}

impl LoadMetrics {
    /// Calculate documents per second.
    pub fn documents_per_second(&self) -> f64 {
        if self.commit_duration.as_secs_f64() > 0.0 {
            self.documents_written as f64 / self.commit_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes datasets to a [`DocumentStore`].
#[derive(Clone)]
pub struct Loader {
    store: Arc<dyn DocumentStore>,
}

impl Loader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Build the batch for a dataset without committing it.
    ///
    /// Users, restaurants and reviews are keyed by their identifiers; yums get
    /// store-generated keys.
    pub fn build_batch(&self, dataset: &Dataset) -> WriteBatch {
        let users = self.store.collection(USERS_COLLECTION);
        let restaurants = self.store.collection(RESTAURANTS_COLLECTION);
        let reviews = self.store.collection(REVIEWS_COLLECTION);
        let yums = self.store.collection(YUMS_COLLECTION);

        let mut batch = WriteBatch::new();
        for user in &dataset.users {
            batch.set(users.doc(&user.user_id), user.to_document());
        }
        for restaurant in &dataset.restaurants {
            batch.set(
                restaurants.doc(&restaurant.restaurant_id),
                restaurant.to_document(),
            );
        }
        for review in &dataset.reviews {
            batch.set(reviews.doc(&review.review_id), review.to_document());
        }
        for yum in &dataset.yums {
            batch.set(yums.new_doc(), yum.to_document());
        }

        debug!("Built batch of {} writes", batch.len());
        batch
    }

    /// Commit the whole dataset as one batch and wait for the result.
    pub async fn load(&self, dataset: &Dataset) -> Result<LoadMetrics, LoaderError> {
        let batch = self.build_batch(dataset);
        let documents_by_collection = batch.counts_by_collection();
        let documents_written = batch.len();

        info!(
            "Committing {} documents to {} store",
            documents_written,
            self.store.name()
        );

        let start = Instant::now();
        self.store.commit(batch).await?;

        let metrics = LoadMetrics {
            documents_by_collection,
            documents_written,
            commit_duration: start.elapsed(),
        };

        info!(
            "Load complete: {} documents in {:?} ({:.2} docs/sec)",
            metrics.documents_written,
            metrics.commit_duration,
            metrics.documents_per_second()
        );

        Ok(metrics)
    }

    /// Commit in the background and hand the outcome to `on_complete`.
    ///
    /// The commit runs on the current Tokio runtime; without one this returns
    /// [`LoaderError::NoRuntime`] and `on_complete` is never called. The
    /// caller does not wait; the returned handle can be awaited if it needs
    /// to know the callback has run.
    pub fn load_with<F>(
        &self,
        dataset: Dataset,
        on_complete: F,
    ) -> Result<JoinHandle<()>, LoaderError>
    where
        F: FnOnce(Result<LoadMetrics, LoaderError>) + Send + 'static,
    {
        let runtime = Handle::try_current()?;
        let loader = self.clone();
        Ok(runtime.spawn(
            async move {
                let result = loader.load(&dataset).await;
                on_complete(result);
            }
            .in_current_span(),
        ))
    }

    /// Fire-and-forget commit. Failures are logged, never retried.
    pub fn spawn_load(&self, dataset: Dataset) -> Result<JoinHandle<()>, LoaderError> {
        let store = self.store.name();
        self.load_with(dataset, move |result| {
            if let Err(e) = result {
                error!("Seeding {} store failed: {}", store, e);
            }
        })
    }
}

/// Fabricate a dataset with default parameters and load it in the background.
///
/// Invalid configuration and a missing Tokio runtime are reported
/// immediately; commit failures are only logged.
pub fn seed_with_defaults(store: Arc<dyn DocumentStore>) -> Result<JoinHandle<()>, LoaderError> {
    // Fail before fabricating
    Handle::try_current()?;
    let dataset = Fabricator::from_entropy(FabricatorConfig::default())?.generate()?;
    Loader::new(store).spawn_load(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_store::MemoryStore;
    use std::collections::HashSet;
    use tracing_test::traced_test;

    fn small_dataset() -> Dataset {
        let config = FabricatorConfig {
            users: 3,
            restaurants: 1,
            reviews_per_restaurant: 2,
            max_yums_per_review: 3,
        };
        Fabricator::with_seed(config, 42)
            .unwrap()
            .generate()
            .unwrap()
    }

    #[test]
    fn test_metrics() {
        let metrics = LoadMetrics {
            documents_by_collection: BTreeMap::new(),
            documents_written: 1000,
            commit_duration: Duration::from_secs(10),
        };
        assert_eq!(metrics.documents_per_second(), 100.0);
        assert_eq!(LoadMetrics::default().documents_per_second(), 0.0);
    }

    #[test]
    fn test_build_batch_addresses_documents() {
        let dataset = small_dataset();
        let loader = Loader::new(Arc::new(MemoryStore::new()));
        let batch = loader.build_batch(&dataset);

        assert_eq!(batch.len(), dataset.document_count());
        let counts = batch.counts_by_collection();
        assert_eq!(counts.get(USERS_COLLECTION), Some(&3));
        assert_eq!(counts.get(RESTAURANTS_COLLECTION), Some(&1));
        assert_eq!(counts.get(REVIEWS_COLLECTION), Some(&2));
        assert_eq!(
            counts.get(YUMS_COLLECTION).copied().unwrap_or(0),
            dataset.yums.len()
        );

        for write in batch.writes() {
            match write.target.collection.as_str() {
                USERS_COLLECTION => {
                    assert_eq!(write.document.get_str("userID"), Some(write.target.key.as_str()))
                }
                RESTAURANTS_COLLECTION => assert_eq!(
                    write.document.get_str("restaurantID"),
                    Some(write.target.key.as_str())
                ),
                REVIEWS_COLLECTION => assert_eq!(
                    write.document.get_str("reviewID"),
                    Some(write.target.key.as_str())
                ),
                YUMS_COLLECTION => {
                    // store-generated key, not the review's
                    assert_eq!(write.target.key.len(), 32);
                    assert!(write.document.get_str("reviewID").is_some());
                }
                other => panic!("unexpected collection {other}"),
            }
        }
        assert!(batch.first_duplicate().is_none());
    }

    #[tokio::test]
    async fn test_load_writes_every_collection() {
        let dataset = small_dataset();
        let store = Arc::new(MemoryStore::new());
        let loader = Loader::new(store.clone());

        let metrics = loader.load(&dataset).await.unwrap();

        assert_eq!(metrics.documents_written, dataset.document_count());
        assert_eq!(store.count(USERS_COLLECTION).await, 3);
        assert_eq!(store.count(RESTAURANTS_COLLECTION).await, 1);
        assert_eq!(store.count(REVIEWS_COLLECTION).await, 2);
        assert_eq!(store.count(YUMS_COLLECTION).await, dataset.yums.len());

        let restaurant = &dataset.restaurants[0];
        let stored = store
            .get(RESTAURANTS_COLLECTION, &restaurant.restaurant_id)
            .await
            .unwrap();
        assert_eq!(stored.get_i64("reviewCount"), Some(2));
        assert_eq!(stored.get_f64("averageRating"), Some(restaurant.average_rating));

        let yum_pairs: HashSet<(String, String)> = store
            .documents(YUMS_COLLECTION)
            .await
            .into_iter()
            .map(|(_, doc)| {
                (
                    doc.get_str("userID").unwrap().to_string(),
                    doc.get_str("reviewID").unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(yum_pairs.len(), dataset.yums.len());
    }

    #[tokio::test]
    async fn test_load_reports_store_failure() {
        let loader = Loader::new(Arc::new(MemoryStore::failing("store offline")));
        let err = loader.load(&small_dataset()).await.unwrap_err();
        assert!(matches!(err, LoaderError::Store(_)));
    }

    #[traced_test]
    #[tokio::test]
    async fn test_spawn_load_logs_failure() {
        let store = Arc::new(MemoryStore::failing("store offline"));
        let loader = Loader::new(store.clone());

        let handle = loader.spawn_load(small_dataset()).unwrap();
        handle.await.expect("load task must not panic");

        assert!(logs_contain("Seeding memory store failed"));
        assert!(logs_contain("store offline"));
        assert_eq!(store.count(USERS_COLLECTION).await, 0);
    }

    #[traced_test]
    #[tokio::test]
    async fn test_spawn_load_success_is_silent() {
        let store = Arc::new(MemoryStore::new());
        let loader = Loader::new(store.clone());

        loader.spawn_load(small_dataset()).unwrap().await.unwrap();

        assert!(!logs_contain("failed"));
        assert_eq!(store.count(USERS_COLLECTION).await, 3);
    }

    #[tokio::test]
    async fn test_load_with_invokes_callback() {
        let loader = Loader::new(Arc::new(MemoryStore::new()));
        let (tx, rx) = tokio::sync::oneshot::channel();

        loader
            .load_with(small_dataset(), move |result| {
                let _ = tx.send(result.map(|metrics| metrics.documents_written));
            })
            .unwrap();

        let written = rx.await.unwrap().unwrap();
        assert!(written >= 6);
    }

    #[tokio::test]
    async fn test_seed_with_defaults() {
        let store = Arc::new(MemoryStore::new());
        seed_with_defaults(store.clone()).unwrap().await.unwrap();

        assert_eq!(store.count(USERS_COLLECTION).await, 20);
        assert_eq!(store.count(RESTAURANTS_COLLECTION).await, 20);
        assert_eq!(store.count(REVIEWS_COLLECTION).await, 400);
    }

    #[test]
    fn test_seed_with_defaults_without_runtime() {
        let store = Arc::new(MemoryStore::new());

        let err = seed_with_defaults(store).unwrap_err();

        assert!(matches!(err, LoaderError::NoRuntime(_)));
    }

    #[test]
    fn test_spawn_load_without_runtime() {
        let loader = Loader::new(Arc::new(MemoryStore::new()));

        let err = loader.spawn_load(small_dataset()).unwrap_err();

        assert!(matches!(err, LoaderError::NoRuntime(_)));
    }
}
