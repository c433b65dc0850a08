//! yum-seed library
//!
//! Fabricates sample users, restaurants, reviews and yums for the
//! restaurant-review demo app and writes them to a document store in a
//! single atomic batch.
//!
//! # Crates
//!
//! - `seed_core` - entities, `Dataset`, store-neutral documents
//! - `seed_fabricator` - `Fabricator` and its configuration
//! - `seed_store` - `DocumentStore` trait and `MemoryStore`
//! - `seed_store_mongodb` - `MongoStore`
//! - `seed_loader` - `Loader`, `seed_with_defaults`
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed MongoDB with the default 20 users / 20 restaurants / 20 reviews each
//! yum-seed populate mongodb --mongodb-connection-string "mongodb://localhost:27017/?replicaSet=rs0"
//!
//! # Fabricate into memory and dump the result
//! yum-seed populate memory --seed 42 --output seed.json
//! ```

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::sync::Arc;

use seed_core::Dataset;
use seed_fabricator::Fabricator;
use seed_loader::{CommonSeedArgs, LoadMetrics, Loader};
use seed_store::{DocumentStore, MemoryStore};

/// Fabricate a dataset as described by the common arguments.
pub fn fabricate(args: &CommonSeedArgs) -> anyhow::Result<Dataset> {
    let config = args.fabricator_config();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dataset = Fabricator::new(config, rng)
        .context("Invalid fabricator configuration")?
        .generate()
        .context("Failed to fabricate dataset")?;
    Ok(dataset)
}

/// Fabricate and load into `store`.
///
/// Metrics are only returned by a strict load. Otherwise the commit runs
/// fire-and-forget: a failure is logged, never retried, and does not turn
/// into an error here.
pub async fn populate(
    store: Arc<dyn DocumentStore>,
    args: &CommonSeedArgs,
) -> anyhow::Result<Option<LoadMetrics>> {
    let dataset = fabricate(args)?;
    let loader = Loader::new(store);

    if args.dry_run {
        let batch = loader.build_batch(&dataset);
        for (collection, count) in batch.counts_by_collection() {
            tracing::info!("[dry-run] {}: {} documents", collection, count);
        }
        tracing::info!("[dry-run] Skipping commit of {} documents", batch.len());
        return Ok(None);
    }

    if args.strict {
        let metrics = loader
            .load(&dataset)
            .await
            .with_context(|| format!("Failed to seed {} store", loader.store().name()))?;
        return Ok(Some(metrics));
    }

    loader
        .spawn_load(dataset)?
        .await
        .context("Load task panicked")?;
    Ok(None)
}

/// Write the committed contents of a memory store as pretty JSON.
pub async fn write_snapshot(store: &MemoryStore, path: &Path) -> anyhow::Result<()> {
    let snapshot = store.snapshot_json().await;
    let json = serde_json::to_string_pretty(&snapshot)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
    tracing::info!("Wrote memory store snapshot to {}", path.display());
    Ok(())
}
