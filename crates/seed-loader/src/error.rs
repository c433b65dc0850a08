//! Error types for the loader.

use seed_fabricator::FabricatorError;
use seed_store::StoreError;
use thiserror::Error;
use tokio::runtime::TryCurrentError;

/// Errors that can occur while seeding.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Fabrication was refused or failed.
    #[error("Fabrication error: {0}")]
    Fabricator(#[from] FabricatorError),

    /// The store rejected the batch commit.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A background commit was requested outside a Tokio runtime.
    #[error("No Tokio runtime to run the commit on: {0}")]
    NoRuntime(#[from] TryCurrentError),
}
