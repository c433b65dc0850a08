//! Loader for yum-seed datasets.
//!
//! Converts every entity of a [`Dataset`](seed_core::Dataset) into a document,
//! accumulates them in one [`WriteBatch`](seed_store::WriteBatch) and commits
//! it atomically:
//!
//! | Entity     | Collection    | Key                   |
//! |------------|---------------|-----------------------|
//! | User       | `users`       | user identifier       |
//! | Restaurant | `restaurants` | restaurant identifier |
//! | Review     | `reviews`     | review identifier     |
//! | Yum        | `yums`        | store-generated       |
//!
//! A failed commit is reported, not retried.

pub mod args;
pub mod error;
mod loader;

pub use args::CommonSeedArgs;
pub use error::LoaderError;
pub use loader::{seed_with_defaults, LoadMetrics, Loader};
