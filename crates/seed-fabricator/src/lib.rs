//! Sample data fabricator for the restaurant-review demo.
//!
//! This crate builds a [`Dataset`](seed_core::Dataset) of users, restaurants,
//! reviews and yums whose cross references and aggregates are consistent:
//!
//! ```text
//! FabricatorConfig (N users, M restaurants, K reviews, L max yums)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  Fabricator<R>   │
//! │                  │
//! │  1. users        │
//! │  2. restaurants  │  owner = random user
//! │  3. reviews      │  folds rating into restaurant average
//! │  4. yums         │  i-th yum by i-th user, bumps yumCount
//! └────────┬─────────┘
//!          │
//!          ▼
//!       Dataset
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_fabricator::{Fabricator, FabricatorConfig};
//!
//! let mut fabricator = Fabricator::with_seed(FabricatorConfig::default(), 42).unwrap();
//! let dataset = fabricator.generate().unwrap();
//! assert_eq!(dataset.users.len(), 20);
//! assert_eq!(dataset.reviews.len(), 400);
//! ```

pub mod config;
pub mod fabricator;
pub mod pools;

// Re-exports for convenience
pub use config::FabricatorConfig;
pub use fabricator::{Fabricator, FabricatorError};
