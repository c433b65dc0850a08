//! Core types for the yum-seed sample data generator.
//!
//! This crate provides the foundational types shared by the fabricator,
//! the loader and the store backends:
//!
//! - [`User`], [`Restaurant`], [`Review`], [`Yum`] - the demo app's entities
//! - [`Rating`] - a validated 1..=5 star rating and its canned comment
//! - [`Dataset`] - the four collections produced by one fabrication run
//! - [`Document`] / [`FieldValue`] - store-neutral document representation
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-fabricator      (builds a Dataset)
//!    ├─── seed-store           (DocumentStore trait, MemoryStore)
//!    ├─── seed-store-mongodb   (FieldValue → BSON, MongoStore)
//!    └─── seed-loader          (Dataset → WriteBatch → commit)
//! ```

pub mod dataset;
pub mod model;
pub mod values;

// Re-exports for convenience
pub use dataset::Dataset;
pub use model::{
    new_id, InvalidRating, Rating, Restaurant, Review, User, Yum, RESTAURANTS_COLLECTION,
    REVIEWS_COLLECTION, USERS_COLLECTION, YUMS_COLLECTION,
};
pub use values::{Document, FieldValue, ToDocument};
