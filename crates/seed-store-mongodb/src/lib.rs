//! MongoDB document store for yum-seed.
//!
//! Provides [`MongoStore`], a [`DocumentStore`](seed_store::DocumentStore)
//! that commits a whole write batch in one MongoDB transaction, and the
//! [`FieldValue`](seed_core::FieldValue) → BSON conversion it relies on.

pub mod args;
pub mod forward;
mod store;

pub use args::MongoDBArgs;
pub use forward::{to_bson_document, BsonValue};
pub use store::MongoStore;
