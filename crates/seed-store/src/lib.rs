//! Document store capability for yum-seed.
//!
//! The loader only talks to a store through [`DocumentStore`]: collection
//! handles, document handles with explicit or store-generated keys, a
//! [`WriteBatch`] of pending writes and one atomic commit.
//!
//! ## Storage Backends
//!
//! - [`MemoryStore`] - in-process, used for dry runs and tests
//! - `MongoStore` - MongoDB, in the seed-store-mongodb crate

pub mod batch;
mod memory;
mod store;

pub use batch::{default_key, CollectionRef, DocumentRef, KeyGenerator, Write, WriteBatch};
pub use memory::MemoryStore;
pub use store::{DocumentStore, StoreError};
