//! Collection/document handles and write batches.

use seed_core::Document;
use std::collections::BTreeMap;
use std::fmt;

/// Produces a fresh key for a document written without a natural key.
pub type KeyGenerator = fn() -> String;

/// Default store-generated key: a UUID v4 without hyphens.
pub fn default_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Handle to a named collection.
#[derive(Debug, Clone)]
pub struct CollectionRef {
    name: String,
    generate_key: KeyGenerator,
}

impl CollectionRef {
    pub fn new(name: impl Into<String>, generate_key: KeyGenerator) -> Self {
        Self {
            name: name.into(),
            generate_key,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Document with an explicit key.
    pub fn doc(&self, key: impl Into<String>) -> DocumentRef {
        DocumentRef {
            collection: self.name.clone(),
            key: key.into(),
        }
    }

    /// Document with a store-generated key.
    pub fn new_doc(&self) -> DocumentRef {
        self.doc((self.generate_key)())
    }
}

/// Address of a single document: collection plus key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentRef {
    pub collection: String,
    pub key: String,
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.key)
    }
}

/// A single pending write.
#[derive(Debug, Clone, PartialEq)]
pub struct Write {
    pub target: DocumentRef,
    pub document: Document,
}

/// Writes accumulated for one atomic commit.
///
/// A batch only records writes; nothing reaches a store until it is passed
/// to [`DocumentStore::commit`](crate::DocumentStore::commit).
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    writes: Vec<Write>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full contents of a document, replacing whatever is stored.
    pub fn set(&mut self, target: DocumentRef, document: Document) -> &mut Self {
        self.writes.push(Write { target, document });
        self
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn writes(&self) -> &[Write] {
        &self.writes
    }

    pub fn into_writes(self) -> Vec<Write> {
        self.writes
    }

    /// Number of writes per collection.
    pub fn counts_by_collection(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for write in &self.writes {
            *counts.entry(write.target.collection.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// The first document addressed more than once, if any.
    pub fn first_duplicate(&self) -> Option<&DocumentRef> {
        let mut seen = std::collections::HashSet::with_capacity(self.writes.len());
        self.writes
            .iter()
            .map(|write| &write.target)
            .find(|target| !seen.insert(*target))
    }
}
