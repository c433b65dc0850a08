//! Forward conversion: FieldValue → BSON value.

use bson::{Bson, DateTime as BsonDateTime};
use seed_core::{Document, FieldValue};

/// Wrapper for BSON values that can be inserted into MongoDB.
#[derive(Debug, Clone)]
pub struct BsonValue(pub Bson);

impl BsonValue {
    /// Get the inner BSON value.
    pub fn into_inner(self) -> Bson {
        self.0
    }
}

impl From<FieldValue> for BsonValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => BsonValue(Bson::Null),
            FieldValue::String(s) => BsonValue(Bson::String(s)),
            FieldValue::Int(i) => BsonValue(Bson::Int64(i)),
            FieldValue::Float(f) => BsonValue(Bson::Double(f)),
            // MongoDB dates have millisecond precision
            FieldValue::DateTime(dt) => BsonValue(Bson::DateTime(BsonDateTime::from_chrono(dt))),
            FieldValue::Map(doc) => BsonValue(Bson::Document(to_bson(doc))),
        }
    }
}

/// Convert a nested document without an `_id`.
fn to_bson(doc: Document) -> bson::Document {
    doc.into_iter()
        .map(|(field, value)| (field, BsonValue::from(value).into_inner()))
        .collect()
}

/// Convert a stored document, using `key` as its `_id`.
pub fn to_bson_document(key: &str, doc: Document) -> bson::Document {
    let mut out = bson::Document::new();
    out.insert("_id", key);
    for (field, value) in doc {
        out.insert(field, BsonValue::from(value).into_inner());
    }
    out
}
