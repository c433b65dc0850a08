//! Store-neutral document representation.
//!
//! Every entity is converted to a [`Document`] before it reaches a store.
//! Store crates convert [`FieldValue`] into their native value types
//! (e.g. BSON for MongoDB).

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

/// A single field value inside a [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// String value
    String(String),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Timestamp in UTC
    DateTime(DateTime<Utc>),

    /// Nested document
    Map(Document),

    /// Null value
    Null,
}

impl FieldValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a timestamp.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as a nested document.
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Map(doc) => Some(doc),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        Self::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<Document> for FieldValue {
    fn from(doc: Document) -> Self {
        Self::Map(doc)
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::String(s) => serde_json::Value::String(s),
            FieldValue::Int(i) => serde_json::Value::from(i),
            // NaN and infinities have no JSON form
            FieldValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::DateTime(dt) => {
                serde_json::Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            FieldValue::Map(doc) => doc.into(),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

/// An ordered field-name → value mapping, the unit written to a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document(BTreeMap<String, FieldValue>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous value if the field existed.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(field.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_i64)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_f64)
    }

    pub fn get_document(&self, field: &str) -> Option<&Document> {
        self.get(field).and_then(FieldValue::as_document)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Document {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Document> for serde_json::Value {
    fn from(doc: Document) -> Self {
        serde_json::Value::Object(
            doc.into_iter()
                .map(|(field, value)| (field, value.into()))
                .collect(),
        )
    }
}

/// Conversion of an entity into its stored [`Document`] form.
pub trait ToDocument {
    fn to_document(&self) -> Document;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_accessors() {
        let doc = Document::new()
            .with("name", "Best Grill")
            .with("price", 2i64)
            .with("averageRating", 3.5)
            .with("owner", Document::new().with("userID", "u1"));

        assert_eq!(doc.get_str("name"), Some("Best Grill"));
        assert_eq!(doc.get_i64("price"), Some(2));
        assert_eq!(doc.get_f64("averageRating"), Some(3.5));
        assert_eq!(doc.get_f64("price"), Some(2.0));
        assert_eq!(
            doc.get_document("owner").and_then(|o| o.get_str("userID")),
            Some("u1")
        );
        assert!(doc.get("missing").is_none());
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_insert_replaces_existing_field() {
        let mut doc = Document::new();
        assert!(doc.insert("yumCount", 1i64).is_none());
        assert_eq!(doc.insert("yumCount", 2i64), Some(FieldValue::Int(1)));
        assert_eq!(doc.get_i64("yumCount"), Some(2));
    }

    #[test]
    fn test_document_to_json() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let doc = Document::new()
            .with("text", "Amazing!!")
            .with("rating", 5i64)
            .with("date", ts)
            .with("missing", FieldValue::Null);

        let json: serde_json::Value = doc.into();
        assert_eq!(json["text"], "Amazing!!");
        assert_eq!(json["rating"], 5);
        assert_eq!(json["date"], "2024-01-02T03:04:05.000Z");
        assert!(json["missing"].is_null());
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        let json: serde_json::Value = FieldValue::Float(f64::NAN).into();
        assert!(json.is_null());
    }
}
