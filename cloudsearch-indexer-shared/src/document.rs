//! Search documents and their operation envelopes.
//!
//! The search domain accepts a JSON array of operations, each shaped as
//! `{"type": "add", "id": "...", "fields": {...}}` or
//! `{"type": "delete", "id": "..."}`. `DocumentEnvelope` serializes to exactly
//! that shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single field value in a search document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Double(f64),
    Text(String),
    TextList(Vec<String>),
}

impl FieldValue {
    /// Whether the value counts as empty for the purpose of dropping a field.
    ///
    /// Empty strings, the string `"0"`, numeric zero and empty lists are empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Int(value) => *value == 0,
            FieldValue::Double(value) => *value == 0.0,
            FieldValue::Text(value) => value.is_empty() || value == "0",
            FieldValue::TextList(values) => values.is_empty(),
        }
    }

    /// Borrow the value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

/// Ids above `i64::MAX` saturate instead of wrapping negative.
impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Double(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::TextList(values)
    }
}

/// Field name to value map of a search document.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Identifies the site and blog a record belongs to in a multi-site install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContext {
    pub site_id: u64,
    pub blog_id: u64,
}

impl SiteContext {
    pub fn new(site_id: u64, blog_id: u64) -> Self {
        Self { site_id, blog_id }
    }

    /// Document key for a record of this site and blog.
    pub fn document_key(&self, record_id: u64) -> String {
        document_key(self, record_id)
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self {
            site_id: 1,
            blog_id: 1,
        }
    }
}

/// Build the document key for a record.
///
/// Uses format: `{site_id}_{blog_id}_{record_id}` so that records from
/// different blogs sharing one search domain never collide.
pub fn document_key(site: &SiteContext, record_id: u64) -> String {
    format!("{}_{}_{}", site.site_id, site.blog_id, record_id)
}

/// One operation in an upload batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocumentEnvelope {
    /// Add the document, replacing any document with the same key.
    Add { id: String, fields: FieldMap },
    /// Remove the document with the given key.
    Delete { id: String },
}

impl DocumentEnvelope {
    pub fn add(id: impl Into<String>, fields: FieldMap) -> Self {
        DocumentEnvelope::Add {
            id: id.into(),
            fields,
        }
    }

    pub fn delete(id: impl Into<String>) -> Self {
        DocumentEnvelope::Delete { id: id.into() }
    }

    /// The document key this operation targets.
    pub fn id(&self) -> &str {
        match self {
            DocumentEnvelope::Add { id, .. } | DocumentEnvelope::Delete { id } => id,
        }
    }

    /// The operation tag as sent to the search domain.
    pub fn operation(&self) -> &'static str {
        match self {
            DocumentEnvelope::Add { .. } => "add",
            DocumentEnvelope::Delete { .. } => "delete",
        }
    }

    /// The document fields, `None` for deletes.
    pub fn fields(&self) -> Option<&FieldMap> {
        match self {
            DocumentEnvelope::Add { fields, .. } => Some(fields),
            DocumentEnvelope::Delete { .. } => None,
        }
    }
}
