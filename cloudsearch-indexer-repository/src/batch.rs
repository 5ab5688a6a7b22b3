//! Batch serialization.
//!
//! Operations are serialized to a single JSON array. The document endpoint
//! rejects batches containing the vertical tab control character, so it is
//! removed from every string (and object key) before the body is produced.

use serde_json::Value;

use crate::errors::SubmissionError;
use crate::types::DocumentBatch;
use cloudsearch_indexer_shared::DocumentEnvelope;

/// Control character rejected by the document endpoint.
pub const VERTICAL_TAB: char = '\u{000B}';

/// Serialize operations into one JSON batch.
///
/// # Returns
///
/// * `Ok(DocumentBatch)` - A JSON array with one element per operation
/// * `Err(SubmissionError::SerializationError)` - If a value cannot be serialized
pub fn serialize_batch(documents: &[DocumentEnvelope]) -> Result<DocumentBatch, SubmissionError> {
    let mut value = serde_json::to_value(documents)?;
    strip_vertical_tabs(&mut value);

    let body = serde_json::to_string(&value)?;
    Ok(DocumentBatch::json(body, documents.len()))
}

fn strip_vertical_tabs(value: &mut Value) {
    match value {
        Value::String(text) => text.retain(|c| c != VERTICAL_TAB),
        Value::Array(items) => items.iter_mut().for_each(strip_vertical_tabs),
        Value::Object(map) => {
            let entries = std::mem::take(map);
            for (mut key, mut item) in entries {
                key.retain(|c| c != VERTICAL_TAB);
                strip_vertical_tabs(&mut item);
                map.insert(key, item);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
