//! Request and response types for document uploads.

/// Content type of JSON document batches.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Response status the document endpoint reports for an accepted batch.
pub const STATUS_SUCCESS: &str = "success";

/// A serialized batch ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentBatch {
    /// Serialized operations.
    pub body: String,
    /// Content type sent with the body.
    pub content_type: &'static str,
    /// Number of operations in the body.
    pub document_count: usize,
}

impl DocumentBatch {
    /// Create a JSON batch.
    pub fn json(body: String, document_count: usize) -> Self {
        Self {
            body,
            content_type: CONTENT_TYPE_JSON,
            document_count,
        }
    }

    /// Size of the body in bytes.
    pub fn byte_len(&self) -> usize {
        self.body.len()
    }
}

/// Response of the document endpoint to an upload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadResponse {
    /// Status reported by the endpoint; `success` when the batch was accepted.
    pub status: String,
    /// Number of documents added.
    pub adds: i64,
    /// Number of documents deleted.
    pub deletes: i64,
    /// Warnings returned alongside the status.
    pub warnings: Vec<String>,
}

impl UploadResponse {
    /// Create a response with the given status and no counts.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    /// Whether the endpoint accepted the batch.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
