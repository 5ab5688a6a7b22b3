//! Submission error types.
//!
//! This module defines the errors that can occur while uploading a batch of
//! documents to the search domain.

use thiserror::Error;

/// Errors that can occur while submitting documents.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    /// Validation error (e.g., an empty batch).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to serialize the batch.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Failed to set up or reach the document endpoint.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The upload request failed.
    #[error("Upload error: {0}")]
    UploadError(String),

    /// Batch size exceeds configured maximum.
    #[error("Batch size {provided} exceeds maximum {max}")]
    BatchSizeExceeded { provided: usize, max: usize },

    /// Serialized batch exceeds configured maximum byte size.
    #[error("Batch of {provided} bytes exceeds maximum {max} bytes")]
    BatchTooLarge { provided: usize, max: usize },
}

impl SubmissionError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an upload error.
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::UploadError(msg.into())
    }

    /// Create a batch size exceeded error.
    pub fn batch_size_exceeded(provided: usize, max: usize) -> Self {
        Self::BatchSizeExceeded { provided, max }
    }

    /// Create a batch too large error.
    pub fn batch_too_large(provided: usize, max: usize) -> Self {
        Self::BatchTooLarge { provided, max }
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
