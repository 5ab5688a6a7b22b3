//! Error types for the indexer pipeline.

use cloudsearch_indexer_repository::{SchemaServiceError, SubmissionError};
use thiserror::Error;

/// Errors raised by a content store lookup.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// The store could not answer the lookup.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Errors that can occur while mapping a record into a document.
#[derive(Error, Debug, Clone)]
pub enum MappingError {
    /// A content store lookup failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The settings cannot be applied to the record.
    #[error("Settings error: {0}")]
    Settings(String),

    /// A field enricher rejected the document.
    #[error("Enrichment error for post type {post_type}: {message}")]
    Enrichment { post_type: String, message: String },
}

impl MappingError {
    /// Create a settings error.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    /// Create an enrichment error.
    pub fn enrichment(post_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Enrichment {
            post_type: post_type.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur in the indexer pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error from the processor component.
    #[error("Mapping error: {0}")]
    MappingError(#[from] MappingError),

    /// Error from the submitter.
    #[error("Submission error: {0}")]
    SubmissionError(#[from] SubmissionError),

    /// Error from the schema service.
    #[error("Schema service error: {0}")]
    SchemaServiceError(#[from] SchemaServiceError),

    /// Error from the provisioner component.
    #[error("Provisioner error: {0}")]
    ProvisionerError(String),
}

impl PipelineError {
    /// Create a provisioner error.
    pub fn provisioner(msg: impl Into<String>) -> Self {
        Self::ProvisionerError(msg.into())
    }
}
