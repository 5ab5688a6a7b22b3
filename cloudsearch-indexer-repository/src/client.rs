//! Index submitter implementation.
//!
//! This module provides the client application code uses to send document
//! operations to the search domain. Each call serializes its operations into
//! one batch and makes exactly one upload request; there is no retry.

use tracing::{debug, error, instrument, warn};

use crate::batch::serialize_batch;
use crate::config::SubmitterConfig;
use crate::errors::SubmissionError;
use crate::interfaces::DocumentService;
use cloudsearch_indexer_shared::DocumentEnvelope;

/// Sends batches of document operations to the search domain.
pub struct IndexSubmitter {
    service: Box<dyn DocumentService>,
    config: SubmitterConfig,
}

impl IndexSubmitter {
    /// Create a new IndexSubmitter with default configuration.
    pub fn new(service: Box<dyn DocumentService>) -> Self {
        Self {
            service,
            config: SubmitterConfig::default(),
        }
    }

    /// Create a new IndexSubmitter with custom configuration.
    pub fn with_config(service: Box<dyn DocumentService>, config: SubmitterConfig) -> Self {
        Self { service, config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), SubmissionError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(SubmissionError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Check if the serialized batch exceeds the configured byte limit.
    fn validate_batch_bytes(&self, bytes: usize) -> Result<(), SubmissionError> {
        if let Some(max) = self.config.max_batch_bytes {
            if bytes > max {
                return Err(SubmissionError::batch_too_large(bytes, max));
            }
        }
        Ok(())
    }

    /// Submit operations as a single batch.
    /// Input: non-empty slice of DocumentEnvelope (adds and deletes may be mixed)
    /// Output: Result<bool, SubmissionError>
    ///
    /// * `Ok(true)` - The endpoint reported `success`
    /// * `Ok(false)` - The endpoint answered with any other status
    /// * `Err(_)` - The batch was invalid or the request failed
    ///
    /// Note: The batch succeeds or fails as a unit; no per-document results
    /// are reported.
    #[instrument(skip(self, documents), fields(document_count = documents.len()))]
    pub async fn submit(&self, documents: &[DocumentEnvelope]) -> Result<bool, SubmissionError> {
        if documents.is_empty() {
            return Err(SubmissionError::validation(
                "At least one document is required",
            ));
        }

        self.validate_batch_size(documents.len())?;

        let batch = serialize_batch(documents)?;
        self.validate_batch_bytes(batch.byte_len())?;

        let response = match self.service.upload_documents(&batch).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Error uploading documents");
                return Err(e);
            }
        };

        if !response.is_success() {
            warn!(
                status = %response.status,
                warnings = ?response.warnings,
                "Document upload was not accepted"
            );
            return Ok(false);
        }

        debug!(
            adds = response.adds,
            deletes = response.deletes,
            "Documents uploaded"
        );
        Ok(true)
    }

    /// Submit a single operation.
    pub async fn submit_one(&self, document: DocumentEnvelope) -> Result<bool, SubmissionError> {
        self.submit(std::slice::from_ref(&document)).await
    }
}
