//! Document service trait definition.

use async_trait::async_trait;

use crate::errors::SubmissionError;
use crate::types::{DocumentBatch, UploadResponse};

/// Abstracts the document upload endpoint of a search domain.
///
/// Implementations are injected into `IndexSubmitter`, which enables easy
/// testing with mock implementations.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Upload one serialized batch of document operations.
    ///
    /// # Arguments
    ///
    /// * `batch` - The serialized batch and its content type
    ///
    /// # Returns
    ///
    /// * `Ok(UploadResponse)` - The endpoint answered; check its status
    /// * `Err(SubmissionError)` - If the request could not be completed
    async fn upload_documents(&self, batch: &DocumentBatch)
        -> Result<UploadResponse, SubmissionError>;
}
