//! Loader module for the indexer pipeline.
//!
//! Maps posts with the document mapper and submits them to the search domain.

use tracing::{debug, error, info, instrument, warn};

use crate::errors::PipelineError;
use crate::processor::{DocumentMapper, MappingSource};
use cloudsearch_indexer_repository::IndexSubmitter;
use cloudsearch_indexer_shared::{ContentRecord, DocumentEnvelope};

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records handed to the loader.
    pub total: usize,
    /// Records that produced a document.
    pub mapped: usize,
    /// Records skipped because mapping failed.
    pub skipped: usize,
    /// Batches the search domain accepted.
    pub batches_submitted: usize,
    /// Batches that were rejected or could not be sent.
    pub batches_failed: usize,
}

impl LoadSummary {
    /// Whether every record was mapped and every batch accepted.
    pub fn is_complete(&self) -> bool {
        self.skipped == 0 && self.batches_failed == 0
    }
}

/// Loader that indexes posts into the search domain.
///
/// The loader is responsible for:
/// - Mapping posts into add or delete operations
/// - Splitting bulk loads into batches within the submitter's limits
/// - Reporting which parts of a bulk load did not make it
pub struct IndexLoader {
    mapper: DocumentMapper,
    submitter: IndexSubmitter,
}

impl IndexLoader {
    /// Create a new loader with the given mapper and submitter.
    pub fn new(mapper: DocumentMapper, submitter: IndexSubmitter) -> Self {
        Self { mapper, submitter }
    }

    /// The mapper in use.
    pub fn mapper(&self) -> &DocumentMapper {
        &self.mapper
    }

    /// Index one post.
    ///
    /// Returns `Ok(false)` when the search domain did not accept the upload.
    /// A mapping failure is returned as an error and nothing is submitted.
    #[instrument(skip(self, record, source), fields(record_id = record.id))]
    pub async fn index_record(
        &self,
        record: &ContentRecord,
        source: MappingSource<'_>,
    ) -> Result<bool, PipelineError> {
        let document = self.mapper.map_add(record, source)?;
        Ok(self.submitter.submit_one(document).await?)
    }

    /// Remove one post from the index.
    #[instrument(skip(self, record), fields(record_id = record.id))]
    pub async fn delete_record(&self, record: &ContentRecord) -> Result<bool, PipelineError> {
        let document = self.mapper.map_delete(record);
        Ok(self.submitter.submit_one(document).await?)
    }

    /// Index many posts.
    ///
    /// Records that fail to map are logged and skipped. The remaining
    /// documents are submitted in batches of at most the submitter's batch
    /// size; a failed batch does not stop the following ones.
    #[instrument(skip(self, records, source), fields(record_count = records.len()))]
    pub async fn index_records(
        &self,
        records: &[ContentRecord],
        source: MappingSource<'_>,
    ) -> Result<LoadSummary, PipelineError> {
        let mut summary = LoadSummary {
            total: records.len(),
            ..LoadSummary::default()
        };

        let mut documents = Vec::with_capacity(records.len());
        for record in records {
            match self.mapper.map_add(record, source) {
                Ok(document) => documents.push(document),
                Err(e) => {
                    warn!(record_id = record.id, error = %e, "Skipping record that failed to map");
                    summary.skipped += 1;
                }
            }
        }
        summary.mapped = documents.len();

        self.submit_chunked(&documents, &mut summary).await;

        info!(
            total = summary.total,
            mapped = summary.mapped,
            skipped = summary.skipped,
            batches_submitted = summary.batches_submitted,
            batches_failed = summary.batches_failed,
            "Index load completed"
        );
        Ok(summary)
    }

    /// Remove many posts from the index.
    #[instrument(skip(self, records), fields(record_count = records.len()))]
    pub async fn delete_records(
        &self,
        records: &[ContentRecord],
    ) -> Result<LoadSummary, PipelineError> {
        let documents: Vec<DocumentEnvelope> = records
            .iter()
            .map(|record| self.mapper.map_delete(record))
            .collect();

        let mut summary = LoadSummary {
            total: records.len(),
            mapped: documents.len(),
            ..LoadSummary::default()
        };

        self.submit_chunked(&documents, &mut summary).await;

        info!(
            total = summary.total,
            batches_submitted = summary.batches_submitted,
            batches_failed = summary.batches_failed,
            "Delete load completed"
        );
        Ok(summary)
    }

    async fn submit_chunked(&self, documents: &[DocumentEnvelope], summary: &mut LoadSummary) {
        if documents.is_empty() {
            debug!("No documents to submit");
            return;
        }

        let chunk_size = self
            .submitter
            .config()
            .max_batch_size
            .unwrap_or(documents.len())
            .max(1);

        for (index, chunk) in documents.chunks(chunk_size).enumerate() {
            match self.submitter.submit(chunk).await {
                Ok(true) => {
                    debug!(batch = index, count = chunk.len(), "Batch accepted");
                    summary.batches_submitted += 1;
                }
                Ok(false) => {
                    warn!(batch = index, count = chunk.len(), "Batch rejected");
                    summary.batches_failed += 1;
                }
                Err(e) => {
                    error!(batch = index, count = chunk.len(), error = %e, "Failed to submit batch");
                    summary.batches_failed += 1;
                }
            }
        }
    }
}
