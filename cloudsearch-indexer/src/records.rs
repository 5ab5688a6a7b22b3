//! Reading post exports from disk.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::IndexingError;
use cloudsearch_indexer_pipeline::source::ContentExport;
use cloudsearch_indexer_pipeline::InMemoryContentStore;
use cloudsearch_indexer_shared::ContentRecord;

/// Read a JSON post export into a content store and its records.
pub fn read_export(
    path: impl AsRef<Path>,
) -> Result<(InMemoryContentStore, Vec<ContentRecord>), IndexingError> {
    let path = path.as_ref();
    let body = fs::read_to_string(path)?;
    let (store, records) = parse_export(&body)?;

    info!(path = %path.display(), record_count = records.len(), "Read post export");
    Ok((store, records))
}

/// Parse a JSON post export.
pub fn parse_export(
    body: &str,
) -> Result<(InMemoryContentStore, Vec<ContentRecord>), IndexingError> {
    let export: ContentExport = serde_json::from_str(body)?;
    Ok(InMemoryContentStore::from_export(export))
}
