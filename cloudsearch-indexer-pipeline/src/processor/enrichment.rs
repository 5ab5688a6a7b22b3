//! Field enrichment extension point.
//!
//! Themes and other integrations add or rewrite document fields for the post
//! types they own. Enrichers are registered per post type and run in
//! registration order, each receiving the output of the previous one.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::MappingError;
use cloudsearch_indexer_shared::{ContentRecord, FieldMap};

/// Transforms the field map of a document before it is finalized.
pub trait FieldEnricher: Send + Sync {
    /// Return the fields to index for `record`.
    ///
    /// `from_save` is true when mapping runs while the record is being saved.
    fn enrich(
        &self,
        fields: FieldMap,
        record: &ContentRecord,
        from_save: bool,
    ) -> Result<FieldMap, MappingError>;
}

impl<F> FieldEnricher for F
where
    F: Fn(FieldMap, &ContentRecord, bool) -> Result<FieldMap, MappingError> + Send + Sync,
{
    fn enrich(
        &self,
        fields: FieldMap,
        record: &ContentRecord,
        from_save: bool,
    ) -> Result<FieldMap, MappingError> {
        self(fields, record, from_save)
    }
}

/// Enrichers keyed by post type.
#[derive(Default, Clone)]
pub struct EnricherRegistry {
    by_post_type: HashMap<String, Vec<Arc<dyn FieldEnricher>>>,
}

impl EnricherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enricher for a post type.
    pub fn register(&mut self, post_type: impl Into<String>, enricher: Arc<dyn FieldEnricher>) {
        self.by_post_type
            .entry(post_type.into())
            .or_default()
            .push(enricher);
    }

    /// Number of enrichers registered for a post type.
    pub fn count(&self, post_type: &str) -> usize {
        self.by_post_type.get(post_type).map_or(0, Vec::len)
    }

    /// Run the enrichers of the record's post type. Without any, the fields
    /// are returned unchanged.
    pub fn apply(
        &self,
        fields: FieldMap,
        record: &ContentRecord,
        from_save: bool,
    ) -> Result<FieldMap, MappingError> {
        let Some(enrichers) = self.by_post_type.get(&record.post_type) else {
            return Ok(fields);
        };

        enrichers
            .iter()
            .try_fold(fields, |fields, enricher| {
                enricher.enrich(fields, record, from_save)
            })
    }
}

impl std::fmt::Debug for EnricherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .by_post_type
            .iter()
            .map(|(post_type, enrichers)| (post_type.as_str(), enrichers.len()))
            .collect();
        f.debug_struct("EnricherRegistry")
            .field("by_post_type", &counts)
            .finish()
    }
}
