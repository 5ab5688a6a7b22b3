//! Schema service trait definition.

use async_trait::async_trait;

use crate::errors::SchemaServiceError;
use cloudsearch_indexer_shared::FieldDefinition;

/// Abstracts the configuration API of a search domain.
#[async_trait]
pub trait SchemaService: Send + Sync {
    /// Create or replace one index field.
    async fn define_index_field(
        &self,
        definition: &FieldDefinition,
    ) -> Result<(), SchemaServiceError>;

    /// Ask the domain to re-index its documents with the current fields.
    ///
    /// Returns the names of the fields being indexed.
    async fn index_documents(&self) -> Result<Vec<String>, SchemaServiceError>;
}
