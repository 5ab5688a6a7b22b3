//! Provisioner module for the indexer pipeline.
//!
//! Defines the index fields on the search domain and asks it to rebuild its
//! index.

use tracing::{error, info, instrument};

use crate::errors::PipelineError;
use crate::schema::SchemaBuilder;
use cloudsearch_indexer_repository::SchemaService;

/// A field the search domain refused to define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: String,
    pub message: String,
}

/// Outcome of a provisioning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionSummary {
    /// Fields defined successfully, in schema order.
    pub defined: Vec<String>,
    /// Fields whose definition failed.
    pub failed: Vec<FieldFailure>,
    /// Fields the domain reported as being re-indexed.
    pub reindexed: Vec<String>,
}

impl ProvisionSummary {
    /// Whether every field was defined.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Pushes the field definitions built from the settings to the search domain.
pub struct SchemaProvisioner {
    service: Box<dyn SchemaService>,
    builder: SchemaBuilder,
}

impl SchemaProvisioner {
    pub fn new(service: Box<dyn SchemaService>, builder: SchemaBuilder) -> Self {
        Self { service, builder }
    }

    /// Define every index field, then request re-indexing.
    ///
    /// A field that fails to define is recorded in the summary and the run
    /// continues. The run fails before contacting the domain when a custom
    /// name is not a valid field name, and fails when no field could be
    /// defined at all or when re-indexing cannot be requested.
    #[instrument(skip(self))]
    pub async fn provision(&self) -> Result<ProvisionSummary, PipelineError> {
        let definitions = self.builder.build()?;
        let mut summary = ProvisionSummary::default();

        for definition in &definitions {
            match self.service.define_index_field(definition).await {
                Ok(()) => summary.defined.push(definition.name.clone()),
                Err(e) => {
                    error!(field = %definition.name, error = %e, "Failed to define index field");
                    summary.failed.push(FieldFailure {
                        field: definition.name.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        if summary.defined.is_empty() && !summary.failed.is_empty() {
            return Err(PipelineError::provisioner(format!(
                "None of the {} index fields could be defined",
                summary.failed.len()
            )));
        }

        summary.reindexed = self.service.index_documents().await?;

        info!(
            defined = summary.defined.len(),
            failed = summary.failed.len(),
            reindexed = summary.reindexed.len(),
            "Schema provisioning completed"
        );
        Ok(summary)
    }
}
