//! Dependency initialization and wiring for the indexer.

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::info;

use super::AppConfig;
use crate::IndexingError;
use cloudsearch_indexer_pipeline::{
    ContentStore, DocumentMapper, IndexLoader, SchemaBuilder, SchemaProvisioner,
};
use cloudsearch_indexer_repository::{
    CloudSearchConfigClient, CloudSearchDocumentClient, IndexSubmitter, SubmitterConfig,
};

/// Container for the initialized AWS configuration and the components built
/// from it.
pub struct Dependencies {
    config: AppConfig,
    sdk_config: SdkConfig,
}

impl Dependencies {
    /// Resolve the AWS configuration for the configured region and profile.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Ready to build clients
    /// * `Err(IndexingError)` - If initialization fails
    pub async fn new(config: AppConfig) -> Result<Self, IndexingError> {
        info!(
            region = ?config.region,
            profile = ?config.profile,
            domain = ?config.domain_name,
            "Initializing dependencies"
        );

        let sdk_config = build_sdk_config(&config).await;

        Ok(Self { config, sdk_config })
    }

    /// The configuration the dependencies were built from.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Schema builder over the configured settings.
    pub fn schema_builder(&self) -> SchemaBuilder {
        SchemaBuilder::new(self.config.settings.clone())
    }

    /// Provisioner for the configured domain.
    pub fn provisioner(&self) -> Result<SchemaProvisioner, IndexingError> {
        let domain_name = self.config.require_domain_name()?;
        let client = CloudSearchConfigClient::new(&self.sdk_config, domain_name)?;

        Ok(SchemaProvisioner::new(Box::new(client), self.schema_builder()))
    }

    /// Loader uploading to the configured document endpoint, reading content
    /// from `store`.
    pub fn loader(&self, store: Arc<dyn ContentStore>) -> Result<IndexLoader, IndexingError> {
        let endpoint = self.config.require_document_endpoint()?;
        let client = CloudSearchDocumentClient::new(&self.sdk_config, endpoint.as_str())?;

        let submitter = IndexSubmitter::with_config(
            Box::new(client),
            SubmitterConfig::with_max_batch_size(self.config.max_batch_size),
        );
        let mapper = DocumentMapper::new(self.config.settings.clone(), self.config.site, store);

        info!(endpoint = %endpoint, "Index loader ready");
        Ok(IndexLoader::new(mapper, submitter))
    }
}

async fn build_sdk_config(config: &AppConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    loader.load().await
}
