//! CloudSearch document endpoint client.

use async_trait::async_trait;
use aws_sdk_cloudsearchdomain::error::DisplayErrorContext;
use aws_sdk_cloudsearchdomain::primitives::ByteStream;
use aws_sdk_cloudsearchdomain::types::ContentType;
use aws_sdk_cloudsearchdomain::Client;
use tracing::{debug, info};
use url::Url;

use crate::errors::SubmissionError;
use crate::interfaces::DocumentService;
use crate::types::{DocumentBatch, UploadResponse};

/// Client for the document endpoint of one CloudSearch domain.
///
/// # Example
///
/// ```ignore
/// let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
/// let client = CloudSearchDocumentClient::new(
///     &sdk_config,
///     "https://doc-blog-abc123.eu-west-1.cloudsearch.amazonaws.com",
/// )?;
/// let submitter = IndexSubmitter::new(Box::new(client));
/// ```
pub struct CloudSearchDocumentClient {
    client: Client,
    endpoint: Url,
}

impl CloudSearchDocumentClient {
    /// Create a client for the given document endpoint.
    ///
    /// # Arguments
    ///
    /// * `sdk_config` - Shared AWS configuration (region, credentials)
    /// * `endpoint` - The domain's document endpoint URL
    ///
    /// # Returns
    ///
    /// * `Ok(CloudSearchDocumentClient)` - A new client instance
    /// * `Err(SubmissionError)` - If the endpoint is not an http(s) URL
    pub fn new(
        sdk_config: &aws_config::SdkConfig,
        endpoint: &str,
    ) -> Result<Self, SubmissionError> {
        let endpoint = parse_endpoint(endpoint)?;

        let config = aws_sdk_cloudsearchdomain::config::Builder::from(sdk_config)
            .endpoint_url(endpoint.as_str())
            .build();
        let client = Client::from_conf(config);

        info!(endpoint = %endpoint, "Created CloudSearch document client");

        Ok(Self { client, endpoint })
    }

    /// The document endpoint this client uploads to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, SubmissionError> {
    let url = Url::parse(endpoint).map_err(|e| SubmissionError::connection(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(SubmissionError::connection(format!(
            "Unsupported endpoint scheme: {}",
            scheme
        ))),
    }
}

#[async_trait]
impl DocumentService for CloudSearchDocumentClient {
    async fn upload_documents(
        &self,
        batch: &DocumentBatch,
    ) -> Result<UploadResponse, SubmissionError> {
        let output = self
            .client
            .upload_documents()
            .documents(ByteStream::from(batch.body.clone().into_bytes()))
            .content_type(ContentType::from(batch.content_type))
            .send()
            .await
            .map_err(|e| SubmissionError::upload(DisplayErrorContext(&e).to_string()))?;

        let response = UploadResponse {
            status: output.status().unwrap_or_default().to_string(),
            adds: output.adds(),
            deletes: output.deletes(),
            warnings: output
                .warnings()
                .iter()
                .filter_map(|warning| warning.message())
                .map(str::to_string)
                .collect(),
        };

        debug!(
            status = %response.status,
            adds = response.adds,
            deletes = response.deletes,
            "Upload response received"
        );
        Ok(response)
    }
}
