//! Runtime configuration of the indexer.

use std::env;

use tracing::debug;
use url::Url;

use super::settings::{settings_from_lookup, site_from_lookup};
use crate::IndexingError;
use cloudsearch_indexer_shared::{IndexerSettings, SiteContext};

/// Default maximum number of documents per upload batch.
const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// AWS region of the search domain.
    pub region: Option<String>,
    /// Shared credentials profile.
    pub profile: Option<String>,
    /// Name of the CloudSearch domain, needed for provisioning.
    pub domain_name: Option<String>,
    /// Document endpoint of the domain, needed for uploads.
    pub document_endpoint: Option<Url>,
    /// Maximum number of documents per upload batch.
    pub max_batch_size: usize,
    pub settings: IndexerSettings,
    pub site: SiteContext,
}

impl AppConfig {
    /// Load configuration from the process environment, after reading a
    /// `.env` file if one exists.
    ///
    /// # Environment Variables
    ///
    /// - `AWS_REGION`: region of the domain (default: SDK resolution)
    /// - `AWS_PROFILE`: credentials profile (default: SDK resolution)
    /// - `ACS_DOMAIN_NAME`: CloudSearch domain name
    /// - `ACS_DOCUMENT_ENDPOINT`: document endpoint URL
    /// - `ACS_MAX_BATCH_SIZE`: documents per upload batch (default: 1000)
    ///
    /// plus the indexer settings and site variables.
    pub fn from_env() -> Result<Self, IndexingError> {
        if dotenv::dotenv().is_ok() {
            debug!("Loaded .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let document_endpoint = non_blank("ACS_DOCUMENT_ENDPOINT")
            .map(|value| parse_endpoint(&value))
            .transpose()?;

        let max_batch_size = match non_blank("ACS_MAX_BATCH_SIZE") {
            Some(value) => parse_batch_size(&value)?,
            None => DEFAULT_MAX_BATCH_SIZE,
        };

        Ok(Self {
            region: non_blank("AWS_REGION"),
            profile: non_blank("AWS_PROFILE"),
            domain_name: non_blank("ACS_DOMAIN_NAME"),
            document_endpoint,
            max_batch_size,
            settings: settings_from_lookup(&lookup),
            site: site_from_lookup(&lookup)?,
        })
    }

    /// The domain name, or an error naming the missing variable.
    pub fn require_domain_name(&self) -> Result<&str, IndexingError> {
        self.domain_name
            .as_deref()
            .ok_or_else(|| IndexingError::config("ACS_DOMAIN_NAME is not set"))
    }

    /// The document endpoint, or an error naming the missing variable.
    pub fn require_document_endpoint(&self) -> Result<&Url, IndexingError> {
        self.document_endpoint
            .as_ref()
            .ok_or_else(|| IndexingError::config("ACS_DOCUMENT_ENDPOINT is not set"))
    }
}

fn parse_endpoint(value: &str) -> Result<Url, IndexingError> {
    let url = Url::parse(value.trim())
        .map_err(|e| IndexingError::config(format!("Invalid ACS_DOCUMENT_ENDPOINT: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(IndexingError::config(format!(
            "ACS_DOCUMENT_ENDPOINT must be http or https, got {}",
            scheme
        ))),
    }
}

fn parse_batch_size(value: &str) -> Result<usize, IndexingError> {
    match value.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(IndexingError::config(format!(
            "ACS_MAX_BATCH_SIZE must be a positive number, got '{}'",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, IndexingError> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert!(config.region.is_none());
        assert!(config.domain_name.is_none());
        assert!(config.document_endpoint.is_none());
        assert_eq!(config.max_batch_size, 1000);
        assert_eq!(config.site, SiteContext::default());
        assert!(config.require_domain_name().is_err());
        assert!(config.require_document_endpoint().is_err());
    }

    #[test]
    fn test_full_configuration() {
        let config = config(&[
            ("AWS_REGION", "eu-west-1"),
            ("AWS_PROFILE", "blog"),
            ("ACS_DOMAIN_NAME", "blog-search"),
            (
                "ACS_DOCUMENT_ENDPOINT",
                "https://doc-blog-search-abc.eu-west-1.cloudsearch.amazonaws.com",
            ),
            ("ACS_MAX_BATCH_SIZE", "250"),
            ("ACS_SCHEMA_FIELDS", "price"),
            ("ACS_BLOG_ID", "4"),
        ])
        .unwrap();

        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.profile.as_deref(), Some("blog"));
        assert_eq!(config.require_domain_name().unwrap(), "blog-search");
        assert_eq!(
            config.require_document_endpoint().unwrap().host_str(),
            Some("doc-blog-search-abc.eu-west-1.cloudsearch.amazonaws.com")
        );
        assert_eq!(config.max_batch_size, 250);
        assert_eq!(config.settings.custom_field_names(), vec!["price"]);
        assert_eq!(config.site.blog_id, 4);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config(&[("ACS_DOMAIN_NAME", "  "), ("ACS_DOCUMENT_ENDPOINT", "")]).unwrap();

        assert!(config.domain_name.is_none());
        assert!(config.document_endpoint.is_none());
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            config(&[("ACS_DOCUMENT_ENDPOINT", "not a url")]),
            Err(IndexingError::ConfigError(_))
        ));
        assert!(matches!(
            config(&[("ACS_DOCUMENT_ENDPOINT", "ftp://doc.example.com")]),
            Err(IndexingError::ConfigError(_))
        ));
    }

    #[test]
    fn test_invalid_batch_size() {
        for value in ["0", "-5", "many"] {
            assert!(
                matches!(
                    config(&[("ACS_MAX_BATCH_SIZE", value)]),
                    Err(IndexingError::ConfigError(_))
                ),
                "batch size {:?} should be rejected",
                value
            );
        }
    }
}
