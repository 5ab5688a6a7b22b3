//! Indexer settings and site context read from the environment.

use cloudsearch_indexer_shared::{IndexerSettings, SiteContext};

use crate::IndexingError;

/// Read indexer settings through `lookup`. Unset variables keep their default.
///
/// # Environment Variables
///
/// - `ACS_SCHEMA_FIELDS`: custom field names
/// - `ACS_SCHEMA_TAXONOMIES`: custom taxonomy names
/// - `ACS_SCHEMA_FIELDS_INT`: comma-separated integer field names
/// - `ACS_SCHEMA_FIELDS_DOUBLE`: comma-separated double field names
/// - `ACS_SCHEMA_FIELDS_SORTABLE`: comma-separated sortable field names
/// - `ACS_SCHEMA_FIELDS_SEPARATOR`: term id/name separator (default: `|`)
/// - `ACS_SCHEMA_FIELDS_IMAGE_SIZE`: image size of the default image
/// - `ACS_SCHEMA_FIELDS_CUSTOM_IMAGE_ID`: multi-thumbnail image identifier
/// - `ACS_ANALYSIS_SCHEME`: analysis scheme of text fields (default: `_en_default_`)
pub fn settings_from_lookup<F>(lookup: F) -> IndexerSettings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = IndexerSettings::default();

    if let Some(value) = lookup("ACS_SCHEMA_FIELDS") {
        settings.schema_fields = value;
    }
    if let Some(value) = lookup("ACS_SCHEMA_TAXONOMIES") {
        settings.schema_taxonomies = value;
    }
    if let Some(value) = lookup("ACS_SCHEMA_FIELDS_INT") {
        settings.schema_fields_int = value;
    }
    if let Some(value) = lookup("ACS_SCHEMA_FIELDS_DOUBLE") {
        settings.schema_fields_double = value;
    }
    if let Some(value) = lookup("ACS_SCHEMA_FIELDS_SORTABLE") {
        settings.schema_fields_sortable = value;
    }
    if let Some(value) = lookup("ACS_SCHEMA_FIELDS_SEPARATOR").filter(|v| !v.is_empty()) {
        settings.fields_separator = value;
    }
    settings.image_size = lookup("ACS_SCHEMA_FIELDS_IMAGE_SIZE");
    settings.custom_image_id = lookup("ACS_SCHEMA_FIELDS_CUSTOM_IMAGE_ID");
    if let Some(value) = lookup("ACS_ANALYSIS_SCHEME").filter(|v| !v.trim().is_empty()) {
        settings.analysis_scheme = value;
    }

    settings
}

/// Read the site context through `lookup` (`ACS_SITE_ID`, `ACS_BLOG_ID`,
/// both default 1).
pub fn site_from_lookup<F>(lookup: F) -> Result<SiteContext, IndexingError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = SiteContext::default();
    let site_id = parse_id(&lookup, "ACS_SITE_ID")?.unwrap_or(defaults.site_id);
    let blog_id = parse_id(&lookup, "ACS_BLOG_ID")?.unwrap_or(defaults.blog_id);
    Ok(SiteContext::new(site_id, blog_id))
}

fn parse_id<F>(lookup: &F, key: &str) -> Result<Option<u64>, IndexingError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| IndexingError::config(format!("{} must be a number, got '{}'", key, value))),
        None => Ok(None),
    }
}
