//! CloudSearch configuration API client.
//!
//! Translates field definitions into the option bundles the configuration API
//! expects. Text and text-array fields are always searchable there and cannot
//! be faceted, so those flags are not sent for them.

use async_trait::async_trait;
use aws_sdk_cloudsearch::error::DisplayErrorContext;
use aws_sdk_cloudsearch::types::{
    DoubleOptions, IndexField, IndexFieldType, IntOptions, LiteralOptions, TextArrayOptions,
    TextOptions,
};
use aws_sdk_cloudsearch::Client;
use tracing::{debug, info};

use crate::errors::SchemaServiceError;
use crate::interfaces::SchemaService;
use cloudsearch_indexer_shared::{FieldDefinition, FieldType};

/// Client for the configuration API of one CloudSearch domain.
pub struct CloudSearchConfigClient {
    client: Client,
    domain_name: String,
}

impl CloudSearchConfigClient {
    /// Create a client managing the given domain.
    pub fn new(
        sdk_config: &aws_config::SdkConfig,
        domain_name: impl Into<String>,
    ) -> Result<Self, SchemaServiceError> {
        let domain_name = domain_name.into();
        if domain_name.trim().is_empty() {
            return Err(SchemaServiceError::connection("domain name is required"));
        }

        let client = Client::new(sdk_config);

        info!(domain = %domain_name, "Created CloudSearch configuration client");

        Ok(Self {
            client,
            domain_name,
        })
    }

    /// The domain this client manages.
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }
}

/// Build the configuration API representation of a field definition.
pub fn to_index_field(definition: &FieldDefinition) -> Result<IndexField, SchemaServiceError> {
    let options = &definition.options;
    let builder = IndexField::builder().index_field_name(&definition.name);

    let builder = match definition.field_type {
        FieldType::Int => builder.index_field_type(IndexFieldType::Int).int_options(
            IntOptions::builder()
                .facet_enabled(options.facet_enabled)
                .search_enabled(options.search_enabled)
                .return_enabled(options.return_enabled)
                .set_sort_enabled(options.sort_enabled)
                .build(),
        ),
        FieldType::Double => builder
            .index_field_type(IndexFieldType::Double)
            .double_options(
                DoubleOptions::builder()
                    .facet_enabled(options.facet_enabled)
                    .search_enabled(options.search_enabled)
                    .return_enabled(options.return_enabled)
                    .set_sort_enabled(options.sort_enabled)
                    .build(),
            ),
        FieldType::Literal => builder
            .index_field_type(IndexFieldType::Literal)
            .literal_options(
                LiteralOptions::builder()
                    .facet_enabled(options.facet_enabled)
                    .search_enabled(options.search_enabled)
                    .return_enabled(options.return_enabled)
                    .set_sort_enabled(options.sort_enabled)
                    .build(),
            ),
        FieldType::Text => builder.index_field_type(IndexFieldType::Text).text_options(
            TextOptions::builder()
                .return_enabled(options.return_enabled)
                .set_sort_enabled(options.sort_enabled)
                .set_highlight_enabled(options.highlight_enabled)
                .set_analysis_scheme(options.analysis_scheme.clone())
                .build(),
        ),
        FieldType::TextArray => builder
            .index_field_type(IndexFieldType::TextArray)
            .text_array_options(
                TextArrayOptions::builder()
                    .return_enabled(options.return_enabled)
                    .set_highlight_enabled(options.highlight_enabled)
                    .set_analysis_scheme(options.analysis_scheme.clone())
                    .build(),
            ),
    };

    builder
        .build()
        .map_err(|e| SchemaServiceError::invalid_definition(&definition.name, e.to_string()))
}

#[async_trait]
impl SchemaService for CloudSearchConfigClient {
    async fn define_index_field(
        &self,
        definition: &FieldDefinition,
    ) -> Result<(), SchemaServiceError> {
        let index_field = to_index_field(definition)?;

        self.client
            .define_index_field()
            .domain_name(&self.domain_name)
            .index_field(index_field)
            .send()
            .await
            .map_err(|e| {
                SchemaServiceError::define_field(&definition.name, DisplayErrorContext(&e).to_string())
            })?;

        debug!(
            field = %definition.name,
            field_type = %definition.field_type,
            "Index field defined"
        );
        Ok(())
    }

    async fn index_documents(&self) -> Result<Vec<String>, SchemaServiceError> {
        let output = self
            .client
            .index_documents()
            .domain_name(&self.domain_name)
            .send()
            .await
            .map_err(|e| SchemaServiceError::index_documents(DisplayErrorContext(&e).to_string()))?;

        let field_names = output.field_names().to_vec();
        info!(
            domain = %self.domain_name,
            field_count = field_names.len(),
            "Domain re-indexing requested"
        );
        Ok(field_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudsearch_indexer_shared::FieldOptions;

    #[test]
    fn test_int_field_options() {
        let definition = FieldDefinition::new("post_date", FieldType::Int, FieldOptions::all_enabled());

        let field = to_index_field(&definition).unwrap();

        assert_eq!(field.index_field_name(), "post_date");
        assert_eq!(field.index_field_type(), &IndexFieldType::Int);
        let options = field.int_options().unwrap();
        assert_eq!(options.facet_enabled(), Some(true));
        assert_eq!(options.sort_enabled(), Some(true));
        assert!(field.text_options().is_none());
    }

    #[test]
    fn test_text_field_options() {
        let definition = FieldDefinition::new(
            "post_title",
            FieldType::Text,
            FieldOptions::new(false, true, true, true)
                .with_highlight(true)
                .with_analysis_scheme("_en_default_"),
        );

        let field = to_index_field(&definition).unwrap();

        let options = field.text_options().unwrap();
        assert_eq!(options.return_enabled(), Some(true));
        assert_eq!(options.sort_enabled(), Some(true));
        assert_eq!(options.highlight_enabled(), Some(true));
        assert_eq!(options.analysis_scheme(), Some("_en_default_"));
    }

    #[test]
    fn test_text_array_field_options() {
        let definition = FieldDefinition::new(
            "category",
            FieldType::TextArray,
            FieldOptions::all_enabled()
                .without_sort()
                .with_highlight(false),
        );

        let field = to_index_field(&definition).unwrap();

        assert_eq!(field.index_field_type(), &IndexFieldType::TextArray);
        let options = field.text_array_options().unwrap();
        assert_eq!(options.return_enabled(), Some(true));
        assert_eq!(options.highlight_enabled(), Some(false));
        assert!(options.analysis_scheme().is_none());
    }

    #[test]
    fn test_double_and_literal_field_options() {
        let double = FieldDefinition::new(
            "cf_price",
            FieldType::Double,
            FieldOptions::new(false, true, true, false),
        );
        let literal = FieldDefinition::new("post_type", FieldType::Literal, FieldOptions::all_enabled());

        let double = to_index_field(&double).unwrap();
        let literal = to_index_field(&literal).unwrap();

        assert_eq!(double.double_options().unwrap().sort_enabled(), Some(false));
        assert_eq!(literal.literal_options().unwrap().facet_enabled(), Some(true));
    }
}
