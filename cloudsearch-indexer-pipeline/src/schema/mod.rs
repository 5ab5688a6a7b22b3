//! Schema module for the indexer pipeline.
//!
//! Builds the index field definitions of the search domain from the settings.
//! The set is derived fresh on every call.

mod builtin;

use tracing::{debug, warn};

pub use builtin::builtin_fields;
use crate::errors::MappingError;
use cloudsearch_indexer_shared::settings::{
    custom_field_key, custom_taxonomy_key, is_valid_field_key,
};
use cloudsearch_indexer_shared::{FieldDefinition, FieldOptions, FieldType, IndexerSettings};

/// Builds the merged field definition set.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    settings: IndexerSettings,
}

impl SchemaBuilder {
    pub fn new(settings: IndexerSettings) -> Self {
        Self { settings }
    }

    /// All field definitions: built-in fields, then custom fields, then custom
    /// taxonomies. A later definition replaces an earlier one with the same
    /// name in place.
    ///
    /// # Errors
    ///
    /// Returns `MappingError::Settings` when a configured custom field or
    /// taxonomy does not produce a valid index field name.
    pub fn build(&self) -> Result<Vec<FieldDefinition>, MappingError> {
        let mut definitions: Vec<FieldDefinition> = Vec::new();

        let merged = builtin_fields(&self.settings.analysis_scheme)
            .into_iter()
            .chain(self.custom_field_definitions()?)
            .chain(self.custom_taxonomy_definitions()?);

        for definition in merged {
            match definitions.iter_mut().find(|d| d.name == definition.name) {
                Some(existing) => *existing = definition,
                None => definitions.push(definition),
            }
        }

        debug!(field_count = definitions.len(), "Built index field definitions");
        Ok(definitions)
    }

    /// Names of all field definitions, in merge order.
    pub fn field_names(&self) -> Result<Vec<String>, MappingError> {
        Ok(self
            .build()?
            .into_iter()
            .map(|definition| definition.name)
            .collect())
    }

    /// Definitions of the configured custom fields.
    pub fn custom_field_definitions(&self) -> Result<Vec<FieldDefinition>, MappingError> {
        self.settings
            .custom_field_names()
            .iter()
            .map(|name| {
                let key = checked_key(custom_field_key(name), name)?;
                let sortable = self.settings.is_sortable_field(name);
                let options = FieldOptions::new(false, true, true, sortable);

                let (field_type, options) = if self.settings.is_int_field(name) {
                    (FieldType::Int, options)
                } else if self.settings.is_double_field(name) {
                    (FieldType::Double, options)
                } else {
                    (
                        FieldType::Text,
                        options
                            .with_highlight(false)
                            .with_analysis_scheme(&self.settings.analysis_scheme),
                    )
                };

                Ok(FieldDefinition::new(key, field_type, options))
            })
            .collect()
    }

    /// Definitions of the configured custom taxonomies.
    pub fn custom_taxonomy_definitions(&self) -> Result<Vec<FieldDefinition>, MappingError> {
        self.settings
            .custom_taxonomy_names()
            .iter()
            .map(|name| {
                Ok(FieldDefinition::new(
                    checked_key(custom_taxonomy_key(name), name)?,
                    FieldType::TextArray,
                    FieldOptions::new(false, true, true, false)
                        .with_highlight(false)
                        .with_analysis_scheme(&self.settings.analysis_scheme),
                ))
            })
            .collect()
    }
}

/// Pass `key` through if the search domain accepts it as a field name.
pub(crate) fn checked_key(key: String, configured_name: &str) -> Result<String, MappingError> {
    if !is_valid_field_key(&key) {
        warn!(name = %configured_name, key = %key, "Invalid index field name");
        return Err(MappingError::settings(format!(
            "'{}' does not produce a valid index field name",
            configured_name
        )));
    }
    Ok(key)
}
