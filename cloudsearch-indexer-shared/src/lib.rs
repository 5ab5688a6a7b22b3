//! # CloudSearch Indexer Shared
//!
//! Shared types used across the indexer crates: the content records read from
//! the blog, the document envelopes sent to the search domain, the index field
//! definitions and the plugin settings that drive both.

pub mod content;
pub mod document;
pub mod schema;
pub mod settings;

pub use content::{ContentRecord, Term};
pub use document::{document_key, DocumentEnvelope, FieldMap, FieldValue, SiteContext};
pub use schema::{FieldDefinition, FieldOptions, FieldType};
pub use settings::{
    custom_field_key, custom_taxonomy_key, is_valid_field_key, normalize_field_name,
    IndexerSettings, CUSTOM_FIELD_PREFIX, CUSTOM_TAXONOMY_PREFIX, MAX_FIELD_NAME_LEN,
};
