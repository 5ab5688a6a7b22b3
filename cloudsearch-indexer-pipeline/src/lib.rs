//! # CloudSearch Indexer Pipeline
//!
//! This crate turns blog posts into search documents and gets them, and the
//! index field schema, into the search domain.
//!
//! ## Architecture
//!
//! 1. **Source**: Content store and image extension seams over the blog
//! 2. **Processor**: Maps a post into an add or delete document envelope
//! 3. **Schema**: Builds the index field definitions from the settings
//! 4. **Loader**: Maps posts and submits them as upload batches
//! 5. **Provisioner**: Defines the index fields on the search domain

pub mod errors;
pub mod loader;
pub mod processor;
pub mod provisioner;
pub mod schema;
pub mod source;

pub use errors::{MappingError, PipelineError, StoreError};
pub use loader::{IndexLoader, LoadSummary};
pub use processor::{DocumentMapper, FieldEnricher, MappingSource};
pub use provisioner::{FieldFailure, ProvisionSummary, SchemaProvisioner};
pub use schema::SchemaBuilder;
pub use source::{ContentStore, InMemoryContentStore, ThumbnailProvider};
