//! Processor module for the indexer pipeline.
//!
//! Maps blog posts into search document envelopes.

mod coercion;
mod document_mapper;
mod enrichment;

pub use coercion::{coerce_double, coerce_int};
pub use document_mapper::{DocumentMapper, MappingSource, AUTHOR_NAME_PLACEHOLDER};
pub use enrichment::{EnricherRegistry, FieldEnricher};
