//! # CloudSearch Indexer Repository
//!
//! This crate provides traits and implementations for talking to the search
//! domain. It includes the error types, the document and configuration
//! service interfaces, batch serialization, the index submitter and a concrete
//! implementation for Amazon CloudSearch.

pub mod batch;
pub mod client;
pub mod cloudsearch;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod types;

pub use client::IndexSubmitter;
pub use cloudsearch::{CloudSearchConfigClient, CloudSearchDocumentClient};
pub use config::SubmitterConfig;
pub use errors::{SchemaServiceError, SubmissionError};
pub use interfaces::{DocumentService, SchemaService};
pub use types::{DocumentBatch, UploadResponse};
