//! # CloudSearch Indexer
//!
//! Main library for the CloudSearch post indexer.
//!
//! This crate provides the configuration, dependency wiring and logging setup
//! used by the `cloudsearch-indexer` command.

pub mod config;
pub mod records;
pub mod telemetry;

pub use config::{AppConfig, Dependencies};

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] cloudsearch_indexer_pipeline::PipelineError),

    /// Document upload error.
    #[error("Submission error: {0}")]
    SubmissionError(#[from] cloudsearch_indexer_repository::SubmissionError),

    /// Schema service error.
    #[error("Schema service error: {0}")]
    SchemaServiceError(#[from] cloudsearch_indexer_repository::SchemaServiceError),

    /// Records file could not be parsed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
