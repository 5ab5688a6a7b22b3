//! Error types for the indexer repository.

mod schema_service_error;
mod submission_error;

pub use schema_service_error::SchemaServiceError;
pub use submission_error::SubmissionError;
