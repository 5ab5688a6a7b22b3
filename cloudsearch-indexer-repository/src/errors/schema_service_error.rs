//! Schema service error types.

use thiserror::Error;

/// Errors that can occur while configuring the index fields of a domain.
#[derive(Debug, Clone, Error)]
pub enum SchemaServiceError {
    /// The field definition cannot be expressed for the remote service.
    #[error("Invalid field definition for {field}: {message}")]
    InvalidDefinition { field: String, message: String },

    /// Defining an index field failed.
    #[error("Define field error for {field}: {message}")]
    DefineFieldError { field: String, message: String },

    /// Requesting the domain to re-index failed.
    #[error("Index documents error: {0}")]
    IndexDocumentsError(String),

    /// Failed to set up the configuration client.
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

impl SchemaServiceError {
    /// Create an invalid definition error.
    pub fn invalid_definition(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a define field error.
    pub fn define_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DefineFieldError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an index documents error.
    pub fn index_documents(msg: impl Into<String>) -> Self {
        Self::IndexDocumentsError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }
}
