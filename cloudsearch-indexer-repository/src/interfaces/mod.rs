//! Interface definitions for the search domain services.
//!
//! This module defines the abstract `DocumentService` and `SchemaService`
//! traits that allow for dependency injection and swappable backends.

mod document_service;
mod schema_service;

pub use document_service::DocumentService;
pub use schema_service::SchemaService;
