//! Amazon CloudSearch implementation of the search domain services.
//!
//! `CloudSearchDocumentClient` talks to a domain's document endpoint and
//! `CloudSearchConfigClient` to the configuration API that manages its index
//! fields.

mod config_client;
mod document_client;

pub use config_client::CloudSearchConfigClient;
pub use document_client::CloudSearchDocumentClient;
