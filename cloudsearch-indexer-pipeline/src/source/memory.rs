//! In-memory content store.
//!
//! Backs the command line tool, which reads posts from a JSON export, and the
//! tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ContentStore;
use crate::errors::StoreError;
use cloudsearch_indexer_shared::{ContentRecord, Term};

/// A post together with everything the content store knows about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPost {
    #[serde(flatten)]
    pub record: ContentRecord,
    /// Terms keyed by taxonomy name.
    #[serde(default)]
    pub terms: HashMap<String, Vec<Term>>,
    /// Custom metadata keyed by field name.
    #[serde(default)]
    pub meta: HashMap<String, String>,
    /// Featured image URLs keyed by image size.
    #[serde(default)]
    pub thumbnails: HashMap<String, String>,
}

/// A JSON export of posts and their authors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentExport {
    /// Author display names keyed by author id.
    #[serde(default)]
    pub authors: HashMap<u64, String>,
    #[serde(default)]
    pub posts: Vec<StoredPost>,
}

/// Content store holding everything in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    authors: HashMap<u64, String>,
    terms: HashMap<(u64, String), Vec<Term>>,
    meta: HashMap<(u64, String), String>,
    thumbnails: HashMap<(u64, String), String>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an export, returning the store and the exported records.
    pub fn from_export(export: ContentExport) -> (Self, Vec<ContentRecord>) {
        let mut store = Self {
            authors: export.authors,
            ..Self::default()
        };
        let mut records = Vec::with_capacity(export.posts.len());

        for post in export.posts {
            let id = post.record.id;
            for (taxonomy, terms) in post.terms {
                store.terms.insert((id, taxonomy), terms);
            }
            for (key, value) in post.meta {
                store.meta.insert((id, key), value);
            }
            for (size, url) in post.thumbnails {
                store.thumbnails.insert((id, size), url);
            }
            records.push(post.record);
        }

        (store, records)
    }

    /// Register an author display name.
    pub fn with_author(mut self, author_id: u64, name: impl Into<String>) -> Self {
        self.authors.insert(author_id, name.into());
        self
    }

    /// Attach terms of a taxonomy to a record.
    pub fn with_terms(mut self, record_id: u64, taxonomy: impl Into<String>, terms: Vec<Term>) -> Self {
        self.terms.insert((record_id, taxonomy.into()), terms);
        self
    }

    /// Set a custom metadata value of a record.
    pub fn with_meta(
        mut self,
        record_id: u64,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.meta.insert((record_id, key.into()), value.into());
        self
    }

    /// Set the featured image URL of a record at a size.
    pub fn with_thumbnail(
        mut self,
        record_id: u64,
        size: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.thumbnails.insert((record_id, size.into()), url.into());
        self
    }
}

impl ContentStore for InMemoryContentStore {
    fn author_display_name(&self, author_id: u64) -> Result<Option<String>, StoreError> {
        Ok(self.authors.get(&author_id).cloned())
    }

    fn terms(&self, record_id: u64, taxonomy: &str) -> Result<Vec<Term>, StoreError> {
        Ok(self
            .terms
            .get(&(record_id, taxonomy.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn meta_value(&self, record_id: u64, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.meta.get(&(record_id, key.to_string())).cloned())
    }

    fn thumbnail_url(&self, record_id: u64, size: &str) -> Result<Option<String>, StoreError> {
        Ok(self.thumbnails.get(&(record_id, size.to_string())).cloned())
    }
}
