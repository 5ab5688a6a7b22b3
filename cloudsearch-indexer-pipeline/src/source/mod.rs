//! Content source interfaces.
//!
//! The mapper never reads the blog directly. Author names, taxonomy terms,
//! custom metadata and images are looked up through `ContentStore`, and the
//! optional multi-thumbnail extension through `ThumbnailProvider`.

mod memory;

pub use memory::{ContentExport, InMemoryContentStore, StoredPost};

use crate::errors::StoreError;
use cloudsearch_indexer_shared::Term;

/// Built-in taxonomy holding categories.
pub const CATEGORY_TAXONOMY: &str = "category";

/// Built-in taxonomy holding tags.
pub const TAG_TAXONOMY: &str = "post_tag";

/// Read access to the blog's content and metadata.
pub trait ContentStore: Send + Sync {
    /// Display name of an author, `None` if the author is unknown.
    fn author_display_name(&self, author_id: u64) -> Result<Option<String>, StoreError>;

    /// Terms of a taxonomy attached to a record, empty if there are none.
    fn terms(&self, record_id: u64, taxonomy: &str) -> Result<Vec<Term>, StoreError>;

    /// Persisted custom metadata value of a record.
    fn meta_value(&self, record_id: u64, key: &str) -> Result<Option<String>, StoreError>;

    /// URL of the record's featured image at the given size.
    fn thumbnail_url(&self, record_id: u64, size: &str) -> Result<Option<String>, StoreError>;
}

/// Optional multi-thumbnail extension.
pub trait ThumbnailProvider: Send + Sync {
    /// Whether the extension is installed and active.
    fn is_active(&self) -> bool;

    /// URL of the image registered under `image_id` for a record.
    fn post_thumbnail_url(&self, post_type: &str, image_id: &str, record_id: u64)
        -> Option<String>;
}
