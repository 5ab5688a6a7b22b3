//! Content records read from the blog.
//!
//! A `ContentRecord` is the read-only view of a post that the mapper turns into
//! a search document. Taxonomy terms, custom metadata and author names are not
//! carried here; they are looked up through the content store when mapping.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post (or any custom post type) as stored by the blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Post identifier, unique within one blog.
    pub id: u64,
    /// Post type slug (`post`, `page`, or a custom type).
    pub post_type: String,
    /// Publication status (`publish`, `draft`, ...).
    pub status: String,
    /// Post format, `None` for the standard format.
    #[serde(default)]
    pub format: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    /// Canonical URL of the post.
    #[serde(default)]
    pub permalink: String,
    /// Identifier of the post author.
    pub author_id: u64,
    /// Creation time in the blog's local time zone.
    pub date: NaiveDateTime,
    /// Creation time in UTC.
    pub date_gmt: DateTime<Utc>,
    /// Last modification time in the blog's local time zone.
    pub modified: NaiveDateTime,
    /// Last modification time in UTC.
    pub modified_gmt: DateTime<Utc>,
}

impl ContentRecord {
    /// Create a record with the given identity and timestamps set to `created`.
    ///
    /// Text fields start empty; set them directly or with the `with_*` helpers.
    pub fn new(
        id: u64,
        post_type: impl Into<String>,
        author_id: u64,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            post_type: post_type.into(),
            status: "publish".to_string(),
            format: None,
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            permalink: String::new(),
            author_id,
            date: created.naive_utc(),
            date_gmt: created,
            modified: created.naive_utc(),
            modified_gmt: created,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Set the publication status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the post format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the canonical URL.
    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = permalink.into();
        self
    }

    /// Local creation time as epoch seconds.
    ///
    /// Local times carry no offset, so they are read as if they were UTC.
    pub fn date_timestamp(&self) -> i64 {
        self.date.and_utc().timestamp()
    }

    /// UTC creation time as epoch seconds.
    pub fn date_gmt_timestamp(&self) -> i64 {
        self.date_gmt.timestamp()
    }

    /// Local modification time as epoch seconds.
    pub fn modified_timestamp(&self) -> i64 {
        self.modified.and_utc().timestamp()
    }

    /// UTC modification time as epoch seconds.
    pub fn modified_gmt_timestamp(&self) -> i64 {
        self.modified_gmt.timestamp()
    }
}

/// A taxonomy term attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
}

impl Term {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Render the term as `<id><separator><name>`.
    pub fn list_entry(&self, separator: &str) -> String {
        format!("{}{}{}", self.id, separator, self.name)
    }
}
