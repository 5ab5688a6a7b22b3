//! Document mapper implementation.
//!
//! Maps blog posts into `add` and `delete` document envelopes for the search
//! domain.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use super::coercion::{coerce_double, coerce_int};
use super::enrichment::{EnricherRegistry, FieldEnricher};
use crate::errors::MappingError;
use crate::schema::checked_key;
use crate::source::{ContentStore, ThumbnailProvider, CATEGORY_TAXONOMY, TAG_TAXONOMY};
use cloudsearch_indexer_shared::settings::{custom_field_key, custom_taxonomy_key};
use cloudsearch_indexer_shared::{
    ContentRecord, DocumentEnvelope, FieldMap, FieldValue, IndexerSettings, SiteContext,
};

/// Author name indexed when the author has no display name.
pub const AUTHOR_NAME_PLACEHOLDER: &str = "-";

/// Format indexed for posts without an explicit post format.
const STANDARD_FORMAT: &str = "standard";

/// Where custom field values are read from.
#[derive(Debug, Clone, Copy)]
pub enum MappingSource<'a> {
    /// Read values from the record's persisted metadata.
    Persisted,
    /// The record is being saved: prefer the submitted form values and fall
    /// back to persisted metadata for keys that were not submitted.
    Submitted(&'a HashMap<String, String>),
}

impl MappingSource<'_> {
    /// Whether mapping runs as part of saving the record.
    pub fn is_from_save(&self) -> bool {
        matches!(self, MappingSource::Submitted(_))
    }
}

/// Maps content records into document envelopes.
///
/// The mapper is responsible for:
/// - Collecting built-in fields, taxonomy term lists and the author name
/// - Reading, coercing and filtering configured custom fields
/// - Resolving the representative image
/// - Running the field enrichers registered for the record's post type
pub struct DocumentMapper {
    settings: IndexerSettings,
    site: SiteContext,
    store: Arc<dyn ContentStore>,
    thumbnails: Option<Arc<dyn ThumbnailProvider>>,
    enrichers: EnricherRegistry,
}

impl DocumentMapper {
    /// Create a mapper without an image extension or enrichers.
    pub fn new(settings: IndexerSettings, site: SiteContext, store: Arc<dyn ContentStore>) -> Self {
        Self {
            settings,
            site,
            store,
            thumbnails: None,
            enrichers: EnricherRegistry::new(),
        }
    }

    /// Use a multi-thumbnail extension to resolve images.
    pub fn with_thumbnail_provider(mut self, provider: Arc<dyn ThumbnailProvider>) -> Self {
        self.thumbnails = Some(provider);
        self
    }

    /// Register a field enricher for a post type.
    pub fn with_enricher(
        mut self,
        post_type: impl Into<String>,
        enricher: Arc<dyn FieldEnricher>,
    ) -> Self {
        self.enrichers.register(post_type, enricher);
        self
    }

    /// The settings in use.
    pub fn settings(&self) -> &IndexerSettings {
        &self.settings
    }

    /// Document key of a record.
    pub fn document_key(&self, record_id: u64) -> String {
        self.site.document_key(record_id)
    }

    /// Build the `delete` envelope of a record. Only its key is used.
    pub fn map_delete(&self, record: &ContentRecord) -> DocumentEnvelope {
        DocumentEnvelope::delete(self.document_key(record.id))
    }

    /// Build the `add` envelope of a record.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to index
    /// * `source` - Where custom field values are read from
    ///
    /// # Returns
    ///
    /// * `Ok(DocumentEnvelope::Add)` - The document with all fields
    /// * `Err(MappingError)` - If a lookup, a setting or an enricher failed;
    ///   no document should be submitted
    #[instrument(skip(self, record, source), fields(record_id = record.id, post_type = %record.post_type))]
    pub fn map_add(
        &self,
        record: &ContentRecord,
        source: MappingSource<'_>,
    ) -> Result<DocumentEnvelope, MappingError> {
        let mut fields = self.base_fields(record)?;

        let taxonomies = self.custom_taxonomy_fields(record)?;
        let custom = self.custom_fields(record, source)?;
        fields.extend(taxonomies);
        fields.extend(custom);

        let fields = self
            .enrichers
            .apply(fields, record, source.is_from_save())?;

        debug!(field_count = fields.len(), "Mapped record");
        Ok(DocumentEnvelope::add(self.document_key(record.id), fields))
    }

    fn base_fields(&self, record: &ContentRecord) -> Result<FieldMap, MappingError> {
        let author_name = self.author_name(record.author_id)?;
        let categories = self.term_list(record.id, CATEGORY_TAXONOMY)?;
        let tags = self.term_list(record.id, TAG_TAXONOMY)?;
        let image = self.resolve_image(record)?;

        let format = record
            .format
            .as_deref()
            .filter(|format| !format.is_empty())
            .unwrap_or(STANDARD_FORMAT);

        let mut fields = FieldMap::new();
        fields.insert("site_id".to_string(), self.site.site_id.into());
        fields.insert("blog_id".to_string(), self.site.blog_id.into());
        fields.insert("id".to_string(), record.id.into());
        fields.insert("post_type".to_string(), record.post_type.as_str().into());
        fields.insert("post_status".to_string(), record.status.as_str().into());
        fields.insert("post_format".to_string(), format.into());
        fields.insert("post_title".to_string(), record.title.as_str().into());
        fields.insert("post_content".to_string(), record.content.as_str().into());
        fields.insert("post_excerpt".to_string(), record.excerpt.as_str().into());
        fields.insert("post_url".to_string(), record.permalink.as_str().into());
        fields.insert("post_image".to_string(), image.into());
        fields.insert("post_date".to_string(), record.date_timestamp().into());
        fields.insert("post_date_gmt".to_string(), record.date_gmt_timestamp().into());
        fields.insert("post_modified".to_string(), record.modified_timestamp().into());
        fields.insert(
            "post_modified_gmt".to_string(),
            record.modified_gmt_timestamp().into(),
        );
        fields.insert("post_author".to_string(), record.author_id.into());
        fields.insert("post_author_name".to_string(), author_name.into());
        fields.insert("category".to_string(), categories.into());
        fields.insert("tag".to_string(), tags.into());

        Ok(fields)
    }

    fn author_name(&self, author_id: u64) -> Result<String, MappingError> {
        let name = self
            .store
            .author_display_name(author_id)?
            .filter(|name| !name.trim().is_empty());

        Ok(name.unwrap_or_else(|| AUTHOR_NAME_PLACEHOLDER.to_string()))
    }

    fn term_list(&self, record_id: u64, taxonomy: &str) -> Result<Vec<String>, MappingError> {
        let terms = self.store.terms(record_id, taxonomy)?;
        Ok(terms
            .iter()
            .map(|term| term.list_entry(&self.settings.fields_separator))
            .collect())
    }

    fn custom_taxonomy_fields(&self, record: &ContentRecord) -> Result<FieldMap, MappingError> {
        let mut fields = FieldMap::new();

        for taxonomy in self.settings.custom_taxonomy_names() {
            let key = checked_key(custom_taxonomy_key(&taxonomy), &taxonomy)?;
            let terms = self.term_list(record.id, &taxonomy)?;
            fields.insert(key, terms.into());
        }

        Ok(fields)
    }

    fn custom_fields(
        &self,
        record: &ContentRecord,
        source: MappingSource<'_>,
    ) -> Result<FieldMap, MappingError> {
        let mut fields = FieldMap::new();

        for name in self.settings.custom_field_names() {
            let key = checked_key(custom_field_key(&name), &name)?;

            let raw = match source {
                MappingSource::Submitted(submitted) if submitted.contains_key(&name) => {
                    submitted.get(&name).cloned()
                }
                _ => self.store.meta_value(record.id, &name)?,
            }
            .unwrap_or_default();

            let value = if self.settings.is_int_field(&name) {
                FieldValue::Int(coerce_int(&raw))
            } else if self.settings.is_double_field(&name) {
                FieldValue::Double(coerce_double(&raw))
            } else {
                FieldValue::Text(raw)
            };

            // Zero coerces to an empty value and is dropped with the rest.
            if value.is_empty() {
                continue;
            }
            fields.insert(key, value);
        }

        Ok(fields)
    }

    fn resolve_image(&self, record: &ContentRecord) -> Result<String, MappingError> {
        if let (Some(provider), Some(image_id)) = (&self.thumbnails, &self.settings.custom_image_id)
        {
            if self.settings.has_custom_image_id() && provider.is_active() {
                return Ok(provider
                    .post_thumbnail_url(&record.post_type, image_id, record.id)
                    .unwrap_or_default());
            }
        }

        if let Some(size) = self.settings.image_size() {
            let url = self.store.thumbnail_url(record.id, size)?;
            return Ok(url.filter(|url| !url.is_empty()).unwrap_or_default());
        }

        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::source::InMemoryContentStore;
    use chrono::{TimeZone, Utc};
    use cloudsearch_indexer_repository::batch::serialize_batch;
    use cloudsearch_indexer_shared::Term;

    fn test_record() -> ContentRecord {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        ContentRecord::new(42, "post", 7, created)
            .with_title("Hello world")
            .with_content("Body text")
            .with_excerpt("Excerpt")
            .with_permalink("https://blog.example.com/hello-world")
    }

    fn test_store() -> InMemoryContentStore {
        InMemoryContentStore::new()
            .with_author(7, "Jane Doe")
            .with_terms(42, "category", vec![Term::new(3, "News"), Term::new(5, "Rust")])
            .with_terms(42, "post_tag", vec![Term::new(9, "async")])
    }

    fn mapper(settings: IndexerSettings, store: InMemoryContentStore) -> DocumentMapper {
        DocumentMapper::new(settings, SiteContext::new(1, 2), Arc::new(store))
    }

    fn add_fields(envelope: &DocumentEnvelope) -> &FieldMap {
        envelope.fields().expect("add envelope has fields")
    }

    struct FailingStore;

    impl ContentStore for FailingStore {
        fn author_display_name(&self, _author_id: u64) -> Result<Option<String>, StoreError> {
            Err(StoreError::unavailable("database offline"))
        }

        fn terms(&self, _record_id: u64, _taxonomy: &str) -> Result<Vec<Term>, StoreError> {
            Err(StoreError::unavailable("database offline"))
        }

        fn meta_value(&self, _record_id: u64, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::unavailable("database offline"))
        }

        fn thumbnail_url(&self, _record_id: u64, _size: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::unavailable("database offline"))
        }
    }

    struct StaticThumbnails {
        active: bool,
    }

    impl ThumbnailProvider for StaticThumbnails {
        fn is_active(&self) -> bool {
            self.active
        }

        fn post_thumbnail_url(
            &self,
            post_type: &str,
            image_id: &str,
            record_id: u64,
        ) -> Option<String> {
            Some(format!(
                "https://cdn.example.com/{}/{}/{}.jpg",
                post_type, image_id, record_id
            ))
        }
    }

    #[test]
    fn test_map_add_builtin_fields() {
        let mapper = mapper(IndexerSettings::default(), test_store());

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        assert_eq!(envelope.operation(), "add");
        assert_eq!(envelope.id(), "1_2_42");

        let fields = add_fields(&envelope);
        assert_eq!(fields.len(), 19);
        assert_eq!(fields["site_id"], FieldValue::Int(1));
        assert_eq!(fields["blog_id"], FieldValue::Int(2));
        assert_eq!(fields["id"], FieldValue::Int(42));
        assert_eq!(fields["post_type"], FieldValue::from("post"));
        assert_eq!(fields["post_status"], FieldValue::from("publish"));
        assert_eq!(fields["post_format"], FieldValue::from("standard"));
        assert_eq!(fields["post_title"], FieldValue::from("Hello world"));
        assert_eq!(fields["post_content"], FieldValue::from("Body text"));
        assert_eq!(fields["post_excerpt"], FieldValue::from("Excerpt"));
        assert_eq!(
            fields["post_url"],
            FieldValue::from("https://blog.example.com/hello-world")
        );
        assert_eq!(fields["post_image"], FieldValue::from(""));
        assert_eq!(fields["post_date_gmt"], FieldValue::Int(1_714_552_200));
        assert_eq!(fields["post_date"], FieldValue::Int(1_714_552_200));
        assert_eq!(fields["post_modified_gmt"], FieldValue::Int(1_714_552_200));
        assert_eq!(fields["post_author"], FieldValue::Int(7));
        assert_eq!(fields["post_author_name"], FieldValue::from("Jane Doe"));
        assert_eq!(
            fields["category"],
            FieldValue::TextList(vec!["3|News".to_string(), "5|Rust".to_string()])
        );
        assert_eq!(fields["tag"], FieldValue::TextList(vec!["9|async".to_string()]));
    }

    #[test]
    fn test_map_add_explicit_format() {
        let mapper = mapper(IndexerSettings::default(), test_store());
        let record = test_record().with_format("gallery");

        let envelope = mapper.map_add(&record, MappingSource::Persisted).unwrap();

        assert_eq!(add_fields(&envelope)["post_format"], FieldValue::from("gallery"));
    }

    #[test]
    fn test_missing_author_name_uses_placeholder() {
        let store = InMemoryContentStore::new().with_author(7, "");
        let mapper = mapper(IndexerSettings::default(), store);

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();
        assert_eq!(add_fields(&envelope)["post_author_name"], FieldValue::from("-"));

        let mapper = self::mapper(IndexerSettings::default(), InMemoryContentStore::new());
        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();
        assert_eq!(add_fields(&envelope)["post_author_name"], FieldValue::from("-"));
    }

    #[test]
    fn test_record_without_terms_has_empty_lists() {
        let mapper = mapper(IndexerSettings::default(), InMemoryContentStore::new());

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        let fields = add_fields(&envelope);
        assert_eq!(fields["category"], FieldValue::TextList(vec![]));
        assert_eq!(fields["tag"], FieldValue::TextList(vec![]));
    }

    #[test]
    fn test_custom_term_separator() {
        let settings = IndexerSettings {
            fields_separator: "::".to_string(),
            ..IndexerSettings::default()
        };
        let mapper = mapper(settings, test_store());

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        assert_eq!(
            add_fields(&envelope)["tag"],
            FieldValue::TextList(vec!["9::async".to_string()])
        );
    }

    #[test]
    fn test_custom_taxonomies() {
        let settings = IndexerSettings::default().with_taxonomies("book-genre,series");
        let store = test_store().with_terms(42, "book-genre", vec![Term::new(11, "Sci-Fi")]);
        let mapper = mapper(settings, store);

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        let fields = add_fields(&envelope);
        assert_eq!(
            fields["ct_book_genre"],
            FieldValue::TextList(vec!["11|Sci-Fi".to_string()])
        );
        assert_eq!(fields["ct_series"], FieldValue::TextList(vec![]));
        assert!(!fields.contains_key("ct_book-genre"));
    }

    #[test]
    fn test_custom_field_name_is_normalized_and_prefixed() {
        let settings = IndexerSettings::default().with_fields("event-date");
        let store = test_store().with_meta(42, "event-date", "2024-06-01");
        let mapper = mapper(settings, store);

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        let fields = add_fields(&envelope);
        assert_eq!(fields["cf_event_date"], FieldValue::from("2024-06-01"));
        assert!(!fields.contains_key("cf_event-date"));
        assert!(!fields.contains_key("event-date"));
    }

    #[test]
    fn test_custom_field_coercion() {
        let settings = IndexerSettings::default()
            .with_fields("pages,price,isbn")
            .with_int_fields("pages")
            .with_double_fields("price");
        let store = test_store()
            .with_meta(42, "pages", "320 pages")
            .with_meta(42, "price", "19.99")
            .with_meta(42, "isbn", "978-3-16");
        let mapper = mapper(settings, store);

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        let fields = add_fields(&envelope);
        assert_eq!(fields["cf_pages"], FieldValue::Int(320));
        assert_eq!(fields["cf_price"], FieldValue::Double(19.99));
        assert_eq!(fields["cf_isbn"], FieldValue::from("978-3-16"));
    }

    #[test]
    fn test_int_field_non_numeric_coerces_to_zero_and_is_dropped() {
        let settings = IndexerSettings::default()
            .with_fields("pages")
            .with_int_fields("pages");
        let submitted = HashMap::from([("pages".to_string(), "many".to_string())]);
        let mapper = mapper(settings, test_store());

        let envelope = mapper
            .map_add(&test_record(), MappingSource::Submitted(&submitted))
            .unwrap();

        assert!(!add_fields(&envelope).contains_key("cf_pages"));
    }

    #[test]
    fn test_int_field_zero_is_dropped() {
        let settings = IndexerSettings::default()
            .with_fields("stock,rating")
            .with_int_fields("stock")
            .with_double_fields("rating");
        let submitted = HashMap::from([
            ("stock".to_string(), "0".to_string()),
            ("rating".to_string(), "0.0".to_string()),
        ]);
        let mapper = mapper(settings, test_store());

        let envelope = mapper
            .map_add(&test_record(), MappingSource::Submitted(&submitted))
            .unwrap();

        let fields = add_fields(&envelope);
        assert!(!fields.contains_key("cf_stock"));
        assert!(!fields.contains_key("cf_rating"));
    }

    #[test]
    fn test_overflowing_double_is_dropped() {
        let settings = IndexerSettings::default()
            .with_fields("price,weight")
            .with_double_fields("price,weight");
        let store = test_store()
            .with_meta(42, "price", "1e999")
            .with_meta(42, "weight", "-1e999kg");
        let mapper = mapper(settings, store);

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        let fields = add_fields(&envelope);
        assert!(!fields.contains_key("cf_price"));
        assert!(!fields.contains_key("cf_weight"));

        let batch = serialize_batch(std::slice::from_ref(&envelope)).unwrap();
        assert!(!batch.body.contains("null"));
    }

    #[test]
    fn test_empty_text_fields_are_dropped() {
        let settings = IndexerSettings::default().with_fields("subtitle,code,missing");
        let store = test_store()
            .with_meta(42, "subtitle", "")
            .with_meta(42, "code", "0");
        let mapper = mapper(settings, store);

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        let fields = add_fields(&envelope);
        assert!(!fields.contains_key("cf_subtitle"));
        assert!(!fields.contains_key("cf_code"));
        assert!(!fields.contains_key("cf_missing"));
    }

    #[test]
    fn test_submitted_values_take_precedence_when_saving() {
        let settings = IndexerSettings::default().with_fields("subtitle,author-note");
        let store = test_store()
            .with_meta(42, "subtitle", "persisted subtitle")
            .with_meta(42, "author-note", "persisted note");
        let submitted = HashMap::from([("subtitle".to_string(), "fresh subtitle".to_string())]);
        let mapper = mapper(settings, store);

        let saving = mapper
            .map_add(&test_record(), MappingSource::Submitted(&submitted))
            .unwrap();
        let fields = add_fields(&saving);
        assert_eq!(fields["cf_subtitle"], FieldValue::from("fresh subtitle"));
        assert_eq!(fields["cf_author_note"], FieldValue::from("persisted note"));

        let persisted = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();
        assert_eq!(
            add_fields(&persisted)["cf_subtitle"],
            FieldValue::from("persisted subtitle")
        );
    }

    #[test]
    fn test_type_lists_match_dashed_names() {
        let settings = IndexerSettings::default()
            .with_fields("page-count")
            .with_int_fields("page_count");
        let store = test_store().with_meta(42, "page-count", "12");
        let mapper = mapper(settings, store);

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        assert_eq!(add_fields(&envelope)["cf_page_count"], FieldValue::Int(12));
    }

    #[test]
    fn test_field_and_taxonomy_with_same_name_use_distinct_keys() {
        let settings = IndexerSettings::default()
            .with_fields("shared")
            .with_taxonomies("shared");
        let store = test_store().with_meta(42, "shared", "field value");
        let mapper = mapper(settings, store);

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        let fields = add_fields(&envelope);
        assert_eq!(fields["cf_shared"], FieldValue::from("field value"));
        assert_eq!(fields["ct_shared"], FieldValue::TextList(vec![]));
    }

    #[test]
    fn test_invalid_custom_field_name_fails() {
        let settings = IndexerSettings::default().with_fields("Price");
        let mapper = mapper(settings, test_store());

        let result = mapper.map_add(&test_record(), MappingSource::Persisted);

        assert!(matches!(result, Err(MappingError::Settings(_))));
    }

    #[test]
    fn test_image_from_default_thumbnail() {
        let settings = IndexerSettings::default().with_image_size("medium");
        let store = test_store().with_thumbnail(42, "medium", "https://blog.example.com/m.jpg");
        let mapper = mapper(settings, store);

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        assert_eq!(
            add_fields(&envelope)["post_image"],
            FieldValue::from("https://blog.example.com/m.jpg")
        );
    }

    #[test]
    fn test_image_from_active_thumbnail_extension() {
        let settings = IndexerSettings::default()
            .with_image_size("medium")
            .with_custom_image_id("secondary-image");
        let store = test_store().with_thumbnail(42, "medium", "https://blog.example.com/m.jpg");
        let mapper = mapper(settings, store)
            .with_thumbnail_provider(Arc::new(StaticThumbnails { active: true }));

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        assert_eq!(
            add_fields(&envelope)["post_image"],
            FieldValue::from("https://cdn.example.com/post/secondary-image/42.jpg")
        );
    }

    #[test]
    fn test_inactive_thumbnail_extension_falls_back() {
        let settings = IndexerSettings::default()
            .with_image_size("medium")
            .with_custom_image_id("secondary-image");
        let store = test_store().with_thumbnail(42, "medium", "https://blog.example.com/m.jpg");
        let mapper = mapper(settings, store)
            .with_thumbnail_provider(Arc::new(StaticThumbnails { active: false }));

        let envelope = mapper.map_add(&test_record(), MappingSource::Persisted).unwrap();

        assert_eq!(
            add_fields(&envelope)["post_image"],
            FieldValue::from("https://blog.example.com/m.jpg")
        );
    }

    #[test]
    fn test_enricher_runs_for_matching_post_type() {
        let mapper = mapper(IndexerSettings::default(), test_store()).with_enricher(
            "post",
            Arc::new(
                |mut fields: FieldMap,
                 record: &ContentRecord,
                 from_save: bool|
                 -> Result<FieldMap, MappingError> {
                    fields.insert(
                        "post_extra".to_string(),
                        FieldValue::from(format!("{}:{}", record.id, from_save)),
                    );
                    Ok(fields)
                },
            ),
        );
        let submitted = HashMap::new();

        let envelope = mapper
            .map_add(&test_record(), MappingSource::Submitted(&submitted))
            .unwrap();

        assert_eq!(add_fields(&envelope)["post_extra"], FieldValue::from("42:true"));
    }

    #[test]
    fn test_store_failure_yields_no_document() {
        let mapper = DocumentMapper::new(
            IndexerSettings::default(),
            SiteContext::default(),
            Arc::new(FailingStore),
        );

        let result = mapper.map_add(&test_record(), MappingSource::Persisted);

        assert!(matches!(result, Err(MappingError::Store(_))));
    }

    #[test]
    fn test_map_delete_uses_only_the_key() {
        let mapper = DocumentMapper::new(
            IndexerSettings::default().with_fields("price"),
            SiteContext::new(3, 4),
            Arc::new(FailingStore),
        );

        let envelope = mapper.map_delete(&test_record());

        assert_eq!(envelope, DocumentEnvelope::delete("3_4_42"));
    }
}
