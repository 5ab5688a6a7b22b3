//! Indexer settings.
//!
//! Settings are plain values handed to the mapper, schema builder and
//! submitter at construction time. Custom field and taxonomy names are kept in
//! the same delimiter-separated form the settings screen stores them in.

use serde::{Deserialize, Serialize};

/// Key prefix of custom field entries in documents and in the schema.
pub const CUSTOM_FIELD_PREFIX: &str = "cf_";

/// Key prefix of custom taxonomy entries in documents and in the schema.
pub const CUSTOM_TAXONOMY_PREFIX: &str = "ct_";

/// Delimiter of the custom field and custom taxonomy lists.
pub const DEFAULT_LIST_SEPARATOR: &str = ",";

/// Separator between term id and term name in term lists.
pub const DEFAULT_FIELDS_SEPARATOR: &str = "|";

/// Analysis scheme attached to text fields.
pub const DEFAULT_ANALYSIS_SCHEME: &str = "_en_default_";

/// Replace `-` with `_`; index field names may not contain dashes.
pub fn normalize_field_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Settings that drive document mapping and schema generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerSettings {
    /// Custom field names, separated by `list_separator`.
    pub schema_fields: String,
    /// Custom taxonomy names, separated by `list_separator`.
    pub schema_taxonomies: String,
    /// Comma-separated custom fields indexed as integers.
    pub schema_fields_int: String,
    /// Comma-separated custom fields indexed as doubles.
    pub schema_fields_double: String,
    /// Comma-separated custom fields that can be sorted on.
    pub schema_fields_sortable: String,
    /// Separator between term id and name in term lists.
    pub fields_separator: String,
    /// Image size used for the record's default image.
    pub image_size: Option<String>,
    /// Image identifier for the multi-thumbnail extension.
    pub custom_image_id: Option<String>,
    pub analysis_scheme: String,
    pub list_separator: String,
}

impl Default for IndexerSettings {
    fn default() -> Self {
        Self {
            schema_fields: String::new(),
            schema_taxonomies: String::new(),
            schema_fields_int: String::new(),
            schema_fields_double: String::new(),
            schema_fields_sortable: String::new(),
            fields_separator: DEFAULT_FIELDS_SEPARATOR.to_string(),
            image_size: None,
            custom_image_id: None,
            analysis_scheme: DEFAULT_ANALYSIS_SCHEME.to_string(),
            list_separator: DEFAULT_LIST_SEPARATOR.to_string(),
        }
    }
}

impl IndexerSettings {
    /// Set the custom field list.
    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.schema_fields = fields.into();
        self
    }

    /// Set the custom taxonomy list.
    pub fn with_taxonomies(mut self, taxonomies: impl Into<String>) -> Self {
        self.schema_taxonomies = taxonomies.into();
        self
    }

    /// Set the integer field list.
    pub fn with_int_fields(mut self, fields: impl Into<String>) -> Self {
        self.schema_fields_int = fields.into();
        self
    }

    /// Set the double field list.
    pub fn with_double_fields(mut self, fields: impl Into<String>) -> Self {
        self.schema_fields_double = fields.into();
        self
    }

    /// Set the sortable field list.
    pub fn with_sortable_fields(mut self, fields: impl Into<String>) -> Self {
        self.schema_fields_sortable = fields.into();
        self
    }

    /// Set the image size of the default record image.
    pub fn with_image_size(mut self, size: impl Into<String>) -> Self {
        self.image_size = Some(size.into());
        self
    }

    /// Set the multi-thumbnail image identifier.
    pub fn with_custom_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.custom_image_id = Some(image_id.into());
        self
    }

    /// Configured custom field names, as written in the settings.
    pub fn custom_field_names(&self) -> Vec<String> {
        split_names(&self.schema_fields, &self.list_separator)
    }

    /// Configured custom taxonomy names, as written in the settings.
    pub fn custom_taxonomy_names(&self) -> Vec<String> {
        split_names(&self.schema_taxonomies, &self.list_separator)
    }

    /// Normalized names of the integer fields.
    pub fn int_fields(&self) -> Vec<String> {
        normalized_csv(&self.schema_fields_int)
    }

    /// Normalized names of the double fields.
    pub fn double_fields(&self) -> Vec<String> {
        normalized_csv(&self.schema_fields_double)
    }

    /// Normalized names of the sortable fields.
    pub fn sortable_fields(&self) -> Vec<String> {
        normalized_csv(&self.schema_fields_sortable)
    }

    /// Whether the field is declared as an integer. Names compare normalized.
    pub fn is_int_field(&self, name: &str) -> bool {
        contains_normalized(&self.int_fields(), name)
    }

    /// Whether the field is declared as a double. Names compare normalized.
    pub fn is_double_field(&self, name: &str) -> bool {
        contains_normalized(&self.double_fields(), name)
    }

    /// Whether the field is declared sortable. Names compare normalized.
    pub fn is_sortable_field(&self, name: &str) -> bool {
        contains_normalized(&self.sortable_fields(), name)
    }

    /// Whether the multi-thumbnail image identifier is set.
    pub fn has_custom_image_id(&self) -> bool {
        self.custom_image_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }

    /// The image size to use, if one is set.
    pub fn image_size(&self) -> Option<&str> {
        self.image_size
            .as_deref()
            .filter(|size| !size.trim().is_empty())
    }
}

/// Longest name the search domain accepts for an index field.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Whether `key` is accepted by the search domain as an index field name:
/// lowercase ASCII letters, digits and underscores, at most
/// [`MAX_FIELD_NAME_LEN`] bytes.
pub fn is_valid_field_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_FIELD_NAME_LEN
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

/// Document and schema key of a custom field.
pub fn custom_field_key(name: &str) -> String {
    format!("{}{}", CUSTOM_FIELD_PREFIX, normalize_field_name(name))
}

/// Document and schema key of a custom taxonomy.
pub fn custom_taxonomy_key(name: &str) -> String {
    format!("{}{}", CUSTOM_TAXONOMY_PREFIX, normalize_field_name(name))
}

fn split_names(list: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        let name = list.trim();
        return if name.is_empty() {
            Vec::new()
        } else {
            vec![name.to_string()]
        };
    }

    list.split(separator)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalized_csv(list: &str) -> Vec<String> {
    split_names(list, ",")
        .iter()
        .map(|name| normalize_field_name(name))
        .collect()
}

fn contains_normalized(list: &[String], name: &str) -> bool {
    let name = normalize_field_name(name.trim());
    list.iter().any(|entry| *entry == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_field_name() {
        assert_eq!(normalize_field_name("event-date"), "event_date");
        assert_eq!(normalize_field_name("a-b-c"), "a_b_c");
        assert_eq!(normalize_field_name("plain"), "plain");
    }

    #[test]
    fn test_custom_keys() {
        assert_eq!(custom_field_key("event-date"), "cf_event_date");
        assert_eq!(custom_taxonomy_key("book-genre"), "ct_book_genre");
    }

    #[test]
    fn test_name_lists_skip_blanks() {
        let settings = IndexerSettings::default()
            .with_fields("price, rating,,event-date ")
            .with_taxonomies("");

        assert_eq!(
            settings.custom_field_names(),
            vec!["price", "rating", "event-date"]
        );
        assert!(settings.custom_taxonomy_names().is_empty());
    }

    #[test]
    fn test_custom_list_separator() {
        let settings = IndexerSettings {
            list_separator: ";".to_string(),
            ..IndexerSettings::default()
        }
        .with_fields("a;b,c");

        assert_eq!(settings.custom_field_names(), vec!["a", "b,c"]);
    }

    #[test]
    fn test_type_lists_match_normalized_names() {
        let settings = IndexerSettings::default()
            .with_int_fields(" page-count , year")
            .with_double_fields("unit_price")
            .with_sortable_fields("release-date");

        assert!(settings.is_int_field("page-count"));
        assert!(settings.is_int_field("page_count"));
        assert!(settings.is_int_field("year"));
        assert!(settings.is_double_field("unit-price"));
        assert!(settings.is_sortable_field("release-date"));
        assert!(settings.is_sortable_field("release_date"));
        assert!(!settings.is_int_field("unit-price"));
    }

    #[test]
    fn test_image_settings() {
        let settings = IndexerSettings::default();
        assert!(!settings.has_custom_image_id());
        assert!(settings.image_size().is_none());

        let settings = settings.with_image_size("medium").with_custom_image_id(" ");
        assert_eq!(settings.image_size(), Some("medium"));
        assert!(!settings.has_custom_image_id());
    }

    #[test]
    fn test_field_key_validation() {
        assert!(is_valid_field_key("cf_price"));
        assert!(is_valid_field_key(&custom_field_key("sale-price")));
        assert!(!is_valid_field_key(&custom_field_key("Price")));
        assert!(!is_valid_field_key(&custom_taxonomy_key("genre name")));
        assert!(!is_valid_field_key(""));

        let longest = custom_field_key(&"a".repeat(MAX_FIELD_NAME_LEN - 3));
        assert!(is_valid_field_key(&longest));
        let too_long = custom_field_key(&"a".repeat(MAX_FIELD_NAME_LEN - 2));
        assert!(!is_valid_field_key(&too_long));
    }

    #[test]
    fn test_deserialize_partial_settings() {
        let settings: IndexerSettings =
            serde_json::from_str(r#"{ "schema_fields": "price" }"#).unwrap();

        assert_eq!(settings.schema_fields, "price");
        assert_eq!(settings.fields_separator, DEFAULT_FIELDS_SEPARATOR);
        assert_eq!(settings.analysis_scheme, DEFAULT_ANALYSIS_SCHEME);
    }
}
