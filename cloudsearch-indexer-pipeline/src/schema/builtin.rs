//! Built-in index fields.
//!
//! Every document produced by the mapper carries these fields, plus
//! `post_extra`, which is reserved for enrichers.

use cloudsearch_indexer_shared::{FieldDefinition, FieldOptions, FieldType};

const INT_FIELDS_HEAD: [&str; 3] = ["site_id", "blog_id", "id"];
const LITERAL_FIELDS: [&str; 3] = ["post_type", "post_status", "post_format"];
const INT_FIELDS_TAIL: [&str; 5] = [
    "post_date",
    "post_date_gmt",
    "post_modified",
    "post_modified_gmt",
    "post_author",
];

/// The built-in field definitions, in document order.
pub fn builtin_fields(analysis_scheme: &str) -> Vec<FieldDefinition> {
    let searchable_text = |sort: bool| {
        FieldOptions::new(false, true, true, sort)
            .with_highlight(true)
            .with_analysis_scheme(analysis_scheme)
    };
    let return_only_text = || {
        FieldOptions::new(false, false, true, false)
            .with_highlight(false)
            .with_analysis_scheme(analysis_scheme)
    };
    let term_list = || {
        FieldOptions::all_enabled()
            .without_sort()
            .with_highlight(false)
            .with_analysis_scheme(analysis_scheme)
    };

    let mut fields = Vec::with_capacity(20);

    for name in INT_FIELDS_HEAD {
        fields.push(FieldDefinition::new(name, FieldType::Int, FieldOptions::all_enabled()));
    }
    for name in LITERAL_FIELDS {
        fields.push(FieldDefinition::new(
            name,
            FieldType::Literal,
            FieldOptions::all_enabled(),
        ));
    }

    fields.push(FieldDefinition::new("post_title", FieldType::Text, searchable_text(true)));
    fields.push(FieldDefinition::new("post_content", FieldType::Text, searchable_text(false)));
    fields.push(FieldDefinition::new("post_excerpt", FieldType::Text, searchable_text(false)));
    fields.push(FieldDefinition::new("post_url", FieldType::Text, return_only_text()));
    fields.push(FieldDefinition::new("post_image", FieldType::Text, return_only_text()));

    for name in INT_FIELDS_TAIL {
        fields.push(FieldDefinition::new(name, FieldType::Int, FieldOptions::all_enabled()));
    }

    fields.push(FieldDefinition::new(
        "post_author_name",
        FieldType::Text,
        searchable_text(true),
    ));
    fields.push(FieldDefinition::new("post_extra", FieldType::Text, return_only_text()));
    fields.push(FieldDefinition::new("category", FieldType::TextArray, term_list()));
    fields.push(FieldDefinition::new("tag", FieldType::TextArray, term_list()));

    fields
}
