//! Index field definitions.
//!
//! A `FieldDefinition` describes one index field of the search domain: its
//! name, its type and the option bundle that controls faceting, searching,
//! returning, sorting and highlighting.

use serde::{Deserialize, Serialize};

/// Index field types understood by the search domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Int,
    Double,
    Literal,
    Text,
    TextArray,
}

impl FieldType {
    /// Type name as used by the search domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Double => "double",
            FieldType::Literal => "literal",
            FieldType::Text => "text",
            FieldType::TextArray => "text-array",
        }
    }

    /// Name of the option bundle that configures a field of this type.
    pub fn option_key(&self) -> &'static str {
        match self {
            FieldType::Int => "IntOptions",
            FieldType::Double => "DoubleOptions",
            FieldType::Literal => "LiteralOptions",
            FieldType::Text => "TextOptions",
            FieldType::TextArray => "TextArrayOptions",
        }
    }

    /// Whether the type is analysed text and so takes highlight and analysis options.
    pub fn is_text(&self) -> bool {
        matches!(self, FieldType::Text | FieldType::TextArray)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Option bundle of an index field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldOptions {
    pub facet_enabled: bool,
    pub search_enabled: bool,
    pub return_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_scheme: Option<String>,
}

impl FieldOptions {
    /// Create options with the four common flags set.
    pub fn new(facet: bool, search: bool, return_value: bool, sort: bool) -> Self {
        Self {
            facet_enabled: facet,
            search_enabled: search,
            return_enabled: return_value,
            sort_enabled: Some(sort),
            highlight_enabled: None,
            analysis_scheme: None,
        }
    }

    /// Options for a field that is faceted, searched, returned and sorted.
    pub fn all_enabled() -> Self {
        Self::new(true, true, true, true)
    }

    /// Leave sorting unset, as for array fields.
    pub fn without_sort(mut self) -> Self {
        self.sort_enabled = None;
        self
    }

    /// Set the highlight flag.
    pub fn with_highlight(mut self, enabled: bool) -> Self {
        self.highlight_enabled = Some(enabled);
        self
    }

    /// Set the analysis scheme.
    pub fn with_analysis_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.analysis_scheme = Some(scheme.into());
        self
    }
}

/// Definition of one index field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub options: FieldOptions,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: FieldType, options: FieldOptions) -> Self {
        Self {
            name: name.into(),
            field_type,
            options,
        }
    }

    /// Name of the option bundle for this field's type.
    pub fn option_key(&self) -> &'static str {
        self.field_type.option_key()
    }
}
