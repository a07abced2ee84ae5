//! Schema data model: the unit of generation
//!
//! A schema describes one entity: its fields, column-rendering metadata,
//! filter metadata, and row actions. Property and action order is
//! significant — it is preserved from the input document and determines
//! emission order in every artifact. Schemas are immutable once loaded.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::SchemaError;

/// Declarative description of one entity
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Exported type name; also prefixes every generated constant
    pub name: String,
    /// Entity fields, in emission order
    pub properties: IndexMap<String, PropertyDescriptor>,
    /// Row actions, in emission order
    #[serde(default)]
    pub actions: IndexMap<String, ActionDescriptor>,
}

impl Schema {
    /// Parse a schema document from raw JSON text.
    ///
    /// `label` identifies the input (the schema file's stem) in errors
    /// raised before the document's own `name` is available.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] when the bytes are not a valid
    /// schema document, or [`SchemaError::InvalidIdentifier`] when the
    /// schema name or any property/action key cannot be used directly as
    /// a generated symbol.
    pub fn from_json(label: &str, input: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(input).map_err(|source| SchemaError::Parse {
            schema: label.to_string(),
            source,
        })?;
        schema.validate()?;
        tracing::debug!(
            schema = %schema.name,
            properties = schema.properties.len(),
            actions = schema.actions.len(),
            "loaded schema"
        );
        Ok(schema)
    }

    /// Check every name that will be emitted verbatim as a symbol.
    ///
    /// No escaping is performed anywhere downstream, so a name that is not
    /// identifier-safe must be rejected here rather than corrupt output.
    fn validate(&self) -> Result<(), SchemaError> {
        let symbols = std::iter::once(self.name.as_str())
            .chain(self.properties.keys().map(String::as_str))
            .chain(self.actions.keys().map(String::as_str));

        for symbol in symbols {
            if !is_valid_identifier(symbol) {
                return Err(SchemaError::InvalidIdentifier {
                    schema: self.name.clone(),
                    symbol: symbol.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Per-property metadata driving interface, column, and filter emission
///
/// Conditionally-required fields stay `Option` here; the emitter that
/// needs a field raises [`SchemaError::MissingField`] at the point of use,
/// so an error names exactly the schema, property, and field involved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyDescriptor {
    /// Primitive type name emitted into the interface
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Column header label
    pub table_header: Option<String>,
    /// Rendering hint for the widget column
    pub table_type: Option<String>,
    /// Responsive visibility hint
    pub show_on_mobile: Option<bool>,
    /// Set to `false` to exclude the property from the column list
    pub show_on_table: Option<bool>,
    /// Formatting function, emitted as a bare symbol reference
    pub format_fn: Option<String>,
    /// Formatter configuration, serialized verbatim as a literal
    pub format_options: Option<Value>,
    /// Whether a filter-field entry is emitted for this property
    #[serde(default)]
    pub is_filter_field: bool,
    /// Filter widget kind, required when `is_filter_field` is set
    pub filter_field_type: Option<FilterKind>,
    /// Filter label override; defaults to the property key
    pub filter_label: Option<String>,
    /// Selectable values, required and non-empty for select filters
    pub filter_options: Option<Vec<String>>,
}

impl PropertyDescriptor {
    /// Whether the property appears in the generated column list
    #[must_use]
    pub fn shown_on_table(&self) -> bool {
        self.show_on_table.unwrap_or(true)
    }
}

/// Filter widget kind for a filterable property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Free-text input
    Text,
    /// Numeric input
    Number,
    /// Date picker
    Date,
    /// Selection from a fixed set of values
    Select,
}

impl FilterKind {
    /// Wire name emitted into the filter descriptor
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
        }
    }
}

/// A row action: a label and the handler the widget resolves later
#[derive(Debug, Clone, Deserialize)]
pub struct ActionDescriptor {
    /// Action label shown to the user
    pub label: String,
    /// Handler name, emitted as a quoted string
    pub function: String,
}

/// Validate that a string is usable verbatim as a generated identifier
fn is_valid_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();

    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != '_' && first != '$' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
