//! Emitters: pure functions mapping one schema to one textual fragment
//!
//! One emitter per artifact kind — interface, column descriptors, filter
//! fields, row actions. Each takes a [`Schema`] and returns text; none has
//! side effects or sees configuration. Fragment order within a document is
//! the assembler's concern.
//!
//! Optional descriptor fields are optional in the emission itself: an
//! absent `format_fn` produces no `formatFn` key at all, never a null or
//! placeholder, so the consuming widget's own defaulting applies uniformly.

use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::{FilterKind, PropertyDescriptor, Schema};

/// Emit the entity type declaration.
///
/// Every property appears exactly once, in input order, regardless of
/// display or filter flags — the interface reflects the full data shape.
///
/// # Errors
///
/// Returns [`SchemaError::MissingField`] when a property has no `type`.
pub fn emit_interface(schema: &Schema) -> Result<String, SchemaError> {
    let mut out = format!("export interface {} {{\n", schema.name);

    for (key, property) in &schema.properties {
        let ty = property
            .ty
            .as_deref()
            .ok_or_else(|| missing(schema, key, "type"))?;
        out.push_str(&format!("    {key}: {ty};\n"));
    }

    out.push('}');
    Ok(out)
}

/// Emit the column-descriptor list.
///
/// One descriptor per property, in input order; properties explicitly
/// marked `show_on_table: false` are skipped. `formatFn` is a bare symbol
/// reference (it must resolve to an importable function), `formatOptions`
/// a serialized literal; both appear only when set on the property.
///
/// # Errors
///
/// Returns [`SchemaError::MissingField`] when a rendered property lacks
/// `table_header`, `table_type`, or `show_on_mobile`.
pub fn emit_column_defs(schema: &Schema) -> Result<String, SchemaError> {
    let mut out = format!(
        "export const {name}ColumnDef: ColumnDef<{name}>[] = [\n",
        name = schema.name
    );

    for (key, property) in &schema.properties {
        if !property.shown_on_table() {
            continue;
        }

        let header = property
            .table_header
            .as_deref()
            .ok_or_else(|| missing(schema, key, "table_header"))?;
        let table_type = property
            .table_type
            .as_deref()
            .ok_or_else(|| missing(schema, key, "table_type"))?;
        let show_on_mobile = property
            .show_on_mobile
            .ok_or_else(|| missing(schema, key, "show_on_mobile"))?;

        out.push_str(&format!(
            "    {{header: \"{header}\", accessorKey: \"{key}\", type: \"{table_type}\", showOnMobile: {show_on_mobile}"
        ));
        if let Some(format_fn) = property.format_fn.as_deref() {
            out.push_str(&format!(", formatFn: {format_fn}"));
        }
        if let Some(format_options) = &property.format_options {
            out.push_str(&format!(", formatOptions: {format_options}"));
        }
        out.push_str("},\n");
    }

    out.push(']');
    Ok(out)
}

/// Emit the filter-field list.
///
/// Restricted to properties with `is_filter_field`, in input order
/// (filtered, not reordered). The label defaults to the property key.
/// Select filters always carry their options.
///
/// # Errors
///
/// Returns [`SchemaError::MissingField`] when a filterable property lacks
/// `filter_field_type`, and [`SchemaError::EmptySelectOptions`] when a
/// select filter has absent or empty `filter_options`.
pub fn emit_filter_fields(schema: &Schema) -> Result<String, SchemaError> {
    let mut out = format!(
        "export const {name}FilterFields: FilterField<{name}>[] = [\n",
        name = schema.name
    );

    for (key, property) in &schema.properties {
        if !property.is_filter_field {
            continue;
        }

        let kind = property
            .filter_field_type
            .ok_or_else(|| missing(schema, key, "filter_field_type"))?;
        let label = property.filter_label.as_deref().unwrap_or(key);

        out.push_str(&format!(
            "    {{key: \"{key}\", label: \"{label}\", type: \"{kind}\"",
            kind = kind.as_str()
        ));
        if kind == FilterKind::Select {
            out.push_str(&format!(
                ", options: {}",
                select_options(schema, key, property)?
            ));
        }
        out.push_str("},\n");
    }

    out.push_str("];");
    Ok(out)
}

/// Emit the row-action list.
///
/// One descriptor per action, in input order. The `function` value is a
/// quoted handler name, resolved by the consuming widget at a later stage
/// — never invoked here.
#[must_use]
pub fn emit_actions(schema: &Schema) -> String {
    let mut out = format!("export const {}Actions = [\n", schema.name);

    for action in schema.actions.values() {
        out.push_str(&format!(
            "    {{label: \"{}\", function: \"{}\"}},\n",
            action.label, action.function
        ));
    }

    out.push_str("];");
    out
}

fn missing(schema: &Schema, property: &str, field: &'static str) -> SchemaError {
    SchemaError::MissingField {
        schema: schema.name.clone(),
        property: property.to_string(),
        field,
    }
}

/// Serialized option list for a select filter; absence or emptiness is a
/// schema error, never a silent empty list.
fn select_options(
    schema: &Schema,
    key: &str,
    property: &PropertyDescriptor,
) -> Result<String, SchemaError> {
    let options = property
        .filter_options
        .as_deref()
        .filter(|options| !options.is_empty())
        .ok_or_else(|| SchemaError::EmptySelectOptions {
            schema: schema.name.clone(),
            property: key.to_string(),
        })?;

    Ok(Value::from(options.to_vec()).to_string())
}
