//! Document assembly: import header plus the four fragments
//!
//! The assembler concatenates, for one schema, an import statement
//! referencing the widget's type names and the four emitted fragments in
//! fixed order — interface, column defs, filter fields, actions — each
//! separated by a blank line. It performs no validation of its own beyond
//! what the emitters already applied.

use handlebars::Handlebars;
use serde_json::json;

use crate::emit::{emit_actions, emit_column_defs, emit_filter_fields, emit_interface};
use crate::error::SchemaError;
use crate::schema::Schema;

/// Import path for the widget's type declarations when none is configured
pub const DEFAULT_IMPORT_PATH: &str = "../datatable";

const DOCUMENT_TEMPLATE: &str = "\
import { ColumnDef, FilterField, Action } from '{{import_path}}'

{{interface}}

{{column_defs}}

{{filter_fields}}

{{actions}}
";

/// Assembles one complete output document per schema
pub struct Assembler {
    import_path: String,
    handlebars: Handlebars<'static>,
}

impl Assembler {
    /// Create an assembler importing widget types from `import_path`
    #[must_use]
    pub fn new(import_path: &str) -> Self {
        let mut handlebars = Handlebars::new();

        // Generating code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self {
            import_path: import_path.to_string(),
            handlebars,
        }
    }

    /// Assemble the complete document for one schema.
    ///
    /// # Errors
    ///
    /// Propagates emitter errors ([`SchemaError::MissingField`],
    /// [`SchemaError::EmptySelectOptions`]); [`SchemaError::Render`] is
    /// reserved for template failures.
    pub fn assemble(&self, schema: &Schema) -> Result<String, SchemaError> {
        let context = json!({
            "import_path": self.import_path,
            "interface": emit_interface(schema)?,
            "column_defs": emit_column_defs(schema)?,
            "filter_fields": emit_filter_fields(schema)?,
            "actions": emit_actions(schema),
        });

        let document = self
            .handlebars
            .render_template(DOCUMENT_TEMPLATE, &context)
            .map_err(|source| SchemaError::Render {
                schema: schema.name.clone(),
                source,
            })?;

        tracing::debug!(schema = %schema.name, bytes = document.len(), "assembled document");
        Ok(document)
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(DEFAULT_IMPORT_PATH)
    }
}
