//! Error types for schema loading and artifact emission

use thiserror::Error;

/// Errors raised while loading a schema or emitting artifacts from it.
///
/// All variants are scoped to a single schema and identify it by name or
/// input file stem; the orchestrator reports the failure and continues
/// with the next input.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Input bytes do not parse into a schema document
    #[error("schema '{schema}': not a valid schema document: {source}")]
    Parse {
        /// Input file stem
        schema: String,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// A required field is absent for the artifact being emitted
    #[error("schema '{schema}': property '{property}' is missing required field '{field}'")]
    MissingField {
        /// Schema name
        schema: String,
        /// Offending property key
        property: String,
        /// The field the emitter needed
        field: &'static str,
    },

    /// A select filter field declared no selectable values
    #[error(
        "schema '{schema}': property '{property}' declares a select filter without filter_options"
    )]
    EmptySelectOptions {
        /// Schema name
        schema: String,
        /// Offending property key
        property: String,
    },

    /// A name or key cannot be used as a generated symbol
    #[error("schema '{schema}': '{symbol}' is not a valid identifier")]
    InvalidIdentifier {
        /// Schema name
        schema: String,
        /// The rejected name or key
        symbol: String,
    },

    /// The document template failed to render
    #[error("schema '{schema}': failed to render document: {source}")]
    Render {
        /// Schema name
        schema: String,
        /// Underlying template failure
        #[source]
        source: handlebars::RenderError,
    },
}
