//! Schema and resolution errors

use thiserror::Error;
use veneer_tokens::TokenError;

/// Errors raised while building a [`VariantSchema`](crate::VariantSchema)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A compound rule names a value its axis does not declare
    #[error("schema '{schema}': compound rule {index} uses undeclared value '{value}' for axis '{axis}'")]
    DanglingCompoundValue {
        schema: String,
        index: usize,
        axis: String,
        value: String,
    },

    /// A compound rule names an axis the schema does not declare
    #[error("schema '{schema}': compound rule {index} uses unknown axis '{axis}'")]
    UnknownCompoundAxis {
        schema: String,
        index: usize,
        axis: String,
    },

    /// A compound rule that constrains the same axis twice
    #[error("schema '{schema}': compound rule {index} names axis '{axis}' more than once")]
    DuplicateCompoundAxis {
        schema: String,
        index: usize,
        axis: String,
    },

    /// A compound rule without any condition
    #[error("schema '{schema}': compound rule {index} has no conditions")]
    EmptyCompoundRule { schema: String, index: usize },

    /// A default for an axis the schema does not declare
    #[error("schema '{schema}': default given for unknown axis '{axis}'")]
    UnknownDefaultAxis { schema: String, axis: String },

    /// Two defaults for the same axis
    #[error("schema '{schema}': default for axis '{axis}' given twice")]
    DuplicateDefault { schema: String, axis: String },

    /// A default value the axis does not declare
    #[error("schema '{schema}': default '{value}' is not declared for axis '{axis}'")]
    InvalidDefaultValue {
        schema: String,
        axis: String,
        value: String,
    },

    /// The same axis value declared twice
    #[error("schema '{schema}': value '{value}' declared twice for axis '{axis}'")]
    DuplicateVariantValue {
        schema: String,
        axis: String,
        value: String,
    },

    /// A directive whose token references cannot be parsed
    #[error("malformed directive '{directive}': {reason}")]
    MalformedDirective { directive: String, reason: String },

    /// A token reference naming a group that does not exist
    #[error("directive '{directive}' references unknown token group '{group}'")]
    UnknownTokenGroup { directive: String, group: String },

    /// The schema document could not be parsed
    #[error("failed to parse schema: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for SchemaError {
    fn from(err: toml::de::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}

/// Errors raised while resolving a selection against a schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The selection picks a value its axis does not declare
    #[error("invalid value '{value}' for variant axis '{axis}'")]
    InvalidVariantValue { axis: String, value: String },

    /// A directive references a token missing from the store
    #[error(transparent)]
    UnknownToken(#[from] TokenError),

    /// A responsive selection has no entry at all
    #[error("responsive value for axis '{axis}' has no applicable entry")]
    NoApplicableValue { axis: String },
}
