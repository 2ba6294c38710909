//! Token store errors

use thiserror::Error;

use crate::group::TokenGroup;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    /// No token with this name exists in the group
    #[error("unknown token '{group}.{name}'")]
    UnknownToken { group: String, name: String },

    /// A table or path names a group that does not exist
    #[error("unknown token group '{0}'")]
    UnknownGroup(String),

    /// A leaf literal could not be parsed into a token value
    #[error("invalid value for token '{path}': {reason}")]
    InvalidValue { path: String, reason: String },

    /// The token table document could not be parsed
    #[error("failed to parse token table: {0}")]
    Parse(String),
}

impl TokenError {
    pub(crate) fn unknown(group: TokenGroup, name: &str) -> Self {
        TokenError::UnknownToken {
            group: group.id().to_string(),
            name: name.to_string(),
        }
    }
}

impl From<toml::de::Error> for TokenError {
    fn from(err: toml::de::Error) -> Self {
        TokenError::Parse(err.to_string())
    }
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;
