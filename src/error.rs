//! Error types for embed resolution.
//!
//! Identification and translation degrade to "no match" / "skip" instead of
//! failing. Only malformed provider entries raise, and only when they are
//! first used, since the registry is never validated eagerly.

use thiserror::Error;

/// Errors raised while resolving a source into an embed code.
#[derive(Error, Debug)]
pub enum MultiplayerError {
    /// A provider descriptor is missing a field or carries an unusable template.
    #[error("Invalid configuration for provider '{provider}': {reason}")]
    InvalidConfiguration { provider: String, reason: String },

    /// A provider identification pattern does not compile.
    #[error("Invalid pattern for provider '{provider}': {source}")]
    InvalidPattern {
        provider: String,
        #[source]
        source: regex::Error,
    },

    /// A template has more `%s` slots than values supplied for it.
    #[error("Template expects at least {expected} values, {given} given")]
    TemplateArity { expected: usize, given: usize },
}

impl MultiplayerError {
    pub(crate) fn invalid_config(provider: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            provider: provider.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MultiplayerError>;
