//! Error types for cache construction and configuration
//!
//! Only the cache's own failures live here. Errors produced by a factory are
//! never wrapped: the fallible operations (`try_get_or_compute`,
//! `Memoized::try_call`) hand them back to the caller unchanged.

use thiserror::Error;

/// Errors raised by the cache itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError {
    /// A configuration value is out of range
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration {
        /// Name of the rejected field
        field: &'static str,
        /// Why the value was rejected
        message: String,
    },

    /// A configuration document could not be parsed
    #[error("Failed to parse cache configuration: {message}")]
    ConfigParse {
        /// Parser diagnostic
        message: String,
    },
}

impl MemoError {
    /// Shorthand for [`MemoError::InvalidConfiguration`]
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration { field, message: message.into() }
    }

    /// Name of the offending configuration field, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfiguration { field, .. } => Some(*field),
            Self::ConfigParse { .. } => None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<toml::de::Error> for MemoError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse { message: err.to_string() }
    }
}

/// Result type for cache operations that can fail on their own account
pub type MemoResult<T> = Result<T, MemoError>;
