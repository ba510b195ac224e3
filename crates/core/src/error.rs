//! Error types for the crate's own parsing and validation surface.
//!
//! A failing [`Outcome`](crate::Outcome) is data, not an `Error`. The variants
//! here only describe malformed inputs handed to the crate: unknown branch
//! names, snapshots that break the outcome invariants, bad metadata and bad
//! policy files.

use thiserror::Error;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for railyard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown branch '{name}': expected 'success' or 'fail'")]
    UnknownBranch { name: String },

    #[error("invalid outcome object: {reason}")]
    InvalidObject { reason: String },

    #[error("invalid metadata: {reason}")]
    InvalidMetaData { reason: String },

    #[error("invalid combine policy: {reason}")]
    InvalidConfig { reason: String },

    // Parsing errors
    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("YAML parse error: {reason}")]
    YamlParseFailed { reason: String },

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl Error {
    /// Create an unknown branch error.
    pub fn unknown_branch(name: impl Into<String>) -> Self {
        Self::UnknownBranch { name: name.into() }
    }

    /// Create an invalid outcome object error.
    pub fn invalid_object(reason: impl Into<String>) -> Self {
        Self::InvalidObject {
            reason: reason.into(),
        }
    }

    /// Create an invalid metadata error.
    pub fn invalid_meta_data(reason: impl Into<String>) -> Self {
        Self::InvalidMetaData {
            reason: reason.into(),
        }
    }

    /// Create an invalid policy error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::TomlParseFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::YamlParseFailed {
            reason: err.to_string(),
        }
    }
}
