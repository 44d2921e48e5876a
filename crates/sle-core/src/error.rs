//! Core error types for the results hub.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for catalog and configuration handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Configuration errors
    #[error("failed to parse site configuration: {reason}")]
    ConfigParseFailed { reason: String },

    // Catalog validation errors
    #[error("catalog must contain at least one entry")]
    EmptyCatalog,

    #[error("duplicate entry id: {id}")]
    DuplicateEntryId { id: String },

    #[error("entry '{id}' has an empty {field}")]
    EmptyField { id: String, field: &'static str },

    #[error("entry '{id}' has an invalid url: {reason}")]
    InvalidUrl { id: String, reason: String },

    #[error("entry '{id}' uses unsupported url scheme '{scheme}'")]
    UnsupportedScheme { id: String, scheme: String },

    // Interaction geometry
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },
}

impl Error {
    /// Create a configuration parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an empty field error.
    pub fn empty_field(id: impl Into<String>, field: &'static str) -> Self {
        Self::EmptyField {
            id: id.into(),
            field,
        }
    }

    /// Create an invalid url error.
    pub fn invalid_url(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid geometry error.
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}
