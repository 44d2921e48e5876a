//! Error types for the browser-facing layer
//!
//! Nothing here is ever shown to a visitor. Failures are logged and the
//! page keeps rendering with whatever it has.

use thiserror::Error;

/// Errors that can occur while talking to the DOM
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    #[error("document has no root element")]
    RootElementMissing,

    #[error("failed to update root class list: {0}")]
    ClassListFailed(String),

    #[error("site configuration unavailable: {0}")]
    Config(#[from] sle_core::Error),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
