//! Error types for page mount and preference persistence.

use thiserror::Error;

/// Fatal-at-startup conditions: the page is missing a piece of the DOM
/// contract, so the toggle cannot be wired up at all.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global window object")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("toggle control #theme-toggle not found in the document")]
    MissingToggle,

    #[error("document has no body element")]
    MissingBody,

    #[error("failed to attach click handler: {0}")]
    AttachHandler(String),
}

/// Preference-store write failure. Never fatal: the visual theme still
/// applies for the current page view, only cross-reload persistence is lost.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,

    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}
