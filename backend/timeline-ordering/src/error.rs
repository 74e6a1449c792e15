//! Error types for the timeline ordering engine
//!
//! Ranking itself is total over well-formed input: absent lookups default
//! to empty values. The only errors are caller contract violations.

use crate::services::mode::OrderingMode;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for ordering calls
pub type Result<T> = std::result::Result<T, OrderingError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// A logged-in mode was selected but no viewer context was supplied
    #[error("Viewer context is required for {mode} ordering")]
    MissingViewerContext { mode: OrderingMode },

    /// Request viewer and context viewer disagree, including a logged-out
    /// request carrying a viewer's context
    #[error("Viewer mismatch: request is for {requested:?}, context is for {context:?}")]
    ViewerMismatch {
        requested: Option<Uuid>,
        context: Option<Uuid>,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
