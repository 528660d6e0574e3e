// this_file: crates/labelshape-core/src/error.rs

//! Error types for the fallible surfaces around shaping.
//!
//! Shaping itself never fails: missing glyphs degrade to placeholders and
//! empty input yields an invalid [`Shaping`](crate::Shaping). The variants
//! here cover option validation, registry lookups, configuration parsing and
//! worker pool construction.

use thiserror::Error;

/// Main error type for labelshape operations.
#[derive(Error, Debug)]
pub enum LabelShapeError {
    /// A shaping option failed its boundary check
    #[error("Invalid shaping option '{field}': {reason}")]
    InvalidOptions { field: &'static str, reason: String },

    /// No glyph set has been registered under this font stack
    #[error("Font stack not found: {name}")]
    FontStackNotFound { name: String },

    /// Shaping options could not be parsed
    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// The batch worker pool could not be created
    #[error("Failed to build worker pool: {reason}")]
    WorkerPool { reason: String },
}

impl LabelShapeError {
    pub fn invalid_option(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            field,
            reason: reason.into(),
        }
    }

    pub fn worker_pool(reason: impl ToString) -> Self {
        Self::WorkerPool {
            reason: reason.to_string(),
        }
    }
}
