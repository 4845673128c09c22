//! Error types for Funcplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Funcplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in Funcplot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A function parameter or evaluation point is outside the valid domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A persisted curve record could not be parsed.
    #[error("Malformed record at '{token}': {reason}")]
    MalformedRecord {
        /// The offending token.
        token: String,
        /// Why it was rejected.
        reason: String,
    },

    /// User input could not be understood.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A file could not be opened or created.
    #[error("Resource unavailable: {path}")]
    ResourceUnavailable {
        /// File that could not be opened.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a MalformedRecord error.
    pub fn malformed(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a ResourceUnavailable error.
    pub fn unavailable(path: PathBuf, source: std::io::Error) -> Self {
        Self::ResourceUnavailable { path, source }
    }
}
