//! Error types for Folio operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Folio crates. Uses `thiserror` for derive macros.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur in Folio operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error carrying the path that produced it.
    #[error("I/O error at {path}: {source}")]
    IoPath {
        /// Path involved in the failed operation.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Remote metrics service error.
    #[error("Metrics error: {0}")]
    Metrics(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a metrics error.
    pub fn metrics(msg: impl Into<String>) -> Self {
        Self::Metrics(msg.into())
    }

    /// Create an I/O error tagged with the path it occurred at.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Self::IoPath {
            path: path.display().to_string(),
            source,
        }
    }

    /// Whether this error is the not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias using Folio's Error type.
pub type Result<T> = std::result::Result<T, Error>;
