//! Error handling for timetable processing runs.
//!
//! Only the processor and the CLI shell surface errors. The parsing
//! components degrade locally (empty defaults, fallback sessions) and never
//! fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream text/table extraction produced nothing usable
    #[error("Extraction produced no usable content: {reason}")]
    ExtractionFailure { reason: String },

    /// Structural parsing finished without a single session
    #[error("No sessions found after scanning {rows_scanned} table rows")]
    NoSessionsFound { rows_scanned: usize },

    /// The external fallback extraction service failed
    #[error("Fallback extraction failed: {message}")]
    FallbackFailure { message: String },

    #[error("Input document not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an extraction failure error
    pub fn extraction_failure(reason: impl Into<String>) -> Self {
        Self::ExtractionFailure {
            reason: reason.into(),
        }
    }

    /// Create a no-sessions error
    pub fn no_sessions_found(rows_scanned: usize) -> Self {
        Self::NoSessionsFound { rows_scanned }
    }

    /// Create a fallback failure error
    pub fn fallback_failure(message: impl Into<String>) -> Self {
        Self::FallbackFailure {
            message: message.into(),
        }
    }

    /// Create an input not found error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error should hand the run over to the fallback service
    pub fn triggers_fallback(&self) -> bool {
        matches!(self, Self::NoSessionsFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
