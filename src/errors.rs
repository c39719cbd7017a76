/*!
 * Error types for the subgrab application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when fetching text over HTTP
#[derive(Error, Debug)]
pub enum FetchError {
    /// Error when the request could not be sent or completed
    #[error("Request to {url} failed: {message}")]
    RequestFailed {
        /// URL the request was sent to
        url: String,
        /// Underlying transport error message
        message: String,
    },

    /// Error when the server responded with a non-success status
    #[error("Request to {url} returned status {status_code}")]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// URL the request was sent to
        url: String,
    },
}

/// Errors that can occur during subtitle extraction
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document does not qualify as an extractable subtitle playlist.
    /// A negative classification, not a fault - callers that check the
    /// detector predicates first never see this.
    #[error("Content is not an extractable subtitle playlist")]
    NotExtractable,

    /// The playlist parsed but contained no segment references
    #[error("No segments found in playlist")]
    NoReferencesFound,

    /// Every individual segment fetch failed
    #[error("No VTT segments could be retrieved")]
    AllSegmentsFailed,

    /// The extraction was cancelled before completion
    #[error("Extraction cancelled")]
    Cancelled,

    /// Transport failure on a top-level document fetch (playlist or SRT file)
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the fetch layer
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from the extraction pipeline
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
