//! Error types for Workspace Data Service operations.

use thiserror::Error;

/// Result type alias for Workspace Data Service operations.
pub type WdsResult<T> = Result<T, WdsError>;

/// Errors related to Workspace Data Service API operations.
#[derive(Debug, Error)]
pub enum WdsError {
    /// A required wire field was absent or null when decoding a mapping.
    #[error("required field '{field}' is missing or null")]
    MissingField {
        /// Wire name of the offending field
        field: String,
    },

    /// API request failed with an HTTP error status.
    #[error("WDS API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The addressed collection does not exist.
    #[error("collection '{collection_id}' not found")]
    CollectionNotFound {
        /// The collection id that was not found
        collection_id: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("invalid response from WDS API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
