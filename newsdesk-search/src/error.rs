//! Error types for the search module

use thiserror::Error;

/// Errors that can occur in the search module
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the provider
        message: String,
    },

    /// Failed to parse the provider response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The request token could not be extracted from the provider page
    #[error("Search token missing for query: {0}")]
    TokenMissing(String),
}
