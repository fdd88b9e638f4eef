use thiserror::Error;
pub use url::ParseError as UrlParseError;

use crate::models::CommonResponse;

/// Error types for the Ozon Seller API client.
#[derive(Error, Debug)]
pub enum OzonError {
    /// The API answered with a non-success status. The parsed envelope is
    /// carried as-is.
    #[error("API error: {0}")]
    ApiError(CommonResponse),

    /// HTTP request failed (connection, timeout, cancellation).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// The API endpoint/path string is invalid.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Request parameters were rejected before being sent.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

impl OzonError {
    /// Returns the response envelope for errors reported by the API.
    pub fn api_response(&self) -> Option<&CommonResponse> {
        match self {
            OzonError::ApiError(response) => Some(response),
            _ => None,
        }
    }
}

/// Result type for Ozon API operations.
pub type OzonResult<T> = Result<T, OzonError>;
