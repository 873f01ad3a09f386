//! Error handling for the activity board
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the activity board application
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Activities API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Activities API specific errors
///
/// These cover the transport/parse failure class only. Application-level
/// rejections (non-2xx with a detail body) are not errors; the API client
/// carries them as an outcome value.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("activities service unavailable")]
    ServiceUnavailable,

    #[error("invalid response: {0}")]
    Decode(String),
}

/// Result type alias for activity board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Result type alias for activities API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;
