//! Error types for the HERE API client.
//!
//! # Design
//! The upstream service does not distinguish useful error classes for this
//! client, so every non-200 status lands in `HttpStatus`. Decode failures are
//! split into `Deserialization` (the body is not the expected JSON) and
//! `NoResult` (valid JSON with nothing to read); the facade treats both the
//! same way, which `is_decode` captures.

use thiserror::Error;

/// Errors produced while building, executing, or parsing a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with something other than 200.
    #[error("HTTP {status}")]
    HttpStatus { status: u16, body: String },

    /// The response body could not be read to the end.
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),

    /// The response body is not the JSON shape the operation expects.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The geocoding response parsed but holds no display position.
    #[error("geocoding response has no result")]
    NoResult,
}

impl ApiError {
    /// True when the response arrived intact but its content was unusable.
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Deserialization(_) | ApiError::NoResult)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Deserialization(err.to_string())
    }
}
