//! Error types for the Hudu client.
//!
//! The client is a pass-through: transport failures are propagated as the
//! `reqwest` error that caused them and a body that is not JSON surfaces as
//! the `serde_json` decode error. HTTP status codes are never turned into
//! errors.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Hudu client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The configured API key cannot be sent as an HTTP header value.
    #[error("API key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,
}

impl ClientError {
    /// Check if this error came from the network layer rather than from encoding.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }
}
