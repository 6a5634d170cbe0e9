//! Runtime client error types.
//!
//! These stay internal to the crate's public surface: the client converts
//! them into an empty model list or a structured failure record before
//! anything reaches the MCP host.

use thiserror::Error;

/// Errors that can occur while talking to the runtime.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// Building the underlying HTTP client failed.
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    /// TCP/HTTP connection to the runtime failed.
    #[error("connection failed to {endpoint}: {reason}")]
    ConnectionFailed { endpoint: String, reason: String },

    /// The runtime did not respond within the configured timeout.
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },

    /// Non-2xx HTTP response from the runtime.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The runtime responded with a body that did not parse.
    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },
}

impl OllamaError {
    /// Classify a reqwest send error. Timeouts get their own variant so log
    /// lines tell a slow runtime from an absent one.
    pub(crate) fn from_request(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OllamaError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            OllamaError::ConnectionFailed {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            }
        }
    }
}
